use axum::{Json, extract::Path, extract::State, response::IntoResponse};
use giftrelay_core::ids::ParticipantId;
use giftrelay_core::notify::deliver_all;
use giftrelay_core::relay::EventRef;
use giftrelay_sdk::objects::{RelayReceipt, WishlistRequest};

use crate::api::ApiError;
use crate::api::extractors::ParticipantAuth;
use crate::state::AppState;

/// `PUT /{event}/wishlist` — replace the caller's wishlist.
///
/// The write always succeeds for a participant; `delivered` reports
/// whether the caller's Santa was notified (false when the event is not
/// matched yet or the notice failed).
pub async fn set_wishlist(
    State(state): State<AppState>,
    _auth: ParticipantAuth,
    Path(event): Path<String>,
    Json(req): Json<WishlistRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let event_ref = EventRef::parse(&event);
    let participant = ParticipantId::from(req.participant);
    let payload = state
        .relay
        .update_wishlist(&event_ref, &participant, &req.wishlist)
        .await?;

    let delivered = match payload {
        Some(payload) => {
            let report = deliver_all(state.notifier.as_ref(), &vec![payload]).await;
            report.failed == 0
        }
        None => false,
    };
    Ok(Json(RelayReceipt { delivered }))
}
