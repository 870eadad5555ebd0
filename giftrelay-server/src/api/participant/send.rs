use axum::{Json, extract::Path, extract::State, response::IntoResponse};
use giftrelay_core::ids::ParticipantId;
use giftrelay_core::notify::deliver_all;
use giftrelay_core::relay::EventRef;
use giftrelay_sdk::objects::{RelayReceipt, RelayRequest};

use crate::api::ApiError;
use crate::api::extractors::ParticipantAuth;
use crate::state::AppState;

/// `POST /{event}/send` — relay an anonymous message to the caller's
/// giftee. The delivered notice names the event, never the sender.
pub async fn send_anonymous(
    State(state): State<AppState>,
    _auth: ParticipantAuth,
    Path(event): Path<String>,
    Json(req): Json<RelayRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let event_ref = EventRef::parse(&event);
    let from = ParticipantId::from(req.from);
    let payload = state
        .relay
        .send_to_giftee(&event_ref, &from, &req.message)
        .await?;

    let report = deliver_all(state.notifier.as_ref(), &vec![payload]).await;
    Ok(Json(RelayReceipt {
        delivered: report.failed == 0,
    }))
}
