use axum::{Json, extract::Path, extract::State, response::IntoResponse};
use giftrelay_core::ids::{ParticipantId, ScopeId};
use giftrelay_core::lifecycle::NewEvent;
use giftrelay_core::notify::deliver_all;
use giftrelay_core::report::summary_of;
use giftrelay_sdk::objects::CreateEventRequest;

use crate::api::ApiError;
use crate::api::extractors::AdminAuth;
use crate::state::AppState;

/// `POST /scopes/{scope}/events` — create an event and notify every
/// enrolled participant.
///
/// Responds with the event summary and the notice delivery outcome;
/// delivery failures never fail the creation.
pub async fn create_event(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Path(scope): Path<String>,
    Json(req): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let scope = ScopeId::from(scope);
    let spec = NewEvent {
        name: req.name.into(),
        target_date: req.target_date,
        max_price: req.max_price,
        created_by: ParticipantId::from(req.created_by),
    };
    let participants = req.participants.into_iter().map(ParticipantId::from).collect();

    let (event, outbox) = state.lifecycle.create(&scope, spec, participants).await?;
    let report = deliver_all(state.notifier.as_ref(), &outbox).await;

    Ok(Json((summary_of(&event), report)))
}
