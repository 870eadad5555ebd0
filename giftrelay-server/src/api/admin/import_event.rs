use axum::{Json, extract::Path, extract::State, response::IntoResponse};
use giftrelay_core::ids::{ParticipantId, ScopeId};
use giftrelay_core::lifecycle::NewEvent;
use giftrelay_core::report::summary_of;
use giftrelay_sdk::objects::ImportEventRequest;

use crate::api::ApiError;
use crate::api::extractors::AdminAuth;
use crate::state::AppState;

/// `POST /scopes/{scope}/events/import` — create an event with
/// caller-provided pairings, stored already matched.
///
/// No notices are sent; the importing operator already told everyone.
pub async fn import_event(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Path(scope): Path<String>,
    Json(req): Json<ImportEventRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let scope = ScopeId::from(scope);
    let spec = NewEvent {
        name: req.name.into(),
        target_date: req.target_date,
        max_price: req.max_price,
        created_by: ParticipantId::from(req.created_by),
    };
    let pairs = req
        .pairs
        .into_iter()
        .map(|pair| (ParticipantId::from(pair.giver), ParticipantId::from(pair.receiver)))
        .collect();

    let event = state.lifecycle.import(&scope, spec, pairs).await?;
    Ok(Json(summary_of(&event)))
}
