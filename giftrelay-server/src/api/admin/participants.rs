use axum::{Json, extract::Path, extract::State, response::IntoResponse};
use giftrelay_core::ids::{EventName, ParticipantId, ScopeId};
use giftrelay_sdk::objects::ParticipantsRequest;

use crate::api::ApiError;
use crate::api::extractors::AdminAuth;
use crate::state::AppState;

/// `POST /scopes/{scope}/events/{name}/participants` — add participants
/// to an unmatched event. Already-present ids are skipped, not errors.
pub async fn add_participants(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Path((scope, name)): Path<(String, String)>,
    Json(req): Json<ParticipantsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let report = state
        .lifecycle
        .add_participants(
            &ScopeId::from(scope),
            &EventName::from(name),
            req.participants.into_iter().map(ParticipantId::from).collect(),
        )
        .await?;
    Ok(Json(report))
}

/// `DELETE /scopes/{scope}/events/{name}/participants` — remove
/// participants from an unmatched event. Absent ids are skipped.
pub async fn remove_participants(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Path((scope, name)): Path<(String, String)>,
    Json(req): Json<ParticipantsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let report = state
        .lifecycle
        .remove_participants(
            &ScopeId::from(scope),
            &EventName::from(name),
            req.participants.into_iter().map(ParticipantId::from).collect(),
        )
        .await?;
    Ok(Json(report))
}
