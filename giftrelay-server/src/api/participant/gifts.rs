use axum::{Json, extract::Path, extract::State, response::IntoResponse};
use giftrelay_core::ids::ParticipantId;
use giftrelay_core::relay::EventRef;
use serde::Deserialize;

use crate::api::ApiError;
use crate::api::extractors::ParticipantAuth;
use crate::state::AppState;

/// Request body for the gift-flag operations.
#[derive(Debug, Deserialize)]
pub struct FlagRequest {
    pub participant: String,
}

/// `POST /{event}/sent` — mark the caller's gift as sent.
///
/// Self-reported; never verified.
pub async fn mark_sent(
    State(state): State<AppState>,
    _auth: ParticipantAuth,
    Path(event): Path<String>,
    Json(req): Json<FlagRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let flags = state
        .relay
        .mark_sent(&EventRef::parse(&event), &ParticipantId::from(req.participant))
        .await?;
    Ok(Json(flags))
}

/// `POST /{event}/received` — mark the caller's gift as received.
pub async fn mark_received(
    State(state): State<AppState>,
    _auth: ParticipantAuth,
    Path(event): Path<String>,
    Json(req): Json<FlagRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let flags = state
        .relay
        .mark_received(&EventRef::parse(&event), &ParticipantId::from(req.participant))
        .await?;
    Ok(Json(flags))
}
