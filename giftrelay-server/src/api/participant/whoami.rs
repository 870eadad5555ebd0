use axum::{Json, extract::Path, extract::Query, extract::State, response::IntoResponse};
use giftrelay_core::ids::ParticipantId;
use giftrelay_core::relay::EventRef;
use serde::Deserialize;

use crate::api::ApiError;
use crate::api::extractors::ParticipantAuth;
use crate::state::AppState;

/// Query parameters for the whoami operation.
#[derive(Debug, Deserialize)]
pub struct WhoAmIQuery {
    pub participant: String,
}

/// `GET /{event}/whoami?participant=…` — the caller's assignment.
///
/// The response names the caller's giftee, so the frontend must only
/// ever show it to the caller in a direct message.
pub async fn whoami(
    State(state): State<AppState>,
    _auth: ParticipantAuth,
    Path(event): Path<String>,
    Query(query): Query<WhoAmIQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let view = state
        .relay
        .whoami(&EventRef::parse(&event), &ParticipantId::from(query.participant))
        .await?;
    Ok(Json(view))
}
