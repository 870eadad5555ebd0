use axum::{Json, extract::Path, extract::State, response::IntoResponse};
use giftrelay_core::ids::ScopeId;

use crate::api::ApiError;
use crate::api::extractors::AdminAuth;
use crate::state::AppState;

/// `GET /scopes/{scope}/events` — summaries of every event in the scope.
pub async fn list_events(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Path(scope): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let summaries = state.lifecycle.list_events(&ScopeId::from(scope)).await?;
    Ok(Json(summaries))
}
