use axum::{extract::Path, extract::State, http::StatusCode, response::IntoResponse};
use giftrelay_core::ids::{EventName, ScopeId};

use crate::api::ApiError;
use crate::api::extractors::AdminAuth;
use crate::state::AppState;

/// `DELETE /scopes/{scope}/events/{name}` — delete the event together
/// with its portable-id lookup entry.
pub async fn delete_event(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Path((scope, name)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .lifecycle
        .delete(&ScopeId::from(scope), &EventName::from(name))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
