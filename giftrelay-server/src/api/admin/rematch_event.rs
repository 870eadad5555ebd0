use axum::{extract::Path, extract::State, http::StatusCode, response::IntoResponse};
use giftrelay_core::ids::{EventName, ScopeId};

use crate::api::ApiError;
use crate::api::extractors::AdminAuth;
use crate::state::AppState;

/// `POST /scopes/{scope}/events/{name}/rematch` — clear all pairings so
/// the event can be matched again. A no-op on an unmatched event.
pub async fn rematch_event(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Path((scope, name)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .lifecycle
        .rematch(&ScopeId::from(scope), &EventName::from(name))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
