use axum::{Json, extract::Path, extract::State, response::IntoResponse};
use giftrelay_core::ids::{EventName, ScopeId};

use crate::api::ApiError;
use crate::api::extractors::AdminAuth;
use crate::state::AppState;

/// `GET /scopes/{scope}/events/{name}/status` — the channel-visible
/// status view: flags and counts, never the pairing edges.
pub async fn status(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Path((scope, name)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let view = state
        .lifecycle
        .status(&ScopeId::from(scope), &EventName::from(name))
        .await?;
    Ok(Json(view))
}
