use axum::{Json, extract::Path, extract::State, response::IntoResponse};
use giftrelay_core::ids::{EventName, ScopeId};
use giftrelay_core::notify::deliver_all;

use crate::api::ApiError;
use crate::api::extractors::AdminAuth;
use crate::state::AppState;

/// `POST /scopes/{scope}/events/{name}/match` — assign a random
/// derangement and send each giver their assignment.
///
/// Responds with the delivery outcome; a failed notice leaves the match
/// in place.
pub async fn match_event(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Path((scope, name)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let scope = ScopeId::from(scope);
    let name = EventName::from(name);

    let (_event, outbox) = state.lifecycle.match_event(&scope, &name).await?;
    let report = deliver_all(state.notifier.as_ref(), &outbox).await;
    Ok(Json(report))
}
