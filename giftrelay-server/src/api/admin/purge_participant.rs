use axum::{Json, extract::Path, extract::State, response::IntoResponse};
use giftrelay_core::ids::ParticipantId;
use giftrelay_sdk::objects::PurgeReport;

use crate::api::ApiError;
use crate::api::extractors::AdminAuth;
use crate::state::AppState;

/// `DELETE /participants/{participant}` — remove one participant from
/// every event in every scope.
///
/// Data-deletion sweep. Matched events can be left without a full
/// bijection; operators are expected to rematch those.
pub async fn purge_participant(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Path(participant): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let events_modified = state
        .lifecycle
        .purge_participant(&ParticipantId::from(participant))
        .await?;
    Ok(Json(PurgeReport { events_modified }))
}
