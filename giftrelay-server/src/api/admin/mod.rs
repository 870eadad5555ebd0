//! Admin API handlers.
//!
//! These endpoints are called by operator tooling and require the
//! `Authorization: Bearer {admin_token}` header.
//!
//! # Endpoints
//!
//! - `POST   /scopes/{scope}/events`                      – create an event
//! - `POST   /scopes/{scope}/events/import`               – import forced pairings
//! - `POST   /scopes/{scope}/events/{name}/match`         – assign a derangement
//! - `POST   /scopes/{scope}/events/{name}/rematch`       – clear pairings
//! - `POST   /scopes/{scope}/events/{name}/participants`  – add participants
//! - `DELETE /scopes/{scope}/events/{name}/participants`  – remove participants
//! - `DELETE /scopes/{scope}/events/{name}`               – delete the event
//! - `GET    /scopes/{scope}/events/{name}/status`        – status view
//! - `GET    /scopes/{scope}/events`                      – list events
//! - `DELETE /participants/{participant}`                 – cross-scope purge

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

mod create_event;
mod delete_event;
mod import_event;
mod list_events;
mod match_event;
mod participants;
mod purge_participant;
mod rematch_event;
mod status;

/// Build the Admin API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/scopes/{scope}/events",
            post(create_event::create_event).get(list_events::list_events),
        )
        .route(
            "/scopes/{scope}/events/import",
            post(import_event::import_event),
        )
        .route(
            "/scopes/{scope}/events/{name}/match",
            post(match_event::match_event),
        )
        .route(
            "/scopes/{scope}/events/{name}/rematch",
            post(rematch_event::rematch_event),
        )
        .route(
            "/scopes/{scope}/events/{name}/participants",
            post(participants::add_participants).delete(participants::remove_participants),
        )
        .route(
            "/scopes/{scope}/events/{name}",
            delete(delete_event::delete_event),
        )
        .route(
            "/scopes/{scope}/events/{name}/status",
            get(status::status),
        )
        .route(
            "/participants/{participant}",
            delete(purge_participant::purge_participant),
        )
}
