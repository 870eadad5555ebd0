//! Relay API handlers.
//!
//! Participant-facing surface; `{event}` in every route is either
//! `scope:name` or a bare portable event id, so a participant who only
//! knows their direct-message thread can still address the event.
//!
//! # Endpoints
//!
//! - `POST /{event}/send`     – anonymous message to the caller's giftee
//! - `POST /{event}/reply`    – anonymous reply to the caller's Santa
//! - `PUT  /{event}/wishlist` – replace the caller's wishlist
//! - `POST /{event}/sent`     – mark the caller's gift as sent
//! - `POST /{event}/received` – mark the caller's gift as received
//! - `GET  /{event}/whoami`   – the caller's assignment (DM display only)

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

mod gifts;
mod reply;
mod send;
mod whoami;
mod wishlist;

/// Build the Relay API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{event}/send", post(send::send_anonymous))
        .route("/{event}/reply", post(reply::reply_anonymous))
        .route("/{event}/wishlist", put(wishlist::set_wishlist))
        .route("/{event}/sent", post(gifts::mark_sent))
        .route("/{event}/received", post(gifts::mark_received))
        .route("/{event}/whoami", get(whoami::whoami))
}
