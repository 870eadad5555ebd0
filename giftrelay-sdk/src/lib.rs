//! Shared types for giftrelay, a headless Secret-Santa pairing and
//! anonymous-relay server.
//!
//! The `objects` module holds the wire request/response types used by both
//! the server and its callers. The optional `client` module (behind the
//! `client` cargo feature) provides typed HTTP clients on top of them.

pub mod objects;

#[cfg(feature = "client")]
pub mod client;
