//! HTTP clients for the giftrelay APIs.
//!
//! Gated behind the `client` cargo feature so downstream crates that only
//! need the shared types do not pull in `reqwest`.

mod admin;
mod participant;

pub use admin::AdminClient;
pub use participant::ParticipantClient;

use reqwest::StatusCode;

use crate::objects::{ApiErrorBody, ErrorCode};

/// Errors produced by the SDK HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, TLS, connection reset, …).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned a typed failure.
    #[error("api error {code:?}: {message}")]
    Api {
        status: StatusCode,
        code: ErrorCode,
        message: String,
    },

    /// The server returned a non-2xx status without a parseable error body.
    #[error("unexpected status {status}, body: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    /// Response body could not be deserialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The base URL could not be joined with the endpoint path.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

/// Turn a non-2xx response into a [`ClientError`], preferring the typed
/// error body when the server provided one.
pub(crate) async fn error_from_response(resp: reqwest::Response) -> ClientError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(parsed) => ClientError::Api {
            status,
            code: parsed.code,
            message: parsed.message,
        },
        Err(_) => ClientError::UnexpectedStatus { status, body },
    }
}
