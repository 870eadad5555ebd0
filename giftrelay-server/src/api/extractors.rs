//! Custom Axum extractors for request authentication.
//!
//! Provides:
//! - `AdminAuth` — requires the admin bearer token (Admin API).
//! - `ParticipantAuth` — requires the participant bearer token; the admin
//!   token is also accepted (Relay API).
//!
//! Tokens come from the `[auth]` config section and can be rotated with a
//! SIGHUP reload.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, header, request::Parts},
    response::{IntoResponse, Response},
};

use crate::state::AppState;

/// Errors returned by the bearer-token extractors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("missing Authorization header")]
    MissingHeader,
    #[error("invalid Authorization header format")]
    InvalidHeader,
    #[error("invalid bearer token")]
    BadToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingHeader => (StatusCode::UNAUTHORIZED, "missing Authorization header"),
            AuthError::InvalidHeader => {
                (StatusCode::BAD_REQUEST, "invalid Authorization header format")
            }
            AuthError::BadToken => (StatusCode::UNAUTHORIZED, "invalid bearer token"),
        };
        (status, message).into_response()
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, AuthError> {
    let value = parts
        .headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingHeader)?
        .to_str()
        .map_err(|_| AuthError::InvalidHeader)?;
    value
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidHeader)
}

/// An Axum extractor that requires the admin bearer token.
pub struct AdminAuth;

impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let auth = state.config.auth.read().await;
        if token != auth.admin_token {
            return Err(AuthError::BadToken);
        }
        Ok(AdminAuth)
    }
}

/// An Axum extractor that requires the participant bearer token.
///
/// The admin token is also accepted so operator tooling can exercise the
/// Relay API.
pub struct ParticipantAuth;

impl FromRequestParts<AppState> for ParticipantAuth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let auth = state.config.auth.read().await;
        if token != auth.participant_token && token != auth.admin_token {
            return Err(AuthError::BadToken);
        }
        Ok(ParticipantAuth)
    }
}
