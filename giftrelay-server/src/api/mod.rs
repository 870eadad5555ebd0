//! HTTP API surfaces.
//!
//! `admin` is the operator-facing command surface, `participant` the relay
//! surface. Both map engine errors to a wire [`ApiErrorBody`] so clients
//! can branch on [`ErrorCode`] without parsing messages.

pub mod admin;
pub mod extractors;
pub mod participant;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use giftrelay_core::lifecycle::LifecycleError;
use giftrelay_core::relay::RelayError;
use giftrelay_sdk::objects::{ApiErrorBody, ErrorCode};

/// An engine failure mapped onto a status code and wire body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ApiErrorBody,
}

impl ApiError {
    fn new(status: StatusCode, code: ErrorCode, message: String) -> Self {
        Self {
            status,
            body: ApiErrorBody { code, message },
        }
    }

    fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::Internal,
            "internal server error".to_string(),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<LifecycleError> for ApiError {
    fn from(err: LifecycleError) -> Self {
        let message = err.to_string();
        match err {
            LifecycleError::DuplicateEvent(_) => {
                Self::new(StatusCode::CONFLICT, ErrorCode::DuplicateEvent, message)
            }
            LifecycleError::EventNotFound(_) => {
                Self::new(StatusCode::NOT_FOUND, ErrorCode::EventNotFound, message)
            }
            LifecycleError::InsufficientParticipants { .. } => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorCode::InsufficientParticipants,
                message,
            ),
            LifecycleError::AlreadyMatched(_) => {
                Self::new(StatusCode::CONFLICT, ErrorCode::AlreadyMatched, message)
            }
            LifecycleError::EventAlreadyMatched(_) => Self::new(
                StatusCode::CONFLICT,
                ErrorCode::EventAlreadyMatched,
                message,
            ),
            LifecycleError::PairingFailed => {
                tracing::error!("derangement generation exhausted");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::PairingFailed,
                    message,
                )
            }
            LifecycleError::InvalidPairing(_) => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorCode::InvalidPairing,
                message,
            ),
            LifecycleError::InvalidDate(_) => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorCode::InvalidDate,
                message,
            ),
            LifecycleError::Store(e) => {
                tracing::error!(error = %e, "store error in admin handler");
                Self::internal()
            }
        }
    }
}

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        let message = err.to_string();
        match err {
            RelayError::EventNotFound(_) => {
                Self::new(StatusCode::NOT_FOUND, ErrorCode::EventNotFound, message)
            }
            RelayError::NotAParticipant(_) => {
                Self::new(StatusCode::FORBIDDEN, ErrorCode::NotAParticipant, message)
            }
            RelayError::NotMatched(_) => {
                Self::new(StatusCode::CONFLICT, ErrorCode::NotMatched, message)
            }
            RelayError::NoSantaFound(_) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::NoSantaFound,
                message,
            ),
            RelayError::Store(e) => {
                tracing::error!(error = %e, "store error in relay handler");
                Self::internal()
            }
        }
    }
}
