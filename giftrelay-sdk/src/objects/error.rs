//! Wire error codes.
//!
//! Every failure returned by the server maps to exactly one [`ErrorCode`]
//! so clients can branch on failures without parsing messages.

use serde::{Deserialize, Serialize};

/// Machine-readable failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// An event with this name already exists in the scope.
    DuplicateEvent,
    /// No event with this name (or portable id) exists.
    EventNotFound,
    /// Fewer than two distinct participants.
    InsufficientParticipants,
    /// The event has already been matched; rematch first.
    AlreadyMatched,
    /// Participant mutation attempted on a matched event.
    EventAlreadyMatched,
    /// The event has not been matched yet.
    NotMatched,
    /// Derangement generation was exhausted.
    PairingFailed,
    /// Imported pairs are malformed: self-edge, duplicate giver, or the
    /// giver and receiver sets differ.
    InvalidPairing,
    /// No participant gives to the caller; broken bijection.
    NoSantaFound,
    /// The caller is not enrolled in the event.
    NotAParticipant,
    /// The target date does not parse as `YYYY-MM-DD`.
    InvalidDate,
    /// Anything the caller cannot act on (storage, serialization).
    Internal,
}

/// Error response body returned with every non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: ErrorCode,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_wire_form() {
        let body = ApiErrorBody {
            code: ErrorCode::InsufficientParticipants,
            message: "need at least 2 distinct participants, got 1".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["code"], "insufficient_participants");
    }
}
