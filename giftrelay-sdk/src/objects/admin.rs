//! Admin API request and response types.
//!
//! These types are used by the operator-facing surface that creates,
//! matches and inspects Secret-Santa events within a scope.

use serde::{Deserialize, Serialize};

/// Request body for creating a new event.
///
/// Participants are opaque platform identifiers; duplicates are collapsed
/// by the server before the minimum-participant check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    /// Target date in `YYYY-MM-DD` form.
    pub target_date: String,
    /// Display-only price ceiling, e.g. `"$25"`.
    pub max_price: String,
    pub participants: Vec<String>,
    pub created_by: String,
}

/// A single forced giver → receiver edge for an imported event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WirePair {
    pub giver: String,
    pub receiver: String,
}

/// Request body for importing an event with pre-computed pairings.
///
/// The pairs must form a closed derangement: no self-edges, no duplicate
/// givers, and every receiver must also appear as a giver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportEventRequest {
    pub name: String,
    pub target_date: String,
    pub max_price: String,
    pub pairs: Vec<WirePair>,
    pub created_by: String,
}

/// Request body for adding or removing participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantsRequest {
    pub participants: Vec<String>,
}

/// Per-identifier outcome of an add/remove operation.
///
/// Already-present adds and absent removes are skipped, not errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationReport {
    /// Identifiers that were actually added or removed.
    pub applied: Vec<String>,
    /// Identifiers skipped because they were already present (add) or
    /// not present (remove).
    pub skipped: Vec<String>,
}

/// Delivery outcome of a matching (or creation) operation.
///
/// Failed deliveries are counted, never fatal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReport {
    pub delivered: u32,
    pub failed: u32,
}

/// Outcome of a cross-scope participant purge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurgeReport {
    /// Number of events the participant was removed from.
    pub events_modified: u64,
}

/// One event row in the scope-wide listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSummary {
    pub name: String,
    pub event_id: String,
    pub target_date: String,
    pub max_price: String,
    pub participant_count: u32,
    pub matched: bool,
}

/// Per-participant row in the status view.
///
/// Deliberately omits `matched_to`: the channel-visible side must never
/// see the pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantStatusRow {
    pub participant: String,
    pub sent_gift: bool,
    pub received_gift: bool,
    pub has_wishlist: bool,
}

/// Full status view over a single event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventStatusResponse {
    pub name: String,
    pub event_id: String,
    pub target_date: String,
    pub max_price: String,
    pub matched: bool,
    pub participant_count: u32,
    pub sent_count: u32,
    pub received_count: u32,
    pub participants: Vec<ParticipantStatusRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_round_trip() {
        let req = CreateEventRequest {
            name: "xmas".to_string(),
            target_date: "2026-12-24".to_string(),
            max_price: "$25".to_string(),
            participants: vec!["100".to_string(), "200".to_string()],
            created_by: "admin".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        let back: CreateEventRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req, back);
    }

    #[test]
    fn test_status_response_hides_pairing() {
        let status = EventStatusResponse {
            name: "xmas".to_string(),
            event_id: "a1b2c3d4".to_string(),
            target_date: "2026-12-24".to_string(),
            max_price: "$25".to_string(),
            matched: true,
            participant_count: 2,
            sent_count: 1,
            received_count: 0,
            participants: vec![ParticipantStatusRow {
                participant: "100".to_string(),
                sent_gift: true,
                received_gift: false,
                has_wishlist: false,
            }],
        };
        let json = serde_json::to_string(&status).unwrap();
        assert!(!json.contains("matched_to"));
    }
}
