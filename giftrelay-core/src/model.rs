//! Event documents as persisted in the store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;

use crate::ids::{EventId, EventName, ParticipantId};

/// Per-participant state, keyed by participant id inside its [`Event`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    /// The participant this person gives a gift to. `None` until the
    /// event is matched.
    pub matched_to: Option<ParticipantId>,
    /// Self-reported, unverified.
    pub sent_gift: bool,
    /// Self-reported, unverified.
    pub received_gift: bool,
    /// Free text, mutable at any time including post-match.
    pub wishlist: Option<String>,
}

/// A Secret-Santa event.
///
/// Stored as one JSON document per `(scope, name)` row; the portable
/// `event_id` is additionally indexed in the global lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: EventName,
    pub event_id: EventId,
    /// Display string, validated as `YYYY-MM-DD` at creation time only.
    pub target_date: String,
    /// Display string, never interpreted.
    pub max_price: String,
    pub participants: BTreeMap<ParticipantId, ParticipantRecord>,
    /// True once a derangement has been committed.
    pub matched: bool,
    pub created_by: ParticipantId,
    /// RFC 3339 timestamp, provenance only.
    pub created_at: String,
}

impl Event {
    /// Current timestamp in the `created_at` wire form.
    pub fn now_timestamp() -> String {
        time::OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default()
    }

    /// The participant who gives to `participant`, resolved by scanning
    /// the outbound edges.
    pub fn santa_of(&self, participant: &ParticipantId) -> Option<&ParticipantId> {
        self.participants
            .iter()
            .find(|(_, record)| record.matched_to.as_ref() == Some(participant))
            .map(|(giver, _)| giver)
    }

    /// Whether the committed `matched_to` edges form a derangement over
    /// the participant set: total, no fixed points, and a bijection.
    pub fn is_derangement(&self) -> bool {
        if !self.matched {
            return false;
        }
        let mut seen_receivers = std::collections::BTreeSet::new();
        for (giver, record) in &self.participants {
            let Some(receiver) = &record.matched_to else {
                return false;
            };
            if receiver == giver
                || !self.participants.contains_key(receiver)
                || !seen_receivers.insert(receiver)
            {
                return false;
            }
        }
        true
    }

    pub fn sent_count(&self) -> u32 {
        self.participants.values().filter(|p| p.sent_gift).count() as u32
    }

    pub fn received_count(&self) -> u32 {
        self.participants
            .values()
            .filter(|p| p.received_gift)
            .count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_with_edges(edges: &[(&str, &str)]) -> Event {
        let mut participants = BTreeMap::new();
        for (giver, receiver) in edges {
            participants.insert(
                ParticipantId::from(*giver),
                ParticipantRecord {
                    matched_to: Some(ParticipantId::from(*receiver)),
                    ..Default::default()
                },
            );
        }
        Event {
            name: EventName::from("xmas"),
            event_id: EventId::from("a1b2c3d4"),
            target_date: "2026-12-24".to_string(),
            max_price: "$25".to_string(),
            participants,
            matched: true,
            created_by: ParticipantId::from("admin"),
            created_at: Event::now_timestamp(),
        }
    }

    #[test]
    fn test_three_cycle_is_derangement() {
        let event = event_with_edges(&[("a", "b"), ("b", "c"), ("c", "a")]);
        assert!(event.is_derangement());
    }

    #[test]
    fn test_fixed_point_is_not_derangement() {
        let event = event_with_edges(&[("a", "a"), ("b", "c"), ("c", "b")]);
        assert!(!event.is_derangement());
    }

    #[test]
    fn test_duplicate_receiver_is_not_derangement() {
        let event = event_with_edges(&[("a", "c"), ("b", "c"), ("c", "a")]);
        assert!(!event.is_derangement());
    }

    #[test]
    fn test_santa_of_inverse_lookup() {
        let event = event_with_edges(&[("a", "b"), ("b", "c"), ("c", "a")]);
        assert_eq!(
            event.santa_of(&ParticipantId::from("c")),
            Some(&ParticipantId::from("b"))
        );
    }

    #[test]
    fn test_document_round_trip() {
        let event = event_with_edges(&[("a", "b"), ("b", "a")]);
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
