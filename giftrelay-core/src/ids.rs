//! Strongly-typed identifiers.
//!
//! Participant and scope identifiers arrive from the outside world in
//! whatever form the chat platform uses (usually numeric snowflakes, often
//! already stringified). They are normalized to opaque string newtypes at
//! the boundary and never compared in their raw forms again.

use rand::RngCore;
use serde::{Deserialize, Serialize};

/// The administrative boundary (one chat server) under which event names
/// are unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeId(String);

/// An opaque participant identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

/// An event's by-name key, unique within its scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventName(String);

/// A globally unique portable event token.
///
/// Lets a participant address an event from a direct message without
/// knowing (or revealing) the owning scope. Encoded as Crockford base32
/// over random entropy: 8 characters normally, 16 when short-token
/// allocation keeps colliding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

macro_rules! string_id {
    ($T:ty) => {
        impl $T {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl From<String> for $T {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $T {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl std::fmt::Display for $T {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(ScopeId);
string_id!(ParticipantId);
string_id!(EventName);
string_id!(EventId);

/// Entropy sizes for the two token forms. 5 bytes encode to exactly 8
/// base32 characters, 10 bytes to 16.
const SHORT_ENTROPY: usize = 5;
const LONG_ENTROPY: usize = 10;

impl EventId {
    /// Generate a short (8-character) token.
    pub fn generate<R: RngCore>(rng: &mut R) -> Self {
        Self::from_entropy(rng, SHORT_ENTROPY)
    }

    /// Generate a long (16-character) token, used when short allocation
    /// runs out of retries against the lookup table.
    pub fn generate_long<R: RngCore>(rng: &mut R) -> Self {
        Self::from_entropy(rng, LONG_ENTROPY)
    }

    fn from_entropy<R: RngCore>(rng: &mut R, bytes: usize) -> Self {
        let mut buf = vec![0u8; bytes];
        rng.fill_bytes(&mut buf);
        Self(fast32::base32::CROCKFORD.encode(&buf).to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_event_id_lengths() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(EventId::generate(&mut rng).as_str().len(), 8);
        assert_eq!(EventId::generate_long(&mut rng).as_str().len(), 16);
    }

    #[test]
    fn test_event_id_is_lowercase_base32() {
        let mut rng = StdRng::seed_from_u64(7);
        let id = EventId::generate(&mut rng);
        assert!(
            id.as_str()
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn test_participant_id_serde_transparent() {
        let id = ParticipantId::from("123456789");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"123456789\"");
    }
}
