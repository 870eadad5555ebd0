//! Derangement generation and import validation.
//!
//! A pairing is a bijection over the participant set with no fixed points,
//! so nobody gives a gift to themselves. Generation samples uniform
//! shuffles and rejects any with a fixed point; after a bounded number of
//! rejections it falls back to a cyclic shift, which is always a
//! derangement, so generation terminates for every N ≥ 2.

use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::ids::ParticipantId;

/// Shuffle rejections before the cyclic-shift fallback.
pub const MAX_SHUFFLE_ATTEMPTS: usize = 100;

/// Errors from pairing generation and import validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairingError {
    /// A derangement needs at least two participants.
    #[error("need at least 2 distinct participants, got {found}")]
    TooFewParticipants { found: usize },

    /// An imported pair maps a giver to themselves.
    #[error("participant {0} cannot give a gift to themselves")]
    SelfPairing(ParticipantId),

    /// An imported giver appears in more than one pair.
    #[error("participant {0} is listed as a giver more than once")]
    DuplicateGiver(ParticipantId),

    /// The giver and receiver sets differ, so the pairs do not close.
    #[error("pairings do not close: {} give without receiving, {} receive without giving",
            only_give.len(), only_receive.len())]
    Unclosed {
        /// Participants who give but never receive.
        only_give: Vec<ParticipantId>,
        /// Participants who receive but never give.
        only_receive: Vec<ParticipantId>,
    },

    /// Sampling was exhausted without finding a derangement.
    #[error("failed to generate a valid pairing")]
    Exhausted,
}

/// Generate a random derangement over `participants` using the thread rng.
pub fn generate_pairing(
    participants: &[ParticipantId],
) -> Result<Vec<(ParticipantId, ParticipantId)>, PairingError> {
    generate_pairing_with(participants, &mut rand::rng())
}

/// Generate a random derangement over `participants`.
///
/// N = 2 has exactly one derangement (the swap), committed directly.
/// For larger N, rejection sampling runs up to [`MAX_SHUFFLE_ATTEMPTS`]
/// times before the cyclic-shift fallback.
pub fn generate_pairing_with<R: Rng>(
    participants: &[ParticipantId],
    rng: &mut R,
) -> Result<Vec<(ParticipantId, ParticipantId)>, PairingError> {
    let n = participants.len();
    if n < 2 {
        return Err(PairingError::TooFewParticipants { found: n });
    }
    if n == 2 {
        return Ok(vec![
            (participants[0].clone(), participants[1].clone()),
            (participants[1].clone(), participants[0].clone()),
        ]);
    }

    let mut shuffled = participants.to_vec();
    for _ in 0..MAX_SHUFFLE_ATTEMPTS {
        shuffled.shuffle(rng);
        if participants.iter().zip(&shuffled).all(|(a, b)| a != b) {
            return Ok(participants.iter().cloned().zip(shuffled).collect());
        }
    }

    // Cyclic shift by a uniform offset in [1, N-1] never has a fixed point.
    let offset = rng.random_range(1..n);
    Ok(participants
        .iter()
        .enumerate()
        .map(|(i, giver)| (giver.clone(), participants[(i + offset) % n].clone()))
        .collect())
}

/// Validate caller-provided pairs for import.
///
/// Rejects self-pairs, duplicate givers, and any pair set whose givers and
/// receivers are not exactly the same participants (an open chain is not a
/// valid exchange). Returns the participant set on success.
pub fn validate_pairing(
    pairs: &[(ParticipantId, ParticipantId)],
) -> Result<BTreeSet<ParticipantId>, PairingError> {
    let mut givers = BTreeSet::new();
    let mut receivers = BTreeSet::new();
    for (giver, receiver) in pairs {
        if giver == receiver {
            return Err(PairingError::SelfPairing(giver.clone()));
        }
        if !givers.insert(giver.clone()) {
            return Err(PairingError::DuplicateGiver(giver.clone()));
        }
        receivers.insert(receiver.clone());
    }
    if givers != receivers {
        return Err(PairingError::Unclosed {
            only_give: givers.difference(&receivers).cloned().collect(),
            only_receive: receivers.difference(&givers).cloned().collect(),
        });
    }
    // A closed, self-pair-free set is only undersized when it is empty.
    if givers.len() < 2 {
        return Err(PairingError::TooFewParticipants { found: givers.len() });
    }
    Ok(givers)
}
