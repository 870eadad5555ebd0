//! Event lifecycle manager.
//!
//! The only component allowed to mutate the event store and the portable-id
//! lookup table. Every operation validates before it writes, so a failure
//! never leaves partial state, and every read-modify-write runs under the
//! owning scope's lock so concurrent operations on one event cannot
//! interleave.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use kanau::processor::Processor;
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::info;

use giftrelay_sdk::objects::MutationReport;

use crate::framework::DatabaseProcessor;
use crate::ids::{EventId, EventName, ParticipantId, ScopeId};
use crate::model::{Event, ParticipantRecord};
use crate::notify::{Outbox, created_notice, matched_notice};
use crate::pairing::{self, PairingError};
use crate::store::{
    DeleteEventWithLookup, EventIdExists, GetEvent, InsertEventWithLookup, ListAllEvents, PutEvent,
    StoreError,
};

/// Short-token allocation attempts before falling back to the long form.
const MAX_ID_ATTEMPTS: usize = 8;

/// Errors from lifecycle operations.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// An event with this name already exists in the scope
    #[error("an event named `{0}` already exists in this scope")]
    DuplicateEvent(EventName),

    /// No such event
    #[error("event `{0}` not found")]
    EventNotFound(EventName),

    /// Fewer than two distinct participants
    #[error("need at least 2 distinct participants, got {found}")]
    InsufficientParticipants { found: usize },

    /// Matching requested on an already-matched event
    #[error("event `{0}` has already been matched; rematch to redo the pairing")]
    AlreadyMatched(EventName),

    /// Participant mutation attempted on a matched event
    #[error("cannot change participants of `{0}` after matching; rematch first")]
    EventAlreadyMatched(EventName),

    /// Derangement generation was exhausted
    #[error("failed to generate a valid pairing")]
    PairingFailed,

    /// Imported pairs are malformed
    #[error("invalid pairing: {0}")]
    InvalidPairing(PairingError),

    /// The target date is not a parseable `YYYY-MM-DD` string
    #[error("invalid target date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Per-scope exclusive locks serializing read-modify-write sequences.
///
/// The map itself is guarded by a blocking mutex that is only held long
/// enough to clone out the scope's async lock.
#[derive(Default)]
pub struct ScopeLocks {
    inner: std::sync::Mutex<HashMap<ScopeId, Arc<tokio::sync::Mutex<()>>>>,
}

impl ScopeLocks {
    pub async fn acquire(&self, scope: &ScopeId) -> tokio::sync::OwnedMutexGuard<()> {
        let lock = {
            let mut map = self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            Arc::clone(map.entry(scope.clone()).or_default())
        };
        lock.lock_owned().await
    }
}

/// Creation-time metadata shared by `create` and `import`.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub name: EventName,
    pub target_date: String,
    pub max_price: String,
    pub created_by: ParticipantId,
}

/// Manages event creation, matching and participant membership.
pub struct LifecycleManager {
    pub(crate) processor: DatabaseProcessor,
    pub(crate) locks: Arc<ScopeLocks>,
}

impl LifecycleManager {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            processor: DatabaseProcessor::new(pool),
            locks: Arc::new(ScopeLocks::default()),
        }
    }

    /// A relay sharing this manager's store handle and scope locks.
    pub fn relay(&self) -> crate::relay::Relay {
        crate::relay::Relay::new(self.processor.clone(), Arc::clone(&self.locks))
    }

    /// Create a new unmatched event.
    ///
    /// Duplicate ids in `participants` collapse before the minimum-size
    /// check. Returns the stored event and one enrollment notice per
    /// participant.
    pub async fn create(
        &self,
        scope: &ScopeId,
        spec: NewEvent,
        participants: Vec<ParticipantId>,
    ) -> Result<(Event, Outbox), LifecycleError> {
        validate_target_date(&spec.target_date)?;
        let distinct: BTreeSet<ParticipantId> = participants.into_iter().collect();
        if distinct.len() < 2 {
            return Err(LifecycleError::InsufficientParticipants {
                found: distinct.len(),
            });
        }

        let _guard = self.locks.acquire(scope).await;
        self.ensure_name_free(scope, &spec.name).await?;
        let event_id = self.allocate_event_id().await?;

        let event = Event {
            name: spec.name,
            event_id,
            target_date: spec.target_date,
            max_price: spec.max_price,
            participants: distinct
                .into_iter()
                .map(|p| (p, ParticipantRecord::default()))
                .collect(),
            matched: false,
            created_by: spec.created_by,
            created_at: Event::now_timestamp(),
        };
        self.processor
            .process(InsertEventWithLookup {
                scope: scope.clone(),
                event: event.clone(),
            })
            .await?;
        info!(scope = %scope, event = %event.name, event_id = %event.event_id, "event created");

        let outbox: Outbox = event
            .participants
            .keys()
            .map(|p| (p.clone(), created_notice(&event)))
            .collect();
        Ok((event, outbox))
    }

    /// Import an event with caller-provided pairings, stored already
    /// matched.
    ///
    /// The pairs must pass full-closure validation: no self-edges, no
    /// duplicate givers, giver set equal to receiver set.
    pub async fn import(
        &self,
        scope: &ScopeId,
        spec: NewEvent,
        pairs: Vec<(ParticipantId, ParticipantId)>,
    ) -> Result<Event, LifecycleError> {
        validate_target_date(&spec.target_date)?;
        let participants =
            pairing::validate_pairing(&pairs).map_err(LifecycleError::InvalidPairing)?;

        let _guard = self.locks.acquire(scope).await;
        self.ensure_name_free(scope, &spec.name).await?;
        let event_id = self.allocate_event_id().await?;

        let mut records: BTreeMap<ParticipantId, ParticipantRecord> = participants
            .into_iter()
            .map(|p| (p, ParticipantRecord::default()))
            .collect();
        for (giver, receiver) in pairs {
            if let Some(record) = records.get_mut(&giver) {
                record.matched_to = Some(receiver);
            }
        }

        let event = Event {
            name: spec.name,
            event_id,
            target_date: spec.target_date,
            max_price: spec.max_price,
            participants: records,
            matched: true,
            created_by: spec.created_by,
            created_at: Event::now_timestamp(),
        };
        self.processor
            .process(InsertEventWithLookup {
                scope: scope.clone(),
                event: event.clone(),
            })
            .await?;
        info!(scope = %scope, event = %event.name, "event imported with forced pairings");
        Ok(event)
    }

    /// Assign a random derangement over the current participants.
    ///
    /// Returns the updated event and one assignment notice per giver.
    pub async fn match_event(
        &self,
        scope: &ScopeId,
        name: &EventName,
    ) -> Result<(Event, Outbox), LifecycleError> {
        let _guard = self.locks.acquire(scope).await;
        let mut event = self.get_required(scope, name).await?;
        if event.matched {
            return Err(LifecycleError::AlreadyMatched(name.clone()));
        }
        let ids: Vec<ParticipantId> = event.participants.keys().cloned().collect();
        if ids.len() < 2 {
            return Err(LifecycleError::InsufficientParticipants { found: ids.len() });
        }

        let pairs = pairing::generate_pairing(&ids).map_err(|err| match err {
            PairingError::TooFewParticipants { found } => {
                LifecycleError::InsufficientParticipants { found }
            }
            _ => LifecycleError::PairingFailed,
        })?;

        for (giver, receiver) in &pairs {
            if let Some(record) = event.participants.get_mut(giver) {
                record.matched_to = Some(receiver.clone());
            }
        }
        event.matched = true;
        self.put(scope, &event).await?;
        info!(scope = %scope, event = %name, participants = pairs.len(), "event matched");

        let outbox: Outbox = pairs
            .iter()
            .map(|(giver, receiver)| (giver.clone(), matched_notice(&event, receiver)))
            .collect();
        Ok((event, outbox))
    }

    /// Clear all pairings and return the event to the unmatched state.
    ///
    /// Calling this on an event that was never matched is a no-op success.
    pub async fn rematch(&self, scope: &ScopeId, name: &EventName) -> Result<(), LifecycleError> {
        let _guard = self.locks.acquire(scope).await;
        let mut event = self.get_required(scope, name).await?;
        for record in event.participants.values_mut() {
            record.matched_to = None;
        }
        event.matched = false;
        self.put(scope, &event).await?;
        info!(scope = %scope, event = %name, "pairings reset");
        Ok(())
    }

    /// Add participants to an unmatched event.
    ///
    /// Already-present ids are skipped and reported, and their existing
    /// wishlist and gift flags are left untouched.
    pub async fn add_participants(
        &self,
        scope: &ScopeId,
        name: &EventName,
        participants: Vec<ParticipantId>,
    ) -> Result<MutationReport, LifecycleError> {
        let _guard = self.locks.acquire(scope).await;
        let mut event = self.get_required(scope, name).await?;
        if event.matched {
            return Err(LifecycleError::EventAlreadyMatched(name.clone()));
        }

        let mut report = MutationReport::default();
        for participant in participants {
            if event.participants.contains_key(&participant) {
                report.skipped.push(participant.into_inner());
            } else {
                event
                    .participants
                    .insert(participant.clone(), ParticipantRecord::default());
                report.applied.push(participant.into_inner());
            }
        }
        if !report.applied.is_empty() {
            self.put(scope, &event).await?;
        }
        Ok(report)
    }

    /// Remove participants from an unmatched event.
    ///
    /// Ids not in the event are skipped and reported.
    pub async fn remove_participants(
        &self,
        scope: &ScopeId,
        name: &EventName,
        participants: Vec<ParticipantId>,
    ) -> Result<MutationReport, LifecycleError> {
        let _guard = self.locks.acquire(scope).await;
        let mut event = self.get_required(scope, name).await?;
        if event.matched {
            return Err(LifecycleError::EventAlreadyMatched(name.clone()));
        }

        let mut report = MutationReport::default();
        for participant in participants {
            if event.participants.remove(&participant).is_some() {
                report.applied.push(participant.into_inner());
            } else {
                report.skipped.push(participant.into_inner());
            }
        }
        if !report.applied.is_empty() {
            self.put(scope, &event).await?;
        }
        Ok(report)
    }

    /// Delete the event and its lookup entry together.
    pub async fn delete(&self, scope: &ScopeId, name: &EventName) -> Result<(), LifecycleError> {
        let _guard = self.locks.acquire(scope).await;
        let event = self.get_required(scope, name).await?;
        self.processor
            .process(DeleteEventWithLookup {
                scope: scope.clone(),
                name: name.clone(),
                event_id: event.event_id,
            })
            .await?;
        info!(scope = %scope, event = %name, "event deleted");
        Ok(())
    }

    /// Remove one participant from every event in every scope.
    ///
    /// Data-deletion sweep: the participant's record is dropped and any
    /// edge pointing at them is cleared, which can leave a matched event
    /// without a full bijection until an admin rematches it. Returns the
    /// number of events modified.
    pub async fn purge_participant(
        &self,
        participant: &ParticipantId,
    ) -> Result<u64, LifecycleError> {
        let all = self.processor.process(ListAllEvents).await?;
        let mut modified = 0u64;
        for (scope, stale) in all {
            let touches = stale.participants.contains_key(participant)
                || stale.santa_of(participant).is_some();
            if !touches {
                continue;
            }
            let _guard = self.locks.acquire(&scope).await;
            // Re-read under the lock; the sweep snapshot may be stale.
            let Some(mut event) = self
                .processor
                .process(GetEvent {
                    scope: scope.clone(),
                    name: stale.name.clone(),
                })
                .await?
            else {
                continue;
            };
            let mut changed = event.participants.remove(participant).is_some();
            for record in event.participants.values_mut() {
                if record.matched_to.as_ref() == Some(participant) {
                    record.matched_to = None;
                    changed = true;
                }
            }
            if changed {
                self.put(&scope, &event).await?;
                modified += 1;
            }
        }
        if modified > 0 {
            info!(participant = %participant, events = modified, "participant purged");
        }
        Ok(modified)
    }

    async fn ensure_name_free(
        &self,
        scope: &ScopeId,
        name: &EventName,
    ) -> Result<(), LifecycleError> {
        let existing = self
            .processor
            .process(GetEvent {
                scope: scope.clone(),
                name: name.clone(),
            })
            .await?;
        if existing.is_some() {
            return Err(LifecycleError::DuplicateEvent(name.clone()));
        }
        Ok(())
    }

    /// Allocate a globally unique portable id: a handful of short-token
    /// attempts against the lookup table, then a long token. The lookup
    /// table's uniqueness constraint backstops the long form.
    async fn allocate_event_id(&self) -> Result<EventId, LifecycleError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = EventId::generate(&mut rand::rng());
            let taken = self
                .processor
                .process(EventIdExists {
                    event_id: candidate.clone(),
                })
                .await?;
            if !taken {
                return Ok(candidate);
            }
        }
        Ok(EventId::generate_long(&mut rand::rng()))
    }

    pub(crate) async fn get_required(
        &self,
        scope: &ScopeId,
        name: &EventName,
    ) -> Result<Event, LifecycleError> {
        self.processor
            .process(GetEvent {
                scope: scope.clone(),
                name: name.clone(),
            })
            .await?
            .ok_or_else(|| LifecycleError::EventNotFound(name.clone()))
    }

    async fn put(&self, scope: &ScopeId, event: &Event) -> Result<(), LifecycleError> {
        self.processor
            .process(PutEvent {
                scope: scope.clone(),
                event: event.clone(),
            })
            .await?;
        Ok(())
    }
}

fn validate_target_date(target_date: &str) -> Result<(), LifecycleError> {
    let format = time::macros::format_description!("[year]-[month]-[day]");
    time::Date::parse(target_date, &format)
        .map(|_| ())
        .map_err(|_| LifecycleError::InvalidDate(target_date.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::memory_pool;
    use giftrelay_sdk::objects::Notice;

    fn scope() -> ScopeId {
        ScopeId::from("guild-1")
    }

    fn name(n: &str) -> EventName {
        EventName::from(n)
    }

    fn ids(names: &[&str]) -> Vec<ParticipantId> {
        names.iter().map(|n| ParticipantId::from(*n)).collect()
    }

    fn spec(n: &str) -> NewEvent {
        NewEvent {
            name: name(n),
            target_date: "2026-12-24".to_string(),
            max_price: "$25".to_string(),
            created_by: ParticipantId::from("admin"),
        }
    }

    async fn manager() -> LifecycleManager {
        LifecycleManager::new(memory_pool().await)
    }

    #[tokio::test]
    async fn test_create_then_match_is_derangement() {
        let manager = manager().await;
        let (event, outbox) = manager
            .create(&scope(), spec("xmas"), ids(&["a", "b", "c"]))
            .await
            .unwrap();
        assert!(!event.matched);
        assert_eq!(outbox.len(), 3);

        let (matched, outbox) = manager.match_event(&scope(), &name("xmas")).await.unwrap();
        assert!(matched.is_derangement());
        assert_eq!(outbox.len(), 3);
        for (giver, notice) in &outbox {
            let Notice::Matched { giftee, .. } = notice else {
                panic!("expected Matched notice");
            };
            assert_ne!(giver.as_str(), giftee);
            assert_eq!(
                matched.participants[giver].matched_to,
                Some(ParticipantId::from(giftee.as_str()))
            );
        }
    }

    #[tokio::test]
    async fn test_create_duplicate_name_fails() {
        let manager = manager().await;
        manager
            .create(&scope(), spec("xmas"), ids(&["a", "b"]))
            .await
            .unwrap();
        let err = manager
            .create(&scope(), spec("xmas"), ids(&["c", "d"]))
            .await
            .unwrap_err();
        assert!(matches!(err, LifecycleError::DuplicateEvent(_)));
    }

    #[tokio::test]
    async fn test_same_name_allowed_across_scopes() {
        let manager = manager().await;
        manager
            .create(&scope(), spec("xmas"), ids(&["a", "b"]))
            .await
            .unwrap();
        manager
            .create(&ScopeId::from("guild-2"), spec("xmas"), ids(&["a", "b"]))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_collapses_duplicates_before_size_check() {
        let manager = manager().await;
        // Three raw ids but only one distinct participant.
        let err = manager
            .create(&scope(), spec("xmas"), ids(&["a", "a", "a"]))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LifecycleError::InsufficientParticipants { found: 1 }
        ));

        // Two distinct participants hiding in three raw ids is enough.
        let (event, _) = manager
            .create(&scope(), spec("other"), ids(&["a", "a", "b"]))
            .await
            .unwrap();
        assert_eq!(event.participants.len(), 2);
    }

    #[tokio::test]
    async fn test_create_rejects_bad_date() {
        let manager = manager().await;
        let mut bad = spec("xmas");
        bad.target_date = "24-12-2026".to_string();
        let err = manager
            .create(&scope(), bad, ids(&["a", "b"]))
            .await
            .unwrap_err();
        assert!(matches!(err, LifecycleError::InvalidDate(_)));
    }

    #[tokio::test]
    async fn test_match_twice_fails() {
        let manager = manager().await;
        manager
            .create(&scope(), spec("xmas"), ids(&["a", "b"]))
            .await
            .unwrap();
        manager.match_event(&scope(), &name("xmas")).await.unwrap();
        let err = manager
            .match_event(&scope(), &name("xmas"))
            .await
            .unwrap_err();
        assert!(matches!(err, LifecycleError::AlreadyMatched(_)));
    }

    #[tokio::test]
    async fn test_match_missing_event_fails() {
        let manager = manager().await;
        let err = manager
            .match_event(&scope(), &name("nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, LifecycleError::EventNotFound(_)));
    }

    #[tokio::test]
    async fn test_rematch_clears_edges_and_is_idempotent() {
        let manager = manager().await;
        manager
            .create(&scope(), spec("xmas"), ids(&["a", "b", "c"]))
            .await
            .unwrap();
        manager.match_event(&scope(), &name("xmas")).await.unwrap();

        manager.rematch(&scope(), &name("xmas")).await.unwrap();
        let event = manager.get_required(&scope(), &name("xmas")).await.unwrap();
        assert!(!event.matched);
        assert!(
            event
                .participants
                .values()
                .all(|r| r.matched_to.is_none())
        );

        // Rematch of an already-unmatched event is a no-op success.
        manager.rematch(&scope(), &name("xmas")).await.unwrap();

        // And the event can be matched again afterwards.
        let (matched, _) = manager.match_event(&scope(), &name("xmas")).await.unwrap();
        assert!(matched.is_derangement());
    }

    #[tokio::test]
    async fn test_add_participants_reports_and_preserves_state() {
        let manager = manager().await;
        manager
            .create(&scope(), spec("xmas"), ids(&["a", "b"]))
            .await
            .unwrap();

        // Give `a` a wishlist out of band.
        let mut event = manager.get_required(&scope(), &name("xmas")).await.unwrap();
        if let Some(record) = event.participants.get_mut(&ParticipantId::from("a")) {
            record.wishlist = Some("socks".to_string());
        }
        manager.put(&scope(), &event).await.unwrap();

        let report = manager
            .add_participants(&scope(), &name("xmas"), ids(&["a", "c"]))
            .await
            .unwrap();
        assert_eq!(report.applied, vec!["c".to_string()]);
        assert_eq!(report.skipped, vec!["a".to_string()]);

        let event = manager.get_required(&scope(), &name("xmas")).await.unwrap();
        assert_eq!(event.participants.len(), 3);
        assert_eq!(
            event.participants[&ParticipantId::from("a")].wishlist,
            Some("socks".to_string())
        );
    }

    #[tokio::test]
    async fn test_participant_mutation_blocked_after_match() {
        let manager = manager().await;
        manager
            .create(&scope(), spec("xmas"), ids(&["a", "b"]))
            .await
            .unwrap();
        manager.match_event(&scope(), &name("xmas")).await.unwrap();

        let err = manager
            .add_participants(&scope(), &name("xmas"), ids(&["c"]))
            .await
            .unwrap_err();
        assert!(matches!(err, LifecycleError::EventAlreadyMatched(_)));

        let err = manager
            .remove_participants(&scope(), &name("xmas"), ids(&["a"]))
            .await
            .unwrap_err();
        assert!(matches!(err, LifecycleError::EventAlreadyMatched(_)));
    }

    #[tokio::test]
    async fn test_remove_participants_skips_absent() {
        let manager = manager().await;
        manager
            .create(&scope(), spec("xmas"), ids(&["a", "b", "c"]))
            .await
            .unwrap();
        let report = manager
            .remove_participants(&scope(), &name("xmas"), ids(&["c", "z"]))
            .await
            .unwrap();
        assert_eq!(report.applied, vec!["c".to_string()]);
        assert_eq!(report.skipped, vec!["z".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_removes_lookup_entry() {
        let manager = manager().await;
        let (event, _) = manager
            .create(&scope(), spec("xmas"), ids(&["a", "b"]))
            .await
            .unwrap();
        let event_id = event.event_id.clone();
        manager.delete(&scope(), &name("xmas")).await.unwrap();

        assert!(
            !manager
                .processor
                .process(EventIdExists {
                    event_id: event_id.clone()
                })
                .await
                .unwrap()
        );
        let err = manager.delete(&scope(), &name("xmas")).await.unwrap_err();
        assert!(matches!(err, LifecycleError::EventNotFound(_)));
    }

    #[tokio::test]
    async fn test_import_three_cycle() {
        let manager = manager().await;
        let pairs = vec![
            (ParticipantId::from("a"), ParticipantId::from("b")),
            (ParticipantId::from("b"), ParticipantId::from("c")),
            (ParticipantId::from("c"), ParticipantId::from("a")),
        ];
        let event = manager.import(&scope(), spec("xmas"), pairs).await.unwrap();
        assert!(event.matched);
        assert!(event.is_derangement());
        assert_eq!(event.participants.len(), 3);
    }

    #[tokio::test]
    async fn test_import_two_cycle_participant_set() {
        let manager = manager().await;
        let pairs = vec![
            (ParticipantId::from("a"), ParticipantId::from("b")),
            (ParticipantId::from("b"), ParticipantId::from("a")),
        ];
        let event = manager.import(&scope(), spec("xmas"), pairs).await.unwrap();
        let members: Vec<&str> = event.participants.keys().map(|p| p.as_str()).collect();
        assert_eq!(members, ["a", "b"]);
    }

    #[tokio::test]
    async fn test_import_rejects_self_pair_and_open_chain() {
        let manager = manager().await;
        let err = manager
            .import(
                &scope(),
                spec("bad1"),
                vec![(ParticipantId::from("a"), ParticipantId::from("a"))],
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LifecycleError::InvalidPairing(PairingError::SelfPairing(_))
        ));

        let err = manager
            .import(
                &scope(),
                spec("bad2"),
                vec![
                    (ParticipantId::from("a"), ParticipantId::from("b")),
                    (ParticipantId::from("b"), ParticipantId::from("c")),
                ],
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LifecycleError::InvalidPairing(PairingError::Unclosed { .. })
        ));

        // Nothing was committed for either attempt.
        assert!(matches!(
            manager.get_required(&scope(), &name("bad1")).await,
            Err(LifecycleError::EventNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_purge_participant_sweeps_all_scopes() {
        let manager = manager().await;
        manager
            .create(&scope(), spec("xmas"), ids(&["a", "b", "c"]))
            .await
            .unwrap();
        manager
            .create(&ScopeId::from("guild-2"), spec("nye"), ids(&["a", "d"]))
            .await
            .unwrap();
        manager.match_event(&scope(), &name("xmas")).await.unwrap();

        let modified = manager
            .purge_participant(&ParticipantId::from("a"))
            .await
            .unwrap();
        assert_eq!(modified, 2);

        let event = manager.get_required(&scope(), &name("xmas")).await.unwrap();
        assert!(!event.participants.contains_key(&ParticipantId::from("a")));
        assert!(
            event
                .participants
                .values()
                .all(|r| r.matched_to.as_ref() != Some(&ParticipantId::from("a")))
        );
    }
}
