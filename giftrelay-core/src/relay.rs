//! Anonymous message relay between matched participants.
//!
//! Resolves the caller's counterpart and produces a notice addressed to
//! them. Payloads carry the recipient and the event, never the sender's
//! identity, so the transport layer cannot leak who wrote a message.

use std::fmt;
use std::sync::Arc;

use kanau::processor::Processor;
use thiserror::Error;
use tracing::error;

use giftrelay_sdk::objects::{GiftFlagResponse, Notice, RelayDirection, WhoAmIResponse};

use crate::framework::DatabaseProcessor;
use crate::ids::{EventId, EventName, ParticipantId, ScopeId};
use crate::lifecycle::ScopeLocks;
use crate::model::Event;
use crate::store::{GetEvent, LookupEventId, PutEvent, StoreError};

/// How a caller addresses an event: `scope:name`, or a bare portable id.
///
/// The bare form is what makes direct-message-only interaction work; the
/// caller never needs to know which scope the event lives in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventRef {
    Scoped { scope: ScopeId, name: EventName },
    ById(EventId),
}

impl EventRef {
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((scope, name)) => EventRef::Scoped {
                scope: ScopeId::from(scope),
                name: EventName::from(name),
            },
            None => EventRef::ById(EventId::from(raw)),
        }
    }
}

impl fmt::Display for EventRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventRef::Scoped { scope, name } => write!(f, "{scope}:{name}"),
            EventRef::ById(id) => write!(f, "{id}"),
        }
    }
}

/// Errors from relay operations.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The reference resolved to nothing
    #[error("event `{0}` not found")]
    EventNotFound(String),

    /// The caller is not enrolled in the event
    #[error("`{0}` is not a participant of this event")]
    NotAParticipant(ParticipantId),

    /// The event has no pairings yet
    #[error("event `{0}` has not been matched yet")]
    NotMatched(EventName),

    /// The inverse edge is missing on a matched event
    #[error("no Santa found for `{0}`; the pairing is inconsistent")]
    NoSantaFound(ParticipantId),

    /// Store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One outbound notice with its recipient, ready for the delivery layer.
pub type RelayPayload = (ParticipantId, Notice);

/// Resolves relay operations against the event store.
pub struct Relay {
    processor: DatabaseProcessor,
    locks: Arc<ScopeLocks>,
}

impl Relay {
    pub(crate) fn new(processor: DatabaseProcessor, locks: Arc<ScopeLocks>) -> Self {
        Self { processor, locks }
    }

    /// Relay an anonymous message from a Santa to their giftee.
    pub async fn send_to_giftee(
        &self,
        event_ref: &EventRef,
        from: &ParticipantId,
        message: &str,
    ) -> Result<RelayPayload, RelayError> {
        let (_, event) = self.resolve(event_ref).await?;
        let giftee = self.giftee_of(&event, from)?;
        Ok((
            giftee,
            anonymous_notice(&event, RelayDirection::ToGiftee, message),
        ))
    }

    /// Relay an anonymous reply from a giftee back to their Santa.
    ///
    /// The Santa is found by inverse scan, so the sender never learns who
    /// the recipient is.
    pub async fn reply_to_santa(
        &self,
        event_ref: &EventRef,
        from: &ParticipantId,
        message: &str,
    ) -> Result<RelayPayload, RelayError> {
        let (_, event) = self.resolve(event_ref).await?;
        if !event.participants.contains_key(from) {
            return Err(RelayError::NotAParticipant(from.clone()));
        }
        if !event.matched {
            return Err(RelayError::NotMatched(event.name.clone()));
        }
        let santa = self.santa_of(&event, from)?;
        Ok((
            santa,
            anonymous_notice(&event, RelayDirection::ToSanta, message),
        ))
    }

    /// Replace the participant's wishlist.
    ///
    /// Always succeeds for a participant. When the event is matched the
    /// participant's Santa is resolved so the caller can deliver a
    /// wishlist-changed notice to exactly that one identity; a broken
    /// bijection is logged and reported as no recipient rather than
    /// failing the write.
    pub async fn update_wishlist(
        &self,
        event_ref: &EventRef,
        participant: &ParticipantId,
        wishlist: &str,
    ) -> Result<Option<RelayPayload>, RelayError> {
        let (scope, stale) = self.resolve(event_ref).await?;
        let _guard = self.locks.acquire(&scope).await;
        // Re-read under the lock before mutating.
        let mut event = self
            .processor
            .process(GetEvent {
                scope: scope.clone(),
                name: stale.name.clone(),
            })
            .await?
            .ok_or_else(|| RelayError::EventNotFound(event_ref.to_string()))?;

        let record = event
            .participants
            .get_mut(participant)
            .ok_or_else(|| RelayError::NotAParticipant(participant.clone()))?;
        record.wishlist = Some(wishlist.to_string());
        self.processor
            .process(PutEvent {
                scope,
                event: event.clone(),
            })
            .await?;

        if !event.matched {
            return Ok(None);
        }
        match self.santa_of(&event, participant) {
            Ok(santa) => Ok(Some((
                santa,
                Notice::WishlistChanged {
                    event_name: event.name.to_string(),
                    event_id: event.event_id.to_string(),
                    wishlist: wishlist.to_string(),
                },
            ))),
            // The write already committed; surface the inconsistency in
            // the logs but do not fail the caller's update.
            Err(_) => Ok(None),
        }
    }

    /// The caller's assignment view, for direct-message delivery only.
    pub async fn whoami(
        &self,
        event_ref: &EventRef,
        participant: &ParticipantId,
    ) -> Result<WhoAmIResponse, RelayError> {
        let (_, event) = self.resolve(event_ref).await?;
        let record = event
            .participants
            .get(participant)
            .ok_or_else(|| RelayError::NotAParticipant(participant.clone()))?;
        let giftee = self.giftee_of(&event, participant)?;
        let giftee_wishlist = event
            .participants
            .get(&giftee)
            .and_then(|r| r.wishlist.clone());
        Ok(WhoAmIResponse {
            event_name: event.name.to_string(),
            event_id: event.event_id.to_string(),
            giftee: giftee.into_inner(),
            target_date: event.target_date.clone(),
            max_price: event.max_price.clone(),
            sent_gift: record.sent_gift,
            giftee_wishlist,
        })
    }

    /// Mark the caller's gift as sent.
    pub async fn mark_sent(
        &self,
        event_ref: &EventRef,
        participant: &ParticipantId,
    ) -> Result<GiftFlagResponse, RelayError> {
        self.set_flag(event_ref, participant, |record| record.sent_gift = true)
            .await
    }

    /// Mark the caller's gift as received.
    pub async fn mark_received(
        &self,
        event_ref: &EventRef,
        participant: &ParticipantId,
    ) -> Result<GiftFlagResponse, RelayError> {
        self.set_flag(event_ref, participant, |record| {
            record.received_gift = true;
        })
        .await
    }

    async fn set_flag(
        &self,
        event_ref: &EventRef,
        participant: &ParticipantId,
        apply: impl FnOnce(&mut crate::model::ParticipantRecord),
    ) -> Result<GiftFlagResponse, RelayError> {
        let (scope, stale) = self.resolve(event_ref).await?;
        let _guard = self.locks.acquire(&scope).await;
        let mut event = self
            .processor
            .process(GetEvent {
                scope: scope.clone(),
                name: stale.name.clone(),
            })
            .await?
            .ok_or_else(|| RelayError::EventNotFound(event_ref.to_string()))?;
        let record = event
            .participants
            .get_mut(participant)
            .ok_or_else(|| RelayError::NotAParticipant(participant.clone()))?;
        apply(record);
        let (sent_gift, received_gift) = (record.sent_gift, record.received_gift);
        self.processor
            .process(PutEvent {
                scope,
                event: event.clone(),
            })
            .await?;
        Ok(GiftFlagResponse {
            event_name: event.name.to_string(),
            sent_gift,
            received_gift,
        })
    }

    /// Resolve a reference to the owning scope and the current event state.
    async fn resolve(&self, event_ref: &EventRef) -> Result<(ScopeId, Event), RelayError> {
        let (scope, name) = match event_ref {
            EventRef::Scoped { scope, name } => (scope.clone(), name.clone()),
            EventRef::ById(event_id) => self
                .processor
                .process(LookupEventId {
                    event_id: event_id.clone(),
                })
                .await?
                .ok_or_else(|| RelayError::EventNotFound(event_ref.to_string()))?,
        };
        let event = self
            .processor
            .process(GetEvent {
                scope: scope.clone(),
                name,
            })
            .await?
            .ok_or_else(|| RelayError::EventNotFound(event_ref.to_string()))?;
        Ok((scope, event))
    }

    fn giftee_of(
        &self,
        event: &Event,
        participant: &ParticipantId,
    ) -> Result<ParticipantId, RelayError> {
        let record = event
            .participants
            .get(participant)
            .ok_or_else(|| RelayError::NotAParticipant(participant.clone()))?;
        if !event.matched {
            return Err(RelayError::NotMatched(event.name.clone()));
        }
        record
            .matched_to
            .clone()
            .ok_or_else(|| RelayError::NotMatched(event.name.clone()))
    }

    fn santa_of(
        &self,
        event: &Event,
        participant: &ParticipantId,
    ) -> Result<ParticipantId, RelayError> {
        event.santa_of(participant).cloned().ok_or_else(|| {
            error!(
                event = %event.name,
                participant = %participant,
                "matched event has no inverse edge for participant"
            );
            RelayError::NoSantaFound(participant.clone())
        })
    }
}

fn anonymous_notice(event: &Event, direction: RelayDirection, body: &str) -> Notice {
    Notice::Anonymous {
        event_name: event.name.to_string(),
        event_id: event.event_id.to_string(),
        direction,
        body: body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::{LifecycleManager, NewEvent};
    use crate::store::tests::memory_pool;

    fn scope() -> ScopeId {
        ScopeId::from("guild-1")
    }

    fn pid(p: &str) -> ParticipantId {
        ParticipantId::from(p)
    }

    async fn three_cycle() -> (LifecycleManager, Relay, EventRef) {
        let manager = LifecycleManager::new(memory_pool().await);
        let pairs = vec![
            (pid("a"), pid("b")),
            (pid("b"), pid("c")),
            (pid("c"), pid("a")),
        ];
        let event = manager
            .import(
                &scope(),
                NewEvent {
                    name: EventName::from("xmas"),
                    target_date: "2026-12-24".to_string(),
                    max_price: "$25".to_string(),
                    created_by: pid("admin"),
                },
                pairs,
            )
            .await
            .unwrap();
        let relay = manager.relay();
        (manager, relay, EventRef::ById(event.event_id))
    }

    #[test]
    fn test_event_ref_parse() {
        assert_eq!(
            EventRef::parse("guild-1:xmas"),
            EventRef::Scoped {
                scope: scope(),
                name: EventName::from("xmas"),
            }
        );
        assert_eq!(
            EventRef::parse("a1b2c3d4"),
            EventRef::ById(EventId::from("a1b2c3d4"))
        );
    }

    #[tokio::test]
    async fn test_send_to_giftee_hides_sender() {
        let (_, relay, event_ref) = three_cycle().await;
        let (recipient, notice) = relay
            .send_to_giftee(&event_ref, &pid("a"), "hello")
            .await
            .unwrap();
        assert_eq!(recipient, pid("b"));
        let json = serde_json::to_string(&notice).unwrap();
        assert!(!json.contains("\"a\""));
        let Notice::Anonymous { direction, body, .. } = notice else {
            panic!("expected Anonymous notice");
        };
        assert_eq!(direction, RelayDirection::ToGiftee);
        assert_eq!(body, "hello");
    }

    #[tokio::test]
    async fn test_reply_resolves_santa_by_inverse_scan() {
        let (_, relay, event_ref) = three_cycle().await;
        // `b` receives from `a`, so the reply goes to `a`.
        let (recipient, notice) = relay
            .reply_to_santa(&event_ref, &pid("b"), "thanks")
            .await
            .unwrap();
        assert_eq!(recipient, pid("a"));
        let Notice::Anonymous { direction, .. } = notice else {
            panic!("expected Anonymous notice");
        };
        assert_eq!(direction, RelayDirection::ToSanta);
    }

    #[tokio::test]
    async fn test_send_before_match_fails() {
        let manager = LifecycleManager::new(memory_pool().await);
        manager
            .create(
                &scope(),
                NewEvent {
                    name: EventName::from("xmas"),
                    target_date: "2026-12-24".to_string(),
                    max_price: "$25".to_string(),
                    created_by: pid("admin"),
                },
                vec![pid("a"), pid("b")],
            )
            .await
            .unwrap();
        let relay = manager.relay();
        let event_ref = EventRef::parse("guild-1:xmas");
        let err = relay
            .send_to_giftee(&event_ref, &pid("a"), "too early")
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::NotMatched(_)));
    }

    #[tokio::test]
    async fn test_outsider_is_rejected() {
        let (_, relay, event_ref) = three_cycle().await;
        let err = relay
            .send_to_giftee(&event_ref, &pid("stranger"), "hi")
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::NotAParticipant(_)));
    }

    #[tokio::test]
    async fn test_wishlist_notifies_only_the_santa() {
        let (manager, relay, event_ref) = three_cycle().await;
        let payload = relay
            .update_wishlist(&event_ref, &pid("b"), "socks")
            .await
            .unwrap();
        // `a` gives to `b`, so only `a` hears about the change.
        let (recipient, notice) = payload.unwrap();
        assert_eq!(recipient, pid("a"));
        assert!(matches!(notice, Notice::WishlistChanged { .. }));

        let event = manager
            .get_required(&scope(), &EventName::from("xmas"))
            .await
            .unwrap();
        assert_eq!(
            event.participants[&pid("b")].wishlist,
            Some("socks".to_string())
        );
    }

    #[tokio::test]
    async fn test_wishlist_on_unmatched_event_has_no_recipient() {
        let manager = LifecycleManager::new(memory_pool().await);
        manager
            .create(
                &scope(),
                NewEvent {
                    name: EventName::from("xmas"),
                    target_date: "2026-12-24".to_string(),
                    max_price: "$25".to_string(),
                    created_by: pid("admin"),
                },
                vec![pid("a"), pid("b")],
            )
            .await
            .unwrap();
        let relay = manager.relay();
        let payload = relay
            .update_wishlist(&EventRef::parse("guild-1:xmas"), &pid("a"), "socks")
            .await
            .unwrap();
        assert!(payload.is_none());
    }

    #[tokio::test]
    async fn test_whoami_includes_giftee_wishlist() {
        let (_, relay, event_ref) = three_cycle().await;
        relay
            .update_wishlist(&event_ref, &pid("b"), "socks")
            .await
            .unwrap();
        let view = relay.whoami(&event_ref, &pid("a")).await.unwrap();
        assert_eq!(view.giftee, "b");
        assert_eq!(view.giftee_wishlist, Some("socks".to_string()));
        assert!(!view.sent_gift);
    }

    #[tokio::test]
    async fn test_gift_flags_persist() {
        let (manager, relay, event_ref) = three_cycle().await;
        let flags = relay.mark_sent(&event_ref, &pid("a")).await.unwrap();
        assert!(flags.sent_gift);
        assert!(!flags.received_gift);
        let flags = relay.mark_received(&event_ref, &pid("a")).await.unwrap();
        assert!(flags.sent_gift);
        assert!(flags.received_gift);

        let event = manager
            .get_required(&scope(), &EventName::from("xmas"))
            .await
            .unwrap();
        assert!(event.participants[&pid("a")].sent_gift);
        assert!(event.participants[&pid("a")].received_gift);
    }

    #[tokio::test]
    async fn test_unknown_event_id_fails() {
        let (_, relay, _) = three_cycle().await;
        let err = relay
            .whoami(&EventRef::parse("zzzzzzzz"), &pid("a"))
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::EventNotFound(_)));
    }
}
