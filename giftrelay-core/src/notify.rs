//! Notification delivery seam.
//!
//! Lifecycle and relay operations produce `(recipient, notice)` payloads;
//! actually reaching a participant is the delivery collaborator's job. A
//! failed delivery to one participant never aborts the operation that
//! produced it — failures are counted into a [`DeliveryReport`].

use async_trait::async_trait;
use giftrelay_sdk::objects::{DeliveryReport, Notice};
use thiserror::Error;
use tracing::warn;

use crate::ids::ParticipantId;
use crate::model::Event;

/// A batch of notices produced by one operation.
pub type Outbox = Vec<(ParticipantId, Notice)>;

/// Errors from a single delivery attempt.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Transport-level failure (DNS, connection reset, …)
    #[error("transport error: {0}")]
    Transport(String),

    /// The delivery endpoint answered with a non-success status
    #[error("endpoint returned status {0}")]
    Status(u16),

    /// The attempt did not complete within the configured timeout
    #[error("delivery timed out")]
    Timeout,
}

/// Best-effort direct-message delivery to one participant.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn deliver(&self, recipient: &ParticipantId, notice: &Notice)
    -> Result<(), DeliveryError>;
}

/// Deliver a whole outbox, counting outcomes.
pub async fn deliver_all(notifier: &dyn Notifier, outbox: &Outbox) -> DeliveryReport {
    let mut report = DeliveryReport::default();
    for (recipient, notice) in outbox {
        match notifier.deliver(recipient, notice).await {
            Ok(()) => report.delivered += 1,
            Err(err) => {
                warn!(recipient = %recipient, error = %err, "notice delivery failed");
                report.failed += 1;
            }
        }
    }
    report
}

/// Notice for a participant enrolled by event creation.
pub fn created_notice(event: &Event) -> Notice {
    Notice::EventCreated {
        event_name: event.name.to_string(),
        event_id: event.event_id.to_string(),
        target_date: event.target_date.clone(),
        max_price: event.max_price.clone(),
    }
}

/// Notice telling a giver who their giftee is.
pub fn matched_notice(event: &Event, giftee: &ParticipantId) -> Notice {
    Notice::Matched {
        event_name: event.name.to_string(),
        event_id: event.event_id.to_string(),
        giftee: giftee.to_string(),
        target_date: event.target_date.clone(),
        max_price: event.max_price.clone(),
    }
}
