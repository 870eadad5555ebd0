//! Read-only status and listing queries.
//!
//! These views are channel-visible, so they expose gift flags and counts
//! but never the pairing edges.

use kanau::processor::Processor;

use giftrelay_sdk::objects::{EventStatusResponse, EventSummary, ParticipantStatusRow};

use crate::ids::{EventName, ScopeId};
use crate::lifecycle::{LifecycleError, LifecycleManager};
use crate::model::Event;
use crate::store::ListScopeEvents;

impl LifecycleManager {
    /// Full status view over a single event.
    pub async fn status(
        &self,
        scope: &ScopeId,
        name: &EventName,
    ) -> Result<EventStatusResponse, LifecycleError> {
        let event = self.get_required(scope, name).await?;
        Ok(status_of(&event))
    }

    /// Summaries of every event in a scope.
    pub async fn list_events(&self, scope: &ScopeId) -> Result<Vec<EventSummary>, LifecycleError> {
        let events = self
            .processor
            .process(ListScopeEvents {
                scope: scope.clone(),
            })
            .await?;
        Ok(events.iter().map(summary_of).collect())
    }
}

/// Channel-safe summary of an event.
pub fn summary_of(event: &Event) -> EventSummary {
    EventSummary {
        name: event.name.to_string(),
        event_id: event.event_id.to_string(),
        target_date: event.target_date.clone(),
        max_price: event.max_price.clone(),
        participant_count: event.participants.len() as u32,
        matched: event.matched,
    }
}

fn status_of(event: &Event) -> EventStatusResponse {
    let participants = event
        .participants
        .iter()
        .map(|(participant, record)| ParticipantStatusRow {
            participant: participant.to_string(),
            sent_gift: record.sent_gift,
            received_gift: record.received_gift,
            has_wishlist: record.wishlist.is_some(),
        })
        .collect();
    EventStatusResponse {
        name: event.name.to_string(),
        event_id: event.event_id.to_string(),
        target_date: event.target_date.clone(),
        max_price: event.max_price.clone(),
        matched: event.matched,
        participant_count: event.participants.len() as u32,
        sent_count: event.sent_count() as u32,
        received_count: event.received_count() as u32,
        participants,
    }
}
