//! Event store access.
//!
//! Events are stored one JSON document per `(scope, name)` row, with the
//! portable event id indexed in the global `event_lookup` table. Creation
//! and deletion touch both tables inside one transaction so a lookup entry
//! exists exactly when its event does, even under failure.

use kanau::processor::Processor;
use thiserror::Error;

use crate::framework::DatabaseProcessor;
use crate::ids::{EventId, EventName, ScopeId};
use crate::model::Event;

/// Errors surfaced by store queries.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored document failed to (de)serialize
    #[error("corrupt event document: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Fetch one event by scope and name.
#[derive(Debug, Clone)]
pub struct GetEvent {
    pub scope: ScopeId,
    pub name: EventName,
}

impl Processor<GetEvent> for DatabaseProcessor {
    type Output = Option<Event>;
    type Error = StoreError;
    #[tracing::instrument(skip_all, err, name = "SQL:GetEvent")]
    async fn process(&self, query: GetEvent) -> Result<Option<Event>, StoreError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT data FROM events WHERE scope = ? AND name = ?")
                .bind(query.scope.as_str())
                .bind(query.name.as_str())
                .fetch_optional(&self.pool)
                .await?;
        row.map(|(data,)| serde_json::from_str(&data))
            .transpose()
            .map_err(StoreError::from)
    }
}

/// Fetch all events within one scope, ordered by name.
#[derive(Debug, Clone)]
pub struct ListScopeEvents {
    pub scope: ScopeId,
}

impl Processor<ListScopeEvents> for DatabaseProcessor {
    type Output = Vec<Event>;
    type Error = StoreError;
    #[tracing::instrument(skip_all, err, name = "SQL:ListScopeEvents")]
    async fn process(&self, query: ListScopeEvents) -> Result<Vec<Event>, StoreError> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT data FROM events WHERE scope = ? ORDER BY name")
                .bind(query.scope.as_str())
                .fetch_all(&self.pool)
                .await?;
        rows.into_iter()
            .map(|(data,)| serde_json::from_str(&data).map_err(StoreError::from))
            .collect()
    }
}

/// Fetch every event in every scope (data-deletion sweeps only).
#[derive(Debug, Clone)]
pub struct ListAllEvents;

impl Processor<ListAllEvents> for DatabaseProcessor {
    type Output = Vec<(ScopeId, Event)>;
    type Error = StoreError;
    #[tracing::instrument(skip_all, err, name = "SQL:ListAllEvents")]
    async fn process(&self, _query: ListAllEvents) -> Result<Vec<(ScopeId, Event)>, StoreError> {
        let rows: Vec<(String, String)> = sqlx::query_as("SELECT scope, data FROM events")
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter()
            .map(|(scope, data)| {
                let event = serde_json::from_str(&data)?;
                Ok((ScopeId::from(scope), event))
            })
            .collect()
    }
}

/// Replace the document of an existing event (post-create mutation).
#[derive(Debug, Clone)]
pub struct PutEvent {
    pub scope: ScopeId,
    pub event: Event,
}

impl Processor<PutEvent> for DatabaseProcessor {
    type Output = ();
    type Error = StoreError;
    #[tracing::instrument(skip_all, err, name = "SQL:PutEvent")]
    async fn process(&self, query: PutEvent) -> Result<(), StoreError> {
        let data = serde_json::to_string(&query.event)?;
        sqlx::query(
            "INSERT INTO events (scope, name, event_id, data) VALUES (?, ?, ?, ?) \
             ON CONFLICT(scope, name) DO UPDATE SET data = excluded.data",
        )
        .bind(query.scope.as_str())
        .bind(query.event.name.as_str())
        .bind(query.event.event_id.as_str())
        .bind(&data)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

/// Insert a new event together with its lookup entry, atomically.
#[derive(Debug, Clone)]
pub struct InsertEventWithLookup {
    pub scope: ScopeId,
    pub event: Event,
}

impl Processor<InsertEventWithLookup> for DatabaseProcessor {
    type Output = ();
    type Error = StoreError;
    #[tracing::instrument(skip_all, err, name = "SQL:InsertEventWithLookup")]
    async fn process(&self, query: InsertEventWithLookup) -> Result<(), StoreError> {
        let data = serde_json::to_string(&query.event)?;
        let mut tx = self.begin().await?;
        sqlx::query("INSERT INTO events (scope, name, event_id, data) VALUES (?, ?, ?, ?)")
            .bind(query.scope.as_str())
            .bind(query.event.name.as_str())
            .bind(query.event.event_id.as_str())
            .bind(&data)
            .execute(&mut *tx)
            .await?;
        sqlx::query("INSERT INTO event_lookup (event_id, scope, name) VALUES (?, ?, ?)")
            .bind(query.event.event_id.as_str())
            .bind(query.scope.as_str())
            .bind(query.event.name.as_str())
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }
}

/// Delete an event together with its lookup entry, atomically.
///
/// Returns whether an event row was actually removed.
#[derive(Debug, Clone)]
pub struct DeleteEventWithLookup {
    pub scope: ScopeId,
    pub name: EventName,
    pub event_id: EventId,
}

impl Processor<DeleteEventWithLookup> for DatabaseProcessor {
    type Output = bool;
    type Error = StoreError;
    #[tracing::instrument(skip_all, err, name = "SQL:DeleteEventWithLookup")]
    async fn process(&self, query: DeleteEventWithLookup) -> Result<bool, StoreError> {
        let mut tx = self.begin().await?;
        let removed = sqlx::query("DELETE FROM events WHERE scope = ? AND name = ?")
            .bind(query.scope.as_str())
            .bind(query.name.as_str())
            .execute(&mut *tx)
            .await?
            .rows_affected();
        sqlx::query("DELETE FROM event_lookup WHERE event_id = ?")
            .bind(query.event_id.as_str())
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(removed > 0)
    }
}

/// Resolve a portable event id to its owning scope and name.
#[derive(Debug, Clone)]
pub struct LookupEventId {
    pub event_id: EventId,
}

impl Processor<LookupEventId> for DatabaseProcessor {
    type Output = Option<(ScopeId, EventName)>;
    type Error = StoreError;
    #[tracing::instrument(skip_all, err, name = "SQL:LookupEventId")]
    async fn process(&self, query: LookupEventId) -> Result<Option<(ScopeId, EventName)>, StoreError> {
        let row: Option<(String, String)> =
            sqlx::query_as("SELECT scope, name FROM event_lookup WHERE event_id = ?")
                .bind(query.event_id.as_str())
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|(scope, name)| (ScopeId::from(scope), EventName::from(name))))
    }
}

/// Check whether a portable event id is already taken.
#[derive(Debug, Clone)]
pub struct EventIdExists {
    pub event_id: EventId,
}

impl Processor<EventIdExists> for DatabaseProcessor {
    type Output = bool;
    type Error = StoreError;
    #[tracing::instrument(skip_all, err, name = "SQL:EventIdExists")]
    async fn process(&self, query: EventIdExists) -> Result<bool, StoreError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT event_id FROM event_lookup WHERE event_id = ?")
                .bind(query.event_id.as_str())
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.is_some())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ids::ParticipantId;
    use crate::model::ParticipantRecord;
    use sqlx::SqlitePool;
    use sqlx::sqlite::SqlitePoolOptions;
    use std::collections::BTreeMap;

    /// A single-connection in-memory database with the production schema
    /// applied. Single connection because every pooled connection of a
    /// `sqlite::memory:` URL gets its own database.
    pub(crate) async fn memory_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::raw_sql(include_str!("../../migrations/0001_events.sql"))
            .execute(&pool)
            .await
            .unwrap();
        pool
    }

    pub(crate) fn sample_event(name: &str, event_id: &str, participants: &[&str]) -> Event {
        Event {
            name: EventName::from(name),
            event_id: EventId::from(event_id),
            target_date: "2026-12-24".to_string(),
            max_price: "$25".to_string(),
            participants: participants
                .iter()
                .map(|p| (ParticipantId::from(*p), ParticipantRecord::default()))
                .collect::<BTreeMap<_, _>>(),
            matched: false,
            created_by: ParticipantId::from("admin"),
            created_at: Event::now_timestamp(),
        }
    }

    #[tokio::test]
    async fn test_insert_then_get_round_trip() {
        let processor = DatabaseProcessor::new(memory_pool().await);
        let event = sample_event("xmas", "aaaaaaaa", &["100", "200"]);
        processor
            .process(InsertEventWithLookup {
                scope: ScopeId::from("guild-1"),
                event: event.clone(),
            })
            .await
            .unwrap();

        let fetched = processor
            .process(GetEvent {
                scope: ScopeId::from("guild-1"),
                name: EventName::from("xmas"),
            })
            .await
            .unwrap();
        assert_eq!(fetched, Some(event));

        let resolved = processor
            .process(LookupEventId {
                event_id: EventId::from("aaaaaaaa"),
            })
            .await
            .unwrap();
        assert_eq!(
            resolved,
            Some((ScopeId::from("guild-1"), EventName::from("xmas")))
        );
    }

    #[tokio::test]
    async fn test_delete_removes_lookup_entry() {
        let processor = DatabaseProcessor::new(memory_pool().await);
        let event = sample_event("xmas", "bbbbbbbb", &["100", "200"]);
        processor
            .process(InsertEventWithLookup {
                scope: ScopeId::from("guild-1"),
                event,
            })
            .await
            .unwrap();

        let removed = processor
            .process(DeleteEventWithLookup {
                scope: ScopeId::from("guild-1"),
                name: EventName::from("xmas"),
                event_id: EventId::from("bbbbbbbb"),
            })
            .await
            .unwrap();
        assert!(removed);

        assert!(
            !processor
                .process(EventIdExists {
                    event_id: EventId::from("bbbbbbbb"),
                })
                .await
                .unwrap()
        );
        assert_eq!(
            processor
                .process(LookupEventId {
                    event_id: EventId::from("bbbbbbbb"),
                })
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_duplicate_insert_rolls_back_lookup() {
        let processor = DatabaseProcessor::new(memory_pool().await);
        let first = sample_event("xmas", "cccccccc", &["100", "200"]);
        processor
            .process(InsertEventWithLookup {
                scope: ScopeId::from("guild-1"),
                event: first,
            })
            .await
            .unwrap();

        // Same (scope, name), different id: the event insert fails and the
        // lookup entry for the new id must not survive.
        let second = sample_event("xmas", "dddddddd", &["300", "400"]);
        let err = processor
            .process(InsertEventWithLookup {
                scope: ScopeId::from("guild-1"),
                event: second,
            })
            .await;
        assert!(err.is_err());
        assert!(
            !processor
                .process(EventIdExists {
                    event_id: EventId::from("dddddddd"),
                })
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_list_scope_events_ordered() {
        let processor = DatabaseProcessor::new(memory_pool().await);
        for (name, id) in [("beta", "e1111111"), ("alpha", "e2222222")] {
            processor
                .process(InsertEventWithLookup {
                    scope: ScopeId::from("guild-1"),
                    event: sample_event(name, id, &["100", "200"]),
                })
                .await
                .unwrap();
        }
        let events = processor
            .process(ListScopeEvents {
                scope: ScopeId::from("guild-1"),
            })
            .await
            .unwrap();
        let names: Vec<&str> = events.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["alpha", "beta"]);
    }
}
