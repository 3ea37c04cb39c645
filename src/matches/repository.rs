use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::errors::MatchError;
use super::models::{now_timestamp, MatchId, MatchUpdate, StoredMatch};
use crate::scoring::MatchRecord;
use crate::shared::UpsertOutcome;

#[async_trait]
pub trait MatchRepository: Send + Sync {
    async fn insert(&self, record: MatchRecord) -> Result<StoredMatch, MatchError>;
    async fn get(&self, id: MatchId) -> Result<Option<StoredMatch>, MatchError>;

    /// Newest first.
    async fn list(&self, limit: usize, offset: usize) -> Result<Vec<StoredMatch>, MatchError>;

    /// Oldest first.
    async fn all(&self) -> Result<Vec<StoredMatch>, MatchError>;

    async fn update(
        &self,
        id: MatchId,
        update: MatchUpdate,
    ) -> Result<Option<StoredMatch>, MatchError>;
    async fn delete(&self, id: MatchId) -> Result<(), MatchError>;

    /// Stores a match under its own id, keeping ids handed out by `insert` unique.
    async fn upsert(&self, stored: StoredMatch) -> Result<UpsertOutcome, MatchError>;
}

#[derive(Debug)]
struct MatchTable {
    next_id: MatchId,
    rows: BTreeMap<MatchId, StoredMatch>,
}

/// In-memory implementation of MatchRepository for development and testing
#[derive(Debug)]
pub struct InMemoryMatchRepository {
    table: RwLock<MatchTable>,
}

impl Default for InMemoryMatchRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryMatchRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(MatchTable {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

#[async_trait]
impl MatchRepository for InMemoryMatchRepository {
    #[instrument(skip(self, record))]
    async fn insert(&self, record: MatchRecord) -> Result<StoredMatch, MatchError> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id = id.checked_add(1).ok_or(MatchError::IdsExhausted)?;

        let stored = StoredMatch {
            id,
            created_at: now_timestamp(),
            record,
        };
        table.rows.insert(id, stored.clone());
        debug!(match_id = id, "Match stored in memory");

        Ok(stored)
    }

    async fn get(&self, id: MatchId) -> Result<Option<StoredMatch>, MatchError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn list(&self, limit: usize, offset: usize) -> Result<Vec<StoredMatch>, MatchError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .rev()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn all(&self) -> Result<Vec<StoredMatch>, MatchError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    #[instrument(skip(self, update))]
    async fn update(
        &self,
        id: MatchId,
        update: MatchUpdate,
    ) -> Result<Option<StoredMatch>, MatchError> {
        let mut table = self.table.write().await;
        let Some(stored) = table.rows.get_mut(&id) else {
            debug!(match_id = id, "Match not found for update");
            return Ok(None);
        };

        update.apply(&mut stored.record);
        Ok(Some(stored.clone()))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: MatchId) -> Result<(), MatchError> {
        let mut table = self.table.write().await;
        table.rows.remove(&id);
        Ok(())
    }

    #[instrument(skip(self, stored), fields(match_id = stored.id))]
    async fn upsert(&self, stored: StoredMatch) -> Result<UpsertOutcome, MatchError> {
        let mut table = self.table.write().await;
        let after = stored.id.checked_add(1).ok_or(MatchError::IdsExhausted)?;
        table.next_id = table.next_id.max(after);

        let outcome = match table.rows.get_mut(&stored.id) {
            Some(existing) => {
                existing.record = stored.record;
                UpsertOutcome::Replaced
            }
            None => {
                table.rows.insert(stored.id, stored);
                UpsertOutcome::Inserted
            }
        };

        Ok(outcome)
    }
}
