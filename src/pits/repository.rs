use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::errors::PitError;
use super::models::{PitId, PitUpdate, StoredPit};
use crate::matches::models::now_timestamp;
use crate::scoring::Section;
use crate::shared::UpsertOutcome;

#[async_trait]
pub trait PitRepository: Send + Sync {
    async fn insert(&self, pit: Section, image_path: Option<String>)
        -> Result<StoredPit, PitError>;

    /// Newest first.
    async fn list(&self, limit: usize, offset: usize) -> Result<Vec<StoredPit>, PitError>;

    /// Oldest first.
    async fn all(&self) -> Result<Vec<StoredPit>, PitError>;

    async fn update(&self, id: PitId, update: PitUpdate) -> Result<Option<StoredPit>, PitError>;
    async fn delete(&self, id: PitId) -> Result<(), PitError>;

    /// Stores a pit entry under its own id, keeping ids handed out by `insert` unique.
    async fn upsert(&self, stored: StoredPit) -> Result<UpsertOutcome, PitError>;
}

#[derive(Debug)]
struct PitTable {
    next_id: PitId,
    rows: BTreeMap<PitId, StoredPit>,
}

/// In-memory implementation of PitRepository for development and testing
#[derive(Debug)]
pub struct InMemoryPitRepository {
    table: RwLock<PitTable>,
}

impl Default for InMemoryPitRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPitRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(PitTable {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

#[async_trait]
impl PitRepository for InMemoryPitRepository {
    #[instrument(skip(self, pit))]
    async fn insert(
        &self,
        pit: Section,
        image_path: Option<String>,
    ) -> Result<StoredPit, PitError> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id = id.checked_add(1).ok_or(PitError::IdsExhausted)?;

        let stored = StoredPit {
            id,
            created_at: now_timestamp(),
            pit,
            image_path,
        };
        table.rows.insert(id, stored.clone());
        debug!(pit_id = id, "Pit entry stored in memory");

        Ok(stored)
    }

    async fn list(&self, limit: usize, offset: usize) -> Result<Vec<StoredPit>, PitError> {
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

    async fn all(&self) -> Result<Vec<StoredPit>, PitError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    #[instrument(skip(self, update))]
    async fn update(&self, id: PitId, update: PitUpdate) -> Result<Option<StoredPit>, PitError> {
        let mut table = self.table.write().await;
        let Some(stored) = table.rows.get_mut(&id) else {
            debug!(pit_id = id, "Pit entry not found for update");
            return Ok(None);
        };

        update.apply(stored);
        Ok(Some(stored.clone()))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: PitId) -> Result<(), PitError> {
        let mut table = self.table.write().await;
        table.rows.remove(&id);
        Ok(())
    }

    #[instrument(skip(self, stored), fields(pit_id = stored.id))]
    async fn upsert(&self, stored: StoredPit) -> Result<UpsertOutcome, PitError> {
        let mut table = self.table.write().await;
        let after = stored.id.checked_add(1).ok_or(PitError::IdsExhausted)?;
        table.next_id = table.next_id.max(after);

        let outcome = match table.rows.get_mut(&stored.id) {
            Some(existing) => {
                existing.pit = stored.pit;
                existing.image_path = stored.image_path;
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
