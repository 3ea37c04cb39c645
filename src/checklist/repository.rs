use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::instrument;

use super::errors::ChecklistError;
use super::models::ChecklistItem;

#[async_trait]
pub trait ChecklistRepository: Send + Sync {
    async fn all(&self) -> Result<BTreeMap<String, ChecklistItem>, ChecklistError>;

    /// Replaces the checked items of an existing checklist. `false` when
    /// there is no checklist under `key`.
    async fn set_checked(&self, key: &str, checked: Vec<Value>) -> Result<bool, ChecklistError>;

    /// Stores a new checklist. If one appeared under `key` in the meantime,
    /// only its checked items are replaced.
    async fn create(&self, key: &str, item: ChecklistItem) -> Result<(), ChecklistError>;
}

/// In-memory implementation of ChecklistRepository
#[derive(Debug, Default)]
pub struct InMemoryChecklistRepository {
    items: RwLock<BTreeMap<String, ChecklistItem>>,
}

impl InMemoryChecklistRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChecklistRepository for InMemoryChecklistRepository {
    async fn all(&self) -> Result<BTreeMap<String, ChecklistItem>, ChecklistError> {
        Ok(self.items.read().await.clone())
    }

    #[instrument(skip(self, checked))]
    async fn set_checked(&self, key: &str, checked: Vec<Value>) -> Result<bool, ChecklistError> {
        let mut items = self.items.write().await;
        Ok(match items.get_mut(key) {
            Some(item) => {
                item.checked = checked;
                true
            }
            None => false,
        })
    }

    #[instrument(skip(self, item))]
    async fn create(&self, key: &str, item: ChecklistItem) -> Result<(), ChecklistError> {
        let mut items = self.items.write().await;
        items
            .entry(key.to_string())
            .and_modify(|existing| existing.checked = item.checked.clone())
            .or_insert(item);
        Ok(())
    }
}
