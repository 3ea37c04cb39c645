use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::errors::ChecklistError;
use super::models::ChecklistItem;
use super::repository::ChecklistRepository;
use crate::scoring::RubricSource;

/// Service for the shared home-page checklists.
///
/// A checklist comes into being on its first update, from its entry in the
/// raw configuration.
pub struct ChecklistService {
    repository: Arc<dyn ChecklistRepository>,
    rubric_source: Arc<dyn RubricSource>,
}

impl ChecklistService {
    pub fn new(
        repository: Arc<dyn ChecklistRepository>,
        rubric_source: Arc<dyn RubricSource>,
    ) -> Self {
        Self {
            repository,
            rubric_source,
        }
    }

    pub async fn all(&self) -> Result<BTreeMap<String, ChecklistItem>, ChecklistError> {
        self.repository.all().await
    }

    #[instrument(skip(self, checked))]
    pub async fn update(&self, key: &str, checked: Vec<Value>) -> Result<(), ChecklistError> {
        if self.repository.set_checked(key, checked.clone()).await? {
            debug!(key, "Checklist updated");
            return Ok(());
        }

        let config = self.rubric_source.load_raw().await?;
        let template = ChecklistItem::from_config(&config, key)
            .ok_or_else(|| ChecklistError::NotConfigured(key.to_string()))?;

        self.repository
            .create(key, ChecklistItem { checked, ..template })
            .await?;
        info!(key, "Checklist created from config");

        Ok(())
    }
}
