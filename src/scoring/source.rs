use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, instrument};

use super::Rubric;

#[derive(Debug, Error)]
pub enum RubricError {
    #[error("Failed to read rubric {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Rubric is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the administrator's scoring configuration comes from.
///
/// Implementations are consulted on every scoring request so edits take
/// effect without a restart.
#[async_trait]
pub trait RubricSource: Send + Sync {
    async fn load_raw(&self) -> Result<Value, RubricError>;

    async fn load(&self) -> Result<Rubric, RubricError> {
        let raw = self.load_raw().await?;
        Ok(Rubric::from_value(&raw))
    }
}

/// Reads a JSON configuration file from disk on every load.
#[derive(Debug, Clone)]
pub struct FileRubricSource {
    path: PathBuf,
}

impl FileRubricSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RubricSource for FileRubricSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load_raw(&self) -> Result<Value, RubricError> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| RubricError::Io {
                path: self.path.clone(),
                source,
            })?;

        let raw = serde_json::from_str(&contents)?;
        debug!("Rubric loaded");
        Ok(raw)
    }
}

/// Fixed in-memory configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticRubricSource {
    raw: Value,
}

impl StaticRubricSource {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }
}

#[async_trait]
impl RubricSource for StaticRubricSource {
    async fn load_raw(&self) -> Result<Value, RubricError> {
        Ok(self.raw.clone())
    }
}
