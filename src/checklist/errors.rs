use thiserror::Error;

use crate::scoring::RubricError;

#[derive(Debug, Error)]
pub enum ChecklistError {
    #[error("Checklist not found in config")]
    NotConfigured(String),

    #[error("Rubric error: {0}")]
    Rubric(#[from] RubricError),
}
