use thiserror::Error;

use super::models::PitId;
use crate::scoring::RubricError;

#[derive(Debug, Error)]
pub enum PitError {
    #[error("Pit {0} not found")]
    NotFound(PitId),

    #[error("No pit data for team {0}")]
    NoPitForTeam(String),

    #[error("No pit ids left")]
    IdsExhausted,

    #[error("Rubric error: {0}")]
    Rubric(#[from] RubricError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
