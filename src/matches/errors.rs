use thiserror::Error;

use super::models::MatchId;
use crate::scoring::RubricError;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Match {0} not found")]
    NotFound(MatchId),

    #[error("Rubric error: {0}")]
    Rubric(#[from] RubricError),

    #[error("Unknown ranking option: {0}")]
    UnknownRankingOption(String),

    #[error("No match ids left")]
    IdsExhausted,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
