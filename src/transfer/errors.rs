use thiserror::Error;

use crate::matches::errors::MatchError;
use crate::pits::errors::PitError;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Empty CSV file")]
    Empty,

    #[error("Unknown CSV format")]
    UnknownFormat,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Match(#[from] MatchError),

    #[error(transparent)]
    Pit(#[from] PitError),
}
