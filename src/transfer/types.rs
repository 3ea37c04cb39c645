use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Which table an imported file restores, told apart by its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ImportKind {
    #[strum(serialize = "matches")]
    Matches,
    #[strum(serialize = "pits")]
    Pits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub message: String,
    pub errors: Option<Vec<String>>,
}

impl ImportSummary {
    pub fn new(processed: usize, errors: Vec<String>) -> Self {
        Self {
            message: format!("Successfully processed {processed} records"),
            errors: (!errors.is_empty()).then_some(errors),
        }
    }
}
