use serde::{Deserialize, Serialize};

use super::models::PitId;
use crate::scoring::record::object_or_empty;
use crate::scoring::Section;

/// Request payload for a pit scouting entry
#[derive(Debug, Default, Deserialize)]
pub struct PitSubmission {
    #[serde(default, deserialize_with = "object_or_empty")]
    pub pit_json: Section,
    #[serde(default)]
    pub image_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitCreated {
    pub id: PitId,
}
