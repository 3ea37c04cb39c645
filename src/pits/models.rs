use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::scoring::record::{object_or_empty, some_object_or_empty};
use crate::scoring::Section;

pub type PitId = i64;

/// A pit scouting entry. `pit_json` is free-form; `image_path` is an opaque
/// reference to a photo stored elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPit {
    pub id: PitId,
    #[serde(default)]
    pub created_at: String,
    #[serde(rename = "pit_json", default, deserialize_with = "object_or_empty")]
    pub pit: Section,
    #[serde(default)]
    pub image_path: Option<String>,
}

impl StoredPit {
    /// Scouted `team_number` is exactly the text `team`.
    pub fn has_team_text(&self, team: &str) -> bool {
        matches!(self.pit.get("team_number"), Some(Value::String(scouted)) if scouted == team)
    }

    /// Scouted `team_number` is the number `team`.
    pub fn has_team_number(&self, team: i64) -> bool {
        self.pit
            .get("team_number")
            .and_then(Value::as_f64)
            .is_some_and(|scouted| scouted == team as f64)
    }
}

/// Partial replacement of a pit entry. Absent keys keep the stored value; an
/// explicit `"image_path": null` clears the image.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PitUpdate {
    #[serde(default, deserialize_with = "some_object_or_empty")]
    pub pit_json: Option<Section>,
    #[serde(default, deserialize_with = "present")]
    pub image_path: Option<Option<String>>,
}

impl PitUpdate {
    pub fn apply(self, stored: &mut StoredPit) {
        if let Some(pit) = self.pit_json {
            stored.pit = pit;
        }
        if let Some(image_path) = self.image_path {
            stored.image_path = image_path;
        }
    }
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
