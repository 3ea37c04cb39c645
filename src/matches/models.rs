use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::scoring::record::{object_or_empty, some_object_or_empty};
use crate::scoring::{MatchRecord, Section};

pub type MatchId = i64;

/// Timestamp layout used for `created_at`, matching what scouting exports carry.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn now_timestamp() -> String {
    Utc::now().format(CREATED_AT_FORMAT).to_string()
}

/// A match record as kept by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "MatchRow", from = "MatchRow")]
pub struct StoredMatch {
    pub id: MatchId,
    pub created_at: String,
    pub record: MatchRecord,
}

/// Wire shape of a stored match: one `*_json` key per section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRow {
    pub id: MatchId,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, deserialize_with = "object_or_empty")]
    pub pre_match_json: Section,
    #[serde(default, deserialize_with = "object_or_empty")]
    pub auto_json: Section,
    #[serde(default, deserialize_with = "object_or_empty")]
    pub teleop_json: Section,
    #[serde(default, deserialize_with = "object_or_empty")]
    pub endgame_json: Section,
    #[serde(default, deserialize_with = "object_or_empty")]
    pub misc_json: Section,
}

impl From<StoredMatch> for MatchRow {
    fn from(stored: StoredMatch) -> Self {
        let MatchRecord {
            pre_match,
            auto,
            teleop,
            endgame,
            misc,
        } = stored.record;

        Self {
            id: stored.id,
            created_at: stored.created_at,
            pre_match_json: pre_match,
            auto_json: auto,
            teleop_json: teleop,
            endgame_json: endgame,
            misc_json: misc,
        }
    }
}

impl From<MatchRow> for StoredMatch {
    fn from(row: MatchRow) -> Self {
        Self {
            id: row.id,
            created_at: row.created_at,
            record: MatchRecord {
                pre_match: row.pre_match_json,
                auto: row.auto_json,
                teleop: row.teleop_json,
                endgame: row.endgame_json,
                misc: row.misc_json,
            },
        }
    }
}

/// Partial replacement of a stored match; `None` keeps the stored section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MatchUpdate {
    #[serde(default, deserialize_with = "some_object_or_empty")]
    pub pre_match_json: Option<Section>,
    #[serde(default, deserialize_with = "some_object_or_empty")]
    pub auto_json: Option<Section>,
    #[serde(default, deserialize_with = "some_object_or_empty")]
    pub teleop_json: Option<Section>,
    #[serde(default, deserialize_with = "some_object_or_empty")]
    pub endgame_json: Option<Section>,
    #[serde(default, deserialize_with = "some_object_or_empty")]
    pub misc_json: Option<Section>,
}

impl MatchUpdate {
    pub fn apply(self, record: &mut MatchRecord) {
        let replacements = [
            (self.pre_match_json, &mut record.pre_match),
            (self.auto_json, &mut record.auto),
            (self.teleop_json, &mut record.teleop),
            (self.endgame_json, &mut record.endgame),
            (self.misc_json, &mut record.misc),
        ];

        for (replacement, section) in replacements {
            if let Some(replacement) = replacement {
                *section = replacement;
            }
        }
    }
}
