use serde::{Deserialize, Serialize};

use super::models::{MatchId, StoredMatch};
use crate::scoring::record::object_or_empty;
use crate::scoring::{MatchRecord, MatchScore, Points, Section};

/// Request payload for scouting a match
#[derive(Debug, Default, Deserialize)]
pub struct MatchSubmission {
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

impl From<MatchSubmission> for MatchRecord {
    fn from(submission: MatchSubmission) -> Self {
        Self {
            pre_match: submission.pre_match_json,
            auto: submission.auto_json,
            teleop: submission.teleop_json,
            endgame: submission.endgame_json,
            misc: submission.misc_json,
        }
    }
}

/// Response for a scouted match: its id and the points it earned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub id: MatchId,
    #[serde(rename = "autoPts")]
    pub auto_pts: Points,
    #[serde(rename = "telePts")]
    pub tele_pts: Points,
    #[serde(rename = "endPts")]
    pub end_pts: Points,
    pub total: Points,
}

impl SubmitResponse {
    pub fn new(id: MatchId, score: MatchScore) -> Self {
        Self {
            id,
            auto_pts: score.auto,
            tele_pts: score.teleop,
            end_pts: score.endgame,
            total: score.total(),
        }
    }
}

/// A stored match with its points under the current rubric
#[derive(Debug, Clone, Serialize)]
pub struct ScoredMatch {
    #[serde(flatten)]
    pub stored: StoredMatch,
    pub auto_points: Points,
    pub teleop_points: Points,
    pub endgame_points: Points,
    pub total_points: Points,
}

impl ScoredMatch {
    pub fn new(stored: StoredMatch, score: MatchScore) -> Self {
        Self {
            stored,
            auto_points: score.auto,
            teleop_points: score.teleop,
            endgame_points: score.endgame,
            total_points: score.total(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RankingParams {
    pub option: Option<String>,
    pub min_matches: Option<usize>,
    pub team: Option<String>,
}
