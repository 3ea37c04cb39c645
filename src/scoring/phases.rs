use serde::Serialize;

use super::{endgame_score, score_section, MatchRecord, Points, Rubric};

pub fn auto_score(record: &MatchRecord, rubric: &Rubric) -> Points {
    score_section(&record.auto, &rubric.auto_period)
}

pub fn teleop_score(record: &MatchRecord, rubric: &Rubric) -> Points {
    score_section(&record.teleop, &rubric.teleop_period)
}

/// Per-phase points for one match record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MatchScore {
    pub auto: Points,
    pub teleop: Points,
    pub endgame: Points,
}

impl MatchScore {
    pub fn for_record(record: &MatchRecord, rubric: &Rubric) -> Self {
        Self {
            auto: auto_score(record, rubric),
            teleop: teleop_score(record, rubric),
            endgame: endgame_score(&record.endgame, rubric),
        }
    }

    pub fn total(&self) -> Points {
        self.auto + self.teleop + self.endgame
    }
}
