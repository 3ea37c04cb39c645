use serde::{Deserialize, Serialize};

use crate::scoring::{MatchRecord, MatchScore, Points, Rubric};

/// Mean points per phase across one team's scouted matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAverages {
    pub team: String,
    pub matches: usize,
    pub avg_auto: Points,
    pub avg_teleop: Points,
    pub avg_endgame: Points,
    pub avg_total: Points,
}

impl TeamAverages {
    pub fn from_records<'a>(
        team: &str,
        records: impl IntoIterator<Item = &'a MatchRecord>,
        rubric: &Rubric,
    ) -> Self {
        let mut matches = 0;
        let mut sums = MatchScore::default();

        for record in records {
            let score = MatchScore::for_record(record, rubric);
            sums.auto += score.auto;
            sums.teleop += score.teleop;
            sums.endgame += score.endgame;
            matches += 1;
        }

        if matches == 0 {
            return Self {
                team: team.to_string(),
                matches,
                avg_auto: 0.0,
                avg_teleop: 0.0,
                avg_endgame: 0.0,
                avg_total: 0.0,
            };
        }

        let count = matches as Points;
        Self {
            team: team.to_string(),
            matches,
            avg_auto: sums.auto / count,
            avg_teleop: sums.teleop / count,
            avg_endgame: sums.endgame / count,
            avg_total: sums.total() / count,
        }
    }
}

/// Whether a record was scouted for `team`.
pub fn is_team(record: &MatchRecord, team: &str) -> bool {
    record.team_number().as_deref() == Some(team)
}
