use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use super::evaluate_metric;
use crate::scoring::{MatchRecord, Points, RankingOption, Rubric};

/// Rows returned per leaderboard.
pub const LEADERBOARD_SIZE: usize = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankingQuery {
    pub min_matches: usize,
    pub team: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingRow {
    pub team_number: String,
    pub matches_count: usize,
    pub metric_value: Points,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub option: String,
    pub description: String,
    pub rows: Vec<RankingRow>,
}

/// Ranks teams by one metric, best first.
///
/// Teams are grouped in order of their first record and ties keep that
/// order. Records without a team number are skipped.
pub fn build_leaderboard(
    option: &RankingOption,
    records: Vec<MatchRecord>,
    rubric: &Rubric,
    query: &RankingQuery,
) -> Leaderboard {
    let mut rows: Vec<RankingRow> = group_by_team(records)
        .into_iter()
        .filter(|(_, matches)| matches.len() >= query.min_matches)
        .filter(|(team, _)| query.team.as_ref().map_or(true, |wanted| wanted == team))
        .map(|(team_number, matches)| RankingRow {
            metric_value: evaluate_metric(&option.name, &matches, rubric),
            matches_count: matches.len(),
            team_number,
        })
        .collect();

    rows.sort_by(|a, b| b.metric_value.total_cmp(&a.metric_value));
    rows.truncate(LEADERBOARD_SIZE);

    debug!(option = %option.name, rows = rows.len(), "Leaderboard built");

    Leaderboard {
        option: option.name.clone(),
        description: option.description.clone(),
        rows,
    }
}

fn group_by_team(records: Vec<MatchRecord>) -> Vec<(String, Vec<MatchRecord>)> {
    let mut groups: Vec<(String, Vec<MatchRecord>)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for record in records {
        let Some(team) = record.team_number() else {
            continue;
        };

        match positions.get(&team) {
            Some(&index) => groups[index].1.push(record),
            None => {
                positions.insert(team.clone(), groups.len());
                groups.push((team, vec![record]));
            }
        }
    }

    groups
}
