pub mod calculators;
pub mod leaderboard;
mod metric;

pub use leaderboard::{build_leaderboard, Leaderboard, RankingQuery, RankingRow, LEADERBOARD_SIZE};
pub use metric::{evaluate_metric, RankingMetric};

use crate::scoring::{MatchRecord, Points, Rubric};

/// Aggregates one team's match records into a single ranking value.
///
/// Calculators must return 0 for an empty slice rather than dividing by it.
pub trait MetricCalculator: Send + Sync {
    fn calculate(&self, matches: &[MatchRecord], rubric: &Rubric) -> Points;
}
