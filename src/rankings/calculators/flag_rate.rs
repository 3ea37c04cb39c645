use super::super::MetricCalculator;
use crate::scoring::{is_truthy, MatchRecord, Points, Rubric};

/// Percentage of matches where a `misc` flag was set.
#[derive(Debug, Clone, Copy)]
pub struct FlagRateCalculator {
    flag: &'static str,
}

impl FlagRateCalculator {
    pub const fn new(flag: &'static str) -> Self {
        Self { flag }
    }
}

impl MetricCalculator for FlagRateCalculator {
    fn calculate(&self, matches: &[MatchRecord], _rubric: &Rubric) -> Points {
        if matches.is_empty() {
            return 0.0;
        }

        let flagged = matches
            .iter()
            .filter(|record| record.misc.get(self.flag).is_some_and(is_truthy))
            .count();

        flagged as Points / matches.len() as Points * 100.0
    }
}
