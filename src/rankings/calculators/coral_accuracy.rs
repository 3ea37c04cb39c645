use super::super::MetricCalculator;
use super::{counter_value, mean_over};
use crate::scoring::{MatchRecord, Phase, Points, Rubric};

const CORAL_LEVELS: [&str; 4] = ["L1", "L2", "L3", "L4"];

/// Mean per-match percentage of made coral across reef levels L1 to L4.
///
/// A match with no attempts counts as 0%, so it still pulls the average down.
#[derive(Debug, Clone, Copy)]
pub struct CoralAccuracyCalculator {
    phase: Phase,
}

impl CoralAccuracyCalculator {
    pub const fn new(phase: Phase) -> Self {
        Self { phase }
    }

    fn match_accuracy(&self, record: &MatchRecord) -> Points {
        let section = record.phase(self.phase);
        let (made, attempted) = CORAL_LEVELS
            .iter()
            .fold((0.0, 0.0), |(made, attempted), level| {
                let level_made = counter_value(section, level, "Made");
                let level_missed = counter_value(section, level, "Missed");
                (made + level_made, attempted + level_made + level_missed)
            });

        if attempted > 0.0 {
            made / attempted * 100.0
        } else {
            0.0
        }
    }
}

impl MetricCalculator for CoralAccuracyCalculator {
    fn calculate(&self, matches: &[MatchRecord], _rubric: &Rubric) -> Points {
        mean_over(matches, |record| self.match_accuracy(record))
    }
}
