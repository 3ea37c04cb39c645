use super::super::MetricCalculator;
use super::{counter_value, mean_over};
use crate::scoring::{MatchRecord, Phase, Points, Rubric};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MadeAggregate {
    Mean,
    Max,
}

/// `Made` count of one scoring element, averaged or maxed across matches.
#[derive(Debug, Clone, Copy)]
pub struct MadeCountCalculator {
    phase: Phase,
    element: &'static str,
    aggregate: MadeAggregate,
}

impl MadeCountCalculator {
    pub const fn new(phase: Phase, element: &'static str, aggregate: MadeAggregate) -> Self {
        Self {
            phase,
            element,
            aggregate,
        }
    }

    fn made(&self, record: &MatchRecord) -> Points {
        counter_value(record.phase(self.phase), self.element, "Made")
    }
}

impl MetricCalculator for MadeCountCalculator {
    fn calculate(&self, matches: &[MatchRecord], _rubric: &Rubric) -> Points {
        match self.aggregate {
            MadeAggregate::Mean => mean_over(matches, |record| self.made(record)),
            MadeAggregate::Max => matches
                .iter()
                .map(|record| self.made(record))
                .reduce(Points::max)
                .unwrap_or_default(),
        }
    }
}
