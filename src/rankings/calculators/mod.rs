mod average_points;
mod coral_accuracy;
mod flag_rate;
mod made_count;

pub use average_points::AveragePointsCalculator;
pub use coral_accuracy::CoralAccuracyCalculator;
pub use flag_rate::FlagRateCalculator;
pub use made_count::{MadeAggregate, MadeCountCalculator};

use serde_json::Value;

use crate::scoring::{MatchRecord, Points, Section};

/// Mean of `per_match` over the records, 0 when there are none.
pub(crate) fn mean_over(
    matches: &[MatchRecord],
    per_match: impl Fn(&MatchRecord) -> Points,
) -> Points {
    if matches.is_empty() {
        return 0.0;
    }
    let total: Points = matches.iter().map(per_match).sum();
    total / matches.len() as Points
}

/// A numeric key of a counter object such as `{"Made": 3, "Missed": 1}`.
/// Anything that is not a number counts as 0.
pub(crate) fn counter_value(section: &Section, element: &str, key: &str) -> Points {
    section
        .get(element)
        .and_then(Value::as_object)
        .and_then(|counter| counter.get(key))
        .and_then(Value::as_f64)
        .unwrap_or_default()
}
