use strum_macros::{Display, EnumIter, EnumString};
use tracing::warn;

use super::calculators::{
    AveragePointsCalculator, CoralAccuracyCalculator, FlagRateCalculator, MadeAggregate,
    MadeCountCalculator,
};
use super::MetricCalculator;
use crate::scoring::{MatchRecord, Phase, Points, Rubric};

static AVERAGE_POINTS: AveragePointsCalculator = AveragePointsCalculator::new();
static AVERAGE_AUTO_L4: MadeCountCalculator =
    MadeCountCalculator::new(Phase::Auto, "L4", MadeAggregate::Mean);
static MAX_AUTO_L4: MadeCountCalculator =
    MadeCountCalculator::new(Phase::Auto, "L4", MadeAggregate::Max);
static AVERAGE_TELEOP_L4: MadeCountCalculator =
    MadeCountCalculator::new(Phase::Teleop, "L4", MadeAggregate::Mean);
static DIED_RATE: FlagRateCalculator = FlagRateCalculator::new("died");
static TIPPY_RATE: FlagRateCalculator = FlagRateCalculator::new("tippy");
static AUTO_CORAL_ACCURACY: CoralAccuracyCalculator = CoralAccuracyCalculator::new(Phase::Auto);
static TELEOP_CORAL_ACCURACY: CoralAccuracyCalculator =
    CoralAccuracyCalculator::new(Phase::Teleop);

/// The closed set of ranking formulas, named as they appear in
/// `rankings_options`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum RankingMetric {
    #[strum(serialize = "Average Points")]
    AveragePoints,
    #[strum(serialize = "Average L4 Auto")]
    AverageAutoL4,
    #[strum(serialize = "Max Auto L4")]
    MaxAutoL4,
    #[strum(serialize = "Average Teleop L4")]
    AverageTeleopL4,
    #[strum(serialize = "Died %")]
    DiedRate,
    #[strum(serialize = "Tippy %")]
    TippyRate,
    #[strum(serialize = "Auto Coral %")]
    AutoCoralAccuracy,
    #[strum(serialize = "Teleop Coral %")]
    TeleopCoralAccuracy,
}

impl RankingMetric {
    pub fn calculator(self) -> &'static dyn MetricCalculator {
        match self {
            RankingMetric::AveragePoints => &AVERAGE_POINTS,
            RankingMetric::AverageAutoL4 => &AVERAGE_AUTO_L4,
            RankingMetric::MaxAutoL4 => &MAX_AUTO_L4,
            RankingMetric::AverageTeleopL4 => &AVERAGE_TELEOP_L4,
            RankingMetric::DiedRate => &DIED_RATE,
            RankingMetric::TippyRate => &TIPPY_RATE,
            RankingMetric::AutoCoralAccuracy => &AUTO_CORAL_ACCURACY,
            RankingMetric::TeleopCoralAccuracy => &TELEOP_CORAL_ACCURACY,
        }
    }

    pub fn evaluate(self, matches: &[MatchRecord], rubric: &Rubric) -> Points {
        self.calculator().calculate(matches, rubric)
    }
}

/// Evaluates a metric by its display name.
///
/// Unknown names evaluate to 0 for every team, which ranks everyone as tied.
pub fn evaluate_metric(metric_name: &str, matches: &[MatchRecord], rubric: &Rubric) -> Points {
    match metric_name.parse::<RankingMetric>() {
        Ok(metric) => metric.evaluate(matches, rubric),
        Err(_) => {
            warn!(metric = metric_name, "Unknown ranking metric, scoring 0");
            0.0
        }
    }
}
