use super::super::MetricCalculator;
use super::mean_over;
use crate::scoring::{MatchRecord, MatchScore, Points, Rubric};

/// Mean total of auto, teleop and endgame points per match.
pub struct AveragePointsCalculator;

impl Default for AveragePointsCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl AveragePointsCalculator {
    pub const fn new() -> Self {
        Self
    }
}

impl MetricCalculator for AveragePointsCalculator {
    fn calculate(&self, matches: &[MatchRecord], rubric: &Rubric) -> Points {
        mean_over(matches, |record| MatchScore::for_record(record, rubric).total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rankings::calculators::test_support::record;
    use crate::scoring::{auto_score, endgame_score, teleop_score};
    use serde_json::json;

    fn rubric() -> Rubric {
        Rubric::from_value(&json!({
            "match_form": {
                "auto_period": {"leave": 3, "L4": {"Value": 7}},
                "teleop_period": {"L4": {"Value": 5}},
                "endgame": {"final_status": {"Park": {"Value": 2}, "Deep": {"Value": 12}}}
            }
        }))
    }

    #[test]
    fn averages_match_totals() {
        let matches = vec![
            record(json!({
                "auto": {"leave": true, "L4": {"Made": 1}},
                "teleop": {"L4": {"Made": 4}},
                "endgame": {"final_status": "Deep"}
            })),
            record(json!({
                "auto": {"leave": false},
                "teleop": {"L4": {"Made": 1}},
                "endgame": {"final_status": "Park"}
            })),
        ];

        let value = AveragePointsCalculator::new().calculate(&matches, &rubric());
        assert_eq!(value, (42.0 + 7.0) / 2.0);
    }

    #[test]
    fn equals_mean_of_independent_phase_scores() {
        let rubric = rubric();
        let matches = vec![
            record(json!({"auto": {"L4": {"Made": 2}}, "endgame": {"final_status": "Park"}})),
            record(json!({"teleop": {"L4": {"Made": 3, "Missed": 9}}})),
            record(json!({"auto": {"leave": true}, "endgame": {"final_status": "Nope"}})),
        ];

        let expected = matches
            .iter()
            .map(|m| auto_score(m, &rubric) + teleop_score(m, &rubric) + endgame_score(&m.endgame, &rubric))
            .sum::<Points>()
            / matches.len() as Points;

        let value = AveragePointsCalculator::new().calculate(&matches, &rubric);
        assert_eq!(value, expected);
    }

    #[test]
    fn no_matches_is_zero() {
        let value = AveragePointsCalculator::new().calculate(&[], &rubric());
        assert_eq!(value, 0.0);
    }
}
