use serde_json::{Map, Value};
use tracing::debug;

use super::{coerce_int, PhaseRubric, Points, RubricEntry};

/// Result of scoring one phase section, with the fields that earned nothing
/// because the rubric does not list them or their shape is not scoreable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionScore {
    pub total: Points,
    pub ignored: Vec<String>,
}

/// Scores one phase section against its rubric. Never fails; unrecognized
/// fields contribute zero.
pub fn score_section(section: &Map<String, Value>, rubric: &PhaseRubric) -> Points {
    score_section_detailed(section, rubric).total
}

pub fn score_section_detailed(section: &Map<String, Value>, rubric: &PhaseRubric) -> SectionScore {
    let mut score = SectionScore::default();
    if section.is_empty() || rubric.is_empty() {
        return score;
    }

    for (field, recorded) in section {
        let contribution = rubric
            .get(field)
            .and_then(|entry| field_points(recorded, entry));

        match contribution {
            Some(points) => score.total += points,
            None => score.ignored.push(field.clone()),
        }
    }

    if !score.ignored.is_empty() {
        debug!(ignored = ?score.ignored, "Section fields did not score");
    }

    score
}

/// Points for one recorded value, or `None` when the pairing is not scoreable.
fn field_points(recorded: &Value, entry: &RubricEntry) -> Option<Points> {
    match (recorded, entry) {
        (Value::Number(count), RubricEntry::BooleanWithValue(_)) => count.as_f64(),
        (Value::Object(counter), _) if counter.contains_key("Made") => {
            let made = counter.get("Made").and_then(coerce_int)?;
            let weight = entry.weight()?;
            Some(made * weight.trunc())
        }
        (Value::Bool(flag), RubricEntry::Flat(points)) => Some(flag_points(*flag, *points)),
        (Value::Bool(flag), _) => entry.weight().map(|points| flag_points(*flag, points)),
        (Value::Number(count), _) => count.as_f64().map(f64::trunc),
        _ => None,
    }
}

fn flag_points(flag: bool, points: Points) -> Points {
    if flag {
        points.trunc()
    } else {
        0.0
    }
}
