use serde_json::{Map, Value};
use tracing::debug;

use super::{EndgameRubric, Points, Rubric};

/// Scores the endgame section from its `final_status` string.
///
/// A missing status reads as the empty string; a non-string status never
/// matches anything.
pub fn endgame_score(endgame: &Map<String, Value>, rubric: &Rubric) -> Points {
    let status = match endgame.get("final_status") {
        None => Some(""),
        Some(value) => value.as_str(),
    };

    match status {
        Some(status) => resolve_final_status(status, &rubric.final_status),
        None => {
            debug!(final_status = ?endgame.get("final_status"), "Non-string final status");
            0.0
        }
    }
}

/// Looks a status up in either rubric form. Unknown statuses score zero.
pub fn resolve_final_status(status: &str, rubric: &EndgameRubric) -> Points {
    let points = match rubric {
        EndgameRubric::Indexed { options, values } => options
            .iter()
            .position(|option| option.as_deref() == Some(status))
            .and_then(|index| values.get(index).copied().flatten()),
        EndgameRubric::ByStatus(statuses) => statuses.get(status).copied().flatten(),
    };

    points.map(f64::trunc).unwrap_or_default()
}
