//! Rubric-driven match scoring.
//!
//! Everything here is a pure function of a match record and a rubric. The
//! rubric decides which recorded fields count; malformed data scores zero
//! instead of failing.

mod endgame;
mod phases;
pub mod record;
pub mod rubric;
mod section;
pub mod source;

pub use endgame::{endgame_score, resolve_final_status};
pub use phases::{auto_score, teleop_score, MatchScore};
pub use record::{coerce_int, is_truthy, MatchRecord, Phase, Section};
pub use rubric::{EndgameRubric, PhaseRubric, RankingOption, Rubric, RubricEntry};
pub use section::{score_section, score_section_detailed, SectionScore};
pub use source::{FileRubricSource, RubricError, RubricSource, StaticRubricSource};

/// Point totals and metric values.
pub type Points = f64;
