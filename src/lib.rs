// Library crate for the scouting server
// This file exposes the public API for integration tests

pub mod checklist;
pub mod config;
pub mod matches;
pub mod pits;
pub mod rankings;
pub mod routes;
pub mod scoring;
pub mod shared;
pub mod teams;
pub mod transfer;

// Re-export commonly used types for easier access in tests
pub use checklist::{
    models::ChecklistItem,
    repository::{ChecklistRepository, InMemoryChecklistRepository},
};
pub use config::{AppConfig, ConfigError};
pub use matches::{
    errors::MatchError,
    models::{MatchId, StoredMatch},
    repository::{InMemoryMatchRepository, MatchRepository},
    service::MatchService,
};
pub use pits::{
    errors::PitError,
    models::{PitId, StoredPit},
    repository::{InMemoryPitRepository, PitRepository},
};
pub use rankings::{build_leaderboard, evaluate_metric, Leaderboard, RankingMetric, RankingQuery};
pub use routes::router;
pub use scoring::{
    endgame_score, score_section, FileRubricSource, MatchRecord, MatchScore, Points, Rubric,
    RubricSource, StaticRubricSource,
};
pub use shared::{AppError, AppState};
pub use teams::TeamAverages;
pub use transfer::{errors::ImportError, types::ImportSummary};
