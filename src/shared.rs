use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

use crate::checklist::errors::ChecklistError;
use crate::checklist::repository::ChecklistRepository;
use crate::checklist::service::ChecklistService;
use crate::matches::errors::MatchError;
use crate::matches::repository::MatchRepository;
use crate::matches::service::MatchService;
use crate::pits::errors::PitError;
use crate::pits::repository::PitRepository;
use crate::pits::service::PitService;
use crate::scoring::RubricSource;
use crate::transfer::errors::ImportError;
use crate::transfer::service::ImportService;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub match_repository: Arc<dyn MatchRepository>,
    pub pit_repository: Arc<dyn PitRepository>,
    pub checklist_repository: Arc<dyn ChecklistRepository>,
    pub rubric_source: Arc<dyn RubricSource>,
}

impl AppState {
    pub fn new(
        match_repository: Arc<dyn MatchRepository>,
        pit_repository: Arc<dyn PitRepository>,
        checklist_repository: Arc<dyn ChecklistRepository>,
        rubric_source: Arc<dyn RubricSource>,
    ) -> Self {
        Self {
            match_repository,
            pit_repository,
            checklist_repository,
            rubric_source,
        }
    }

    pub fn match_service(&self) -> MatchService {
        MatchService::new(
            Arc::clone(&self.match_repository),
            Arc::clone(&self.rubric_source),
        )
    }

    pub fn pit_service(&self) -> PitService {
        PitService::new(
            Arc::clone(&self.pit_repository),
            Arc::clone(&self.rubric_source),
        )
    }

    pub fn checklist_service(&self) -> ChecklistService {
        ChecklistService::new(
            Arc::clone(&self.checklist_repository),
            Arc::clone(&self.rubric_source),
        )
    }

    pub fn import_service(&self) -> ImportService {
        ImportService::new(
            Arc::clone(&self.match_repository),
            Arc::clone(&self.pit_repository),
        )
    }
}

/// Whether an upsert created a new row or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Replaced,
}

/// `{"ok": true}` acknowledgement for writes with nothing else to report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error")]
    Internal,
}

impl From<MatchError> for AppError {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::NotFound(_) => AppError::NotFound(err.to_string()),
            MatchError::UnknownRankingOption(_) => AppError::BadRequest(err.to_string()),
            MatchError::Rubric(err) => AppError::Config(err.to_string()),
            MatchError::IdsExhausted | MatchError::Csv(_) | MatchError::Json(_) => {
                error!(error = %err, "Match operation failed");
                AppError::Internal
            }
        }
    }
}

impl From<PitError> for AppError {
    fn from(err: PitError) -> Self {
        match err {
            PitError::NotFound(_) | PitError::NoPitForTeam(_) => {
                AppError::NotFound(err.to_string())
            }
            PitError::Rubric(err) => AppError::Config(err.to_string()),
            PitError::IdsExhausted | PitError::Csv(_) | PitError::Json(_) => {
                error!(error = %err, "Pit operation failed");
                AppError::Internal
            }
        }
    }
}

impl From<ChecklistError> for AppError {
    fn from(err: ChecklistError) -> Self {
        match err {
            ChecklistError::NotConfigured(_) => AppError::NotFound(err.to_string()),
            ChecklistError::Rubric(err) => AppError::Config(err.to_string()),
        }
    }
}

impl From<ImportError> for AppError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::Empty | ImportError::UnknownFormat | ImportError::Csv(_) => {
                AppError::BadRequest(err.to_string())
            }
            ImportError::Match(err) => err.into(),
            ImportError::Pit(err) => err.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Config(msg) => {
                error!(error = %msg, "Scoring configuration unavailable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Configuration error: {}", msg),
                )
            }
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
