use axum::{
    extract::{Path, State},
    Json,
};
use std::collections::BTreeMap;
use tracing::{info, instrument};

use super::models::{ChecklistItem, ChecklistUpdate};
use crate::shared::{AppError, AppState, OkResponse};

/// GET /api/checklist
#[instrument(name = "get_checklist", skip(state))]
pub async fn get_checklist(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, ChecklistItem>>, AppError> {
    let checklists = state.checklist_service().all().await?;
    Ok(Json(checklists))
}

/// HTTP handler replacing the checked items of one checklist
///
/// POST /api/checklist/:key
#[instrument(name = "update_checklist", skip(state, update))]
pub async fn update_checklist(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(update): Json<ChecklistUpdate>,
) -> Result<Json<OkResponse>, AppError> {
    let checked = update.checked.len();
    state.checklist_service().update(&key, update.checked).await?;

    info!(key = %key, checked, "Checklist saved");

    Ok(Json(OkResponse::ok()))
}
