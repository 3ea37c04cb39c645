use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use tracing::{info, instrument};

use super::{
    models::{PitId, PitUpdate, StoredPit},
    types::{PitCreated, PitSubmission},
};
use crate::matches::types::ListParams;
use crate::shared::{AppError, AppState, OkResponse};

/// HTTP handler for a new pit scouting entry
///
/// POST /api/pits
#[instrument(name = "create_pit", skip(state, submission))]
pub async fn create_pit(
    State(state): State<AppState>,
    Json(submission): Json<PitSubmission>,
) -> Result<Json<PitCreated>, AppError> {
    let created = state.pit_service().create(submission).await?;
    Ok(Json(created))
}

/// GET /api/pits?limit&offset
#[instrument(name = "list_pits", skip(state))]
pub async fn list_pits(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<StoredPit>>, AppError> {
    let pits = state.pit_service().list(params.limit, params.offset).await?;

    info!(pit_count = pits.len(), "Pit entries listed");

    Ok(Json(pits))
}

/// PUT /api/pits/:id
#[instrument(name = "update_pit", skip(state, update))]
pub async fn update_pit(
    State(state): State<AppState>,
    Path(id): Path<PitId>,
    Json(update): Json<PitUpdate>,
) -> Result<Json<OkResponse>, AppError> {
    state.pit_service().update(id, update).await?;
    info!(pit_id = id, "Pit entry updated");
    Ok(Json(OkResponse::ok()))
}

/// DELETE /api/pits/:id
#[instrument(name = "delete_pit", skip(state))]
pub async fn delete_pit(
    State(state): State<AppState>,
    Path(id): Path<PitId>,
) -> Result<Json<OkResponse>, AppError> {
    state.pit_service().delete(id).await?;
    info!(pit_id = id, "Pit entry deleted");
    Ok(Json(OkResponse::ok()))
}

/// HTTP handler for the latest pit entry of one team
///
/// GET /api/team/:team/pit
#[instrument(name = "team_pit", skip(state))]
pub async fn team_pit(
    State(state): State<AppState>,
    Path(team): Path<String>,
) -> Result<Json<StoredPit>, AppError> {
    let pit = state.pit_service().team_pit(&team).await?;
    Ok(Json(pit))
}

/// GET /api/export/pits.csv
#[instrument(name = "export_pits", skip(state))]
pub async fn export_pits(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let csv = state.pit_service().export_csv().await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"pits.csv\"",
            ),
        ],
        csv,
    ))
}
