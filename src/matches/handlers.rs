use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use tracing::{info, instrument};

use super::{
    models::{MatchId, MatchUpdate, StoredMatch},
    types::{ListParams, MatchSubmission, RankingParams, ScoredMatch, SubmitResponse},
};
use crate::rankings::Leaderboard;
use crate::shared::{AppError, AppState, OkResponse};
use crate::teams::TeamAverages;

/// HTTP handler returning the administrator's raw configuration
///
/// GET /api/config
#[instrument(name = "get_config", skip(state))]
pub async fn get_config(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let config = state.match_service().raw_config().await?;
    Ok(Json(config))
}

/// HTTP handler for scouting a new match
///
/// POST /api/matches
/// Returns the stored id and the points earned per phase
#[instrument(name = "create_match", skip(state, submission))]
pub async fn create_match(
    State(state): State<AppState>,
    Json(submission): Json<MatchSubmission>,
) -> Result<Json<SubmitResponse>, AppError> {
    let response = state.match_service().submit(submission.into()).await?;

    info!(match_id = response.id, total = response.total, "Match created");

    Ok(Json(response))
}

/// HTTP handler for paging through stored matches, newest first
///
/// GET /api/matches?limit&offset
#[instrument(name = "list_matches", skip(state))]
pub async fn list_matches(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<StoredMatch>>, AppError> {
    let matches = state
        .match_service()
        .list(params.limit, params.offset)
        .await?;

    info!(match_count = matches.len(), "Matches listed");

    Ok(Json(matches))
}

/// PUT /api/matches/:id
#[instrument(name = "update_match", skip(state, update))]
pub async fn update_match(
    State(state): State<AppState>,
    Path(id): Path<MatchId>,
    Json(update): Json<MatchUpdate>,
) -> Result<Json<OkResponse>, AppError> {
    state.match_service().update(id, update).await?;
    info!(match_id = id, "Match updated");
    Ok(Json(OkResponse::ok()))
}

/// DELETE /api/matches/:id
#[instrument(name = "delete_match", skip(state))]
pub async fn delete_match(
    State(state): State<AppState>,
    Path(id): Path<MatchId>,
) -> Result<Json<OkResponse>, AppError> {
    state.match_service().delete(id).await?;
    info!(match_id = id, "Match deleted");
    Ok(Json(OkResponse::ok()))
}

/// GET /api/team/:team/averages
#[instrument(name = "team_averages", skip(state))]
pub async fn team_averages(
    State(state): State<AppState>,
    Path(team): Path<String>,
) -> Result<Json<TeamAverages>, AppError> {
    let averages = state.match_service().team_averages(&team).await?;
    Ok(Json(averages))
}

/// GET /api/team/:team/matches
#[instrument(name = "team_matches", skip(state))]
pub async fn team_matches(
    State(state): State<AppState>,
    Path(team): Path<String>,
) -> Result<Json<Vec<ScoredMatch>>, AppError> {
    let matches = state.match_service().team_matches(&team).await?;
    Ok(Json(matches))
}

/// HTTP handler for the leaderboard of one ranking option
///
/// GET /api/rankings?option&min_matches&team
#[instrument(name = "rankings", skip(state))]
pub async fn rankings(
    State(state): State<AppState>,
    Query(params): Query<RankingParams>,
) -> Result<Json<Leaderboard>, AppError> {
    let leaderboard = state.match_service().rankings(params).await?;

    info!(
        option = %leaderboard.option,
        rows = leaderboard.rows.len(),
        "Rankings computed"
    );

    Ok(Json(leaderboard))
}

/// GET /api/export/matches.csv
#[instrument(name = "export_matches", skip(state))]
pub async fn export_matches(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let csv = state.match_service().export_csv().await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"matches.csv\"",
            ),
        ],
        csv,
    ))
}
