use axum::{extract::State, Json};
use tracing::instrument;

use super::types::ImportSummary;
use crate::shared::{AppError, AppState};

/// HTTP handler restoring matches or pit entries from a CSV export sent as
/// the request body
///
/// POST /api/import/csv
#[instrument(name = "import_csv", skip(state, body))]
pub async fn import_csv(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ImportSummary>, AppError> {
    let summary = state.import_service().import_csv(&body).await?;
    Ok(Json(summary))
}
