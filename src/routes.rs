use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::shared::AppState;
use crate::{checklist, matches, pits, transfer};

/// Builds the HTTP API over the given state.
pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/config", get(matches::get_config))
        .route(
            "/api/matches",
            get(matches::list_matches).post(matches::create_match),
        )
        .route(
            "/api/matches/:id",
            put(matches::update_match).delete(matches::delete_match),
        )
        .route("/api/pits", get(pits::list_pits).post(pits::create_pit))
        .route(
            "/api/pits/:id",
            put(pits::update_pit).delete(pits::delete_pit),
        )
        .route("/api/team/:team/averages", get(matches::team_averages))
        .route("/api/team/:team/matches", get(matches::team_matches))
        .route("/api/team/:team/pit", get(pits::team_pit))
        .route("/api/rankings", get(matches::rankings))
        .route("/api/checklist", get(checklist::get_checklist))
        .route("/api/checklist/:key", post(checklist::update_checklist))
        .route("/api/export/matches.csv", get(matches::export_matches))
        .route("/api/export/pits.csv", get(pits::export_pits))
        .route("/api/import/csv", post(transfer::import_csv))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
