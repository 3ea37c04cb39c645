use scouting::{
    router, AppConfig, AppState, FileRubricSource, InMemoryChecklistRepository,
    InMemoryMatchRepository, InMemoryPitRepository,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scouting=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;
    let addr = config.socket_addr()?;

    info!(rubric = %config.rubric_path.display(), "Starting scouting server");

    let match_repository = Arc::new(InMemoryMatchRepository::new());
    let pit_repository = Arc::new(InMemoryPitRepository::new());
    let checklist_repository = Arc::new(InMemoryChecklistRepository::new());
    let rubric_source = Arc::new(FileRubricSource::new(config.rubric_path));
    let app_state = AppState::new(
        match_repository,
        pit_repository,
        checklist_repository,
        rubric_source,
    );

    let app = router(app_state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running on http://{}", addr);

    if let Err(err) = axum::serve(listener, app).await {
        error!(error = %err, "Server stopped");
        return Err(err.into());
    }

    Ok(())
}
