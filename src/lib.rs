pub mod core;
pub mod db;
pub mod repositories;
pub mod schemas;

#[cfg(test)]
mod test_support;

use crate::core::{config::Settings, state::AppState, telemetry};

/// Prepares a database for the records gateway: applies migrations, checks
/// connectivity and makes sure the configured bootstrap teacher exists.
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    telemetry::init_tracing(&settings)?;

    let db_pool = db::init_pool(&settings).await?;
    db::run_migrations(&db_pool).await?;
    repositories::health::ping(&db_pool).await?;
    tracing::info!("Database reachable and migrations applied");

    let state = AppState::new(settings, db_pool);

    core::bootstrap::ensure_teacher(&state).await?;

    let teachers =
        repositories::teachers::list(state.db(), 0, repositories::teachers::DEFAULT_LIMIT).await?;

    tracing::info!(
        environment = %state.settings().runtime().environment.as_str(),
        teachers = teachers.len(),
        "skilltrack-records ready"
    );

    state.db().close().await;
    Ok(())
}
