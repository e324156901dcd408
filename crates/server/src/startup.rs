use std::{future::Future, time::Duration};

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::AppConfig;
use dotenvy::dotenv;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_from_env();
}

fn load_config() -> Result<AppConfig, StartupError> {
    AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

/// Connect, migrate and assemble the router. A database that cannot be reached
/// here aborts startup.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    models::db::migrate(&db)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;

    let state = AppState::with_database(db, Duration::from_secs(cfg.database.query_timeout_secs));
    Ok(routes::build_router(state, Duration::from_secs(cfg.server.request_timeout_secs)))
}

/// Build the app and serve until `shutdown` resolves, then drain in-flight requests.
pub async fn run_until<F>(shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    dotenv().ok();
    init_logging();

    let cfg = load_config()?;
    let app = build_app(&cfg).await?;

    let addr = cfg.server.bind_addr();
    info!(%addr, "starting jersey store");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| StartupError::Bind { addr: addr.clone(), reason: e.to_string() })?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| StartupError::Any(e.into()))?;
    info!(%addr, "jersey store stopped");
    Ok(())
}
