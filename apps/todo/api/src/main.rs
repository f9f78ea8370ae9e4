use axum::{Router, middleware, routing::get};
use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    observability::init_metrics()
        .map_err(|e| eyre::eyre!("Failed to install metrics recorder: {}", e))?;

    let db = match config.database.clone() {
        Some(database) => {
            let db = database::postgres::connect_from_config_with_retry(database, None)
                .await
                .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;
            Some(db)
        }
        None => {
            tracing::warn!("TASKS_STORAGE=memory, tasks are lost on restart");
            None
        }
    };

    let state = AppState { config, db };

    let api_routes = api::routes(&state);

    // create_router adds docs/middleware to our composed routes
    let router = axum_helpers::create_router::<openapi::ApiDoc>(
        api_routes,
        &state.config.server.cors_allowed_origins,
    )?;

    // - /health: liveness check with app name/version
    // - /ready: readiness check against the configured storage
    // - /metrics: Prometheus scrape endpoint
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()))
        .merge(Router::new().route("/metrics", get(observability::metrics_handler)))
        .layer(middleware::from_fn(observability::metrics_middleware));

    info!(
        storage = %state.config.storage,
        timeout = ?state.config.shutdown_timeout,
        "Starting todo API"
    );

    let server_config = state.config.server.clone();
    let shutdown_timeout = state.config.shutdown_timeout;

    // State moves here for cleanup
    create_production_app(app, &server_config, shutdown_timeout, async move {
        if let Some(db) = state.db {
            info!("Shutting down: closing database connections");
            match db.close().await {
                Ok(_) => info!("PostgreSQL connection closed successfully"),
                Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
            }
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Todo API shutdown complete");
    Ok(())
}
