//! Readiness probe with a real database check.

use crate::state::AppState;
use axum::{extract::State, response::Response};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};

/// Ping PostgreSQL when tasks are stored there. In-memory storage is
/// always ready.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let storage: HealthCheckFuture<'_> = match &state.db {
        Some(db) => Box::pin(async move {
            database::postgres::check_health(db)
                .await
                .map_err(|e| format!("Database ping failed: {}", e))
        }),
        None => Box::pin(async { Ok(()) }),
    };

    run_health_checks(vec![("storage", storage)]).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment, StorageBackend};
    use axum::http::StatusCode;
    use core_config::server::ServerConfig;
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use std::time::Duration;

    fn state(db: Option<sea_orm::DatabaseConnection>) -> AppState {
        AppState {
            config: Config {
                app: core_config::app_info!(),
                environment: Environment::Development,
                server: ServerConfig::new("127.0.0.1".to_string(), 0),
                storage: if db.is_some() {
                    StorageBackend::Postgres
                } else {
                    StorageBackend::Memory
                },
                database: None,
                shutdown_timeout: Duration::from_secs(1),
            },
            db,
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_memory_storage_is_ready() {
        let response = ready_handler(State(state(None))).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["checks"]["storage"], "connected");
    }

    #[tokio::test]
    async fn test_failed_database_ping_is_not_ready() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".into())])
            .into_connection();

        let response = ready_handler(State(state(Some(db)))).await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(response).await["status"], "not ready");
    }
}
