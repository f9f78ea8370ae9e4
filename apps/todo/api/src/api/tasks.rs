use axum::Router;
use domain_tasks::{InMemoryTaskRepository, PgTaskRepository, TaskService, handlers};
use tracing::info;

pub const PATH: &str = "/tasks";

/// Task routes backed by the configured storage
pub fn router(state: &crate::state::AppState) -> Router {
    match &state.db {
        Some(db) => {
            info!("Serving tasks from PostgreSQL");
            handlers::router(TaskService::with_field_mapper(PgTaskRepository::new(
                db.clone(),
            )))
        }
        None => {
            info!("Serving tasks from memory");
            handlers::router(TaskService::with_field_mapper(InMemoryTaskRepository::new()))
        }
    }
}
