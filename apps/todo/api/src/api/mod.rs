use axum::{Router, routing::get};

pub mod health;
pub mod tasks;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest(tasks::PATH, tasks::router(state))
}

/// Router with the stateful `/ready` endpoint, merged next to the
/// stateless `/health` router.
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
