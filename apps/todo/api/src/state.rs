//! Application state management.
//!
//! Shared with the readiness handler and used once at startup to build the
//! task routes.

use sea_orm::DatabaseConnection;

/// Shared application state.
///
/// Cloning is cheap: the connection is a pool handle.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL connection pool, `None` when tasks are kept in memory
    pub db: Option<DatabaseConnection>,
}
