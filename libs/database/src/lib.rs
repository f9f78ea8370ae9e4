//! Database library providing the PostgreSQL connector and shared persistence utilities
//!
//! # Features
//!
//! - `postgres` (default) - PostgreSQL support with SeaORM
//! - `config` - Configuration support with `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//! use database::BaseRepository;
//!
//! let db = postgres::connect_from_config(PostgresConfig::from_env()?).await?;
//! let tasks: BaseRepository<my_domain::entity::Entity> = BaseRepository::new(db);
//! ```

// Always available modules
pub mod common;

#[cfg(feature = "postgres")]
pub mod repository;

#[cfg(feature = "postgres")]
pub mod postgres;

// Re-exports for convenience
pub use common::{DatabaseError, DatabaseResult};

#[cfg(feature = "postgres")]
pub use repository::BaseRepository;
