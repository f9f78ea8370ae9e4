use core_config::{app_info, env_parse_or_default, server::ServerConfig, AppInfo, FromEnv};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

// Import database configs from the database library
use database::postgres::PostgresConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Where tasks are stored
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    /// Process-local, lost on restart
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" | "in-memory" => Ok(Self::Memory),
            other => Err(format!("unknown storage backend '{other}', expected postgres or memory")),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Postgres => f.write_str("postgres"),
            Self::Memory => f.write_str("memory"),
        }
    }
}

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub storage: StorageBackend,
    /// Set only for [`StorageBackend::Postgres`]
    pub database: Option<PostgresConfig>,
    pub shutdown_timeout: Duration,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let storage: StorageBackend = env_parse_or_default("TASKS_STORAGE", "postgres")?;

        let database = match storage {
            StorageBackend::Postgres => Some(PostgresConfig::from_env()?), // DATABASE_URL required
            StorageBackend::Memory => None,
        };

        let shutdown_secs: u64 = env_parse_or_default("SHUTDOWN_TIMEOUT_SECS", "30")?;

        Ok(Self {
            app: app_info!(),
            environment,
            server,
            storage,
            database,
            shutdown_timeout: Duration::from_secs(shutdown_secs),
        })
    }
}
