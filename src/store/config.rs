//! Store selection
//!
//! The backing engine is chosen once at startup from configuration.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::backend::SharedStore;
use super::errors::{StoreError, StoreResult};
use super::memory::MemoryStore;
use super::postgres::PostgresStore;
use super::sqlite::SqliteStore;

/// Backing engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Sqlite,
    Postgres,
    Memory,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Sqlite => "sqlite",
            Backend::Postgres => "postgres",
            Backend::Memory => "memory",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" | "sqlite3" => Ok(Backend::Sqlite),
            "postgres" | "postgresql" | "pg" => Ok(Backend::Postgres),
            "memory" => Ok(Backend::Memory),
            other => Err(format!("unknown store backend '{}'", other)),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Engine to use (default: sqlite)
    #[serde(default)]
    pub backend: Backend,

    /// SQLite file path or `sqlite:` URL (default: "students.db")
    #[serde(default = "default_sqlite_path")]
    pub sqlite_path: String,

    /// Postgres connection URL, required for the postgres backend
    #[serde(default)]
    pub postgres_url: Option<String>,

    /// Pool size (default: 5)
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_sqlite_path() -> String {
    "students.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            sqlite_path: default_sqlite_path(),
            postgres_url: None,
            max_connections: default_max_connections(),
        }
    }
}

/// Construct the configured store, creating its schema.
///
/// Any error here is meant to abort startup.
pub async fn open_store(config: &DatabaseConfig) -> StoreResult<SharedStore> {
    info!(backend = %config.backend, "opening student store");
    let store: SharedStore = match config.backend {
        Backend::Sqlite => {
            Arc::new(SqliteStore::connect(&config.sqlite_path, config.max_connections).await?)
        }
        Backend::Postgres => {
            let url = config
                .postgres_url
                .as_deref()
                .ok_or_else(|| StoreError::init("missing postgres connection url"))?;
            Arc::new(PostgresStore::connect(url, config.max_connections).await?)
        }
        Backend::Memory => Arc::new(MemoryStore::new()),
    };
    Ok(store)
}
