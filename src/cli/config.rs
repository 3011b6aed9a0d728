//! Service configuration
//!
//! Sources, later ones winning:
//! 1. Built-in defaults
//! 2. Optional JSON config file
//! 3. `.env` file and process environment
//! 4. Command-line flags (applied by the command)

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;
use crate::observability::LoggingConfig;
use crate::store::{Backend, DatabaseConfig};

/// SQLite file path
pub const ENV_DB_PATH: &str = "DB_PATH";
/// Postgres connection URL
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
/// Backend name: sqlite, postgres or memory
pub const ENV_BACKEND: &str = "STUDENT_DB_BACKEND";
/// HTTP listen port
pub const ENV_PORT: &str = "PORT";

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub http: HttpServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Load configuration from an optional file plus the environment
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        // A missing .env is normal outside development.
        let _ = dotenvy::dotenv();
        config.apply_env(|key| std::env::var(key).ok())?;

        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON config file without applying overrides
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
    }

    /// Apply environment overrides using `lookup` to read variables
    pub fn apply_env<F>(&mut self, lookup: F) -> CliResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = non_empty(ENV_DB_PATH) {
            self.database.sqlite_path = path;
        }

        if let Some(url) = non_empty(ENV_DATABASE_URL) {
            self.database.postgres_url = Some(url);
        }

        if let Some(backend) = non_empty(ENV_BACKEND) {
            self.database.backend = backend
                .parse::<Backend>()
                .map_err(|e| CliError::config_error(format!("{}: {}", ENV_BACKEND, e)))?;
        }

        if let Some(port) = non_empty(ENV_PORT) {
            self.http.port = port.trim().parse().map_err(|_| {
                CliError::config_error(format!("{}: invalid port '{}'", ENV_PORT, port))
            })?;
        }

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.database.max_connections == 0 {
            return Err(CliError::config_error("max_connections must be > 0"));
        }

        match self.database.backend {
            Backend::Postgres => {
                let missing = self
                    .database
                    .postgres_url
                    .as_deref()
                    .map_or(true, |url| url.trim().is_empty());
                if missing {
                    return Err(CliError::config_error(format!(
                        "postgres backend requires database.postgres_url or {}",
                        ENV_DATABASE_URL
                    )));
                }
            }
            Backend::Sqlite => {
                if self.database.sqlite_path.trim().is_empty() {
                    return Err(CliError::config_error(format!(
                        "sqlite backend requires database.sqlite_path or {}",
                        ENV_DB_PATH
                    )));
                }
            }
            Backend::Memory => {}
        }

        Ok(())
    }
}
