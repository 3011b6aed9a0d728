//! CLI command implementations
//!
//! Startup is fail-fast: if the store cannot be opened or its table cannot
//! be created, the command returns a fatal error and no server is started.

use std::path::Path;

use serde_json::json;
use tokio::runtime::Runtime;
use tracing::{error, info};

use crate::http_server::HttpServer;
use crate::observability;
use crate::store::{open_store, SharedStore};

use super::args::Command;
use super::config::ServiceConfig;
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::Init { config } => init(config.as_deref()),
    }
}

/// Open the store and serve the HTTP API until Ctrl-C
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = ServiceConfig::load(config_path)?;
    if let Some(port) = port {
        config.http.port = port;
    }
    observability::init(&config.logging);

    let rt = runtime()?;
    rt.block_on(async {
        let store = boot_store(&config).await?;
        let server = HttpServer::with_config(config.http.clone(), store);

        server.start().await.map_err(|e| {
            error!(error = %e, "HTTP server failed");
            CliError::serve_failed(format!("HTTP server failed: {}", e))
        })
    })
}

/// Create the students table for the configured backend and exit
pub fn init(config_path: Option<&Path>) -> CliResult<()> {
    let config = ServiceConfig::load(config_path)?;
    observability::init(&config.logging);
    init_with(&config)
}

fn init_with(config: &ServiceConfig) -> CliResult<()> {
    let rt = runtime()?;
    rt.block_on(boot_store(config))?;

    println!(
        "{}",
        json!({"initialized": true, "backend": config.database.backend.as_str()})
    );
    Ok(())
}

fn runtime() -> CliResult<Runtime> {
    Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))
}

async fn boot_store(config: &ServiceConfig) -> CliResult<SharedStore> {
    let store = open_store(&config.database).await.map_err(|e| {
        error!(error = %e, backend = %config.database.backend, "store initialization failed");
        CliError::boot_failed(e.to_string())
    })?;

    info!(backend = %config.database.backend, "student store ready");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::super::errors::CliErrorCode;
    use super::*;
    use tempfile::TempDir;

    fn sqlite_config(db_path: &Path) -> ServiceConfig {
        let mut config = ServiceConfig::default();
        config.database.sqlite_path = db_path.to_string_lossy().to_string();
        config
    }

    #[test]
    fn test_init_creates_sqlite_database() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("students.db");

        init_with(&sqlite_config(&db_path)).unwrap();
        assert!(db_path.exists());
    }

    #[test]
    fn test_init_fails_fast_on_unopenable_store() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("no").join("such").join("students.db");

        let err = init_with(&sqlite_config(&db_path)).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::BootFailed);
    }

    #[test]
    fn test_missing_config_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = init(Some(&temp_dir.path().join("absent.json"))).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }
}
