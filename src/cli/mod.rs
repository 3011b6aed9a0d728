//! CLI module for the student service
//!
//! Provides command-line interface for:
//! - serve: Open the store and run the HTTP API
//! - init: Create the schema and exit

mod args;
mod commands;
pub mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve};
pub use config::ServiceConfig;
pub use errors::{CliError, CliErrorCode, CliResult};
