//! CLI argument definitions using clap
//!
//! Commands:
//! - student-service serve [--config <path>] [--port <port>]
//! - student-service init [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Student Service - CRUD HTTP API for student records
#[derive(Parser, Debug)]
#[command(name = "student-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the store and serve the HTTP API
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on, overriding config and environment
        #[arg(long)]
        port: Option<u16>,
    },

    /// Create the students table and exit
    Init {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["student-service", "serve", "--port", "9000"]).unwrap();
        match cli.command {
            Command::Serve { config, port } => {
                assert!(config.is_none());
                assert_eq!(port, Some(9000));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_init_with_config() {
        let cli =
            Cli::try_parse_from(["student-service", "init", "--config", "svc.json"]).unwrap();
        match cli.command {
            Command::Init { config } => assert_eq!(config, Some(PathBuf::from("svc.json"))),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["student-service", "serve", "--port", "http"]).is_err());
    }
}
