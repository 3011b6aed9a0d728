//! Logging initialization
//!
//! Installs the process-wide `tracing` subscriber. Filtering honours
//! `RUST_LOG` first, then the configured filter.

use std::sync::Once;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Default filter when neither `RUST_LOG` nor config provide one
pub const DEFAULT_FILTER: &str = "student_service=info,tower_http=info";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output for development
    #[default]
    Pretty,
    /// JSON structured output, one event per line
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,

    /// `EnvFilter` directives, e.g. `student_service=debug`
    #[serde(default)]
    pub filter: Option<String>,
}

impl LoggingConfig {
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let directives = self.filter.as_deref().unwrap_or(DEFAULT_FILTER);
            EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        })
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize logging. Only the first call has any effect.
pub fn init(config: &LoggingConfig) {
    INIT_ONCE.call_once(|| {
        let builder = tracing_subscriber::fmt().with_env_filter(config.env_filter());
        let installed = match config.format {
            LogFormat::Pretty => builder.try_init(),
            LogFormat::Json => builder.json().try_init(),
        };
        if let Err(e) = installed {
            eprintln!("logging not initialized: {e}");
        }
    });
}
