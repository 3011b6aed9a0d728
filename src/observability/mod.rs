//! Observability for the student service
//!
//! Structured logging through `tracing`. Request spans come from the HTTP
//! layer's `TraceLayer`; this module only installs the subscriber.

mod logger;

pub use logger::{init, LogFormat, LoggingConfig, DEFAULT_FILTER};
