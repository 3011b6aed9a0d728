//! # Student Store Errors

use thiserror::Error;

use crate::model::StudentId;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Student store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row exists for the requested id
    #[error("Student not found: {0}")]
    NotFound(StudentId),

    /// Engine failure unrelated to the validity of the request
    #[error("Storage error during {operation}: {source}")]
    Storage {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// Connection or schema setup failed while constructing a store
    #[error("Store initialization failed: {0}")]
    Init(String),
}

impl StoreError {
    /// Wrap an engine error raised by `operation`
    pub fn storage(operation: &'static str, source: sqlx::Error) -> Self {
        StoreError::Storage { operation, source }
    }

    pub fn init(msg: impl Into<String>) -> Self {
        StoreError::Init(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
