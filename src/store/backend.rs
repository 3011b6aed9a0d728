//! # Student Store Trait
//!
//! The persistence contract every backing engine implements. Handlers only
//! ever see `dyn StudentStore`, so engines can be swapped at startup and
//! tests can substitute an in-memory or mocked store.

use std::sync::Arc;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::errors::StoreResult;
use crate::model::{Student, StudentId, StudentPayload};

/// Persistence contract for student records
///
/// Implementations must be safe for concurrent use; they rely on the
/// engine's own pool rather than additional locking.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Insert a row and return the id assigned by the engine.
    /// No validation happens here; an empty name is stored as-is.
    async fn create_student(&self, candidate: &StudentPayload) -> StoreResult<StudentId>;

    /// Fetch one row, `NotFound` when the id does not exist
    async fn get_student(&self, id: StudentId) -> StoreResult<Student>;

    /// Overwrite name and age. Zero affected rows is `NotFound`.
    async fn update_student(&self, id: StudentId, replacement: &StudentPayload)
        -> StoreResult<()>;

    /// Remove the row. Zero affected rows is `NotFound`.
    async fn delete_student(&self, id: StudentId) -> StoreResult<()>;

    /// All rows in ascending id order
    async fn list_students(&self) -> StoreResult<Vec<Student>>;
}

/// Shared store reference
pub type SharedStore = Arc<dyn StudentStore>;
