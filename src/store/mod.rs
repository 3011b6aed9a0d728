//! # Student Store Module
//!
//! Storage interface plus one implementation per backing engine.
//!
//! - `SqliteStore` - embedded file engine
//! - `PostgresStore` - client-server engine
//! - `MemoryStore` - in-process store for tests

pub mod backend;
pub mod config;
pub mod errors;
pub mod memory;
pub mod postgres;
pub mod sqlite;

pub use backend::{SharedStore, StudentStore};
pub use config::{open_store, Backend, DatabaseConfig};
pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use sqlite::SqliteStore;

#[cfg(test)]
pub use backend::MockStudentStore;
