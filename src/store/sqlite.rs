//! # SQLite Student Store
//!
//! Embedded-file engine backed by a sqlx `SqlitePool`. The table uses
//! `AUTOINCREMENT` so rowids are never recycled after a delete.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteRow,
};
use sqlx::Row;
use tracing::{debug, info};

use super::backend::StudentStore;
use super::errors::{StoreError, StoreResult};
use crate::model::{Student, StudentId, StudentPayload};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS students (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        age INTEGER
    )
"#;

/// SQLite-backed student store
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if missing) the database at `location` and ensure the
    /// schema exists.
    ///
    /// `location` is either a plain file path or a `sqlite:` URL. In-memory
    /// locations are pinned to one connection regardless of `max_connections`.
    pub async fn connect(location: &str, max_connections: u32) -> StoreResult<Self> {
        if is_in_memory(location) {
            let options = SqliteConnectOptions::from_str(location)
                .or_else(|_| SqliteConnectOptions::from_str("sqlite::memory:"))
                .map_err(|e| StoreError::init(format!("invalid sqlite url {location:?}: {e}")))?;
            let store = Self::single_connection(options).await?;
            info!(location, "SQLite in-memory store initialized");
            return Ok(store);
        }

        let base = if location.starts_with("sqlite:") {
            SqliteConnectOptions::from_str(location)
                .map_err(|e| StoreError::init(format!("invalid sqlite url {location:?}: {e}")))?
        } else {
            SqliteConnectOptions::new().filename(location)
        };
        let options = base
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| StoreError::init(format!("unable to open sqlite {location:?}: {e}")))?;

        let store = Self::with_pool(pool).await?;
        info!(location, "SQLite store initialized");
        Ok(store)
    }

    /// Private in-memory database, mostly for tests.
    ///
    /// Every SQLite in-memory connection is its own database, so the pool is
    /// pinned to a single connection that is never recycled.
    pub async fn in_memory() -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| StoreError::init(e.to_string()))?;
        Self::single_connection(options).await
    }

    async fn single_connection(options: SqliteConnectOptions) -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| StoreError::init(format!("unable to open in-memory sqlite: {e}")))?;

        Self::with_pool(pool).await
    }

    /// Wrap an existing pool, creating the table if needed
    pub async fn with_pool(pool: SqlitePool) -> StoreResult<Self> {
        sqlx::query(CREATE_TABLE)
            .execute(&pool)
            .await
            .map_err(|e| StoreError::init(format!("failed to create students table: {e}")))?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn is_in_memory(location: &str) -> bool {
    location == ":memory:"
        || location.starts_with("sqlite::memory:")
        || location.contains("mode=memory")
}

fn row_to_student(row: &SqliteRow) -> Result<Student, sqlx::Error> {
    Ok(Student {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        age: row.try_get("age")?,
    })
}

#[async_trait]
impl StudentStore for SqliteStore {
    async fn create_student(&self, candidate: &StudentPayload) -> StoreResult<StudentId> {
        let result = sqlx::query("INSERT INTO students (name, age) VALUES (?, ?)")
            .bind(candidate.name.as_str())
            .bind(candidate.age)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::storage("create_student", e))?;

        let id = result.last_insert_rowid();
        debug!(student_id = id, "student inserted");
        Ok(id)
    }

    async fn get_student(&self, id: StudentId) -> StoreResult<Student> {
        let row = sqlx::query("SELECT id, name, age FROM students WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::storage("get_student", e))?
            .ok_or(StoreError::NotFound(id))?;

        row_to_student(&row).map_err(|e| StoreError::storage("get_student", e))
    }

    async fn update_student(
        &self,
        id: StudentId,
        replacement: &StudentPayload,
    ) -> StoreResult<()> {
        let result = sqlx::query("UPDATE students SET name = ?, age = ? WHERE id = ?")
            .bind(replacement.name.as_str())
            .bind(replacement.age)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::storage("update_student", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn delete_student(&self, id: StudentId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::storage("delete_student", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn list_students(&self) -> StoreResult<Vec<Student>> {
        let rows = sqlx::query("SELECT id, name, age FROM students ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::storage("list_students", e))?;

        rows.iter()
            .map(row_to_student)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::storage("list_students", e))
    }
}
