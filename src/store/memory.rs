//! # In-Memory Student Store
//!
//! Process-local store used by handler tests and the `memory` backend.
//! Ids come from a counter that only moves forward, so a deleted id is
//! never handed out again.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use super::backend::StudentStore;
use super::errors::{StoreError, StoreResult};
use crate::model::{Student, StudentId, StudentPayload};

#[derive(Debug, Default)]
struct Inner {
    rows: BTreeMap<StudentId, Student>,
    last_id: StudentId,
}

/// In-memory student store
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudentStore for MemoryStore {
    async fn create_student(&self, candidate: &StudentPayload) -> StoreResult<StudentId> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.last_id += 1;
        let id = inner.last_id;
        inner
            .rows
            .insert(id, Student::from_payload(id, candidate.clone()));
        Ok(id)
    }

    async fn get_student(&self, id: StudentId) -> StoreResult<Student> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.rows.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    async fn update_student(
        &self,
        id: StudentId,
        replacement: &StudentPayload,
    ) -> StoreResult<()> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let row = inner.rows.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        row.name = replacement.name.clone();
        row.age = replacement.age;
        Ok(())
    }

    async fn delete_student(&self, id: StudentId) -> StoreResult<()> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    async fn list_students(&self) -> StoreResult<Vec<Student>> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(inner.rows.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_get() {
        let store = MemoryStore::new();
        let id = store
            .create_student(&StudentPayload::new("Swagnik", 32))
            .await
            .unwrap();

        let student = store.get_student(id).await.unwrap();
        assert_eq!(student.name, "Swagnik");
        assert_eq!(student.age, 32);
        assert!(student.id >= 0);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = MemoryStore::new();
        let first = store.create_student(&StudentPayload::new("a", 1)).await.unwrap();
        store.delete_student(first).await.unwrap();
        let second = store.create_student(&StudentPayload::new("b", 2)).await.unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let store = MemoryStore::new();
        let payload = StudentPayload::new("x", 1);

        assert!(store.get_student(42).await.unwrap_err().is_not_found());
        assert!(store.update_student(42, &payload).await.unwrap_err().is_not_found());
        assert!(store.delete_student(42).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let store = MemoryStore::new();
        assert!(store.list_students().await.unwrap().is_empty());

        for (name, age) in [("c", 3), ("a", 1), ("b", 2)] {
            store.create_student(&StudentPayload::new(name, age)).await.unwrap();
        }

        let ids: Vec<_> = store
            .list_students()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
