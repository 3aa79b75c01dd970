//! Batch record storage.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::repository::RepositoryError;

use super::types::{Batch, BatchId};

/// Batch store abstraction.
pub trait BatchStore: Send + Sync {
    fn insert(&self, batch: &Batch) -> Result<(), RepositoryError>;

    fn update(&self, batch: &Batch) -> Result<(), RepositoryError>;

    fn get(&self, id: BatchId) -> Result<Option<Batch>, RepositoryError>;

    /// Most recent runs first.
    fn list(&self, limit: usize) -> Result<Vec<Batch>, RepositoryError>;
}

/// In-memory batch store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryBatchStore {
    batches: RwLock<HashMap<BatchId, Batch>>,
}

impl InMemoryBatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

fn poisoned<T>(_: T) -> RepositoryError {
    RepositoryError::Storage("lock poisoned".to_string())
}

impl BatchStore for InMemoryBatchStore {
    fn insert(&self, batch: &Batch) -> Result<(), RepositoryError> {
        self.batches.write().map_err(poisoned)?.insert(batch.id, batch.clone());
        Ok(())
    }

    fn update(&self, batch: &Batch) -> Result<(), RepositoryError> {
        let mut batches = self.batches.write().map_err(poisoned)?;
        match batches.get_mut(&batch.id) {
            Some(stored) => {
                *stored = batch.clone();
                Ok(())
            }
            None => Err(RepositoryError::Storage(format!("batch not found: {}", batch.id))),
        }
    }

    fn get(&self, id: BatchId) -> Result<Option<Batch>, RepositoryError> {
        Ok(self.batches.read().map_err(poisoned)?.get(&id).cloned())
    }

    fn list(&self, limit: usize) -> Result<Vec<Batch>, RepositoryError> {
        let batches = self.batches.read().map_err(poisoned)?;
        let mut all: Vec<Batch> = batches.values().cloned().collect();
        // v7 ids sort by creation time
        all.sort_by(|a, b| b.id.0.cmp(&a.id.0));
        all.truncate(limit);
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_requires_existing_batch() {
        let store = InMemoryBatchStore::new();
        let mut batch = Batch::start("PWD");

        assert!(store.update(&batch).is_err());

        store.insert(&batch).unwrap();
        batch.mark_completed();
        store.update(&batch).unwrap();

        let stored = store.get(batch.id).unwrap().unwrap();
        assert!(stored.status.is_terminal());
    }

    #[test]
    fn list_returns_latest_first() {
        let store = InMemoryBatchStore::new();
        let first = Batch::start("A");
        let second = Batch::start("B");
        store.insert(&first).unwrap();
        store.insert(&second).unwrap();

        let codes: Vec<_> = store.list(10).unwrap().into_iter().map(|b| b.code).collect();
        assert_eq!(codes, vec!["B".to_string(), "A".to_string()]);
        assert_eq!(store.list(1).unwrap().len(), 1);
    }
}
