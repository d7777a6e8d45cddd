//! In-memory state store.

use async_trait::async_trait;
use domain::models::StateRecord;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use super::StateStore;
use crate::error::PersistenceError;

/// Store that keeps the record in memory. Used for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    record: RwLock<Option<StateRecord>>,
    fail_writes: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `record`.
    pub fn with_record(record: StateRecord) -> Self {
        Self {
            record: RwLock::new(Some(record)),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Makes subsequent saves fail, to exercise write-failure paths.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// The stored record, if anything was saved.
    pub async fn snapshot(&self) -> Option<StateRecord> {
        self.record.read().await.clone()
    }
}

#[async_trait]
impl StateStore for InMemoryStore {
    async fn load(&self) -> StateRecord {
        self.record.read().await.clone().unwrap_or_default()
    }

    async fn save(&self, record: &StateRecord) -> Result<(), PersistenceError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PersistenceError::Unavailable(
                "writes disabled for this store".to_string(),
            ));
        }
        *self.record.write().await = Some(record.clone());
        Ok(())
    }
}
