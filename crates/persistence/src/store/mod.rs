//! State store contract and implementations.

pub mod json_file;
pub mod memory;

use async_trait::async_trait;
use domain::models::StateRecord;

use crate::error::PersistenceError;

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;

/// Loads and saves the single state record.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Returns the last saved record.
    ///
    /// A missing or unreadable record yields [`StateRecord::default`];
    /// corruption is logged, never returned.
    async fn load(&self) -> StateRecord;

    /// Replaces the stored record with `record`.
    async fn save(&self, record: &StateRecord) -> Result<(), PersistenceError>;
}
