//! Persistence error types.

use thiserror::Error;

/// Errors raised by a [`crate::StateStore`].
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The stored record exists but cannot be read back. Recovered from
    /// inside `load`; never returned to callers of the store.
    #[error("Persisted state is corrupt: {0}")]
    Corrupt(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
