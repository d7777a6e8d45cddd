//! Persistence layer for the rotation tracker.
//!
//! This crate contains:
//! - The `StateStore` contract consumed by the request layer
//! - A JSON file store with atomic writes, and an in-memory store
//! - Store metrics

pub mod error;
pub mod metrics;
pub mod store;

pub use error::PersistenceError;
pub use store::{InMemoryStore, JsonFileStore, StateStore};
