//! Domain error types.

use thiserror::Error;

use crate::models::LocationId;

/// Errors raised by domain operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The location id is not part of the tracked location set.
    #[error("Invalid location: {0}")]
    InvalidLocation(LocationId),

    /// A schedule update failed validation.
    #[error("{0}")]
    InvalidScheduleConfig(String),
}
