//! Domain layer for the rotation tracker.
//!
//! This crate contains:
//! - Domain models (Location, UsageEvent, ScheduleConfig, StateRecord, views)
//! - The rotation engine and the schedule engine
//! - Domain error types and the clock abstraction

pub mod clock;
pub mod error;
pub mod models;
pub mod services;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::DomainError;
