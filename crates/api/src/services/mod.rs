//! Application services.

pub mod tracker;

pub use tracker::{TrackerError, TrackerService};
