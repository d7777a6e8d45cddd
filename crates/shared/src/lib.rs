//! Shared utilities for the rotation tracker.
//!
//! This crate provides common functionality used across the other crates:
//! - Validation of time-of-day and interval inputs
//! - Display formatting for timestamps

pub mod display;
pub mod validation;
