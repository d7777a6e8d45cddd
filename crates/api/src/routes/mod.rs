//! HTTP route handlers.

pub mod cycle;
pub mod dashboard;
pub mod health;
pub mod history;
pub mod schedule;
pub mod usage;
