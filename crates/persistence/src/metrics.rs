//! Store metrics collection.
//!
//! Provides helpers for recording state store metrics.

use metrics::{counter, histogram};
use std::time::Instant;

/// Record the duration of a store operation.
pub fn record_operation_duration(operation: &str, duration_secs: f64) {
    histogram!(
        "store_operation_duration_seconds",
        "operation" => operation.to_string()
    )
    .record(duration_secs);
}

/// Count a load that fell back to the default record because the stored one
/// could not be read.
pub fn record_corrupt_load() {
    counter!("store_corrupt_loads_total").increment(1);
}

/// Count a failed save.
pub fn record_write_failure() {
    counter!("store_write_failures_total").increment(1);
}

/// A helper to time store operations and record metrics.
///
/// Usage:
/// ```ignore
/// let timer = StoreTimer::new("save");
/// let result = write_file(&path, &bytes).await;
/// timer.record();
/// result
/// ```
pub struct StoreTimer {
    operation: String,
    start: Instant,
}

impl StoreTimer {
    /// Create a new timer for the given operation name.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            start: Instant::now(),
        }
    }

    /// Record the elapsed duration to metrics.
    pub fn record(self) {
        let duration = self.start.elapsed().as_secs_f64();
        record_operation_duration(&self.operation, duration);
    }
}
