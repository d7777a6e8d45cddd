//! Domain services for the rotation tracker.
//!
//! Services contain the decision logic that operates on the state record.

pub mod history;
pub mod rotation;
pub mod schedule;

pub use rotation::{peek_next, record_usage, reset_cycle, select_next, Selection};
pub use schedule::{
    compute_slots, match_completed, next_pending, schedule_status, PendingSlot,
    MATCH_TOLERANCE_MINUTES,
};
