//! Domain models for the rotation tracker.

pub mod dashboard;
pub mod location;
pub mod schedule;
pub mod state;
pub mod usage_event;

pub use dashboard::{
    DashboardView, HistoryEntryView, HistoryView, LocationView, RecordUsageResponse,
    ScheduleStatus, ScheduleView, StatusView,
};
pub use location::{default_locations, Location, LocationId};
pub use schedule::{ScheduleConfig, ScheduleWindow, UpdateScheduleRequest};
pub use state::StateRecord;
pub use usage_event::UsageEvent;
