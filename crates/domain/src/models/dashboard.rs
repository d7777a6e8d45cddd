//! View models handed to the presentation layer.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::{Location, LocationId, ScheduleConfig, UsageEvent};

/// A location together with its id and display labels.
#[derive(Debug, Clone, Serialize)]
pub struct LocationView {
    pub id: LocationId,
    pub name: String,
    pub position: String,
    pub used: bool,
    pub last_used: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_used_label: Option<String>,
}

impl LocationView {
    pub fn new(id: LocationId, location: &Location) -> Self {
        Self {
            id,
            name: location.name.clone(),
            position: location.position.clone(),
            used: location.used,
            last_used: location.last_used,
            last_used_label: location.last_used.map(shared::display::format_timestamp),
        }
    }
}

/// A history entry with pre-formatted labels.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntryView {
    pub location_id: LocationId,
    pub location_name: String,
    pub timestamp: NaiveDateTime,
    pub cycle: u32,
    pub display_time: String,
    pub relative_day: String,
}

impl HistoryEntryView {
    pub fn new(event: &UsageEvent, today: NaiveDate) -> Self {
        Self {
            location_id: event.location_id,
            location_name: event.location_name.clone(),
            timestamp: event.timestamp,
            cycle: event.cycle,
            display_time: shared::display::format_timestamp(event.timestamp),
            relative_day: shared::display::days_ago(event.timestamp, today),
        }
    }
}

/// Where the user stands against today's reminder schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleStatus {
    pub enabled: bool,
    pub next_slot: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_slot_label: Option<String>,
    pub is_overdue: bool,
    pub minutes_delta: Option<i64>,
    pub all_slots_today: Vec<NaiveDateTime>,
    pub completed_slots_today: Vec<NaiveDateTime>,
    pub total_scheduled: usize,
    pub total_completed: usize,
}

impl ScheduleStatus {
    /// Status reported when no schedule is active.
    pub fn inactive() -> Self {
        Self {
            enabled: false,
            next_slot: None,
            next_slot_label: None,
            is_overdue: false,
            minutes_delta: None,
            all_slots_today: Vec::new(),
            completed_slots_today: Vec::new(),
            total_scheduled: 0,
            total_completed: 0,
        }
    }
}

/// Full dashboard view.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub locations: Vec<LocationView>,
    pub next_location: LocationView,
    pub recent_history: Vec<HistoryEntryView>,
    pub total_usage_count: u64,
    pub current_cycle: u32,
    pub schedule: ScheduleConfig,
    pub schedule_status: ScheduleStatus,
}

/// Compact status used by polling clients.
#[derive(Debug, Clone, Serialize)]
pub struct StatusView {
    pub next_location_id: LocationId,
    pub next_location_name: String,
    pub total_usage_count: u64,
    pub current_cycle: u32,
    pub locations_used_this_cycle: usize,
    pub total_locations: usize,
    pub schedule_status: ScheduleStatus,
}

/// Schedule configuration page. `error` is set when an update was rejected.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleView {
    pub schedule: ScheduleConfig,
    pub status: ScheduleStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// History within a trailing window of days.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryView {
    pub window_days: u32,
    pub history: Vec<HistoryEntryView>,
    pub total_in_window: usize,
    pub today_count: usize,
}

/// Result of recording a usage.
#[derive(Debug, Clone, Serialize)]
pub struct RecordUsageResponse {
    pub success: bool,
    pub message: String,
}
