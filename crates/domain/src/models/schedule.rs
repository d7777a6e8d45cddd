//! Reminder schedule domain models.

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::error::DomainError;

/// Daily reminder schedule as stored in the state record.
///
/// Times are kept in their `HH:MM` wire form so a hand-edited or damaged
/// record still loads; [`ScheduleConfig::window`] parses them on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_start_time")]
    pub start_time: String,
    #[serde(default = "default_end_time")]
    pub end_time: String,
    #[serde(default = "default_interval_hours")]
    pub interval_hours: i64,
    #[serde(default)]
    pub interval_minutes: i64,
}

fn default_start_time() -> String {
    "07:00".to_string()
}
fn default_end_time() -> String {
    "23:59".to_string()
}
fn default_interval_hours() -> i64 {
    4
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            start_time: default_start_time(),
            end_time: default_end_time(),
            interval_hours: default_interval_hours(),
            interval_minutes: 0,
        }
    }
}

/// Parsed daily window: when reminders start, when they stop, and how often.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub interval: Duration,
}

impl ScheduleWindow {
    /// The window crosses midnight when it ends before it starts.
    pub fn is_overnight(&self) -> bool {
        self.end < self.start
    }
}

impl ScheduleConfig {
    /// Parses the configured window.
    ///
    /// Returns `None` when a time is malformed or the interval is not
    /// positive.
    pub fn window(&self) -> Option<ScheduleWindow> {
        let start = shared::validation::parse_time_of_day(&self.start_time).ok()?;
        let end = shared::validation::parse_time_of_day(&self.end_time).ok()?;
        let interval = self
            .interval_hours
            .checked_mul(60)
            .and_then(|h| h.checked_add(self.interval_minutes))
            .filter(|total| *total > 0)
            .and_then(Duration::try_minutes)?;
        Some(ScheduleWindow {
            start,
            end,
            interval,
        })
    }
}

/// Request payload for replacing the schedule.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateScheduleRequest {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_start_time")]
    #[validate(custom(function = "shared::validation::validate_time_of_day"))]
    pub start_time: String,

    #[serde(default = "default_end_time")]
    #[validate(custom(function = "shared::validation::validate_time_of_day"))]
    pub end_time: String,

    #[serde(default = "default_interval_hours")]
    #[validate(range(min = 0, message = "Interval must be positive"))]
    pub interval_hours: i64,

    #[serde(default)]
    #[validate(range(min = 0, message = "Interval must be positive"))]
    pub interval_minutes: i64,
}

impl UpdateScheduleRequest {
    /// Validates the request and builds the replacement schedule.
    ///
    /// Times are normalized to zero-padded `HH:MM`.
    pub fn into_config(self) -> Result<ScheduleConfig, DomainError> {
        self.validate()
            .map_err(|errors| DomainError::InvalidScheduleConfig(validation_message(&errors)))?;
        shared::validation::validate_interval(self.interval_hours, self.interval_minutes).map_err(
            |err| {
                DomainError::InvalidScheduleConfig(
                    err.message
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "Invalid interval".to_string()),
                )
            },
        )?;

        let start = shared::validation::parse_time_of_day(&self.start_time)
            .map_err(|_| invalid_time(&self.start_time))?;
        let end = shared::validation::parse_time_of_day(&self.end_time)
            .map_err(|_| invalid_time(&self.end_time))?;

        Ok(ScheduleConfig {
            enabled: self.enabled,
            start_time: shared::validation::format_time_of_day(start),
            end_time: shared::validation::format_time_of_day(end),
            interval_hours: self.interval_hours,
            interval_minutes: self.interval_minutes,
        })
    }
}

fn invalid_time(value: &str) -> DomainError {
    DomainError::InvalidScheduleConfig(format!("Invalid time '{}', expected HH:MM", value))
}

/// Flattens validator errors into one human-readable message, ordered by field.
fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let messages: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field))
            })
        })
        .collect();

    if messages.is_empty() {
        "Invalid schedule".to_string()
    } else {
        messages.join("; ")
    }
}
