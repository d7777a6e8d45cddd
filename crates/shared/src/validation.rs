//! Common validation utilities.

use chrono::NaiveTime;
use validator::ValidationError;

/// Wire format for time-of-day values (`HH:MM`, 24-hour clock).
pub const TIME_OF_DAY_FORMAT: &str = "%H:%M";

/// Parses a `HH:MM` time-of-day string.
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(value.trim(), TIME_OF_DAY_FORMAT).map_err(|_| {
        let mut err = ValidationError::new("time_format");
        err.message = Some(format!("Invalid time '{}', expected HH:MM", value).into());
        err
    })
}

/// Validates that a string is a well-formed `HH:MM` time of day.
pub fn validate_time_of_day(value: &str) -> Result<(), ValidationError> {
    parse_time_of_day(value).map(|_| ())
}

/// Formats a time of day in the `HH:MM` wire format.
pub fn format_time_of_day(time: NaiveTime) -> String {
    time.format(TIME_OF_DAY_FORMAT).to_string()
}

/// Validates a reminder interval given as separate hour and minute parts.
///
/// Both parts must be non-negative and at least one of them positive.
pub fn validate_interval(hours: i64, minutes: i64) -> Result<(), ValidationError> {
    if hours < 0 || minutes < 0 {
        let mut err = ValidationError::new("interval_negative");
        err.message = Some("Interval must be positive".into());
        return Err(err);
    }
    if hours == 0 && minutes == 0 {
        let mut err = ValidationError::new("interval_zero");
        err.message = Some("Interval must be greater than 0".into());
        return Err(err);
    }
    Ok(())
}
