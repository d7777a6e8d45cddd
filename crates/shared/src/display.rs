//! Human-readable formatting for timestamps shown in views.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Formats a timestamp as e.g. `Jan 05, 02:30 PM`.
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format("%b %d, %I:%M %p").to_string()
}

/// Formats a time of day on a 12-hour clock, e.g. `07:00 AM`.
pub fn format_time_12h(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// Describes how long ago a timestamp was, relative to `today`.
///
/// Returns `Today`, `Yesterday` or `N days ago`. Timestamps after `today`
/// are reported as `Today`.
pub fn days_ago(timestamp: NaiveDateTime, today: NaiveDate) -> String {
    let days = (today - timestamp.date()).num_days();
    match days {
        d if d <= 0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        d => format!("{} days ago", d),
    }
}
