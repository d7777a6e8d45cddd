//! Queries over the usage history.

use chrono::NaiveDate;

use crate::models::UsageEvent;

/// The last `limit` events, oldest first.
pub fn recent(history: &[UsageEvent], limit: usize) -> &[UsageEvent] {
    let start = history.len().saturating_sub(limit);
    &history[start..]
}

/// Events dated no earlier than `days` days before `today`, in history order.
pub fn within_days(history: &[UsageEvent], today: NaiveDate, days: u32) -> Vec<&UsageEvent> {
    let cutoff = today
        .checked_sub_days(chrono::Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN);
    history
        .iter()
        .filter(|event| event.timestamp.date() >= cutoff)
        .collect()
}

/// Number of events recorded on `date`.
pub fn count_on<'a, I>(events: I, date: NaiveDate) -> usize
where
    I: IntoIterator<Item = &'a UsageEvent>,
{
    events
        .into_iter()
        .filter(|event| event.timestamp.date() == date)
        .count()
}
