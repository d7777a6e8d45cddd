//! Schedule engine.
//!
//! Turns the daily reminder window into concrete slots for a day, decides
//! which slots were honoured by a usage event, and reports the single most
//! relevant pending slot.

use chrono::{Days, NaiveDate, NaiveDateTime};

use crate::models::{ScheduleConfig, ScheduleStatus, StateRecord};

/// How far a usage event may be from a slot and still complete it.
pub const MATCH_TOLERANCE_MINUTES: i64 = 30;

/// The pending slot reported by [`next_pending`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSlot {
    pub instant: NaiveDateTime,
    pub is_overdue: bool,
    /// Whole minutes until the slot, or since it when overdue.
    pub minutes_delta: i64,
}

/// All reminder slots for `date`, ascending.
///
/// Empty when the schedule is disabled or its window cannot be parsed.
/// Windows ending before they start run into the following day.
pub fn compute_slots(config: &ScheduleConfig, date: NaiveDate) -> Vec<NaiveDateTime> {
    if !config.enabled {
        return Vec::new();
    }
    let Some(window) = config.window() else {
        return Vec::new();
    };

    let start = date.and_time(window.start);
    let end_date = if window.is_overnight() {
        match date.checked_add_days(Days::new(1)) {
            Some(next) => next,
            None => return Vec::new(),
        }
    } else {
        date
    };
    let end = end_date.and_time(window.end);

    let mut slots = Vec::new();
    let mut current = start;
    while current <= end {
        slots.push(current);
        match current.checked_add_signed(window.interval) {
            Some(next) => current = next,
            None => break,
        }
    }
    slots
}

/// Slots with at least one event within the tolerance window, ascending.
///
/// Each slot is checked against every event on its own, so one event can
/// complete two slots that lie close together.
pub fn match_completed(
    slots: &[NaiveDateTime],
    history_today: &[NaiveDateTime],
) -> Vec<NaiveDateTime> {
    let tolerance_ms = MATCH_TOLERANCE_MINUTES * 60 * 1000;
    slots
        .iter()
        .filter(|slot| {
            history_today
                .iter()
                .any(|event| (*event - **slot).num_milliseconds().abs() <= tolerance_ms)
        })
        .copied()
        .collect()
}

/// The next unmet slot relative to `now`.
///
/// Upcoming slots win over overdue ones: the earliest incomplete slot after
/// `now` is returned if there is one, otherwise the earliest incomplete slot
/// at or before `now`.
pub fn next_pending(
    slots: &[NaiveDateTime],
    completed: &[NaiveDateTime],
    now: NaiveDateTime,
) -> Option<PendingSlot> {
    let is_open = |slot: &&NaiveDateTime| !completed.contains(*slot);

    if let Some(slot) = slots.iter().filter(is_open).find(|slot| **slot > now) {
        return Some(PendingSlot {
            instant: *slot,
            is_overdue: false,
            minutes_delta: (*slot - now).num_minutes(),
        });
    }

    slots
        .iter()
        .filter(is_open)
        .find(|slot| **slot <= now)
        .map(|slot| PendingSlot {
            instant: *slot,
            is_overdue: true,
            minutes_delta: (now - *slot).num_minutes(),
        })
}

/// Schedule status for the day containing `now`.
pub fn schedule_status(state: &StateRecord, now: NaiveDateTime) -> ScheduleStatus {
    if !state.schedule.enabled {
        return ScheduleStatus::inactive();
    }

    let today = now.date();
    let slots = compute_slots(&state.schedule, today);
    let completed = match_completed(&slots, &state.timestamps_on(today));
    let pending = next_pending(&slots, &completed, now);

    ScheduleStatus {
        enabled: true,
        next_slot: pending.map(|p| p.instant),
        next_slot_label: pending.map(|p| shared::display::format_time_12h(p.instant.time())),
        is_overdue: pending.map(|p| p.is_overdue).unwrap_or(false),
        minutes_delta: pending.map(|p| p.minutes_delta),
        total_scheduled: slots.len(),
        total_completed: completed.len(),
        all_slots_today: slots,
        completed_slots_today: completed,
    }
}
