//! Rotation engine.
//!
//! Picks the next location in ascending id order and rolls the cycle over
//! once every location has been used.
//!
//! Selection and persistence are split: [`select_next`] applies a rollover
//! to the in-memory record and reports it through [`Selection::rolled_over`];
//! the caller is responsible for committing the record to the store.

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use crate::error::DomainError;
use crate::models::{LocationId, StateRecord, UsageEvent};

/// Outcome of [`select_next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub location_id: LocationId,
    /// The cycle was rolled over to make this selection; the record changed.
    pub rolled_over: bool,
}

/// Lowest-id location not yet used in the current cycle, without mutating.
pub fn peek_next(state: &StateRecord) -> Option<LocationId> {
    state
        .locations
        .iter()
        .find(|(_, location)| !location.used)
        .map(|(id, _)| *id)
}

/// Selects the next location, rolling the cycle over when none is unused.
pub fn select_next(state: &mut StateRecord) -> Selection {
    if let Some(location_id) = peek_next(state) {
        return Selection {
            location_id,
            rolled_over: false,
        };
    }

    if state.locations.is_empty() {
        warn!("Location set is empty, restoring defaults");
        state.backfill_default_locations();
    }

    reset_cycle(state);
    let location_id = state.locations.keys().next().copied().unwrap_or(1);
    info!(
        cycle = state.current_cycle,
        location_id, "All locations used, started new cycle"
    );

    Selection {
        location_id,
        rolled_over: true,
    }
}

/// Records a use of `location_id` at `now`.
///
/// Marks the location used, appends a history event and bumps the usage
/// counter. Never rolls the cycle over.
pub fn record_usage(
    state: &mut StateRecord,
    location_id: LocationId,
    now: NaiveDateTime,
) -> Result<UsageEvent, DomainError> {
    let cycle = state.current_cycle;
    let location = state
        .locations
        .get_mut(&location_id)
        .ok_or(DomainError::InvalidLocation(location_id))?;

    location.used = true;
    location.last_used = Some(now);

    let event = UsageEvent {
        location_id,
        location_name: location.name.clone(),
        timestamp: now,
        cycle,
    };
    state.history.push(event.clone());
    state.total_usage_count = state.total_usage_count.saturating_add(1);

    debug!(
        location_id,
        cycle,
        total = state.total_usage_count,
        "Recorded usage"
    );
    Ok(event)
}

/// Marks every location unused and advances the cycle counter.
pub fn reset_cycle(state: &mut StateRecord) {
    for location in state.locations.values_mut() {
        location.used = false;
    }
    state.current_cycle = state.current_cycle.saturating_add(1);
}
