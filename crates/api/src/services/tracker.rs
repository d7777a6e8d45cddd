//! Tracker service.
//!
//! Runs every request as load -> compute -> (mutate) -> save against the
//! injected [`StateStore`]. A single async mutex serializes these sequences
//! so concurrent requests cannot overwrite each other's changes.

use domain::models::{
    DashboardView, HistoryEntryView, HistoryView, LocationView, ScheduleView, StateRecord,
    StatusView, UpdateScheduleRequest, UsageEvent,
};
use domain::services::{history, rotation, schedule_status};
use domain::{Clock, DomainError};
use persistence::{PersistenceError, StateStore};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::config::HistoryConfig;
use crate::middleware::metrics::{record_rollover, record_usage_recorded};

/// Errors returned by [`TrackerService`].
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Schedule update rejected; `view` shows the schedule still in effect.
    #[error("{message}")]
    ScheduleRejected {
        message: String,
        view: Box<ScheduleView>,
    },

    #[error("Location {0} missing from state")]
    MissingLocation(u32),
}

pub struct TrackerService {
    store: Arc<dyn StateStore>,
    clock: Arc<dyn Clock>,
    history: HistoryConfig,
    write_lock: Mutex<()>,
}

impl TrackerService {
    pub fn new(store: Arc<dyn StateStore>, clock: Arc<dyn Clock>, history: HistoryConfig) -> Self {
        Self {
            store,
            clock,
            history,
            write_lock: Mutex::new(()),
        }
    }

    /// Loads the state record. Used by readiness checks.
    pub async fn load(&self) -> StateRecord {
        self.store.load().await
    }

    /// Loads the record and selects the next location, committing a rollover
    /// if one happened.
    async fn load_selected(&self) -> Result<(StateRecord, u32), TrackerError> {
        let mut state = self.store.load().await;
        let selection = rotation::select_next(&mut state);
        if selection.rolled_over {
            self.store.save(&state).await?;
            record_rollover(false);
        }
        Ok((state, selection.location_id))
    }

    pub async fn dashboard(&self) -> Result<DashboardView, TrackerError> {
        let _guard = self.write_lock.lock().await;
        let (state, next_id) = self.load_selected().await?;
        let now = self.clock.now();
        let today = now.date();

        let next = state
            .location(next_id)
            .ok_or(TrackerError::MissingLocation(next_id))?;

        Ok(DashboardView {
            locations: state
                .locations
                .iter()
                .map(|(id, location)| LocationView::new(*id, location))
                .collect(),
            next_location: LocationView::new(next_id, next),
            recent_history: history::recent(&state.history, self.history.recent_limit)
                .iter()
                .map(|event| HistoryEntryView::new(event, today))
                .collect(),
            total_usage_count: state.total_usage_count,
            current_cycle: state.current_cycle,
            schedule_status: schedule_status(&state, now),
            schedule: state.schedule,
        })
    }

    pub async fn status(&self) -> Result<StatusView, TrackerError> {
        let _guard = self.write_lock.lock().await;
        let (state, next_id) = self.load_selected().await?;
        Self::status_view(&state, next_id, self.clock.now())
    }

    fn status_view(
        state: &StateRecord,
        next_id: u32,
        now: chrono::NaiveDateTime,
    ) -> Result<StatusView, TrackerError> {
        let next = state
            .location(next_id)
            .ok_or(TrackerError::MissingLocation(next_id))?;
        Ok(StatusView {
            next_location_id: next_id,
            next_location_name: next.name.clone(),
            total_usage_count: state.total_usage_count,
            current_cycle: state.current_cycle,
            locations_used_this_cycle: state.used_count(),
            total_locations: state.locations.len(),
            schedule_status: schedule_status(state, now),
        })
    }

    /// Records a use of `location_id` at the current time.
    pub async fn record_usage(&self, location_id: u32) -> Result<UsageEvent, TrackerError> {
        let _guard = self.write_lock.lock().await;
        let mut state = self.store.load().await;
        let event = rotation::record_usage(&mut state, location_id, self.clock.now())?;
        self.store.save(&state).await?;
        record_usage_recorded(location_id);
        info!(
            location_id,
            cycle = event.cycle,
            total = state.total_usage_count,
            "Usage recorded"
        );
        Ok(event)
    }

    pub async fn schedule(&self) -> ScheduleView {
        let state = self.store.load().await;
        ScheduleView {
            status: schedule_status(&state, self.clock.now()),
            schedule: state.schedule,
            error: None,
        }
    }

    /// Validates and stores a new schedule.
    ///
    /// On validation failure nothing is saved and the error carries the
    /// schedule still in effect.
    pub async fn update_schedule(
        &self,
        request: UpdateScheduleRequest,
    ) -> Result<ScheduleView, TrackerError> {
        let _guard = self.write_lock.lock().await;
        let mut state = self.store.load().await;
        let now = self.clock.now();

        let config = match request.into_config() {
            Ok(config) => config,
            Err(err) => return Err(Self::schedule_rejected(state, now, err.to_string())),
        };

        state.schedule = config;
        self.store.save(&state).await?;
        info!(
            enabled = state.schedule.enabled,
            start = %state.schedule.start_time,
            end = %state.schedule.end_time,
            "Schedule updated"
        );

        Ok(ScheduleView {
            status: schedule_status(&state, now),
            schedule: state.schedule,
            error: None,
        })
    }

    /// Rejection for an update request that could not be read at all.
    pub async fn reject_schedule_request(&self, message: String) -> TrackerError {
        let state = self.store.load().await;
        Self::schedule_rejected(state, self.clock.now(), message)
    }

    fn schedule_rejected(
        state: StateRecord,
        now: chrono::NaiveDateTime,
        message: String,
    ) -> TrackerError {
        warn!(error = %message, "Rejected schedule update");
        TrackerError::ScheduleRejected {
            view: Box::new(ScheduleView {
                status: schedule_status(&state, now),
                schedule: state.schedule,
                error: Some(message.clone()),
            }),
            message,
        }
    }

    /// Starts a new cycle regardless of how many locations were used.
    pub async fn reset_cycle(&self) -> Result<StatusView, TrackerError> {
        let _guard = self.write_lock.lock().await;
        let mut state = self.store.load().await;
        rotation::reset_cycle(&mut state);
        let next_id = rotation::select_next(&mut state).location_id;
        self.store.save(&state).await?;
        record_rollover(true);
        info!(cycle = state.current_cycle, "Cycle reset");
        Self::status_view(&state, next_id, self.clock.now())
    }

    /// History within the last `days` days, defaulting to the configured window.
    pub async fn history(&self, days: Option<u32>) -> HistoryView {
        let state = self.store.load().await;
        let today = self.clock.now().date();
        let window_days = days.unwrap_or(self.history.window_days);

        let entries = history::within_days(&state.history, today, window_days);
        HistoryView {
            window_days,
            today_count: history::count_on(entries.iter().copied(), today),
            total_in_window: entries.len(),
            history: entries
                .into_iter()
                .map(|event| HistoryEntryView::new(event, today))
                .collect(),
        }
    }
}
