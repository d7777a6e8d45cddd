//! Cycle management routes.

use axum::{extract::State, Json};
use domain::models::StatusView;

use crate::app::AppState;
use crate::error::ApiError;

/// POST /api/v1/cycle/reset
///
/// Marks every location unused and starts the next cycle.
pub async fn reset_cycle(State(state): State<AppState>) -> Result<Json<StatusView>, ApiError> {
    Ok(Json(state.tracker.reset_cycle().await?))
}
