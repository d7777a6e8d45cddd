//! Dashboard and status routes.

use axum::{extract::State, Json};
use domain::models::{DashboardView, StatusView};

use crate::app::AppState;
use crate::error::ApiError;

/// GET /api/v1/dashboard
///
/// Full dashboard. Selecting the next location may roll the cycle over; the
/// rollover is saved before the response is built.
pub async fn get_dashboard(State(state): State<AppState>) -> Result<Json<DashboardView>, ApiError> {
    Ok(Json(state.tracker.dashboard().await?))
}

/// GET /api/status
///
/// Compact status for polling clients.
pub async fn get_status(State(state): State<AppState>) -> Result<Json<StatusView>, ApiError> {
    Ok(Json(state.tracker.status().await?))
}
