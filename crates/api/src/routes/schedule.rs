//! Schedule configuration routes.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use domain::models::{ScheduleView, UpdateScheduleRequest};

use crate::app::AppState;
use crate::error::ApiError;

/// GET /api/v1/schedule
pub async fn get_schedule(State(state): State<AppState>) -> Json<ScheduleView> {
    Json(state.tracker.schedule().await)
}

/// PUT /api/v1/schedule
///
/// Replaces the schedule. A rejected update, including a body that cannot be
/// read, answers 400 with the schedule still in effect and leaves the store
/// untouched.
pub async fn update_schedule(
    State(state): State<AppState>,
    payload: Result<Json<UpdateScheduleRequest>, JsonRejection>,
) -> Result<Json<ScheduleView>, ApiError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let message = format!("Invalid schedule request: {}", rejection.body_text());
            return Err(state.tracker.reject_schedule_request(message).await.into());
        }
    };
    Ok(Json(state.tracker.update_schedule(request).await?))
}
