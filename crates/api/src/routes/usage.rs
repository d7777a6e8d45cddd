//! Usage recording routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::RecordUsageResponse;
use domain::DomainError;

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::TrackerError;

/// POST /api/v1/usage/:location_id
///
/// Unknown or non-numeric ids answer 400 with `success: false`.
pub async fn record_usage(
    State(state): State<AppState>,
    Path(location_id): Path<String>,
) -> Result<(StatusCode, Json<RecordUsageResponse>), ApiError> {
    let Ok(id) = location_id.trim().parse::<u32>() else {
        return Ok(invalid_location());
    };

    match state.tracker.record_usage(id).await {
        Ok(event) => Ok((
            StatusCode::OK,
            Json(RecordUsageResponse {
                success: true,
                message: format!("Usage recorded at {}", event.location_name),
            }),
        )),
        Err(TrackerError::Domain(DomainError::InvalidLocation(_))) => Ok(invalid_location()),
        Err(err) => Err(err.into()),
    }
}

fn invalid_location() -> (StatusCode, Json<RecordUsageResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(RecordUsageResponse {
            success: false,
            message: "Invalid location".to_string(),
        }),
    )
}
