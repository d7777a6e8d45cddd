//! Usage history routes.

use axum::{
    extract::{Query, State},
    Json,
};
use domain::models::HistoryView;
use serde::Deserialize;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// Query parameters for the history view.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct HistoryQuery {
    /// Window length in days; the configured default applies when absent.
    #[validate(range(min = 1, max = 3650, message = "days must be between 1 and 3650"))]
    pub days: Option<u32>,
}

/// GET /api/v1/history?days=N
pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryView>, ApiError> {
    query.validate()?;
    Ok(Json(state.tracker.history(query.days).await))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_query_validation() {
        assert!(HistoryQuery { days: None }.validate().is_ok());
        assert!(HistoryQuery { days: Some(30) }.validate().is_ok());
        assert!(HistoryQuery { days: Some(0) }.validate().is_err());
        assert!(HistoryQuery { days: Some(5000) }.validate().is_err());
    }
}
