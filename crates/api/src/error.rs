use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::models::{ScheduleConfig, ScheduleStatus, ScheduleView};
use domain::DomainError;
use persistence::PersistenceError;
use serde::Serialize;
use thiserror::Error;

use crate::services::TrackerError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Schedule update rejected; carries the unchanged schedule for display.
    #[error("Invalid schedule: {message}")]
    ScheduleRejected {
        message: String,
        view: Box<ScheduleView>,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<ValidationDetail>>,
}

#[derive(Debug, Serialize)]
struct ScheduleRejectedBody {
    error: &'static str,
    message: String,
    schedule: ScheduleConfig,
    status: ScheduleStatus,
}

#[derive(Debug, Serialize)]
pub struct ValidationDetail {
    pub field: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg),
            ApiError::ScheduleRejected { message, view } => {
                let ScheduleView {
                    schedule, status, ..
                } = *view;
                let body = ScheduleRejectedBody {
                    error: "invalid_schedule",
                    message,
                    schedule,
                    status,
                };
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".into(),
                )
            }
        };

        let body = ErrorBody {
            error: error_code.into(),
            message,
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidLocation(_) => ApiError::Validation("Invalid location".into()),
            DomainError::InvalidScheduleConfig(msg) => ApiError::Validation(msg),
        }
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        ApiError::Internal(format!("Failed to persist state: {}", err))
    }
}

impl From<TrackerError> for ApiError {
    fn from(err: TrackerError) -> Self {
        match err {
            TrackerError::Domain(err) => err.into(),
            TrackerError::Persistence(err) => err.into(),
            TrackerError::ScheduleRejected { message, view } => {
                ApiError::ScheduleRejected { message, view }
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details: Vec<ValidationDetail> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| ValidationDetail {
                    field: field.to_string(),
                    message: e.message.clone().map(|m| m.to_string()).unwrap_or_default(),
                })
            })
            .collect();

        let message = match details.as_slice() {
            [single] => single.message.clone(),
            _ => format!("{} validation errors", details.len()),
        };

        ApiError::Validation(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_api_error_not_found() {
        let error = ApiError::NotFound("resource not found".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_api_error_validation() {
        let error = ApiError::Validation("invalid input".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_api_error_internal_hides_message() {
        let error = ApiError::Internal("disk full".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "internal_error");
        assert_eq!(body["message"], "An internal error occurred");
    }

    #[tokio::test]
    async fn test_schedule_rejected_body() {
        let error = ApiError::ScheduleRejected {
            message: "Interval must be greater than 0".to_string(),
            view: Box::new(ScheduleView {
                schedule: ScheduleConfig::default(),
                status: ScheduleStatus::inactive(),
                error: Some("Interval must be greater than 0".to_string()),
            }),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "invalid_schedule");
        assert_eq!(body["message"], "Interval must be greater than 0");
        assert_eq!(body["schedule"]["start_time"], "07:00");
        assert_eq!(body["status"]["enabled"], false);
    }

    #[test]
    fn test_from_domain_error() {
        let error: ApiError = DomainError::InvalidLocation(42).into();
        match error {
            ApiError::Validation(msg) => assert_eq!(msg, "Invalid location"),
            _ => panic!("Expected Validation error"),
        }

        let error: ApiError = DomainError::InvalidScheduleConfig("bad".into()).into();
        assert!(matches!(error, ApiError::Validation(msg) if msg == "bad"));
    }

    #[test]
    fn test_from_persistence_error() {
        let error: ApiError = PersistenceError::Unavailable("down".into()).into();
        match error {
            ApiError::Internal(msg) => assert!(msg.contains("down")),
            _ => panic!("Expected Internal error"),
        }
    }

    #[test]
    fn test_from_tracker_error() {
        let error: ApiError = TrackerError::MissingLocation(4).into();
        assert!(matches!(error, ApiError::Internal(msg) if msg.contains('4')));

        let error: ApiError = TrackerError::Domain(DomainError::InvalidLocation(7)).into();
        assert!(matches!(error, ApiError::Validation(_)));
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(
            format!("{}", ApiError::NotFound("test".to_string())),
            "Not found: test"
        );
        assert_eq!(
            format!("{}", ApiError::Validation("test".to_string())),
            "Validation error: test"
        );
        assert_eq!(
            format!("{}", ApiError::Internal("test".to_string())),
            "Internal error: test"
        );
    }
}
