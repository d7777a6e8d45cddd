//! Integration tests for health endpoints and file-backed startup.

mod common;

use axum::http::StatusCode;
use common::{get_request, parse_response_body, test_config, test_now};
use domain::FixedClock;
use persistence::JsonFileStore;
use rotation_tracker_api::app::create_app;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_endpoints() {
    let app = common::create_test_app();

    let response = app
        .router
        .clone()
        .oneshot(get_request("/api/health/live"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_response_body(response).await["status"], "alive");

    let response = app
        .router
        .clone()
        .oneshot(get_request("/api/health/ready"))
        .await
        .unwrap();
    assert_eq!(parse_response_body(response).await["status"], "ready");

    let response = app
        .router
        .oneshot(get_request("/api/health"))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["store"]["locations"], 3);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = common::create_test_app();

    let request = axum::http::Request::builder()
        .uri("/api/health/live")
        .header("X-Request-ID", "abc-123")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.router.oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "abc-123");
}

#[tokio::test]
async fn test_corrupt_data_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("spray_data.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = Arc::new(JsonFileStore::new(&path));
    let router = create_app(
        test_config(),
        store,
        Arc::new(FixedClock::new(test_now())),
    );

    let response = router
        .clone()
        .oneshot(get_request("/api/status"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["next_location_id"], 1);
    assert_eq!(body["current_cycle"], 1);

    let response = router
        .oneshot(common::post_request("/api/v1/usage/3"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["total_usage_count"], 1);
    assert_eq!(saved["locations"]["3"]["used"], true);
}
