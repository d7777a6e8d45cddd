//! Integration tests for recording usage.

mod common;

use axum::http::StatusCode;
use common::{create_test_app, parse_response_body, post_request, test_now};
use tower::ServiceExt;

#[tokio::test]
async fn test_record_usage() {
    let app = create_test_app();

    let response = app
        .router
        .oneshot(post_request("/api/v1/usage/2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Usage recorded at Right of Mouth");

    let saved = app.store.snapshot().await.unwrap();
    assert_eq!(saved.total_usage_count, 1);
    assert_eq!(saved.history.len(), 1);
    assert_eq!(saved.history[0].location_id, 2);
    assert_eq!(saved.history[0].cycle, 1);
    assert_eq!(saved.history[0].timestamp, test_now());
    assert!(saved.locations[&2].used);
    assert_eq!(saved.locations[&2].last_used, Some(test_now()));
}

#[tokio::test]
async fn test_record_usage_counts_every_call() {
    let app = create_test_app();

    for _ in 0..4 {
        let response = app
            .router
            .clone()
            .oneshot(post_request("/api/v1/usage/1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let saved = app.store.snapshot().await.unwrap();
    assert_eq!(saved.total_usage_count, 4);
    assert_eq!(saved.history.len(), 4);
    // Recording never rolls over on its own.
    assert_eq!(saved.current_cycle, 1);
}

#[tokio::test]
async fn test_record_usage_unknown_location() {
    let app = create_test_app();

    let response = app
        .router
        .oneshot(post_request("/api/v1/usage/99"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = parse_response_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid location");
    assert!(app.store.snapshot().await.is_none());
}

#[tokio::test]
async fn test_record_usage_non_numeric_location() {
    let app = create_test_app();

    let response = app
        .router
        .oneshot(post_request("/api/v1/usage/left"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_record_usage_write_failure() {
    let app = create_test_app();
    app.store.set_fail_writes(true);

    let response = app
        .router
        .oneshot(post_request("/api/v1/usage/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "internal_error");
    assert!(app.store.snapshot().await.is_none());
}
