//! Common test utilities for integration tests.
//!
//! Builds the router over an in-memory store and a fixed clock so tests
//! control both the persisted record and the time of day.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use chrono::{NaiveDate, NaiveDateTime};
use domain::FixedClock;
use persistence::InMemoryStore;
use rotation_tracker_api::{app::create_app, config::Config};
use std::sync::Arc;

/// Router plus handles on its store and clock.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryStore>,
    pub clock: Arc<FixedClock>,
}

/// Test configuration with defaults.
pub fn test_config() -> Config {
    Config::load_for_test(&[]).expect("Failed to load test config")
}

/// Local time used as "now" unless a test moves the clock.
pub fn test_now() -> NaiveDateTime {
    at(2024, 6, 12, 12, 0)
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// Create a test application over an empty in-memory store.
pub fn create_test_app() -> TestApp {
    create_test_app_with_store(Arc::new(InMemoryStore::new()))
}

pub fn create_test_app_with_store(store: Arc<InMemoryStore>) -> TestApp {
    let clock = Arc::new(FixedClock::new(test_now()));
    let router = create_app(test_config(), store.clone(), clock.clone());
    TestApp {
        router,
        store,
        clock,
    }
}

/// Build a GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Build a POST request without a body.
pub fn post_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Build a request with a JSON body.
pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Helper to parse JSON response body.
pub async fn parse_response_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
}
