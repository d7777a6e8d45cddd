//! Health check endpoint handlers.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::app::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub store: StoreHealth,
}

/// State store health.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StoreHealth {
    pub data_file: String,
    pub latency_ms: u64,
    pub locations: usize,
}

/// Simple status response for liveness/readiness probes.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Full health check endpoint.
///
/// Loads the state record and reports how long that took.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let start = std::time::Instant::now();
    let record = state.tracker.load().await;
    let latency_ms = start.elapsed().as_millis() as u64;

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: StoreHealth {
            data_file: state.config.storage.data_file.clone(),
            latency_ms,
            locations: record.locations.len(),
        },
    })
}

/// Liveness probe endpoint.
///
/// Returns 200 OK if the process is running.
pub async fn live() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "alive".to_string(),
    })
}

/// Readiness probe endpoint.
///
/// The store falls back to a default record when its data is missing or
/// unreadable, so a completed load means the service can take traffic.
pub async fn ready(State(state): State<AppState>) -> Json<StatusResponse> {
    state.tracker.load().await;
    Json(StatusResponse {
        status: "ready".to_string(),
    })
}
