use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use domain::Clock;
use persistence::StateStore;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::error::ApiError;
use crate::middleware::{metrics_handler, metrics_middleware, trace_id};
use crate::routes::{cycle, dashboard, health, history, schedule, usage};
use crate::services::TrackerService;

#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<TrackerService>,
    pub config: Arc<Config>,
}

pub fn create_app(config: Config, store: Arc<dyn StateStore>, clock: Arc<dyn Clock>) -> Router {
    let config = Arc::new(config);

    let tracker = Arc::new(TrackerService::new(
        store,
        clock,
        config.history.clone(),
    ));

    let state = AppState {
        tracker,
        config: config.clone(),
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let tracker_routes = Router::new()
        .route("/api/status", get(dashboard::get_status))
        .route("/api/v1/dashboard", get(dashboard::get_dashboard))
        .route("/api/v1/usage/:location_id", post(usage::record_usage))
        .route(
            "/api/v1/schedule",
            get(schedule::get_schedule).put(schedule::update_schedule),
        )
        .route("/api/v1/cycle/reset", post(cycle::reset_cycle))
        .route("/api/v1/history", get(history::get_history));

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(tracker_routes)
        .fallback(not_found)
        // Global middleware (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound("No route matches this path".to_string())
}
