// HTTP routes

mod error;
mod http;
mod metrics;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;

pub use error::ApiError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: AppConfig,
}

pub fn app(config: AppConfig) -> Router {
    let body_limit = config.limits.max_body_bytes;
    let state = AppState { config };
    Router::new()
        .route("/", get(|| async { "chartmetrics: metric normalizer is running" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/kinds", get(http::kinds_handler)) // GET /api/kinds
        .route("/api/metrics/parsed", post(metrics::parsed_handler)) // POST /api/metrics/parsed
        .route("/api/metrics/aggregated", post(metrics::aggregated_handler)) // POST /api/metrics/aggregated
        .route("/api/metrics/nginx-status", post(metrics::nginx_status_handler)) // POST /api/metrics/nginx-status
        .route("/api/metrics/query", get(metrics::query_handler)) // GET /api/metrics/query
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
