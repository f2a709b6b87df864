// GET handlers: version, api/kinds

use axum::response::IntoResponse;

use crate::models::MetricKind;
use crate::version::{NAME, VERSION};

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/kinds — metric kind tags with a normalized series.
pub(super) async fn kinds_handler() -> impl IntoResponse {
    axum::Json(MetricKind::SUPPORTED.to_vec())
}
