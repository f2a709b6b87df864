// POST normalization handlers and the GET query builder.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use super::AppState;
use super::error::ApiError;
use crate::models::{AggregatedSeries, MetricKind, NginxStatusPoint, NormalizedPoint};
use crate::normalizer::MetricNormalizer;
use crate::query::{MetricsQuery, MetricsRange};

/// Body for the normalization endpoints: the kind tag plus the raw envelope
/// exactly as the telemetry API returned it.
#[derive(Debug, Deserialize)]
pub(super) struct NormalizeRequest {
    kind: MetricKind,
    data: Value,
}

impl NormalizeRequest {
    fn normalizer(&self) -> Result<MetricNormalizer, ApiError> {
        Ok(MetricNormalizer::new(&self.data, self.kind.clone())?)
    }
}

/// POST /api/metrics/parsed
#[instrument(skip_all, fields(kind = %req.kind))]
pub(super) async fn parsed_handler(
    Json(req): Json<NormalizeRequest>,
) -> Result<Json<Vec<NormalizedPoint>>, ApiError> {
    let points = req.normalizer()?.parsed_data();
    tracing::debug!(points = points.len(), "parsed series");
    Ok(Json(points))
}

/// POST /api/metrics/aggregated
#[instrument(skip_all, fields(kind = %req.kind))]
pub(super) async fn aggregated_handler(
    Json(req): Json<NormalizeRequest>,
) -> Result<Json<AggregatedSeries>, ApiError> {
    let series = req.normalizer()?.aggregated_data();
    tracing::debug!(dates = series.avg.len(), "aggregated series");
    Ok(Json(series))
}

/// POST /api/metrics/nginx-status
#[instrument(skip_all, fields(kind = %req.kind))]
pub(super) async fn nginx_status_handler(
    Json(req): Json<NormalizeRequest>,
) -> Result<Json<Vec<NginxStatusPoint>>, ApiError> {
    let points = req.normalizer()?.nginx_status_data();
    tracing::debug!(points = points.len(), "nginx status series");
    Ok(Json(points))
}

#[derive(Debug, Deserialize)]
pub(super) struct QueryParams {
    kind: String,
    range: Option<String>,
    namespace: Option<String>,
    name: Option<String>,
    /// Comma-separated pod names.
    pods: Option<String>,
    #[serde(default)]
    shouldsum: bool,
}

/// GET /api/metrics/query — telemetry API parameters for a chart request.
pub(super) async fn query_handler(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<MetricsQuery>, ApiError> {
    let range = match params.range.as_deref() {
        Some(r) => r.parse::<MetricsRange>()?,
        None => state.config.query.default_range,
    };
    let pods: Vec<String> = params
        .pods
        .as_deref()
        .map(|p| {
            p.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    let query = MetricsQuery::build(
        MetricKind::from_tag(&params.kind),
        range,
        chrono::Utc::now().timestamp(),
        state.config.query.default_percentile,
    )
    .with_target(params.namespace, params.name)
    .with_pods(pods)
    .summed(params.shouldsum);
    Ok(Json(query))
}
