// Metric normalizer: validates a raw API envelope once, then reshapes its
// `results` into chart series on demand.

pub mod aggregation;
mod parse;
mod parsers;

use serde_json::Value;
use tracing::debug;

use crate::error::{NormalizeError, Result};
use crate::models::{AggregatedSeries, MetricKind, NginxStatusPoint, NormalizedPoint, RawRecord};

pub use aggregation::aggregate_by_date;

/// Converts one telemetry response into chart-ready series.
///
/// The envelope shape is checked in [`MetricNormalizer::new`]; the accessors
/// never fail and never mutate, so calling them repeatedly gives equal output.
///
/// ```
/// use chartmetrics::{MetricKind, MetricNormalizer, NormalizedPoint};
///
/// let data = serde_json::json!([{ "results": [
///     { "date": 100, "cpu": "0.5" },
///     { "date": 200, "cpu": "1.25" },
/// ]}]);
/// let normalizer = MetricNormalizer::new(&data, MetricKind::Cpu).unwrap();
/// assert_eq!(
///     normalizer.parsed_data(),
///     vec![NormalizedPoint::new(100, 0.5), NormalizedPoint::new(200, 1.25)]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MetricNormalizer {
    results: Vec<RawRecord>,
    kind: MetricKind,
}

impl MetricNormalizer {
    /// Fails with [`NormalizeError::InvalidResponseShape`] unless `data` is a
    /// non-empty array whose first element has a `results` array.
    pub fn new(data: &Value, kind: impl Into<MetricKind>) -> Result<Self> {
        let results = data
            .as_array()
            .and_then(|envelope| envelope.first())
            .and_then(|first| first.get("results"))
            .and_then(Value::as_array)
            .ok_or_else(|| NormalizeError::invalid_shape(data))?;

        Ok(Self {
            results: results.iter().cloned().map(RawRecord::from_value).collect(),
            kind: kind.into(),
        })
    }

    /// Parse an envelope straight from a response body.
    pub fn from_slice(body: &[u8], kind: impl Into<MetricKind>) -> Result<Self> {
        let data: Value = serde_json::from_slice(body).map_err(|_| {
            NormalizeError::InvalidResponseShape {
                payload: String::from_utf8_lossy(body).into_owned(),
            }
        })?;
        Self::new(&data, kind)
    }

    pub fn kind(&self) -> &MetricKind {
        &self.kind
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Single-value series for the kind. `nginx:status` and unsupported kinds
    /// have no single-value series and return an empty vector.
    pub fn parsed_data(&self) -> Vec<NormalizedPoint> {
        let Some(value) = parsers::value_parser(&self.kind) else {
            debug!(kind = %self.kind, "no value series for kind");
            return Vec::new();
        };
        let points: Vec<NormalizedPoint> = self
            .results
            .iter()
            .map(|record| parsers::point(record, value))
            .collect();

        let nan_count = points.iter().filter(|p| p.value.is_nan()).count();
        if nan_count > 0 {
            debug!(
                kind = %self.kind,
                nan_count,
                points = points.len(),
                "unparseable samples kept as NaN"
            );
        }
        points
    }

    /// Status-class breakdown; empty unless the kind is `nginx:status`.
    pub fn nginx_status_data(&self) -> Vec<NginxStatusPoint> {
        if self.kind != MetricKind::NginxStatus {
            return Vec::new();
        }
        self.results.iter().map(parsers::nginx_status).collect()
    }

    /// Per-date min/avg/max of [`parsed_data`](Self::parsed_data).
    pub fn aggregated_data(&self) -> AggregatedSeries {
        aggregate_by_date(&self.parsed_data())
    }
}
