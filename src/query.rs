// Telemetry query parameters built from the dashboard's time-range selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NormalizeError;
use crate::models::MetricKind;

/// Time range selectable on a metrics chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricsRange {
    #[serde(rename = "1H")]
    OneHour,
    #[serde(rename = "6H")]
    SixHours,
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "1M")]
    OneMonth,
}

impl MetricsRange {
    pub const ALL: [MetricsRange; 4] = [
        MetricsRange::OneHour,
        MetricsRange::SixHours,
        MetricsRange::OneDay,
        MetricsRange::OneMonth,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MetricsRange::OneHour => "1H",
            MetricsRange::SixHours => "6H",
            MetricsRange::OneDay => "1D",
            MetricsRange::OneMonth => "1M",
        }
    }

    /// Window length ending at "now".
    pub fn seconds_before_now(self) -> i64 {
        match self {
            MetricsRange::OneHour => 60 * 60,
            MetricsRange::SixHours => 60 * 60 * 6,
            MetricsRange::OneDay => 60 * 60 * 24,
            MetricsRange::OneMonth => 60 * 60 * 24 * 30,
        }
    }

    /// Sample step the telemetry API should use for this range.
    pub fn resolution(self) -> &'static str {
        match self {
            MetricsRange::OneHour => "1s",
            MetricsRange::SixHours | MetricsRange::OneDay => "15s",
            MetricsRange::OneMonth => "5h",
        }
    }

    pub fn window(self, now_secs: i64) -> QueryWindow {
        QueryWindow {
            start: now_secs - self.seconds_before_now(),
            end: now_secs,
            resolution: self.resolution().to_string(),
        }
    }
}

impl fmt::Display for MetricsRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricsRange {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricsRange::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NormalizeError::UnknownRange(s.to_string()))
    }
}

/// Start/end (unix seconds) and resolution for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryWindow {
    pub start: i64,
    pub end: i64,
    pub resolution: String,
}

/// Parameters for one telemetry API metrics request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsQuery {
    pub metric: MetricKind,
    pub shouldsum: bool,
    /// Controller kind (deployment, statefulset, ...).
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pods: Vec<String>,
    pub startrange: i64,
    pub endrange: i64,
    pub resolution: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentile: Option<f64>,
}

impl MetricsQuery {
    pub const DEFAULT_CONTROLLER_KIND: &'static str = "deployment";

    /// Query for `metric` over `range` ending at `now_secs`. Percentile is only
    /// meaningful for the latency histogram and is left unset otherwise.
    pub fn build(metric: MetricKind, range: MetricsRange, now_secs: i64, percentile: f64) -> Self {
        let window = range.window(now_secs);
        let percentile = (metric == MetricKind::NginxLatencyHistogram).then_some(percentile);
        Self {
            metric,
            shouldsum: false,
            kind: Self::DEFAULT_CONTROLLER_KIND.to_string(),
            namespace: None,
            name: None,
            pods: Vec::new(),
            startrange: window.start,
            endrange: window.end,
            resolution: window.resolution,
            percentile,
        }
    }

    pub fn with_target(mut self, namespace: Option<String>, name: Option<String>) -> Self {
        self.namespace = namespace;
        self.name = name;
        self
    }

    pub fn with_pods(mut self, pods: Vec<String>) -> Self {
        self.pods = pods;
        self
    }

    pub fn summed(mut self, shouldsum: bool) -> Self {
        self.shouldsum = shouldsum;
        self
    }
}
