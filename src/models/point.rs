// Chart-ready output shapes.

use serde::{Deserialize, Serialize};

/// One `{date, value}` sample in chart units.
///
/// `value` may be NaN for samples the API sent in an unparseable form;
/// serde_json writes NaN as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub date: i64,
    #[serde(deserialize_with = "nullable_f64")]
    pub value: f64,
}

impl NormalizedPoint {
    pub fn new(date: i64, value: f64) -> Self {
        Self { date, value }
    }
}

fn nullable_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// NGINX response counts by status class at one timestamp.
/// A count the API sent in an unparseable form is `None` (`null` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NginxStatusPoint {
    pub date: i64,
    #[serde(rename = "1xx")]
    pub status_1xx: Option<i64>,
    #[serde(rename = "2xx")]
    pub status_2xx: Option<i64>,
    #[serde(rename = "3xx")]
    pub status_3xx: Option<i64>,
    #[serde(rename = "4xx")]
    pub status_4xx: Option<i64>,
    #[serde(rename = "5xx")]
    pub status_5xx: Option<i64>,
}

/// Which reduction an aggregated series holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateKind {
    Min,
    Avg,
    Max,
}

/// Per-date min/avg/max of a normalized series.
/// All three series share the same dates in first-seen order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregatedSeries {
    pub min: Vec<NormalizedPoint>,
    pub avg: Vec<NormalizedPoint>,
    pub max: Vec<NormalizedPoint>,
}

impl AggregatedSeries {
    pub fn get(&self, kind: AggregateKind) -> &[NormalizedPoint] {
        match kind {
            AggregateKind::Min => &self.min,
            AggregateKind::Avg => &self.avg,
            AggregateKind::Max => &self.max,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_empty() && self.avg.is_empty() && self.max.is_empty()
    }
}
