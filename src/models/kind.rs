// Metric kind tags as sent by the telemetry API and the dashboard.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// What the raw values in an envelope represent.
///
/// Parsed from the wire tag (e.g. `"nginx:latency-histogram"`). Tags that match
/// none of the known kinds are kept as [`MetricKind::Unsupported`] so callers
/// can still echo them back; they normalize to an empty series.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Cpu,
    Memory,
    Network,
    NginxErrors,
    NginxLatency,
    NginxLatencyHistogram,
    NginxStatus,
    HpaReplicas,
    Unsupported(String),
}

impl MetricKind {
    /// Every supported kind, in dispatch priority order.
    pub const SUPPORTED: [MetricKind; 8] = [
        MetricKind::Cpu,
        MetricKind::Memory,
        MetricKind::Network,
        MetricKind::NginxErrors,
        MetricKind::NginxLatency,
        MetricKind::NginxLatencyHistogram,
        MetricKind::NginxStatus,
        MetricKind::HpaReplicas,
    ];

    /// Parse a wire tag.
    ///
    /// Exact tags win. Compound tags that embed a known tag (for instance
    /// `"cpu_hpa_threshold"`) fall back to containment, checked in priority
    /// order: cpu, memory, network, nginx:errors, nginx:latency-histogram,
    /// nginx:latency, hpa_replicas, nginx:status. Kinds with a value series
    /// come first, so a tag naming both hpa_replicas and nginx:status charts
    /// replicas.
    pub fn from_tag(tag: &str) -> Self {
        if let Some(kind) = Self::SUPPORTED.iter().find(|k| k.as_tag() == tag) {
            return kind.clone();
        }
        const CONTAINMENT: [(&str, MetricKind); 8] = [
            ("cpu", MetricKind::Cpu),
            ("memory", MetricKind::Memory),
            ("network", MetricKind::Network),
            ("nginx:errors", MetricKind::NginxErrors),
            ("nginx:latency-histogram", MetricKind::NginxLatencyHistogram),
            ("nginx:latency", MetricKind::NginxLatency),
            ("hpa_replicas", MetricKind::HpaReplicas),
            ("nginx:status", MetricKind::NginxStatus),
        ];
        CONTAINMENT
            .iter()
            .find(|(needle, _)| tag.contains(needle))
            .map(|(_, kind)| kind.clone())
            .unwrap_or_else(|| MetricKind::Unsupported(tag.to_string()))
    }

    pub fn as_tag(&self) -> &str {
        match self {
            MetricKind::Cpu => "cpu",
            MetricKind::Memory => "memory",
            MetricKind::Network => "network",
            MetricKind::NginxErrors => "nginx:errors",
            MetricKind::NginxLatency => "nginx:latency",
            MetricKind::NginxLatencyHistogram => "nginx:latency-histogram",
            MetricKind::NginxStatus => "nginx:status",
            MetricKind::HpaReplicas => "hpa_replicas",
            MetricKind::Unsupported(tag) => tag,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, MetricKind::Unsupported(_))
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl From<&str> for MetricKind {
    fn from(tag: &str) -> Self {
        MetricKind::from_tag(tag)
    }
}

impl Serialize for MetricKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for MetricKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(MetricKind::from_tag(&tag))
    }
}
