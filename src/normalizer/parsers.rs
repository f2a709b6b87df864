// Per-kind conversions from raw records to chart units.

use serde_json::Value;

use super::parse::{float_field, int_field, whole_field};
use crate::models::{MetricKind, NginxStatusPoint, NormalizedPoint, RawRecord};

const BYTES_PER_KIB: f64 = 1024.0;
const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

pub(crate) type ValueParser = fn(&RawRecord) -> f64;

/// Value conversion for one supported kind; `None` for kinds with no
/// single-value series (nginx:status, unsupported tags).
pub(crate) fn value_parser(kind: &MetricKind) -> Option<ValueParser> {
    match kind {
        MetricKind::Cpu => Some(cpu),
        MetricKind::Memory => Some(memory),
        MetricKind::Network => Some(network),
        MetricKind::NginxErrors => Some(nginx_errors),
        MetricKind::NginxLatency | MetricKind::NginxLatencyHistogram => Some(nginx_latency),
        MetricKind::HpaReplicas => Some(hpa_replicas),
        MetricKind::NginxStatus | MetricKind::Unsupported(_) => None,
    }
}

/// Fraction of a core.
fn cpu(record: &RawRecord) -> f64 {
    float_field(record.field("cpu"))
}

/// Bytes to MiB.
fn memory(record: &RawRecord) -> f64 {
    float_field(record.field("memory")) / BYTES_PER_MIB
}

/// Bytes to KiB.
fn network(record: &RawRecord) -> f64 {
    float_field(record.field("bytes")) / BYTES_PER_KIB
}

fn nginx_errors(record: &RawRecord) -> f64 {
    float_field(record.field("error_pct"))
}

/// The API reports latency as the string "NaN" when there was no traffic;
/// that is charted as zero.
fn nginx_latency(record: &RawRecord) -> f64 {
    match record.field("latency") {
        Some(Value::String(s)) if s == "NaN" => 0.0,
        other => float_field(other),
    }
}

fn hpa_replicas(record: &RawRecord) -> f64 {
    whole_field(record.field("replicas"))
}

/// Raw timestamps pass through; a record without one is charted at 0.
pub(crate) fn date(record: &RawRecord) -> i64 {
    int_field(record.date()).unwrap_or(0)
}

pub(crate) fn point(record: &RawRecord, value: ValueParser) -> NormalizedPoint {
    NormalizedPoint::new(date(record), value(record))
}

pub(crate) fn nginx_status(record: &RawRecord) -> NginxStatusPoint {
    NginxStatusPoint {
        date: date(record),
        status_1xx: int_field(record.field("1xx")),
        status_2xx: int_field(record.field("2xx")),
        status_3xx: int_field(record.field("3xx")),
        status_4xx: int_field(record.field("4xx")),
        status_5xx: int_field(record.field("5xx")),
    }
}
