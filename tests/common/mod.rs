// Shared test helpers

#![allow(dead_code)]

use serde_json::{Value, json};

/// Wrap records in the telemetry API envelope: `[{ "results": [...] }]`.
pub fn envelope(results: Vec<Value>) -> Value {
    json!([{ "results": results }])
}

/// Envelope of `{date, <field>: "<value>"}` records.
pub fn string_samples(field: &str, samples: &[(i64, &str)]) -> Value {
    envelope(
        samples
            .iter()
            .map(|(date, v)| json!({ "date": date, field: v }))
            .collect(),
    )
}

pub const TEST_CONFIG: &str = r#"
[server]
port = 8081
host = "0.0.0.0"

[limits]
max_body_bytes = 65536

[query]
default_range = "6H"
default_percentile = 0.99
"#;
