// Raw telemetry API records. Field sets vary by metric kind, so records are
// kept as JSON objects and read field-by-field by the per-kind parsers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One per-timestamp record from an envelope's `results` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    /// Non-object records carry no fields; every read on them is missing.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Raw `date` field (numeric timestamp, occasionally a numeric string).
    pub fn date(&self) -> Option<&Value> {
        self.field("date")
    }
}
