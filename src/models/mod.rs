// Domain models: metric kinds, raw API records, normalized chart points

mod kind;
mod point;
mod raw;

pub use kind::MetricKind;
pub use point::{AggregateKind, AggregatedSeries, NginxStatusPoint, NormalizedPoint};
pub use raw::RawRecord;
