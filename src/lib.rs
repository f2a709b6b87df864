// Library for tests and chart clients to access modules

pub mod config;
pub mod error;
pub mod models;
pub mod normalizer;
pub mod query;
pub mod routes;
pub mod version;

pub use error::NormalizeError;
pub use models::{
    AggregateKind, AggregatedSeries, MetricKind, NginxStatusPoint, NormalizedPoint, RawRecord,
};
pub use normalizer::MetricNormalizer;
pub use query::{MetricsQuery, MetricsRange, QueryWindow};
