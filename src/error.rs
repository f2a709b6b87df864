// Library error type: envelope validation and query parsing.

use thiserror::Error;

/// Errors raised by the normalizer and the query builder.
///
/// Per-sample numeric problems are never errors; they surface as NaN in the
/// output series. Only structural problems with the envelope are reported.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The envelope is not a non-empty array whose first element has `results`.
    #[error("invalid metrics response shape ({} bytes)", payload.len())]
    InvalidResponseShape {
        /// The offending payload, serialized as JSON.
        payload: String,
    },

    /// A time range other than 1H, 6H, 1D or 1M.
    #[error("unknown metrics range '{0}'")]
    UnknownRange(String),
}

impl NormalizeError {
    pub(crate) fn invalid_shape(data: &serde_json::Value) -> Self {
        Self::InvalidResponseShape {
            payload: data.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
