// Library errors as HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::NormalizeError;

#[derive(Debug)]
pub struct ApiError(pub NormalizeError);

impl From<NormalizeError> for ApiError {
    fn from(e: NormalizeError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.0.to_string();
        let (status, payload) = match self.0 {
            NormalizeError::InvalidResponseShape { payload } => {
                (StatusCode::UNPROCESSABLE_ENTITY, Some(payload))
            }
            NormalizeError::UnknownRange(_) => (StatusCode::BAD_REQUEST, None),
        };
        tracing::warn!(status = status.as_u16(), error = %message, "request rejected");
        let body = serde_json::json!({
            "error": message,
            "payload": payload,
        });
        (status, Json(body)).into_response()
    }
}
