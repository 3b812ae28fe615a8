//! HTTP error responses
//!
//! Every failure is rendered as `{"detail": "<message>"}`.

use crate::domain::{ExportError, PrometheusError};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Error returned by HTTP handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, detail)
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail)
    }

    pub fn course_not_found() -> Self {
        Self::not_found("Course not found")
    }
}

impl From<PrometheusError> for ApiError {
    fn from(err: PrometheusError) -> Self {
        let status = match &err {
            PrometheusError::NotFound(_) => StatusCode::NOT_FOUND,
            PrometheusError::Export(ExportError::UnsupportedFormat(_)) => StatusCode::BAD_REQUEST,
            PrometheusError::Export(ExportError::InvalidFileName(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            crate::log_error_with_context!(&err, "Request failed");
        }

        let detail = match err {
            PrometheusError::NotFound(message) => message,
            PrometheusError::Export(inner) => inner.to_string(),
            other => other.to_string(),
        };

        Self::new(status, detail)
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        PrometheusError::from(err).into()
    }
}

// Malformed JSON, a wrong content type and schema violations all surface
// as 422 with the parser's message.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::unprocessable(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::unprocessable(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

/// Result type for HTTP handlers
pub type ApiResult<T> = std::result::Result<T, ApiError>;
