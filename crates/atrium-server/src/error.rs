//! Error handling for the REST API server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;
use tracing::error;

use atrium_core::error::AtriumError;

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    // Common error constructors
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.status, self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code,
                message: self.message,
            },
        };

        (self.status, Json(body)).into_response()
    }
}

// Convert from atrium-core errors. Store faults carry their cause detail to
// the log; clients only receive the classified message.
impl From<AtriumError> for ApiError {
    fn from(err: AtriumError) -> Self {
        if !err.is_client_fault() {
            error!(error = %err, code = err.code().as_str(), "request failed");
        }

        match err {
            AtriumError::Validation { message, .. } => ApiError::bad_request(message),
            err @ AtriumError::NotFound { .. } => ApiError::not_found(err.to_string()),
            AtriumError::Timeout { operation } => {
                ApiError::internal(format!("operation timed out: {operation}"))
            }
            AtriumError::Database { message, .. } => {
                ApiError::internal(format!("database error: {message}"))
            }
            AtriumError::GraphStore { message, .. } => {
                ApiError::internal(format!("graph store error: {message}"))
            }
            AtriumError::SchemaCreation { message, .. } => {
                ApiError::internal(format!("schema error: {message}"))
            }
            AtriumError::Configuration(message) => ApiError::internal(message),
            AtriumError::Serialization(err) => {
                ApiError::internal(format!("serialization error: {err}"))
            }
            AtriumError::Internal(message) => ApiError::internal(message),
        }
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
