//! Application error handling
//!
//! Maps internal errors to HTTP responses with the API's flat
//! `{"message": "..."}` body. Validation failures carry their message to the
//! client; store and codec faults are logged server-side and answered with a
//! generic per-operation message, never internal detail.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use educa_shared::types::MessageResponse;
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// A store/codec fault surfaced with an operation-specific 500 message,
    /// e.g. "Could not process login". The source is logged, not leaked.
    #[error("{message}")]
    Service {
        message: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    /// Wrap a fault with the 500 message the client should see
    pub fn service(message: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self::Service {
            message: message.into(),
            source: source.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Service { message, source } => {
                error!("Service error: {}: {:?}", message, source);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            ApiError::Database(err) => {
                error!("Database error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(MessageResponse { message })).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_status() {
        let error = ApiError::Validation("Invalid email".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unauthorized_error_status() {
        let error = ApiError::Unauthorized("Unauthorized".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_not_found_error_status() {
        let error = ApiError::NotFound("Student not found".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_service_error_keeps_client_message() {
        let error = ApiError::service("Could not process login", anyhow::anyhow!("pool down"));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
