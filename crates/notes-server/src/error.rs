//! API error types with JSON responses.
//!
//! Two distinct error surfaces exist. Operation failures map to the
//! [`ErrorBody`] shape every contract declares for status 500. Routing-layer
//! failures (no matching contract, rejected input) happen before any contract
//! applies and use a plain `{error: {code, message}}` body instead.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use http::Method;
use serde::{Deserialize, Serialize};

use notes_core::SchemaError;

/// Error body declared by every contract's 500 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Handler-supplied context, e.g. "Error creating note".
    pub message: String,
    /// Description of the underlying failure.
    pub details: String,
}

/// A failed operation: handler-supplied context plus the underlying error.
///
/// Converting into [`ErrorBody`] is the error-mapping step; the status code
/// is always 500 regardless of the underlying error class.
#[derive(Debug, thiserror::Error)]
#[error("{message}: {details}")]
pub struct OperationError {
    pub message: String,
    pub details: String,
}

impl OperationError {
    /// Label an underlying failure with operation-specific context.
    pub fn new(message: impl Into<String>, source: impl std::fmt::Display) -> Self {
        Self {
            message: message.into(),
            details: source.to_string(),
        }
    }

    /// Map into the contract's typed error body.
    pub fn into_body(self) -> ErrorBody {
        ErrorBody {
            message: self.message,
            details: self.details,
        }
    }
}

/// API error that can be returned from the dispatcher.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No contract matches the request (404).
    #[error("no contract matches {method} {path}")]
    NoContract { method: Method, path: String },

    /// Request rejected before dispatch (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Operation failed (500, contract error body).
    #[error(transparent)]
    Operation(OperationError),

    /// Handler output did not match the declared response schema (500).
    /// Well-formed handlers never produce this; it is a defect, not a
    /// recoverable condition.
    #[error("response schema violation: {0}")]
    ResponseShape(SchemaError),
}

impl ApiError {
    /// Get the error code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoContract { .. } => "NOT_FOUND",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Operation(_) => "INTERNAL_ERROR",
            Self::ResponseShape(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NoContract { .. } => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Operation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ResponseShape(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body for routing-layer errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error details.
    pub error: ErrorDetails,
}

/// Error details within the routing-layer response.
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    /// Error code (e.g., "NOT_FOUND", "BAD_REQUEST").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::Operation(op) => (status, Json(op.into_body())).into_response(),
            Self::ResponseShape(e) => {
                let body = ErrorBody {
                    message: "Error serializing response".to_string(),
                    details: e.to_string(),
                };
                (status, Json(body)).into_response()
            }
            other => {
                let body = ErrorResponse {
                    error: ErrorDetails {
                        code: other.code().to_string(),
                        message: other.to_string(),
                    },
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_error_labels_underlying_failure() {
        let err = OperationError::new("Error creating note", "UNIQUE constraint failed");
        let body = err.into_body();
        assert_eq!(body.message, "Error creating note");
        assert_eq!(body.details, "UNIQUE constraint failed");
    }

    #[test]
    fn status_codes_by_variant() {
        let not_found = ApiError::NoContract {
            method: Method::GET,
            path: "/nope".to_string(),
        };
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let bad = ApiError::BadRequest("x".to_string());
        assert_eq!(bad.status_code(), StatusCode::BAD_REQUEST);

        let op = ApiError::Operation(OperationError::new("m", "d"));
        assert_eq!(op.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_body_serializes_both_fields() {
        let body = ErrorBody {
            message: "Error getting note".to_string(),
            details: "note not found: 7".to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"message\""));
        assert!(json.contains("\"details\""));
    }
}
