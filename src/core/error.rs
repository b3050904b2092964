//! Typed error handling for the guard
//!
//! Two disjoint error kinds:
//!
//! - [`ConfigError`]: a deployment or route-wiring mistake (no validator on
//!   a guarded route, unknown validator name). Fatal, surfaced immediately,
//!   never merged with validation output.
//! - [`ValidationFailure`]: the expected, recoverable outcome for bad
//!   input, rendered as a client error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::fmt;

use super::violation::ValidationFailure;

/// The error type surfaced by the guard to the request pipeline
#[derive(Debug)]
pub enum GuardError {
    /// Route-wiring mistake, not bad input
    Config(ConfigError),

    /// Bad input; carries one or more field violations
    Validation(ValidationFailure),
}

/// Errors indicating a misconfigured route rather than a bad request
#[derive(Debug)]
pub enum ConfigError {
    /// A guarded route declared no validator
    MissingValidator,

    /// The declared validator name is not registered
    UnknownValidator { name: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingValidator => {
                write!(
                    f,
                    "Cannot validate request without a validator. Make sure to declare one on the route"
                )
            }
            ConfigError::UnknownValidator { name } => {
                write!(f, "No validator named '{}' is registered", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl fmt::Display for GuardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuardError::Config(e) => write!(f, "{}", e),
            GuardError::Validation(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for GuardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GuardError::Config(e) => Some(e),
            GuardError::Validation(e) => Some(e),
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl GuardError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // A misconfigured route is a server fault, not a client one
            GuardError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GuardError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            GuardError::Config(ConfigError::MissingValidator) => "MISSING_VALIDATOR",
            GuardError::Config(ConfigError::UnknownValidator { .. }) => "UNKNOWN_VALIDATOR",
            GuardError::Validation(_) => "VALIDATION_FAILED",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            GuardError::Validation(failure) => {
                Some(serde_json::json!({ "violations": failure.violations }))
            }
            GuardError::Config(_) => None,
        }
    }
}

impl IntoResponse for GuardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

impl From<ConfigError> for GuardError {
    fn from(err: ConfigError) -> Self {
        GuardError::Config(err)
    }
}

impl From<ValidationFailure> for GuardError {
    fn from(err: ValidationFailure) -> Self {
        GuardError::Validation(err)
    }
}

/// A specialized Result type for guard operations
pub type GuardResult<T> = Result<T, GuardError>;
