// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every handler returns Result<_, ToursError>
/// Each variant maps to appropriate HTTP status code and error response
#[derive(Error, Debug)]
pub enum ToursError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Upload exceeds the {0} byte limit")]
    PayloadTooLarge(usize),

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Forbidden access")]
    Forbidden,

    #[error("Too many attempts, try again later")]
    RateLimitExceeded,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl ToursError {
    fn code(&self) -> &'static str {
        match self {
            ToursError::NotFound(_) => "NOT_FOUND",
            ToursError::InvalidInput(_) => "INVALID_INPUT",
            ToursError::ValidationError(_) => "VALIDATION_ERROR",
            ToursError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            ToursError::Unauthorized => "UNAUTHORIZED",
            ToursError::InvalidCredentials => "INVALID_CREDENTIALS",
            ToursError::Forbidden => "FORBIDDEN",
            ToursError::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            ToursError::DatabaseError(_) => "DATABASE_ERROR",
            ToursError::StorageError(_) => "STORAGE_ERROR",
        }
    }

    /// Message safe to show to API clients
    /// Backend failures are logged where they happen, clients get a generic line
    fn public_message(&self) -> String {
        match self {
            ToursError::DatabaseError(_) => "Database operation failed".to_string(),
            ToursError::StorageError(_) => "Storage operation failed".to_string(),
            other => other.to_string(),
        }
    }
}

/// Convert ToursError to HTTP response
/// DOCUMENTATION: `error` stays a plain string so clients can display body.error
impl ResponseError for ToursError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "error": self.public_message(),
            "code": self.code(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ToursError::NotFound(_) => StatusCode::NOT_FOUND,
            ToursError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ToursError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ToursError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ToursError::Unauthorized => StatusCode::UNAUTHORIZED,
            ToursError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ToursError::Forbidden => StatusCode::FORBIDDEN,
            ToursError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            ToursError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ToursError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<validator::ValidationErrors> for ToursError {
    fn from(e: validator::ValidationErrors) -> Self {
        ToursError::ValidationError(e.to_string())
    }
}
