//! REST API error types
//!
//! Not-found conditions answer 404 with an empty body. Everything else
//! answers with the `{success: false, message, data: null}` envelope and a
//! message safe to show a client; details stay in the server log.

use crate::ApiResponse;

use authapi_accounts::AccountError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// 404, empty body
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// 401
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// 400
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// 409
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        #[source]
        source: Option<AccountError>,
        location: ErrorLocation,
    },

    /// 500. `message` is the generic text sent to the client.
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        #[source]
        source: Option<AccountError>,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Missing resources are routine; only server faults log at error.
    pub fn log_level(&self) -> log::Level {
        match self {
            ApiError::NotFound { .. } => log::Level::Debug,
            ApiError::Unauthorized { .. }
            | ApiError::Validation { .. }
            | ApiError::Conflict { .. } => log::Level::Warn,
            ApiError::Internal { .. } => log::Level::Error,
        }
    }

    /// Map a workflow error, using `failure_message` for anything that
    /// ends up as a 500. The workflow error is kept as the source so the
    /// response log line carries the full detail.
    #[track_caller]
    pub fn from_account(err: AccountError, failure_message: &str) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match err {
            AccountError::UserNotFound { .. } | AccountError::ProfileNotFound { .. } => {
                ApiError::NotFound {
                    message: err.to_string(),
                    location,
                }
            }
            AccountError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            AccountError::DuplicateEmail { .. } => ApiError::Conflict {
                message: "Email already in use".to_string(),
                source: Some(err),
                location,
            },
            AccountError::IdentityCreation { .. }
            | AccountError::DataCorruption { .. }
            | AccountError::Database { .. } => ApiError::Internal {
                message: failure_message.to_string(),
                source: Some(err),
                location,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Single log point for every failed request; detail stays server-side
        match std::error::Error::source(&self) {
            Some(cause) => log::log!(self.log_level(), "{} caused by: {}", self, cause),
            None => log::log!(self.log_level(), "{}", self),
        }

        let (status, message) = match self {
            ApiError::NotFound { .. } => return StatusCode::NOT_FOUND.into_response(),
            ApiError::Unauthorized { .. } => {
                (StatusCode::UNAUTHORIZED, "Authentication required".to_string())
            }
            ApiError::Validation { message, .. } => (StatusCode::BAD_REQUEST, message),
            ApiError::Conflict { message, .. } => (StatusCode::CONFLICT, message),
            ApiError::Internal { message, .. } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
