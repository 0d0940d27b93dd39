use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Identity provider rejected {operation}: status {status}: {message} {location}")]
    Provider {
        operation: &'static str,
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Admin token request failed: {message} {location}")]
    Token {
        message: String,
        location: ErrorLocation,
    },
}

impl IdentityError {
    #[track_caller]
    pub fn provider(operation: &'static str, status: u16, message: impl Into<String>) -> Self {
        Self::Provider {
            operation,
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn token(message: impl Into<String>) -> Self {
        Self::Token {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status returned by the provider, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Provider { status, .. } => Some(*status),
            Self::Http { source, .. } => source.status().map(|s| s.as_u16()),
            Self::Token { .. } => None,
        }
    }
}

impl From<reqwest::Error> for IdentityError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;
