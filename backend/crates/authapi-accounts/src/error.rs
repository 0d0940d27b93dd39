use authapi_core::{CoreError, IdentityHandle};
use authapi_db::DbError;
use authapi_identity::IdentityError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Email already in use: {email} {location}")]
    DuplicateEmail {
        email: String,
        location: ErrorLocation,
    },

    #[error("Failed to create user in identity provider: {source} {location}")]
    IdentityCreation {
        #[source]
        source: IdentityError,
        location: ErrorLocation,
    },

    #[error("User not found: {handle} {location}")]
    UserNotFound {
        handle: IdentityHandle,
        location: ErrorLocation,
    },

    #[error("User profile not found for user {user_id} {location}")]
    ProfileNotFound {
        user_id: i64,
        location: ErrorLocation,
    },

    #[error("Profile data corrupted: {message} {location}")]
    DataCorruption {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Database {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl AccountError {
    #[track_caller]
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn identity_creation(source: IdentityError) -> Self {
        Self::IdentityCreation {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn user_not_found(handle: &IdentityHandle) -> Self {
        Self::UserNotFound {
            handle: handle.clone(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn profile_not_found(user_id: i64) -> Self {
        Self::ProfileNotFound {
            user_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True for the variants the HTTP layer reports as 404.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound { .. } | Self::ProfileNotFound { .. }
        )
    }
}

impl From<DbError> for AccountError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Database {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for AccountError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match err {
            CoreError::Validation { message, field, .. } => Self::Validation {
                message,
                field,
                location,
            },
            CoreError::DataCorruption { field, message, .. } => Self::DataCorruption {
                message: format!("{}: {}", field, message),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, AccountError>;
