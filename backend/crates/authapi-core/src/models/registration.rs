use crate::{CoreError, PersonName, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;

/// Sign-up input. The display name is kept as one field and split for the
/// identity provider only.
#[derive(Clone, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    /// Trim name and email and reject blanks. The password is taken as-is.
    #[track_caller]
    pub fn normalized(self) -> CoreErrorResult<Self> {
        let name = self.name.trim().to_string();
        let email = self.email.trim().to_string();

        if name.is_empty() {
            return Err(Self::invalid("name", "name cannot be empty"));
        }
        if email.is_empty() || !email.contains('@') {
            return Err(Self::invalid("email", "email must be a valid address"));
        }
        if self.password.is_empty() {
            return Err(Self::invalid("password", "password cannot be empty"));
        }

        Ok(Self {
            name,
            email,
            password: self.password,
        })
    }

    pub fn person_name(&self) -> PersonName {
        PersonName::split(&self.name)
    }

    #[track_caller]
    fn invalid(field: &str, message: &str) -> CoreError {
        CoreError::Validation {
            message: message.to_string(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

// Never print the password.
impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
