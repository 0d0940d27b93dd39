use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque user id minted by the identity provider.
///
/// Stored locally as `users.keycloak_id` and matched against the `sub`
/// claim of incoming bearer tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityHandle(String);

impl IdentityHandle {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for IdentityHandle {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for IdentityHandle {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
