use crate::IdentityHandle;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Local user record, one per identity-provider account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    /// Immutable after creation
    pub identity_handle: IdentityHandle,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a user; the id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub identity_handle: IdentityHandle,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(identity_handle: IdentityHandle, name: String, email: String) -> Self {
        Self {
            identity_handle,
            name,
            email,
            created_at: Utc::now(),
        }
    }
}

/// Public projection of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}
