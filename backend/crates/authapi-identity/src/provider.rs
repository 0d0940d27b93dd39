use crate::IdentityErrorResult;

use authapi_core::IdentityHandle;

use async_trait::async_trait;
use serde::Deserialize;

/// Account to create in the identity provider.
#[derive(Clone)]
pub struct NewIdentity {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

impl std::fmt::Debug for NewIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewIdentity")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The provider's view of an account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRecord {
    pub id: IdentityHandle,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub enabled: bool,
}

/// Account operations delegated to the external identity provider.
///
/// Implementations never retry; each failure is returned as-is.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create an enabled account with a permanent password and return the
    /// handle the provider minted for it.
    async fn create_identity(&self, identity: &NewIdentity) -> IdentityErrorResult<IdentityHandle>;

    async fn update_identity(
        &self,
        handle: &IdentityHandle,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> IdentityErrorResult<()>;

    /// `Ok(None)` when the provider has no such account.
    async fn lookup_by_handle(
        &self,
        handle: &IdentityHandle,
    ) -> IdentityErrorResult<Option<IdentityRecord>>;

    /// Exact username match; the first hit wins.
    async fn lookup_by_username(&self, username: &str)
    -> IdentityErrorResult<Option<IdentityRecord>>;

    async fn delete_identity(&self, handle: &IdentityHandle) -> IdentityErrorResult<()>;

    /// Replace the account's password with a non-temporary one.
    async fn reset_credential(
        &self,
        handle: &IdentityHandle,
        new_password: &str,
    ) -> IdentityErrorResult<()>;
}
