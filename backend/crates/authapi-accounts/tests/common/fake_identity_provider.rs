use authapi_core::IdentityHandle;
use authapi_identity::{
    IdentityError, IdentityErrorResult, IdentityProvider, IdentityRecord, NewIdentity,
};

use std::sync::Mutex;

use async_trait::async_trait;
use sqlx::SqlitePool;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCall {
    Create {
        username: String,
        email: String,
        first_name: String,
        last_name: String,
    },
    Delete(String),
}

enum CreateBehavior {
    Succeed(String),
    Reject,
    /// Succeed, but first write a local user with the same email, as a
    /// concurrent registration would.
    RaceEmail { pool: SqlitePool, handle: String },
}

/// Records every call; create behaviour is chosen per test.
pub struct FakeIdentityProvider {
    behavior: CreateBehavior,
    fail_deletes: bool,
    calls: Mutex<Vec<ProviderCall>>,
}

impl FakeIdentityProvider {
    pub fn succeeding(handle: &str) -> Self {
        Self::with(CreateBehavior::Succeed(handle.to_string()))
    }

    pub fn rejecting() -> Self {
        Self::with(CreateBehavior::Reject)
    }

    pub fn racing_email(pool: SqlitePool, handle: &str) -> Self {
        Self::with(CreateBehavior::RaceEmail {
            pool,
            handle: handle.to_string(),
        })
    }

    /// Deletes are still recorded but report a provider outage.
    pub fn with_failing_delete(mut self) -> Self {
        self.fail_deletes = true;
        self
    }

    fn with(behavior: CreateBehavior) -> Self {
        Self {
            behavior,
            fail_deletes: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<ProviderCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn deletes(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ProviderCall::Delete(handle) => Some(handle),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: ProviderCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    async fn create_identity(&self, identity: &NewIdentity) -> IdentityErrorResult<IdentityHandle> {
        self.record(ProviderCall::Create {
            username: identity.username.clone(),
            email: identity.email.clone(),
            first_name: identity.first_name.clone(),
            last_name: identity.last_name.clone(),
        });

        match &self.behavior {
            CreateBehavior::Succeed(handle) => Ok(IdentityHandle::from(handle.as_str())),
            CreateBehavior::Reject => Err(IdentityError::provider(
                "create user",
                409,
                "User exists with same username",
            )),
            CreateBehavior::RaceEmail { pool, handle } => {
                sqlx::query(
                    "INSERT INTO users (keycloak_id, name, email, created_at) VALUES (?, ?, ?, ?)",
                )
                .bind("kc-racer")
                .bind("Racer")
                .bind(&identity.email)
                .bind(0_i64)
                .execute(pool)
                .await
                .expect("Failed to insert racing user");
                Ok(IdentityHandle::from(handle.as_str()))
            }
        }
    }

    async fn update_identity(
        &self,
        _handle: &IdentityHandle,
        _first_name: &str,
        _last_name: &str,
        _email: &str,
    ) -> IdentityErrorResult<()> {
        Ok(())
    }

    async fn lookup_by_handle(
        &self,
        _handle: &IdentityHandle,
    ) -> IdentityErrorResult<Option<IdentityRecord>> {
        Ok(None)
    }

    async fn lookup_by_username(
        &self,
        _username: &str,
    ) -> IdentityErrorResult<Option<IdentityRecord>> {
        Ok(None)
    }

    async fn delete_identity(&self, handle: &IdentityHandle) -> IdentityErrorResult<()> {
        self.record(ProviderCall::Delete(handle.to_string()));
        if self.fail_deletes {
            return Err(IdentityError::provider("delete user", 503, "Service Unavailable"));
        }
        Ok(())
    }

    async fn reset_credential(
        &self,
        _handle: &IdentityHandle,
        _new_password: &str,
    ) -> IdentityErrorResult<()> {
        Ok(())
    }
}
