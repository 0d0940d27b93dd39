use crate::{AccountError, AccountErrorResult};

use authapi_core::{IdentityHandle, NewUser, Registration, User, UserView};
use authapi_db::{DbError, UserProfileRepository, UserRepository};
use authapi_identity::{IdentityProvider, NewIdentity};

use std::sync::Arc;

use log::{error, info, warn};
use sqlx::SqlitePool;

/// Creates an account in the identity provider, then the local user and
/// its empty profile.
///
/// The two local rows are written in one transaction. If that transaction
/// fails the provider account is deleted again (one attempt, never retried)
/// so a failed registration leaves nothing behind on either side.
pub struct RegistrationService {
    pool: SqlitePool,
    identity: Arc<dyn IdentityProvider>,
}

impl RegistrationService {
    pub fn new(pool: SqlitePool, identity: Arc<dyn IdentityProvider>) -> Self {
        Self { pool, identity }
    }

    pub async fn register(&self, registration: Registration) -> AccountErrorResult<UserView> {
        let registration = registration.normalized()?;

        // Checked before any external call
        if UserRepository::exists_by_email(&self.pool, &registration.email).await? {
            return Err(AccountError::duplicate_email(&registration.email));
        }

        let name = registration.person_name();
        let new_identity = NewIdentity {
            username: registration.email.clone(),
            email: registration.email.clone(),
            first_name: name.first,
            last_name: name.last,
            password: registration.password.clone(),
        };

        let handle = self
            .identity
            .create_identity(&new_identity)
            .await
            .map_err(|e| {
                error!("Identity creation failed for {}: {}", registration.email, e);
                AccountError::identity_creation(e)
            })?;

        match self.persist(&handle, &registration).await {
            Ok(user) => {
                info!("Registered user {} ({})", user.id, user.email);
                Ok(UserView::from(user))
            }
            Err(err) => {
                error!(
                    "Local write failed after creating identity {}: {}",
                    handle, err
                );
                self.compensate(&handle).await;
                Err(err)
            }
        }
    }

    async fn persist(
        &self,
        handle: &IdentityHandle,
        registration: &Registration,
    ) -> AccountErrorResult<User> {
        let new_user = NewUser::new(
            handle.clone(),
            registration.name.clone(),
            registration.email.clone(),
        );

        let mut tx = self.pool.begin().await.map_err(DbError::from)?;

        let user = UserRepository::create(&mut *tx, &new_user)
            .await
            .map_err(|e| match e {
                // Lost a race with a concurrent registration for the same email
                DbError::UniqueViolation { ref message, .. } if message.contains("users.email") => {
                    AccountError::duplicate_email(&registration.email)
                }
                other => AccountError::from(other),
            })?;

        UserProfileRepository::create_empty(&mut *tx, user.id, new_user.created_at).await?;

        tx.commit().await.map_err(DbError::from)?;

        Ok(user)
    }

    async fn compensate(&self, handle: &IdentityHandle) {
        match self.identity.delete_identity(handle).await {
            Ok(()) => warn!("Rolled back identity {} after failed registration", handle),
            Err(e) => error!(
                "Failed to roll back identity {}; provider account is orphaned: {}",
                handle, e
            ),
        }
    }
}
