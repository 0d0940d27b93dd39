use crate::{AccountError, AccountErrorResult};

use authapi_core::{
    IdentityHandle, JsonObject, ProfileDocument, User, UserProfile, UserView, encode_blob,
};
use authapi_db::{DbError, UserProfileRepository, UserRepository};

use chrono::Utc;
use log::{debug, error};
use sqlx::SqlitePool;

/// Profile reads and writes for the user behind an authenticated subject.
pub struct ProfileService {
    pool: SqlitePool,
}

impl ProfileService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn current_user(&self, handle: &IdentityHandle) -> AccountErrorResult<UserView> {
        Ok(UserView::from(self.find_user(handle).await?))
    }

    pub async fn get_profile(&self, handle: &IdentityHandle) -> AccountErrorResult<ProfileDocument> {
        let user = self.find_user(handle).await?;

        let profile = UserProfileRepository::find_by_user_id(&self.pool, user.id)
            .await?
            .ok_or_else(|| AccountError::profile_not_found(user.id))?;

        decode_stored(&profile)
    }

    /// Overwrite both blobs. The response is decoded from what was stored,
    /// not echoed from the input.
    pub async fn update_profile(
        &self,
        handle: &IdentityHandle,
        profile_data: &JsonObject,
        settings: &JsonObject,
    ) -> AccountErrorResult<ProfileDocument> {
        let user = self.find_user(handle).await?;

        let profile_text = encode_blob("profile_data", profile_data)?;
        let settings_text = encode_blob("settings", settings)?;

        let mut tx = self.pool.begin().await.map_err(DbError::from)?;

        let replaced = UserProfileRepository::replace_blobs(
            &mut *tx,
            user.id,
            &profile_text,
            &settings_text,
            Utc::now(),
        )
        .await?;
        if !replaced {
            return Err(AccountError::profile_not_found(user.id));
        }

        let stored = UserProfileRepository::find_by_user_id(&mut *tx, user.id)
            .await?
            .ok_or_else(|| AccountError::profile_not_found(user.id))?;

        tx.commit().await.map_err(DbError::from)?;
        debug!("Updated profile for user {}", user.id);

        decode_stored(&stored)
    }

    async fn find_user(&self, handle: &IdentityHandle) -> AccountErrorResult<User> {
        UserRepository::find_by_identity_handle(&self.pool, handle)
            .await?
            .ok_or_else(|| AccountError::user_not_found(handle))
    }
}

fn decode_stored(profile: &UserProfile) -> AccountErrorResult<ProfileDocument> {
    ProfileDocument::decode(profile).map_err(|e| {
        error!("Error parsing profile JSON for user {}: {}", profile.user_id, e);
        AccountError::from(e)
    })
}
