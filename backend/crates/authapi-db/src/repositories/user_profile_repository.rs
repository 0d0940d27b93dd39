//! Profile store. Blobs go in and out as raw JSON text; decoding is the
//! caller's job.

use crate::Result as DbErrorResult;
use crate::repositories::timestamp_to_datetime;

use authapi_core::{EMPTY_BLOB, UserProfile};

use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub struct UserProfileRepository;

#[derive(FromRow)]
struct UserProfileRow {
    id: i64,
    user_id: i64,
    profile_data: String,
    settings: String,
    created_at: i64,
    updated_at: i64,
}

impl UserProfileRow {
    fn into_profile(self) -> DbErrorResult<UserProfile> {
        Ok(UserProfile {
            id: self.id,
            user_id: self.user_id,
            profile_data: self.profile_data,
            settings: self.settings,
            created_at: timestamp_to_datetime("user_profiles.created_at", self.created_at)?,
            updated_at: timestamp_to_datetime("user_profiles.updated_at", self.updated_at)?,
        })
    }
}

impl UserProfileRepository {
    /// Insert the `{}` / `{}` profile every registered user starts with.
    pub async fn create_empty<'e, E>(
        executor: E,
        user_id: i64,
        now: DateTime<Utc>,
    ) -> DbErrorResult<UserProfile>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let timestamp = now.timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO user_profiles (user_id, profile_data, settings, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(EMPTY_BLOB)
        .bind(EMPTY_BLOB)
        .bind(timestamp)
        .bind(timestamp)
        .execute(executor)
        .await?;

        let stamp = timestamp_to_datetime("user_profiles.created_at", timestamp)?;
        Ok(UserProfile {
            id: result.last_insert_rowid(),
            user_id,
            profile_data: EMPTY_BLOB.to_string(),
            settings: EMPTY_BLOB.to_string(),
            created_at: stamp,
            updated_at: stamp,
        })
    }

    pub async fn find_by_user_id<'e, E>(
        executor: E,
        user_id: i64,
    ) -> DbErrorResult<Option<UserProfile>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, UserProfileRow>(
            r#"
                SELECT id, user_id, profile_data, settings, created_at, updated_at
                FROM user_profiles
                WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_optional(executor)
        .await?;

        row.map(UserProfileRow::into_profile).transpose()
    }

    /// Replace both blobs. Returns false when the user has no profile row.
    pub async fn replace_blobs<'e, E>(
        executor: E,
        user_id: i64,
        profile_data: &str,
        settings: &str,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE user_profiles
                SET profile_data = ?, settings = ?, updated_at = ?
                WHERE user_id = ?
            "#,
        )
        .bind(profile_data)
        .bind(settings)
        .bind(updated_at.timestamp())
        .bind(user_id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
