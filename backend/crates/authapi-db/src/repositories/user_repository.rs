//! User store.
//!
//! Functions take any SQLite executor so registration can run them inside
//! its transaction.

use crate::Result as DbErrorResult;
use crate::repositories::timestamp_to_datetime;

use authapi_core::{IdentityHandle, NewUser, User};

use sqlx::FromRow;

pub struct UserRepository;

#[derive(FromRow)]
struct UserRow {
    id: i64,
    keycloak_id: String,
    name: String,
    email: String,
    created_at: i64,
}

impl UserRow {
    fn into_user(self) -> DbErrorResult<User> {
        Ok(User {
            id: self.id,
            identity_handle: IdentityHandle::new(self.keycloak_id),
            name: self.name,
            email: self.email,
            created_at: timestamp_to_datetime("users.created_at", self.created_at)?,
        })
    }
}

impl UserRepository {
    pub async fn create<'e, E>(executor: E, user: &NewUser) -> DbErrorResult<User>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let created_at = user.created_at.timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO users (keycloak_id, name, email, created_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(user.identity_handle.as_str())
        .bind(&user.name)
        .bind(&user.email)
        .bind(created_at)
        .execute(executor)
        .await?;

        Ok(User {
            id: result.last_insert_rowid(),
            identity_handle: user.identity_handle.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            created_at: timestamp_to_datetime("users.created_at", created_at)?,
        })
    }

    pub async fn find_by_id<'e, E>(executor: E, id: i64) -> DbErrorResult<Option<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, keycloak_id, name, email, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    pub async fn find_by_identity_handle<'e, E>(
        executor: E,
        handle: &IdentityHandle,
    ) -> DbErrorResult<Option<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, keycloak_id, name, email, created_at FROM users WHERE keycloak_id = ?",
        )
        .bind(handle.as_str())
        .fetch_optional(executor)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    pub async fn find_by_email<'e, E>(executor: E, email: &str) -> DbErrorResult<Option<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, keycloak_id, name, email, created_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(executor)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    pub async fn exists_by_email<'e, E>(executor: E, email: &str) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?)")
                .bind(email)
                .fetch_one(executor)
                .await?;

        Ok(exists)
    }

    pub async fn exists_by_identity_handle<'e, E>(
        executor: E,
        handle: &IdentityHandle,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE keycloak_id = ?)")
                .bind(handle.as_str())
                .fetch_one(executor)
                .await?;

        Ok(exists)
    }
}
