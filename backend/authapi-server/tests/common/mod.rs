#![allow(dead_code)]

//! Test infrastructure for authapi-server API tests

use authapi_auth::JwtValidator;
use authapi_config::{CorsConfig, KeycloakConfig};
use authapi_core::IdentityHandle;
use authapi_identity::{
    IdentityError, IdentityErrorResult, IdentityProvider, IdentityRecord, NewIdentity,
};
use authapi_server::{AppState, ClientConfigDto};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub const JWT_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(":memory:")
                .foreign_keys(true),
        )
        .await
        .expect("Failed to create test database");

    authapi_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Identity provider that mints sequential handles, or refuses everything.
pub struct StubIdentityProvider {
    reject: bool,
    next: AtomicUsize,
    pub deletes: AtomicUsize,
}

impl StubIdentityProvider {
    pub fn accepting() -> Self {
        Self {
            reject: false,
            next: AtomicUsize::new(1),
            deletes: AtomicUsize::new(0),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::accepting()
        }
    }
}

#[async_trait]
impl IdentityProvider for StubIdentityProvider {
    async fn create_identity(&self, _identity: &NewIdentity) -> IdentityErrorResult<IdentityHandle> {
        if self.reject {
            return Err(IdentityError::provider("create user", 500, "boom"));
        }
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        Ok(IdentityHandle::new(format!("kc-{}", n)))
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

    async fn delete_identity(&self, _handle: &IdentityHandle) -> IdentityErrorResult<()> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
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

fn keycloak_config() -> KeycloakConfig {
    KeycloakConfig {
        server_url: "http://localhost:8180/".to_string(),
        realm: "authapi".to_string(),
        public_client_id: "authapi-ui".to_string(),
        ..KeycloakConfig::default()
    }
}

/// AppState with auth disabled (subject from X-User-Id)
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with(None, Arc::new(StubIdentityProvider::accepting())).await
}

/// AppState that requires HS256 bearer tokens signed with JWT_SECRET
pub async fn create_test_app_state_with_auth() -> AppState {
    create_test_app_state_with(
        Some(Arc::new(JwtValidator::with_hs256(JWT_SECRET, None))),
        Arc::new(StubIdentityProvider::accepting()),
    )
    .await
}

pub async fn create_test_app_state_with(
    jwt_validator: Option<Arc<JwtValidator>>,
    identity: Arc<dyn IdentityProvider>,
) -> AppState {
    AppState {
        pool: create_test_pool().await,
        jwt_validator,
        identity,
        client_config: ClientConfigDto::from(&keycloak_config()),
        cors: CorsConfig::default(),
    }
}

/// Create a user and its empty profile directly in the store
pub async fn create_test_user(pool: &SqlitePool, handle: &str, email: &str) -> i64 {
    let now = chrono::Utc::now().timestamp();
    let user_id = sqlx::query(
        "INSERT INTO users (keycloak_id, name, email, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(handle)
    .bind("Ada Lovelace")
    .bind(email)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test user")
    .last_insert_rowid();

    sqlx::query(
        "INSERT INTO user_profiles (user_id, profile_data, settings, created_at, updated_at) VALUES (?, '{}', '{}', ?, ?)",
    )
    .bind(user_id)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test profile");

    user_id
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
