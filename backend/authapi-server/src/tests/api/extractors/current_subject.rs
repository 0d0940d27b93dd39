use crate::{ApiError, AppState, ClientConfigDto, CurrentSubject};

use authapi_auth::{Claims, JwtValidator};
use authapi_config::{CorsConfig, KeycloakConfig};
use authapi_identity::KeycloakClient;

use std::sync::Arc;

use axum::{extract::FromRequestParts, http::Request};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use sqlx::SqlitePool;

const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

fn state(jwt_validator: Option<Arc<JwtValidator>>) -> AppState {
    let keycloak = KeycloakConfig::default();
    AppState {
        pool: SqlitePool::connect_lazy("sqlite::memory:").unwrap(),
        jwt_validator,
        identity: Arc::new(KeycloakClient::new(&keycloak)),
        client_config: ClientConfigDto::from(&keycloak),
        cors: CorsConfig::default(),
    }
}

fn token(sub: &str, exp_offset_secs: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: sub.to_string(),
        exp: now + exp_offset_secs,
        iat: now,
        email: None,
        preferred_username: None,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET),
    )
    .unwrap()
}

async fn extract(state: &AppState, headers: &[(&str, &str)]) -> Result<CurrentSubject, ApiError> {
    let mut builder = Request::builder().uri("/api/users/profile");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let (mut parts, _) = builder.body(()).unwrap().into_parts();
    CurrentSubject::from_request_parts(&mut parts, state).await
}

#[tokio::test]
async fn test_auth_disabled_uses_x_user_id_header() {
    let state = state(None);

    let subject = extract(&state, &[("X-User-Id", "kc-ada")]).await.unwrap();

    assert_eq!(subject.0.as_str(), "kc-ada");
}

#[tokio::test]
async fn test_auth_disabled_without_header_is_unauthorized() {
    let state = state(None);

    let result = extract(&state, &[]).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_auth_disabled_blank_header_is_unauthorized() {
    let state = state(None);

    let result = extract(&state, &[("X-User-Id", "   ")]).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_valid_bearer_token_yields_sub() {
    let state = state(Some(Arc::new(JwtValidator::with_hs256(SECRET, None))));
    let header = format!("Bearer {}", token("kc-ada", 3600));

    let subject = extract(&state, &[("Authorization", header.as_str())]).await.unwrap();

    assert_eq!(subject.0.as_str(), "kc-ada");
}

#[tokio::test]
async fn test_auth_enabled_ignores_x_user_id_header() {
    let state = state(Some(Arc::new(JwtValidator::with_hs256(SECRET, None))));

    let result = extract(&state, &[("X-User-Id", "kc-ada")]).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let state = state(Some(Arc::new(JwtValidator::with_hs256(SECRET, None))));
    let header = format!("Bearer {}", token("kc-ada", -3600));

    let result = extract(&state, &[("Authorization", header.as_str())]).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_non_bearer_scheme_is_unauthorized() {
    let state = state(Some(Arc::new(JwtValidator::with_hs256(SECRET, None))));

    let result = extract(&state, &[("Authorization", "Basic YWRhOnB3")]).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
