use crate::ApiError;

use authapi_accounts::AccountError;
use authapi_core::{CoreError, IdentityHandle};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_not_found_returns_404_with_empty_body() {
    let error = ApiError::NotFound {
        message: "User not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_unauthorized_returns_401_envelope_without_detail() {
    let response = ApiError::unauthorized("ExpiredSignature at jwt_validator.rs:70").into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Authentication required");
    assert!(json["data"].is_null());
}

#[tokio::test]
async fn test_internal_error_returns_500_envelope() {
    let response = ApiError::internal("Failed to fetch user profile").into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Failed to fetch user profile");
    assert!(json["data"].is_null());
}

#[test]
fn test_account_not_found_maps_to_not_found() {
    let err = AccountError::user_not_found(&IdentityHandle::from("kc-1"));

    let api = ApiError::from_account(err, "Failed");

    assert!(matches!(api, ApiError::NotFound { .. }));
}

#[test]
fn test_profile_not_found_maps_to_not_found() {
    let api = ApiError::from_account(AccountError::profile_not_found(7), "Failed");

    assert!(matches!(api, ApiError::NotFound { .. }));
}

#[test]
fn test_duplicate_email_maps_to_conflict() {
    let api = ApiError::from_account(AccountError::duplicate_email("a@b.c"), "Failed");

    assert!(matches!(api, ApiError::Conflict { .. }));
}

#[test]
fn test_validation_keeps_field() {
    let err = AccountError::from(CoreError::Validation {
        message: "email must be a valid address".into(),
        field: Some("email".into()),
        location: ErrorLocation::from(Location::caller()),
    });

    match ApiError::from_account(err, "Failed") {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("email")),
        other => panic!("expected validation, got {other:?}"),
    }
}

#[test]
fn test_data_corruption_maps_to_generic_internal_message() {
    let err = AccountError::from(CoreError::DataCorruption {
        field: "settings",
        message: "expected object, found array".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    match ApiError::from_account(err, "Failed to fetch user profile") {
        ApiError::Internal { message, .. } => {
            assert_eq!(message, "Failed to fetch user profile")
        }
        other => panic!("expected internal, got {other:?}"),
    }
}

#[test]
fn test_not_found_logs_below_warn_and_internal_logs_at_error() {
    let not_found =
        ApiError::from_account(AccountError::profile_not_found(7), "Failed to fetch user profile");
    let internal = ApiError::internal("Failed to fetch user profile");

    assert_eq!(not_found.log_level(), log::Level::Debug);
    assert_eq!(internal.log_level(), log::Level::Error);
}

#[test]
fn test_client_errors_log_at_warn() {
    let conflict = ApiError::from_account(
        AccountError::duplicate_email("ada@example.com"),
        "Failed to register user",
    );

    assert_eq!(conflict.log_level(), log::Level::Warn);
    assert_eq!(ApiError::unauthorized("missing").log_level(), log::Level::Warn);
}

#[test]
fn test_internal_mapping_keeps_account_error_as_source() {
    let err = AccountError::from(CoreError::DataCorruption {
        field: "settings",
        message: "expected object, found array".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let api = ApiError::from_account(err, "Failed to fetch user profile");

    let source = std::error::Error::source(&api).map(|s| s.to_string());
    assert!(source.is_some_and(|s| s.contains("expected object, found array")));
    assert!(!api.to_string().contains("expected object"));
}
