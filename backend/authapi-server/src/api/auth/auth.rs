//! Unauthenticated endpoints used before login

use crate::{ApiError, ApiResponse, ApiResult, AppState, ClientConfigDto};

use authapi_accounts::RegistrationService;
use authapi_core::{Registration, UserView};

use axum::{Json, extract::State, http::StatusCode};

const REGISTER_FAILED: &str = "Failed to register user";

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(registration): Json<Registration>,
) -> ApiResult<(StatusCode, Json<ApiResponse<UserView>>)> {
    let service = RegistrationService::new(state.pool.clone(), state.identity.clone());
    let user = service
        .register(registration)
        .await
        .map_err(|e| ApiError::from_account(e, REGISTER_FAILED))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            "User registered successfully",
            user,
        )),
    ))
}

/// GET /api/auth/config
pub async fn client_config(State(state): State<AppState>) -> Json<ApiResponse<ClientConfigDto>> {
    Json(ApiResponse::success(state.client_config.clone()))
}
