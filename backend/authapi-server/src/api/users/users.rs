//! Current-user REST API handlers

use crate::{
    ApiError, ApiResponse, ApiResult, AppState, CurrentSubject, ProfileDto, UpdateProfileRequest,
};

use authapi_accounts::ProfileService;
use authapi_core::UserView;

use axum::{Json, extract::State};

const FETCH_PROFILE_FAILED: &str = "Failed to fetch user profile";
const UPDATE_PROFILE_FAILED: &str = "Failed to update user profile";
const FETCH_USER_FAILED: &str = "Failed to fetch user";

/// GET /api/users/profile
pub async fn get_profile(
    State(state): State<AppState>,
    CurrentSubject(handle): CurrentSubject,
) -> ApiResult<Json<ApiResponse<ProfileDto>>> {
    let service = ProfileService::new(state.pool.clone());
    let profile = service
        .get_profile(&handle)
        .await
        .map_err(|e| ApiError::from_account(e, FETCH_PROFILE_FAILED))?;

    Ok(Json(ApiResponse::success(profile.into())))
}

/// PUT /api/users/profile
///
/// Replaces both blobs; nothing is merged.
pub async fn update_profile(
    State(state): State<AppState>,
    CurrentSubject(handle): CurrentSubject,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Json<ApiResponse<ProfileDto>>> {
    let service = ProfileService::new(state.pool.clone());
    let profile = service
        .update_profile(&handle, &req.profile_data, &req.settings)
        .await
        .map_err(|e| ApiError::from_account(e, UPDATE_PROFILE_FAILED))?;

    Ok(Json(ApiResponse::success_with_message(
        "Profile updated successfully",
        profile.into(),
    )))
}

/// GET /api/users/me
pub async fn get_current_user(
    State(state): State<AppState>,
    CurrentSubject(handle): CurrentSubject,
) -> ApiResult<Json<ApiResponse<UserView>>> {
    let service = ProfileService::new(state.pool.clone());
    let user = service
        .current_user(&handle)
        .await
        .map_err(|e| ApiError::from_account(e, FETCH_USER_FAILED))?;

    Ok(Json(ApiResponse::success(user)))
}
