//! Resolves the authenticated subject of a request

use crate::{ApiError, AppState};

use authapi_auth::bearer_token;
use authapi_core::IdentityHandle;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

const USER_ID_HEADER: &str = "X-User-Id";

/// The identity handle the request acts as.
///
/// With auth enabled this is the `sub` of a verified bearer token. With
/// auth disabled (development) it is read from the `X-User-Id` header.
/// Either way a missing subject is a 401.
pub struct CurrentSubject(pub IdentityHandle);

impl FromRequestParts<AppState> for CurrentSubject {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let headers = &parts.headers;

            let Some(validator) = state.jwt_validator.as_ref() else {
                return headers
                    .get(USER_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(|v| {
                        log::debug!("Using subject from X-User-Id header: {}", v);
                        CurrentSubject(IdentityHandle::from(v))
                    })
                    .ok_or_else(|| ApiError::unauthorized("missing X-User-Id header"));
            };

            let header = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
            let token = bearer_token(header).map_err(|e| ApiError::unauthorized(e.to_string()))?;

            let claims = validator.validate(token).map_err(|e| {
                log::warn!("JWT validation failed: {}", e);
                ApiError::unauthorized(e.to_string())
            })?;

            Ok(CurrentSubject(IdentityHandle::new(claims.sub)))
        }
    }
}
