use crate::ClientConfigDto;

use authapi_auth::JwtValidator;
use authapi_config::CorsConfig;
use authapi_identity::IdentityProvider;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// None when auth is disabled; the subject then comes from `X-User-Id`
    pub jwt_validator: Option<Arc<JwtValidator>>,
    pub identity: Arc<dyn IdentityProvider>,
    /// What the browser app needs to start a login
    pub client_config: ClientConfigDto,
    pub cors: CorsConfig,
}
