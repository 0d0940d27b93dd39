pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;


pub use api::{
    auth::{
        auth::{client_config, register},
        client_config_dto::ClientConfigDto,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_subject::CurrentSubject,
    response::ApiResponse,
    users::{
        profile_dto::ProfileDto,
        update_profile_request::UpdateProfileRequest,
        users::{get_current_user, get_profile, update_profile},
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
