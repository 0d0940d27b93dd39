pub mod profile_dto;
pub mod update_profile_request;
#[allow(clippy::module_inception)]
pub mod users;
