#[allow(clippy::module_inception)]
pub mod auth;
pub mod client_config_dto;
