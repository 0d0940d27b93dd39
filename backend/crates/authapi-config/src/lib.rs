mod auth_config;
mod config;
mod cors_config;
mod database_config;
mod error;
mod keycloak_config;
mod log_level;
mod logging_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use cors_config::CorsConfig;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use keycloak_config::{KeycloakAdminConfig, KeycloakConfig};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "AUTHAPI_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".authapi";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "authapi.db";

const DEFAULT_AUTH_ENABLED: bool = true;
const MIN_JWT_SECRET_LENGTH: usize = 32;

const DEFAULT_KEYCLOAK_URL: &str = "http://localhost:8180";
const DEFAULT_KEYCLOAK_REALM: &str = "authapi";
const DEFAULT_PUBLIC_CLIENT_ID: &str = "authapi-ui";
const DEFAULT_ADMIN_CLIENT_ID: &str = "admin-cli";
const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_REALM: &str = "master";

const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_CORS_MAX_AGE_SECS: u64 = 3600;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
