use thiserror::Error;

/// Startup failures. Request-time failures are `ApiError`.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] authapi_config::ConfigError),

    #[error("Failed to read JWT key file {path}: {source}")]
    JwtKeyFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Auth error: {0}")]
    Auth(#[from] authapi_auth::AuthError),

    #[error("Database error: {0}")]
    Database(#[from] authapi_db::DbError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
