use crate::{ConfigError, ConfigErrorResult, DEFAULT_ALLOWED_ORIGIN, DEFAULT_CORS_MAX_AGE_SECS};

use serde::Deserialize;

/// Cross-origin policy for the browser frontend. Credentials are always
/// allowed, so origins must be listed explicitly.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub max_age_secs: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![String::from(DEFAULT_ALLOWED_ORIGIN)],
            max_age_secs: DEFAULT_CORS_MAX_AGE_SECS,
        }
    }
}

impl CorsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for origin in &self.allowed_origins {
            if origin == "*" {
                return Err(ConfigError::cors(
                    "cors.allowed_origins cannot contain '*' when credentials are allowed",
                ));
            }
            if !(origin.starts_with("http://") || origin.starts_with("https://")) {
                return Err(ConfigError::cors(format!(
                    "cors.allowed_origins entry '{}' must start with http:// or https://",
                    origin
                )));
            }
        }
        Ok(())
    }

    /// Parse a comma-separated origin list, as used in env overrides.
    pub fn parse_origins(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.trim_end_matches('/').to_string())
            .collect()
    }
}
