use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, CorsConfig,
    DEFAULT_CONFIG_DIR, DatabaseConfig, KeycloakConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub keycloak: KeycloakConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. AUTHAPI_CONFIG_DIR env var, else ./.authapi/
    /// 2. Create the config directory if missing
    /// 3. Read config.toml if present, else defaults
    /// 4. Apply AUTHAPI_* environment overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: AUTHAPI_CONFIG_DIR > ./.authapi/
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all sections, stopping at the first problem.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let config_dir = Self::config_dir()?;

        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&config_dir)?;
        self.keycloak.validate()?;
        self.cors.validate()?;

        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Full path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(filename) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(filename),
            )),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary. Secrets are never logged.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);

        let auth_type = if self.auth.jwt_secret.is_some() {
            "HS256"
        } else if self.auth.jwt_public_key_path.is_some() {
            "RS256"
        } else {
            "none"
        };
        info!(
            "  auth: {} ({})",
            if self.auth.enabled {
                "enabled"
            } else {
                "disabled"
            },
            auth_type
        );

        info!(
            "  keycloak: {} realm={} admin={}@{}",
            self.keycloak.server_url,
            self.keycloak.realm,
            self.keycloak.admin.username,
            self.keycloak.admin.realm
        );
        info!("  cors: {}", self.cors.allowed_origins.join(", "));
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("AUTHAPI_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("AUTHAPI_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("AUTHAPI_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_bool("AUTHAPI_AUTH_ENABLED", &mut self.auth.enabled);
        Self::apply_env_option_string("AUTHAPI_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_option_string(
            "AUTHAPI_AUTH_JWT_PUBLIC_KEY_PATH",
            &mut self.auth.jwt_public_key_path,
        );
        Self::apply_env_option_string("AUTHAPI_AUTH_AUDIENCE", &mut self.auth.audience);

        // Keycloak
        Self::apply_env_string("AUTHAPI_KEYCLOAK_SERVER_URL", &mut self.keycloak.server_url);
        Self::apply_env_string("AUTHAPI_KEYCLOAK_REALM", &mut self.keycloak.realm);
        Self::apply_env_string(
            "AUTHAPI_KEYCLOAK_PUBLIC_CLIENT_ID",
            &mut self.keycloak.public_client_id,
        );
        Self::apply_env_string(
            "AUTHAPI_KEYCLOAK_ADMIN_CLIENT_ID",
            &mut self.keycloak.admin.client_id,
        );
        Self::apply_env_string(
            "AUTHAPI_KEYCLOAK_ADMIN_USERNAME",
            &mut self.keycloak.admin.username,
        );
        Self::apply_env_string(
            "AUTHAPI_KEYCLOAK_ADMIN_PASSWORD",
            &mut self.keycloak.admin.password,
        );
        Self::apply_env_string("AUTHAPI_KEYCLOAK_ADMIN_REALM", &mut self.keycloak.admin.realm);

        // CORS
        if let Ok(val) = std::env::var("AUTHAPI_CORS_ALLOWED_ORIGINS") {
            self.cors.allowed_origins = CorsConfig::parse_origins(&val);
        }
        Self::apply_env_parse("AUTHAPI_CORS_MAX_AGE_SECS", &mut self.cors.max_age_secs);

        // Logging
        Self::apply_env_parse("AUTHAPI_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("AUTHAPI_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("AUTHAPI_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
