use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ADMIN_CLIENT_ID, DEFAULT_ADMIN_REALM,
    DEFAULT_ADMIN_USERNAME, DEFAULT_KEYCLOAK_REALM, DEFAULT_KEYCLOAK_URL, DEFAULT_PUBLIC_CLIENT_ID,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeycloakConfig {
    /// Base URL, including any path prefix such as `/auth`
    pub server_url: String,
    /// Realm that owns the application's users
    pub realm: String,
    /// Public client the browser app logs in with
    pub public_client_id: String,
    pub admin: KeycloakAdminConfig,
}

/// Credentials for the admin REST API. A fresh token is requested with
/// these on every call.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct KeycloakAdminConfig {
    pub client_id: String,
    pub username: String,
    pub password: String,
    pub realm: String,
}

impl Default for KeycloakConfig {
    fn default() -> Self {
        Self {
            server_url: String::from(DEFAULT_KEYCLOAK_URL),
            realm: String::from(DEFAULT_KEYCLOAK_REALM),
            public_client_id: String::from(DEFAULT_PUBLIC_CLIENT_ID),
            admin: KeycloakAdminConfig::default(),
        }
    }
}

impl Default for KeycloakAdminConfig {
    fn default() -> Self {
        Self {
            client_id: String::from(DEFAULT_ADMIN_CLIENT_ID),
            username: String::from(DEFAULT_ADMIN_USERNAME),
            password: String::new(),
            realm: String::from(DEFAULT_ADMIN_REALM),
        }
    }
}

impl std::fmt::Debug for KeycloakAdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeycloakAdminConfig")
            .field("client_id", &self.client_id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("realm", &self.realm)
            .finish()
    }
}

impl KeycloakConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.server_url.starts_with("http://") || self.server_url.starts_with("https://")) {
            return Err(ConfigError::keycloak(format!(
                "keycloak.server_url must start with http:// or https://, got '{}'",
                self.server_url
            )));
        }

        let required = [
            ("keycloak.realm", &self.realm),
            ("keycloak.public_client_id", &self.public_client_id),
            ("keycloak.admin.client_id", &self.admin.client_id),
            ("keycloak.admin.username", &self.admin.username),
            ("keycloak.admin.password", &self.admin.password),
            ("keycloak.admin.realm", &self.admin.realm),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::keycloak(format!("{} cannot be empty", name)));
            }
        }

        Ok(())
    }
}
