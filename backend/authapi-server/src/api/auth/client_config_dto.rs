use authapi_config::KeycloakConfig;

use serde::Serialize;

/// Public login settings for the browser app. Never carries admin
/// credentials.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfigDto {
    pub url: String,
    pub realm: String,
    pub client_id: String,
}

impl From<&KeycloakConfig> for ClientConfigDto {
    fn from(config: &KeycloakConfig) -> Self {
        Self {
            url: config.server_url.trim_end_matches('/').to_string(),
            realm: config.realm.clone(),
            client_id: config.public_client_id.clone(),
        }
    }
}
