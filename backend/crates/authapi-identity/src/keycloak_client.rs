use crate::{IdentityError, IdentityErrorResult, IdentityProvider, IdentityRecord, NewIdentity};

use authapi_config::KeycloakConfig;
use authapi_core::IdentityHandle;

use async_trait::async_trait;
use log::{error, info, warn};
use reqwest::{Client as ReqwestClient, Method, StatusCode, header::LOCATION};
use serde::{Deserialize, Serialize};

/// Keycloak admin REST API client.
///
/// Every operation fetches a fresh admin token with the password grant;
/// nothing is cached between calls.
pub struct KeycloakClient {
    base_url: String,
    realm: String,
    admin_realm: String,
    admin_client_id: String,
    admin_username: String,
    admin_password: String,
    client: ReqwestClient,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Serialize)]
struct Credential<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    value: &'a str,
    temporary: bool,
}

impl<'a> Credential<'a> {
    fn password(value: &'a str) -> Self {
        Self {
            kind: "password",
            value,
            temporary: false,
        }
    }
}

impl KeycloakClient {
    pub fn new(config: &KeycloakConfig) -> Self {
        Self {
            base_url: config.server_url.trim_end_matches('/').to_string(),
            realm: config.realm.clone(),
            admin_realm: config.admin.realm.clone(),
            admin_client_id: config.admin.client_id.clone(),
            admin_username: config.admin.username.clone(),
            admin_password: config.admin.password.clone(),
            client: ReqwestClient::new(),
        }
    }

    fn users_path(&self) -> String {
        format!("{}/admin/realms/{}/users", self.base_url, self.realm)
    }

    fn user_path(&self, handle: &IdentityHandle) -> String {
        format!("{}/{}", self.users_path(), handle)
    }

    async fn admin_token(&self) -> IdentityErrorResult<String> {
        let url = format!(
            "{}/realms/{}/protocol/openid-connect/token",
            self.base_url, self.admin_realm
        );
        let form = [
            ("grant_type", "password"),
            ("client_id", self.admin_client_id.as_str()),
            ("username", self.admin_username.as_str()),
            ("password", self.admin_password.as_str()),
        ];

        let response = self.client.post(&url).form(&form).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Admin token request failed. Status: {}", status.as_u16());
            return Err(IdentityError::token(format!(
                "status {}: {}",
                status.as_u16(),
                body
            )));
        }

        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }

    /// Build an authenticated admin request.
    async fn request(&self, method: Method, url: &str) -> IdentityErrorResult<reqwest::RequestBuilder> {
        let token = self.admin_token().await?;
        Ok(self.client.request(method, url).bearer_auth(token))
    }

    /// Send and require a 2xx status.
    async fn execute(
        &self,
        operation: &'static str,
        req: reqwest::RequestBuilder,
    ) -> IdentityErrorResult<reqwest::Response> {
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Self::rejected(operation, response).await);
        }

        Ok(response)
    }

    async fn rejected(operation: &'static str, response: reqwest::Response) -> IdentityError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        error!("Keycloak {} failed. Status: {}", operation, status);
        IdentityError::provider(operation, status, body)
    }
}

#[async_trait]
impl IdentityProvider for KeycloakClient {
    async fn create_identity(&self, identity: &NewIdentity) -> IdentityErrorResult<IdentityHandle> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct CreateRequest<'a> {
            username: &'a str,
            email: &'a str,
            first_name: &'a str,
            last_name: &'a str,
            enabled: bool,
            email_verified: bool,
            credentials: [Credential<'a>; 1],
        }

        let body = CreateRequest {
            username: &identity.username,
            email: &identity.email,
            first_name: &identity.first_name,
            last_name: &identity.last_name,
            enabled: true,
            email_verified: true,
            credentials: [Credential::password(&identity.password)],
        };

        let req = self
            .request(Method::POST, &self.users_path())
            .await?
            .json(&body);
        let response = req.send().await?;

        // Keycloak answers 201 with the new user's URL; anything else is a failure
        if response.status() != StatusCode::CREATED {
            return Err(Self::rejected("create user", response).await);
        }

        let handle = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|location| location.trim_end_matches('/').rsplit('/').next())
            .filter(|id| !id.is_empty())
            .map(IdentityHandle::from)
            .ok_or_else(|| {
                error!("Keycloak create user returned 201 without a usable Location header");
                IdentityError::provider(
                    "create user",
                    StatusCode::CREATED.as_u16(),
                    "missing Location header",
                )
            })?;

        info!("Created Keycloak user with ID: {}", handle);
        Ok(handle)
    }

    async fn update_identity(
        &self,
        handle: &IdentityHandle,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> IdentityErrorResult<()> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct UpdateRequest<'a> {
            first_name: &'a str,
            last_name: &'a str,
            email: &'a str,
        }

        let body = UpdateRequest {
            first_name,
            last_name,
            email,
        };
        let req = self
            .request(Method::PUT, &self.user_path(handle))
            .await?
            .json(&body);
        self.execute("update user", req).await?;

        info!("Updated Keycloak user {}", handle);
        Ok(())
    }

    async fn lookup_by_handle(
        &self,
        handle: &IdentityHandle,
    ) -> IdentityErrorResult<Option<IdentityRecord>> {
        let req = self.request(Method::GET, &self.user_path(handle)).await?;
        let response = req.send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::rejected("get user", response).await);
        }

        Ok(Some(response.json().await?))
    }

    async fn lookup_by_username(
        &self,
        username: &str,
    ) -> IdentityErrorResult<Option<IdentityRecord>> {
        let req = self
            .request(Method::GET, &self.users_path())
            .await?
            .query(&[("username", username), ("exact", "true")]);
        let response = self.execute("search users", req).await?;

        let users: Vec<IdentityRecord> = response.json().await?;
        Ok(users.into_iter().next())
    }

    async fn delete_identity(&self, handle: &IdentityHandle) -> IdentityErrorResult<()> {
        let req = self.request(Method::DELETE, &self.user_path(handle)).await?;
        self.execute("delete user", req).await?;

        warn!("Deleted Keycloak user {}", handle);
        Ok(())
    }

    async fn reset_credential(
        &self,
        handle: &IdentityHandle,
        new_password: &str,
    ) -> IdentityErrorResult<()> {
        let url = format!("{}/reset-password", self.user_path(handle));
        let req = self
            .request(Method::PUT, &url)
            .await?
            .json(&Credential::password(new_password));
        self.execute("reset password", req).await?;

        info!("Reset password for Keycloak user {}", handle);
        Ok(())
    }
}
