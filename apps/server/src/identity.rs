//! Identity-provider adapters used at account teardown.

use async_trait::async_trait;
use reqwest::StatusCode;
use savemission_core::errors::{Error, Result};
use savemission_core::users::IdentityProviderTrait;

/// Deletes identities through the provider's admin API.
pub struct RemoteIdentityProvider {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl RemoteIdentityProvider {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }
}

#[async_trait]
impl IdentityProviderTrait for RemoteIdentityProvider {
    async fn delete_identity(&self, user_id: &str) -> Result<()> {
        let url = format!("{}/users/{}", self.base_url, user_id);
        let response = self
            .client
            .delete(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| Error::Identity(format!("Identity provider unreachable: {e}")))?;

        match response.status() {
            status if status.is_success() => Ok(()),
            // Already gone on the provider side.
            StatusCode::NOT_FOUND => {
                tracing::warn!("Identity {} was not found at the provider", user_id);
                Ok(())
            }
            status => Err(Error::Identity(format!(
                "Identity provider refused to delete {user_id}: {status}"
            ))),
        }
    }
}

/// Used when no admin API is configured; the provider owns the identity lifecycle.
pub struct LoggingIdentityProvider;

#[async_trait]
impl IdentityProviderTrait for LoggingIdentityProvider {
    async fn delete_identity(&self, user_id: &str) -> Result<()> {
        tracing::info!(
            "No identity admin API configured; identity {} must be removed at the provider",
            user_id
        );
        Ok(())
    }
}
