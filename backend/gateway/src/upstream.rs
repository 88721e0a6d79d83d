//! Client for the third-party registration lookup API.

use plateproxy_config::UpstreamConfig;
use plateproxy_core::VehicleIdentifier;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use tracing::debug;

use crate::error::LookupError;

/// Issues one GET per lookup. No retries and no timeout beyond the
/// transport default.
#[derive(Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
    api_key: String,
    user_agent: String,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            user_agent: config.user_agent.clone(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Fetch the raw response body for `identifier`.
    ///
    /// A non-2xx status is an error; the body is not interpreted here.
    pub async fn fetch(&self, identifier: &VehicleIdentifier) -> Result<String, LookupError> {
        debug!(identifier = %identifier, "Sending request to upstream");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("action", "api"),
                ("key", self.api_key.as_str()),
                ("test1", identifier.as_str()),
            ])
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::UpstreamStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
