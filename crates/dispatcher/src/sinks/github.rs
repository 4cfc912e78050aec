//! GithubSink - repository_dispatch POST to the GitHub API

use contracts::{ContractError, DeliveryStatus, DispatchEvent, DispatchSink};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Sink that POSTs dispatch events to `/repos/{org}/{repo}/dispatches`
pub struct GithubSink {
    client: reqwest::Client,
    dispatch_url: String,
    token: String,
}

impl GithubSink {
    /// Create a sink for one repository's dispatch endpoint
    ///
    /// # Errors
    /// Fails when the underlying HTTP client cannot be constructed.
    pub fn new(
        dispatch_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, ContractError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("aem-notify/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ContractError::other(format!("http client build failed: {e}")))?;

        Ok(Self {
            client,
            dispatch_url: dispatch_url.into(),
            token: token.into(),
        })
    }
}

impl DispatchSink for GithubSink {
    fn name(&self) -> &str {
        "github"
    }

    async fn deliver(&self, event: &DispatchEvent) -> Result<DeliveryStatus, ContractError> {
        let path = &event.client_payload.path;
        debug!(url = %self.dispatch_url, path = %path, "posting dispatch event");

        let response = self
            .client
            .post(&self.dispatch_url)
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(CONTENT_TYPE, "application/json")
            .json(event)
            .send()
            .await
            .map_err(|e| ContractError::dispatch(path, None, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ContractError::dispatch(path, Some(status.as_u16()), body));
        }

        Ok(DeliveryStatus::Delivered)
    }
}
