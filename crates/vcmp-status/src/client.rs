//! Status service HTTP client.

use crate::error::{Result, StatusError};
use crate::models::StatusOutcome;
use crate::traits::StatusApi;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use vcmp_common::{ServerQuery, DEFAULT_STATUS_API_URL, DEFAULT_STATUS_TIMEOUT_SECS};

/// Configuration for the status service client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusClientConfig {
    /// Base URL of the service (e.g. "https://vcmp-servers-status.onrender.com")
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for StatusClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_STATUS_API_URL.to_string(),
            timeout_secs: DEFAULT_STATUS_TIMEOUT_SECS,
            user_agent: concat!("vcmp-bot/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl StatusClientConfig {
    /// Create a new configuration for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// HTTP client for the status service.
#[derive(Debug, Clone)]
pub struct StatusClient {
    client: Client,
    config: StatusClientConfig,
}

impl StatusClient {
    /// Create a new client with the given configuration
    pub fn new(config: StatusClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(StatusError::Client)?;

        Ok(Self { client, config })
    }

    /// Create a client for `base_url` with default settings
    pub fn with_defaults(base_url: impl Into<String>) -> Result<Self> {
        Self::new(StatusClientConfig::new(base_url))
    }

    /// The configuration this client was built with.
    pub const fn config(&self) -> &StatusClientConfig {
        &self.config
    }

    /// Builds `<base>/<ip>/<port>`. The IP is interpolated as given.
    pub fn endpoint(&self, query: &ServerQuery) -> String {
        format!(
            "{}/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            query.ip,
            query.port
        )
    }
}

#[async_trait]
impl StatusApi for StatusClient {
    #[instrument(skip(self), fields(server = %query))]
    async fn fetch(&self, query: &ServerQuery) -> Result<StatusOutcome> {
        let url = self.endpoint(query);
        debug!("Requesting {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Status service returned {}", status);
            return Err(StatusError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!("Response body: {}", body);

        let outcome = StatusOutcome::from_json(&body)?;
        match &outcome {
            StatusOutcome::Online(state) => info!(
                name = %state.name,
                players = state.raw.numplayers,
                "Server is online"
            ),
            StatusOutcome::Unavailable { msg } => info!(%msg, "Server is unavailable"),
        }
        Ok(outcome)
    }
}
