//! Runtime validation of a fully merged configuration.

use crate::schema::Config;
use vcmp_common::{Result, VcmpError};

/// Accepted range for the status request timeout, in seconds.
pub const TIMEOUT_RANGE_SECS: std::ops::RangeInclusive<u64> = 1..=300;

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.discord.token.trim().is_empty() {
            return Err(VcmpError::validation_field(
                "Discord token cannot be empty",
                "discord.token",
            ));
        }

        let url = url::Url::parse(&self.status_api.base_url).map_err(|e| {
            VcmpError::validation_field(
                format!("Status API URL is not a valid URL: {e}"),
                "status_api.base_url",
            )
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(VcmpError::validation_field(
                format!("Status API URL must use http or https, got '{}'", url.scheme()),
                "status_api.base_url",
            ));
        }

        if !TIMEOUT_RANGE_SECS.contains(&self.status_api.timeout_secs) {
            return Err(VcmpError::validation_field(
                "Status API timeout must be between 1 and 300 seconds",
                "status_api.timeout_secs",
            ));
        }

        if self
            .status_api
            .user_agent
            .as_deref()
            .is_some_and(|agent| agent.trim().is_empty())
        {
            return Err(VcmpError::validation_field(
                "Status API user agent cannot be blank",
                "status_api.user_agent",
            ));
        }

        if self.liveness.enabled && self.liveness.port == 0 {
            return Err(VcmpError::validation_field(
                "Liveness port must be non-zero",
                "liveness.port",
            ));
        }

        Ok(())
    }
}
