//! Default values for every configuration section.

use crate::schema::{Config, DiscordConfig, LivenessConfig, StatusApiConfig};
use vcmp_common::LoggingConfig;

pub use vcmp_common::{DEFAULT_STATUS_API_URL, DEFAULT_STATUS_TIMEOUT_SECS};

/// Default port of the liveness endpoint.
pub const DEFAULT_LIVENESS_PORT: u16 = 3000;

/// Default activity text.
pub const DEFAULT_ACTIVITY: &str = "VCMP Servers";

impl Default for Config {
    fn default() -> Self {
        Self {
            discord: DiscordConfig::default(),
            status_api: StatusApiConfig::default(),
            liveness: LivenessConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            client_id: None,
            guild_id: None,
            activity: DEFAULT_ACTIVITY.to_string(),
        }
    }
}

impl Default for StatusApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_STATUS_API_URL.to_string(),
            timeout_secs: DEFAULT_STATUS_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl Default for LivenessConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            port: DEFAULT_LIVENESS_PORT,
        }
    }
}
