//! Configuration schema definitions using serde.

use serde::{Deserialize, Serialize};
use vcmp_common::LoggingConfig;

/// Main configuration structure for the VCMP status bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Discord configuration.
    pub discord: DiscordConfig,
    /// Status service configuration.
    pub status_api: StatusApiConfig,
    /// Liveness endpoint configuration.
    pub liveness: LivenessConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Discord bot configuration.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    /// Discord bot token.
    pub token: String,
    /// Application (client) ID. Discovered from the gateway when unset.
    pub client_id: Option<u64>,
    /// Register commands in this guild only instead of globally.
    pub guild_id: Option<u64>,
    /// Text shown as the bot's "Watching ..." activity.
    pub activity: String,
}

// Keeps the token out of logs.
impl std::fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("token", &"<redacted>")
            .field("client_id", &self.client_id)
            .field("guild_id", &self.guild_id)
            .field("activity", &self.activity)
            .finish()
    }
}

/// Status service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusApiConfig {
    /// Base URL; requests go to `<base_url>/<ip>/<port>`.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// User agent override; the client's `vcmp-bot/<version>` when unset.
    pub user_agent: Option<String>,
}

/// Liveness HTTP endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LivenessConfig {
    /// Whether to serve `GET /` at all.
    pub enabled: bool,
    /// TCP port to bind on all interfaces.
    pub port: u16,
}
