//! Configuration loading: YAML file, `.env` and environment overrides.

use crate::schema::Config;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use vcmp_common::VcmpError;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "VCMP_BOT_CONFIG";

/// Files tried, in order, when no path is given.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["config.yaml", "config.yml"];

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading the configuration file.
    #[error("Failed to read configuration file '{path}': {source}")]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error.
    #[error("Failed to parse YAML configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Environment variable parsing error.
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        /// Name of the variable.
        var: String,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The merged configuration is invalid.
    #[error(transparent)]
    Invalid(#[from] VcmpError),
}

impl From<ConfigError> for VcmpError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Invalid(inner) => inner,
            other => Self::config_with_source("Failed to load configuration", other),
        }
    }
}

/// Configuration loader for the application.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from `path`, `VCMP_BOT_CONFIG`, `config.yaml`/`config.yml`
    /// or defaults (in that order), then applies environment overrides and validates.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        if dotenv::dotenv().is_ok() {
            debug!("Loaded environment from .env");
        }

        let path = path
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(|| {
                DEFAULT_CONFIG_FILES
                    .iter()
                    .map(PathBuf::from)
                    .find(|candidate| candidate.exists())
            });

        let mut config = match path {
            Some(path) => {
                info!(path = %path.display(), "Loading configuration file");
                Self::from_file(&path)?
            }
            None => {
                info!("No configuration file found, using defaults");
                Config::default()
            }
        };

        Self::apply_overrides(&mut config, |key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a YAML file without overrides or validation.
    pub fn from_file(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Parses YAML into a configuration. Missing sections fall back to defaults.
    pub fn from_yaml(content: &str) -> Result<Config, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Applies overrides read through `lookup`, normally `std::env::var`.
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup("DISCORD_TOKEN") {
            config.discord.token = token;
        }
        if let Some(id) = lookup("CLIENT_ID") {
            config.discord.client_id = Some(parse_var("CLIENT_ID", &id)?);
        }
        if let Some(id) = lookup("GUILD_ID") {
            config.discord.guild_id = if id.trim().is_empty() {
                None
            } else {
                Some(parse_var("GUILD_ID", &id)?)
            };
        }
        if let Some(activity) = lookup("BOT_ACTIVITY") {
            config.discord.activity = activity;
        }

        if let Some(url) = lookup("STATUS_API_URL") {
            config.status_api.base_url = url;
        }
        if let Some(timeout) = lookup("STATUS_API_TIMEOUT") {
            config.status_api.timeout_secs = parse_var("STATUS_API_TIMEOUT", &timeout)?;
        }
        if let Some(user_agent) = lookup("STATUS_API_USER_AGENT") {
            config.status_api.user_agent = Some(user_agent);
        }

        if let Some(port) = lookup("PORT") {
            config.liveness.port = parse_var("PORT", &port)?;
        }
        if let Some(enabled) = lookup("LIVENESS_ENABLED") {
            config.liveness.enabled = parse_var("LIVENESS_ENABLED", &enabled)?;
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            config.logging.format = parse_var("LOG_FORMAT", &format)?;
        }
        if let Some(dir) = lookup("LOG_DIR") {
            config.logging.directory = Some(PathBuf::from(dir));
        }

        Ok(())
    }
}

fn parse_var<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.trim().parse().map_err(|e| ConfigError::EnvParse {
        var: var.to_string(),
        source: Box::new(e),
    })
}
