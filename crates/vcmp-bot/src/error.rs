//! Application-wide error types using thiserror.

use poise::serenity_prelude as serenity;
use vcmp_common::VcmpError;
use vcmp_config::ConfigError;
use vcmp_status::StatusError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] VcmpError),

    /// Discord/Serenity error.
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),

    /// Status service client could not be built.
    #[error("Status client error: {0}")]
    Status(#[from] StatusError),
}

impl From<ConfigError> for BotError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.into())
    }
}

/// Result type for the bot application.
pub type BotResult<T> = Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_conversion() {
        let err: BotError = ConfigError::EnvParse {
            var: "PORT".to_string(),
            source: "abc".parse::<u16>().unwrap_err().into(),
        }
        .into();
        assert!(matches!(err, BotError::Config(_)));
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_status_error_conversion() {
        let err: BotError = StatusError::Http { status: 500 }.into();
        assert!(matches!(err, BotError::Status(_)));
    }
}
