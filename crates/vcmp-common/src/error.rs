//! Error types shared across the workspace.

use thiserror::Error;

/// Result type alias for VCMP bot operations.
pub type Result<T> = std::result::Result<T, VcmpError>;

/// Application-wide error type.
#[derive(Error, Debug)]
pub enum VcmpError {
    /// Configuration related errors.
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for configuration values or user input.
    #[error("Validation error: {message}")]
    Validation {
        /// Human readable description.
        message: String,
        /// Name of the offending field, if known.
        field: Option<String>,
    },

    /// Logging could not be initialised.
    #[error("Logging error: {0}")]
    Logging(String),
}

impl VcmpError {
    /// Create a new configuration error with source.
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error with field name.
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Returns the offending field for validation errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_display_formatting() {
        let validation_error = VcmpError::validation_field("must be non-zero", "liveness.port");
        assert_eq!(validation_error.to_string(), "Validation error: must be non-zero");
        assert_eq!(validation_error.field(), Some("liveness.port"));
    }

    #[test]
    fn test_error_with_source() {
        let err = VcmpError::config_with_source(
            "Failed to read config",
            io::Error::new(io::ErrorKind::NotFound, "config.yaml"),
        );
        assert!(err.source().is_some());
        assert!(err.field().is_none());
    }
}
