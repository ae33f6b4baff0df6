//! Errors raised while talking to the status service.

use thiserror::Error;

/// Result type alias for status service operations.
pub type Result<T> = std::result::Result<T, StatusError>;

/// Hard failures of a status lookup.
///
/// A reachable service that reports a non-success `msg` is not an error; see
/// [`crate::StatusOutcome::Unavailable`].
#[derive(Error, Debug)]
pub enum StatusError {
    /// The HTTP client could not be built.
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport failure: DNS, connect, timeout or body read.
    #[error("Request to status service failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("Status service returned HTTP {status}")]
    Http {
        /// HTTP status code.
        status: u16,
    },

    /// The body is not a JSON object.
    #[error("Status service returned an unreadable body: {0}")]
    Decode(#[source] serde_json::Error),

    /// `msg` was "success" but no `state` was attached.
    #[error("Status service reported success without a server state")]
    MissingState,

    /// `state` is present but does not match the expected schema.
    #[error("Server state has an unexpected shape: {0}")]
    MalformedState(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            StatusError::Http { status: 503 }.to_string(),
            "Status service returned HTTP 503"
        );
        assert_eq!(
            StatusError::MissingState.to_string(),
            "Status service reported success without a server state"
        );
    }
}
