//! Common type definitions for domain modeling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Public status service used when no override is configured.
pub const DEFAULT_STATUS_API_URL: &str = "https://vcmp-servers-status.onrender.com";

/// Default request timeout towards the status service, in seconds.
///
/// Replies are not deferred and Discord drops an interaction left unanswered
/// for 3 seconds, so a lookup must give up inside that window for the user to
/// get the private error reply instead of nothing.
pub const DEFAULT_STATUS_TIMEOUT_SECS: u64 = 2;

/// A user-supplied VCMP server address.
///
/// Neither field is validated here: Discord's option typing guarantees a
/// string and an integer, and the status service decides what is reachable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServerQuery {
    /// Host name or IP address of the game server.
    pub ip: String,
    /// Game port of the server.
    pub port: i64,
}

impl ServerQuery {
    /// Creates a new server query.
    pub fn new(ip: impl Into<String>, port: i64) -> Self {
        Self {
            ip: ip.into(),
            port,
        }
    }
}

impl fmt::Display for ServerQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.ip, self.port)
    }
}
