//! Response models for the status service.

use crate::error::{Result, StatusError};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Value of `msg` that marks a successful lookup.
pub const SUCCESS_MSG: &str = "success";

// ============================================================================
// Envelope
// ============================================================================

/// Raw `{ msg, state }` envelope returned by the service.
///
/// Both fields stay untyped JSON until `msg` is exactly "success", so an
/// error envelope never fails on schema grounds: a missing, null or
/// non-string `msg` is just another way of not succeeding.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatusEnvelope {
    /// "success" or a service-defined failure description.
    #[serde(default)]
    pub msg: Option<Value>,
    /// Server state, present on success.
    #[serde(default)]
    pub state: Option<Value>,
}

impl StatusEnvelope {
    /// Parses a response body.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(StatusError::Decode)
    }

    /// Check if the envelope indicates success.
    pub fn is_success(&self) -> bool {
        matches!(&self.msg, Some(Value::String(msg)) if msg == SUCCESS_MSG)
    }

    /// The service's explanation, rendered as text.
    pub fn message(&self) -> String {
        match &self.msg {
            Some(Value::String(msg)) => msg.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }

    /// Validates the envelope into a typed outcome.
    pub fn into_outcome(self) -> Result<StatusOutcome> {
        if !self.is_success() {
            return Ok(StatusOutcome::Unavailable {
                msg: self.message(),
            });
        }

        let state = self.state.ok_or(StatusError::MissingState)?;
        let state = serde_json::from_value(state).map_err(StatusError::MalformedState)?;
        Ok(StatusOutcome::Online(state))
    }
}

/// Result of a lookup that reached the service.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusOutcome {
    /// The server answered the service's query.
    Online(ServerState),
    /// The service could not query the server; `msg` is its explanation.
    Unavailable {
        /// Message returned in place of "success".
        msg: String,
    },
}

impl StatusOutcome {
    /// Parses a response body straight into an outcome.
    pub fn from_json(body: &str) -> Result<Self> {
        StatusEnvelope::from_json(body)?.into_outcome()
    }
}

// ============================================================================
// Server state
// ============================================================================

/// Live state of a VCMP server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerState {
    /// Advertised server name.
    pub name: String,
    /// Players currently online.
    pub players: Vec<Player>,
    /// Fields reported verbatim by the VCMP query.
    pub raw: RawInfo,
    /// Player slots.
    pub maxplayers: u32,
    /// Round-trip time from the service to the server, in milliseconds.
    pub ping: u64,
}

impl ServerState {
    /// Names of the online players, in the order reported.
    pub fn player_names(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(|p| p.name.as_str())
    }
}

/// A connected player.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Player {
    /// In-game nickname.
    pub name: String,
}

/// Raw VCMP query fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawInfo {
    /// Game mode string.
    pub gamemode: String,
    /// Number of players online as counted by the server.
    pub numplayers: u32,
    /// Map name.
    pub map: String,
    /// Server version string.
    pub version: String,
    /// Whether joining requires a password. Absent means no.
    #[serde(default, deserialize_with = "flag")]
    pub passworded: bool,
}

/// Accepts `true`/`false` as well as the `0`/`1` some query backends emit.
fn flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(i) => i != 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcmp_common::test_utils::status_fixtures;

    #[test]
    fn test_success_envelope() {
        let outcome = StatusOutcome::from_json(status_fixtures::success_json()).unwrap();
        let StatusOutcome::Online(state) = outcome else {
            panic!("expected online outcome, got {outcome:?}");
        };

        assert_eq!(state.name, "Test Server");
        assert_eq!(state.raw.gamemode, "DM");
        assert_eq!(state.raw.numplayers, 2);
        assert_eq!(state.maxplayers, 10);
        assert_eq!(state.ping, 42);
        assert!(!state.raw.passworded);
        assert_eq!(state.player_names().collect::<Vec<_>>(), ["Alice", "Bob"]);
    }

    #[test]
    fn test_integer_passworded_flag() {
        let outcome = StatusOutcome::from_json(status_fixtures::empty_server_json()).unwrap();
        let StatusOutcome::Online(state) = outcome else {
            panic!("expected online outcome");
        };
        assert!(state.raw.passworded);
        assert!(state.players.is_empty());
    }

    #[test]
    fn test_missing_passworded_defaults_to_false() {
        let raw: RawInfo = serde_json::from_str(
            r#"{"gamemode":"TDM","numplayers":1,"map":"Haiti","version":"0.4"}"#,
        )
        .unwrap();
        assert!(!raw.passworded);
    }

    #[test]
    fn test_non_success_is_unavailable() {
        let outcome = StatusOutcome::from_json(status_fixtures::offline_json()).unwrap();
        assert_eq!(
            outcome,
            StatusOutcome::Unavailable {
                msg: "Failed to query server".to_string()
            }
        );
    }

    #[test]
    fn test_error_envelope_ignores_junk_state() {
        let outcome = StatusOutcome::from_json(r#"{"msg":"error","state":{"weird":true}}"#)
            .unwrap();
        assert!(matches!(outcome, StatusOutcome::Unavailable { .. }));
    }

    #[test]
    fn test_envelope_without_msg_is_unavailable() {
        let outcome =
            StatusOutcome::from_json(r#"{"error":"Failed to query server"}"#).unwrap();
        assert_eq!(outcome, StatusOutcome::Unavailable { msg: String::new() });
    }

    #[test]
    fn test_null_msg_is_unavailable() {
        let outcome = StatusOutcome::from_json(r#"{"msg":null}"#).unwrap();
        assert_eq!(outcome, StatusOutcome::Unavailable { msg: String::new() });
    }

    #[test]
    fn test_non_string_msg_is_unavailable() {
        let outcome = StatusOutcome::from_json(r#"{"msg":500,"state":{}}"#).unwrap();
        assert_eq!(outcome, StatusOutcome::Unavailable { msg: "500".to_string() });
    }

    #[test]
    fn test_success_without_state() {
        let err = StatusOutcome::from_json(r#"{"msg":"success"}"#).unwrap_err();
        assert!(matches!(err, StatusError::MissingState));
    }

    #[test]
    fn test_malformed_state() {
        let err = StatusOutcome::from_json(status_fixtures::malformed_state_json()).unwrap_err();
        assert!(matches!(err, StatusError::MalformedState(_)));
        assert!(err.to_string().contains("raw"));
    }

    #[test]
    fn test_non_json_body() {
        let err = StatusOutcome::from_json("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, StatusError::Decode(_)));
    }
}
