//! Test utilities and shared test helpers for the VCMP status bot.
//!
//! Fixtures mirror the payloads returned by the status service so every crate
//! in the workspace tests against the same shapes.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// In-memory capture of tracing events for asserting on log output.
pub mod log_capture {
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::subscriber::DefaultGuard;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::{Layer, Registry};

    /// One recorded event.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CapturedEvent {
        /// Event level.
        pub level: Level,
        /// Rendered `message` field.
        pub message: String,
    }

    /// Layer that stores every event it sees.
    #[derive(Debug, Clone, Default)]
    pub struct CaptureLayer {
        events: Arc<Mutex<Vec<CapturedEvent>>>,
    }

    impl CaptureLayer {
        /// All events recorded so far.
        pub fn events(&self) -> Vec<CapturedEvent> {
            self.events
                .lock()
                .map(|events| events.clone())
                .unwrap_or_default()
        }

        /// Events recorded at exactly `level`.
        pub fn at_level(&self, level: Level) -> Vec<CapturedEvent> {
            self.events()
                .into_iter()
                .filter(|event| event.level == level)
                .collect()
        }
    }

    struct MessageVisitor(String);

    impl Visit for MessageVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.0 = format!("{value:?}");
            }
        }
    }

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            if let Ok(mut events) = self.events.lock() {
                events.push(CapturedEvent {
                    level: *event.metadata().level(),
                    message: visitor.0,
                });
            }
        }
    }

    /// Captures events on the current thread until the guard is dropped.
    ///
    /// Use from `#[tokio::test]` (current-thread runtime) or plain tests.
    pub fn capture() -> (CaptureLayer, DefaultGuard) {
        let layer = CaptureLayer::default();
        let guard = tracing::subscriber::set_default(Registry::default().with(layer.clone()));
        (layer, guard)
    }
}

/// Status-service payload fixtures.
pub mod status_fixtures {
    /// A successful response for a server with two players online.
    pub fn success_json() -> &'static str {
        r#"{
            "msg": "success",
            "state": {
                "name": "Test Server",
                "players": [{"name": "Alice"}, {"name": "Bob"}],
                "raw": {
                    "gamemode": "DM",
                    "numplayers": 2,
                    "map": "Downtown",
                    "version": "0.4",
                    "passworded": false
                },
                "maxplayers": 10,
                "ping": 42
            }
        }"#
    }

    /// A successful response for an empty, password protected server.
    pub fn empty_server_json() -> &'static str {
        r#"{
            "msg": "success",
            "state": {
                "name": "Night Club",
                "players": [],
                "raw": {
                    "gamemode": "Freeroam",
                    "numplayers": 0,
                    "map": "Vice City",
                    "version": "04rel006",
                    "passworded": 1
                },
                "maxplayers": 50,
                "ping": 120
            }
        }"#
    }

    /// The envelope the service returns when it cannot reach the server.
    pub fn offline_json() -> &'static str {
        r#"{"msg": "Failed to query server"}"#
    }

    /// A success envelope whose state is missing `raw`.
    pub fn malformed_state_json() -> &'static str {
        r#"{
            "msg": "success",
            "state": {
                "name": "Broken",
                "players": [],
                "maxplayers": 10,
                "ping": 5
            }
        }"#
    }
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// A minimal valid configuration as YAML.
    pub fn minimal_config_yaml() -> &'static str {
        r#"
discord:
  token: "test_token"
"#
    }

    /// A full configuration as YAML.
    pub fn full_config_yaml() -> &'static str {
        concat!(
            "discord:\n",
            "  token: \"test_token_full\"\n",
            "  client_id: 1234567890\n",
            "  guild_id: 987654321098765432\n",
            "  activity: \"Vice City\"\n",
            "\n",
            "status_api:\n",
            "  base_url: \"http://localhost:9000\"\n",
            "  timeout_secs: 5\n",
            "\n",
            "liveness:\n",
            "  enabled: false\n",
            "  port: 8080\n",
            "\n",
            "logging:\n",
            "  level: \"debug\"\n",
            "  format: \"json\"\n"
        )
    }
}
