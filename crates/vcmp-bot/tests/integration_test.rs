//! Integration tests for vcmp-bot crate.
//!
//! These tests exercise the pieces of startup that do not need a Discord
//! connection: configuration wiring and the liveness endpoint over TCP.

use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use vcmp_bot::{liveness, VcmpBot};
use vcmp_commands::RegistrationScope;
use vcmp_common::test_utils::{config_fixtures, init_test_logging};
use vcmp_config::ConfigLoader;

#[test]
fn test_bot_from_full_config() {
    init_test_logging();
    let config = ConfigLoader::from_yaml(config_fixtures::full_config_yaml()).unwrap();
    config.validate().unwrap();

    let bot = VcmpBot::new(config);
    assert!(matches!(bot.registration_scope(), RegistrationScope::Guild(_)));

    let client = bot.status_client().unwrap();
    assert_eq!(client.config().base_url, "http://localhost:9000");
    assert_eq!(client.config().timeout_secs, 5);
}

#[test]
fn test_bot_from_minimal_config() {
    let config = ConfigLoader::from_yaml(config_fixtures::minimal_config_yaml()).unwrap();
    config.validate().unwrap();

    let bot = VcmpBot::new(config);
    assert_eq!(bot.registration_scope(), RegistrationScope::Global);
    assert!(bot.config().liveness.enabled);
}

#[tokio::test]
async fn test_liveness_over_tcp() {
    init_test_logging();

    // Bind then drop to find a free port for the server.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    tokio::spawn(liveness::serve(port));

    let mut stream = None;
    for _ in 0..50 {
        if let Ok(s) = TcpStream::connect(("127.0.0.1", port)).await {
            stream = Some(s);
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    let mut stream = stream.expect("liveness endpoint did not start");

    stream
        .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert!(response.starts_with("HTTP/1.1 200"));
    assert!(response.ends_with("Hello World"));
}
