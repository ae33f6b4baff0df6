//! Integration tests for vcmp-commands crate.
//!
//! These tests verify the registered command metadata and the reply decided
//! for each status service outcome.

use chrono::Utc;
use serde_json::Value;
use vcmp_commands::serverinfo::{respond, ServerInfoReply, UNAVAILABLE_MESSAGE};
use vcmp_commands::{command_payload, commands};
use vcmp_common::test_utils::{init_test_logging, status_fixtures};
use vcmp_common::ServerQuery;
use vcmp_status::{MockStatusApi, StatusError, StatusOutcome};

fn payload() -> Value {
    serde_json::to_value(command_payload(&commands())).unwrap()
}

fn command<'a>(payload: &'a Value, name: &str) -> &'a Value {
    payload
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == name)
        .unwrap_or_else(|| panic!("command {name} not registered"))
}

#[test]
fn test_serverinfo_payload_shape() {
    let payload = payload();
    let serverinfo = command(&payload, "serverinfo");

    assert_eq!(
        serverinfo["description"],
        "Get information about the VCMP server"
    );

    let options = serverinfo["options"].as_array().unwrap();
    assert_eq!(options.len(), 2);

    assert_eq!(options[0]["name"], "ip");
    assert_eq!(options[0]["type"], 3);
    assert_eq!(options[0]["required"], true);

    assert_eq!(options[1]["name"], "port");
    assert_eq!(options[1]["type"], 4);
    assert_eq!(options[1]["required"], true);
}

#[test]
fn test_botinfo_payload_has_no_options() {
    let payload = payload();
    let botinfo = command(&payload, "botinfo");

    let options = botinfo["options"].as_array().map_or(0, Vec::len);
    assert_eq!(options, 0);
}

#[test]
fn test_payload_is_stable() {
    assert_eq!(payload(), payload());
}

#[tokio::test]
async fn test_one_reply_per_outcome() {
    init_test_logging();
    let query = ServerQuery::new("127.0.0.1", 8192);

    let mut api = MockStatusApi::new();
    api.expect_fetch()
        .times(1)
        .returning(|_| StatusOutcome::from_json(status_fixtures::success_json()));
    let reply = respond(&api, &query, Utc::now()).await;
    assert!(matches!(reply, ServerInfoReply::Embed(_)));

    let mut api = MockStatusApi::new();
    api.expect_fetch()
        .times(1)
        .returning(|_| StatusOutcome::from_json(status_fixtures::offline_json()));
    let reply = respond(&api, &query, Utc::now()).await;
    assert_eq!(reply.content(), Some(UNAVAILABLE_MESSAGE));

    let mut api = MockStatusApi::new();
    api.expect_fetch()
        .times(1)
        .returning(|_| Err(StatusError::MissingState));
    let reply = respond(&api, &query, Utc::now()).await;
    assert_eq!(reply, ServerInfoReply::Failed);
}

#[tokio::test]
async fn test_query_is_forwarded_verbatim() {
    let query = ServerQuery::new("play.example.org", 8192);

    let mut api = MockStatusApi::new();
    api.expect_fetch()
        .withf(|q| q.ip == "play.example.org" && q.port == 8192)
        .times(1)
        .returning(|_| StatusOutcome::from_json(status_fixtures::success_json()));

    let reply = respond(&api, &query, Utc::now()).await;
    let embed = reply.embed().unwrap();
    assert_eq!(embed.title, "Server Info for play.example.org:8192");
}
