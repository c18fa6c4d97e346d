//! Backend tests: the action loop and the HTTP reply source

use async_trait::async_trait;
use crossbeam_channel::unbounded;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::backend::{handle_backend_action, run_backend, HttpReplySource, ReplySource};
use crate::error::ReplyError;
use crate::protocol::{BackendAction, GuiEvent};
use crate::state::SessionId;

/// Echoes queries back, failing on the literal query "fail".
struct ScriptedSource;

#[async_trait]
impl ReplySource for ScriptedSource {
    async fn fetch_reply(&self, query: &str) -> Result<String, ReplyError> {
        if query == "fail" {
            Err(ReplyError::Server("boom".into()))
        } else {
            Ok(format!("echo: {query}"))
        }
    }
}

fn source_for(server: &MockServer) -> HttpReplySource {
    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("build client");
    HttpReplySource::with_client(client, format!("{}/query", server.uri()))
}

#[test]
fn test_backend_loop_replies_in_order() {
    let (action_tx, action_rx) = unbounded::<BackendAction>();
    let (event_tx, event_rx) = unbounded::<GuiEvent>();

    let handle = std::thread::spawn(move || run_backend(ScriptedSource, action_rx, event_tx));

    let first = SessionId::new();
    let second = SessionId::new();
    action_tx
        .send(BackendAction::Query {
            session: first,
            text: "hello".into(),
        })
        .unwrap();
    action_tx
        .send(BackendAction::Query {
            session: second,
            text: "fail".into(),
        })
        .unwrap();

    match event_rx.recv_timeout(Duration::from_secs(5)).unwrap() {
        GuiEvent::ReplyReceived { session, text } => {
            assert_eq!(session, first);
            assert_eq!(text, "echo: hello");
        }
        other => panic!("unexpected event: {other:?}"),
    }
    match event_rx.recv_timeout(Duration::from_secs(5)).unwrap() {
        GuiEvent::ReplyFailed { session, error } => {
            assert_eq!(session, second);
            assert!(error.contains("boom"));
        }
        other => panic!("unexpected event: {other:?}"),
    }

    // Dropping the sender ends the loop
    drop(action_tx);
    handle.join().unwrap();
}

#[test]
fn test_backend_loop_stops_when_ui_is_gone() {
    let (action_tx, action_rx) = unbounded::<BackendAction>();
    let (event_tx, event_rx) = unbounded::<GuiEvent>();
    drop(event_rx);

    let handle = std::thread::spawn(move || run_backend(ScriptedSource, action_rx, event_tx));
    action_tx
        .send(BackendAction::Query {
            session: SessionId::new(),
            text: "anyone?".into(),
        })
        .unwrap();

    handle.join().unwrap();
}

#[tokio::test]
async fn test_handle_action_routes_session() {
    let session = SessionId::new();
    let event = handle_backend_action(
        &ScriptedSource,
        BackendAction::Query {
            session,
            text: "ping".into(),
        },
    )
    .await;

    match event {
        GuiEvent::ReplyReceived { session: s, text } => {
            assert_eq!(s, session);
            assert_eq!(text, "echo: ping");
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test]
async fn test_http_source_posts_query() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "query": "What is Rust?" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "1. Ownership\n2. Borrowing",
            "status": "completed"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = source_for(&server).fetch_reply("What is Rust?").await.unwrap();
    assert_eq!(reply, "1. Ownership\n2. Borrowing");
}

#[tokio::test]
async fn test_http_source_rejects_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "status": "error",
            "error": "model offline"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = source_for(&server).fetch_reply("hi").await.unwrap_err();
    assert!(matches!(err, ReplyError::Status { status: 500 }));
}

#[tokio::test]
async fn test_http_source_rejects_server_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "error": "query cannot be empty"
        })))
        .mount(&server)
        .await;

    match source_for(&server).fetch_reply(" ").await.unwrap_err() {
        ReplyError::Server(msg) => assert_eq!(msg, "query cannot be empty"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_http_source_unreachable() {
    // Mock servers are pooled and stay up after drop; use a released port instead.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|l| l.local_addr())
        .unwrap();
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let source = HttpReplySource::with_client(client, format!("http://{addr}/query"));

    let err = source.fetch_reply("hi").await.unwrap_err();
    assert!(matches!(err, ReplyError::Transport(_)));
}
