//! Client for the answer-generating endpoint.
//!
//! The endpoint accepts `{"query": "..."}` and answers with
//! `{"answer": "...", "status": "...", "error": "..."}`. Responses are
//! validated strictly: anything but a successful status with a string
//! `answer` and no `error` is rejected.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ReplyError;

/// Anything that can turn a user query into reply text.
#[async_trait]
pub trait ReplySource: Send + Sync {
    async fn fetch_reply(&self, query: &str) -> Result<String, ReplyError>;
}

#[derive(Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// `ReplySource` backed by an HTTP POST to a fixed endpoint.
#[derive(Clone, Debug)]
pub struct HttpReplySource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpReplySource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Use a preconfigured client (proxy, timeouts) instead of the default one.
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ReplySource for HttpReplySource {
    async fn fetch_reply(&self, query: &str) -> Result<String, ReplyError> {
        tracing::debug!(endpoint = %self.endpoint, "sending query");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&QueryRequest { query })
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        decode_reply(status, &body)
    }
}

/// Validate an endpoint response and extract the answer text.
pub fn decode_reply(status: u16, body: &str) -> Result<String, ReplyError> {
    if !(200..300).contains(&status) {
        return Err(ReplyError::Status { status });
    }

    let parsed: QueryResponse = serde_json::from_str(body)?;

    if let Some(err) = parsed.error.filter(|e| !e.trim().is_empty()) {
        return Err(ReplyError::Server(err));
    }
    if parsed.status.as_deref() == Some("error") {
        return Err(ReplyError::Server("status \"error\"".into()));
    }

    parsed.answer.ok_or(ReplyError::MissingAnswer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success() {
        let body = r#"{"answer":"1. Yes\n2. No","status":"completed"}"#;
        assert_eq!(decode_reply(200, body).unwrap(), "1. Yes\n2. No");
    }

    #[test]
    fn test_decode_answer_only() {
        assert_eq!(decode_reply(200, r#"{"answer":"hi"}"#).unwrap(), "hi");
    }

    #[test]
    fn test_decode_empty_error_field_is_ignored() {
        let body = r#"{"answer":"ok","status":"completed","error":""}"#;
        assert_eq!(decode_reply(200, body).unwrap(), "ok");
    }

    #[test]
    fn test_decode_bad_status() {
        let err = decode_reply(500, r#"{"answer":"ignored"}"#).unwrap_err();
        assert!(matches!(err, ReplyError::Status { status: 500 }));
    }

    #[test]
    fn test_decode_not_json() {
        let err = decode_reply(200, "Method not allowed").unwrap_err();
        assert!(matches!(err, ReplyError::Decode(_)));
    }

    #[test]
    fn test_decode_missing_answer() {
        let err = decode_reply(200, r#"{"status":"completed"}"#).unwrap_err();
        assert!(matches!(err, ReplyError::MissingAnswer));
    }

    #[test]
    fn test_decode_non_string_answer() {
        let err = decode_reply(200, r#"{"answer":42}"#).unwrap_err();
        assert!(matches!(err, ReplyError::Decode(_)));
    }

    #[test]
    fn test_decode_server_error() {
        let body = r#"{"status":"error","error":"query cannot be empty"}"#;
        match decode_reply(200, body).unwrap_err() {
            ReplyError::Server(msg) => assert_eq!(msg, "query cannot be empty"),
            other => panic!("unexpected error: {other:?}"),
        }

        let err = decode_reply(200, r#"{"answer":"","status":"error"}"#).unwrap_err();
        assert!(matches!(err, ReplyError::Server(_)));
    }
}
