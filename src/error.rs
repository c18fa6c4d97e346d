//! Error types for the reply exchange.

use thiserror::Error;

/// Why a reply could not be obtained from the answer endpoint.
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("endpoint returned HTTP {status}")]
    Status { status: u16 },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response has no string 'answer' field")]
    MissingAnswer,

    #[error("endpoint reported an error: {0}")]
    Server(String),

    #[error("backend runtime unavailable: {0}")]
    Runtime(String),
}
