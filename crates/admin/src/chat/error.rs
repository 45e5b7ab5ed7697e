//! Error types for the chat API client.

use thiserror::Error;

/// Which chat endpoint failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatOperation {
    Send,
    Reset,
}

impl std::fmt::Display for ChatOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Send => f.write_str("Chat API error"),
            Self::Reset => f.write_str("Reset chat API error"),
        }
    }
}

/// Errors that can occur when talking to the chat API.
#[derive(Debug, Error)]
pub enum ChatError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint URL could not be built.
    #[error("invalid chat API URL: {0}")]
    Url(#[from] url::ParseError),

    /// The API answered with a non-success status.
    #[error("{operation}: {status} - {body}")]
    Api {
        operation: ChatOperation,
        status: u16,
        body: String,
    },
}
