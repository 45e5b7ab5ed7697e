//! Chat API client.
//!
//! Sends one query at a time and returns the assistant's reply. Conversation
//! state lives on the server; `reset` clears it.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::ACCEPT;
use tracing::{debug, error, instrument};
use url::Url;

use crate::config::ChatApiConfig;

use super::error::{ChatError, ChatOperation};
use super::types::{ChatRequest, ChatResponse};

const CHAT_PATH: &str = "chat";
const RESET_PATH: &str = "chat/reset";

/// Chat API client.
#[derive(Clone, Debug)]
pub struct ChatClient {
    inner: Arc<ChatClientInner>,
}

#[derive(Debug)]
struct ChatClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl ChatClient {
    /// Create a new chat client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &ChatApiConfig, timeout: Duration) -> Result<Self, ChatError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            inner: Arc::new(ChatClientInner {
                client,
                base_url: config.base_url.clone(),
            }),
        })
    }

    /// Send a message and return the reply text.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API answers with a
    /// non-success status. Nothing is retried.
    #[instrument(skip(self, message), fields(message_len = message.len()))]
    pub async fn send_message(&self, message: &str) -> Result<String, ChatError> {
        let url = self.inner.base_url.join(CHAT_PATH)?;

        let response = self
            .inner
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .json(&ChatRequest::new(message))
            .send()
            .await?;

        let response = check_status(response, ChatOperation::Send).await?;
        let reply: ChatResponse = response.json().await?;
        Ok(reply.response)
    }

    /// Clear the server-side conversation.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API answers with a
    /// non-success status.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<(), ChatError> {
        let url = self.inner.base_url.join(RESET_PATH)?;

        let response = self
            .inner
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        check_status(response, ChatOperation::Reset).await?;
        Ok(())
    }
}

async fn check_status(
    response: reqwest::Response,
    operation: ChatOperation,
) -> Result<reqwest::Response, ChatError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_else(|e| {
        debug!(error = %e, "Failed to read chat API error body");
        String::new()
    });
    error!(status = %status, body = %body, "{operation}");
    Err(ChatError::Api {
        operation,
        status: status.as_u16(),
        body,
    })
}
