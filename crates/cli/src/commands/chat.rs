//! Chat assistant commands.
//!
//! # Environment Variables
//!
//! - `CHAT_API_URL` - Base URL of the chat API

use serde::Serialize;
use tracing::info;

use backoffice_admin::AppState;

use super::Output;

#[derive(Serialize)]
struct Reply<'a> {
    response: &'a str,
}

/// Send `message` and print the reply.
///
/// # Errors
///
/// Returns an error if chat is not configured or the API call fails.
pub async fn send(
    state: &AppState,
    message: &str,
    output: Output,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = state.chat()?.send_message(message).await?;

    output.emit(&Reply { response: &response }, |reply| {
        info!("{}", reply.response);
    })?;
    Ok(())
}

/// Clear the server-side conversation.
///
/// # Errors
///
/// Returns an error if chat is not configured or the API call fails.
pub async fn reset(state: &AppState) -> Result<(), Box<dyn std::error::Error>> {
    state.chat()?.reset().await?;
    info!("Chat conversation reset");
    Ok(())
}
