//! Unified error handling for admin.

use thiserror::Error;

use crate::chat::ChatError;
use crate::config::ConfigError;
use crate::shipping::ShippingError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Shipping API operation failed.
    #[error("Shipping error: {0}")]
    Shipping(#[from] ShippingError),

    /// Chat API operation failed.
    #[error("Chat error: {0}")]
    Chat(#[from] ChatError),

    /// A chat command was issued without `CHAT_API_URL`.
    #[error("Chat is disabled: set CHAT_API_URL to enable it")]
    ChatDisabled,
}
