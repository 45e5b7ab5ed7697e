//! Application state shared by every command and page.

use std::sync::Arc;

use crate::chat::ChatClient;
use crate::config::AdminConfig;
use crate::error::AdminError;
use crate::services::OrdersPageService;
use crate::shipping::ShippingClient;

/// Configured API clients, cheap to clone.
#[derive(Clone, Debug)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    config: AdminConfig,
    shipping: ShippingClient,
    chat: Option<ChatClient>,
}

impl AppState {
    /// Build the API clients described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be built.
    pub fn new(config: AdminConfig) -> Result<Self, AdminError> {
        let shipping = ShippingClient::new(&config.shipping, config.http_timeout)?;
        let chat = config
            .chat()
            .map(|chat| ChatClient::new(chat, config.http_timeout))
            .transpose()?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                shipping,
                chat,
            }),
        })
    }

    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn shipping(&self) -> &ShippingClient {
        &self.inner.shipping
    }

    /// The chat client.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::ChatDisabled`] when `CHAT_API_URL` is not set.
    pub fn chat(&self) -> Result<&ChatClient, AdminError> {
        self.inner.chat.as_ref().ok_or(AdminError::ChatDisabled)
    }

    /// The shipping-orders page service over the shared client.
    #[must_use]
    pub fn orders_page(&self) -> OrdersPageService<ShippingClient> {
        OrdersPageService::new(self.inner.shipping.clone())
    }
}
