//! Shipping-order API client.
//!
//! The full order list is fetched once and reused until the cache entry
//! expires. Concurrent callers that miss the cache share a single request.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use reqwest::header::ACCEPT;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, error, instrument};
use url::Url;

use backoffice_core::ShippingOrder;

use crate::config::ShippingApiConfig;

use super::cache::{CacheKey, OrderSnapshot};
use super::error::ShippingError;

/// Path of the order collection, relative to the configured base URL.
const ORDERS_PATH: &str = "shipping-orders";

/// Bodies longer than this are cut before they reach logs or errors.
const MAX_LOGGED_BODY_CHARS: usize = 500;

/// Client for the shipping-order API.
#[derive(Clone)]
pub struct ShippingClient {
    inner: Arc<ShippingClientInner>,
}

struct ShippingClientInner {
    client: reqwest::Client,
    base_url: Url,
    token: Option<SecretString>,
    cache: Cache<CacheKey, OrderSnapshot>,
}

impl std::fmt::Debug for ShippingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShippingClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("token", &self.inner.token.as_ref().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}

impl ShippingClient {
    /// Create a new shipping API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &ShippingApiConfig, timeout: Duration) -> Result<Self, ShippingError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        let cache = Cache::builder()
            .max_capacity(16)
            .time_to_live(config.cache_ttl)
            .build();

        Ok(Self {
            inner: Arc::new(ShippingClientInner {
                client,
                base_url: config.base_url.clone(),
                token: config.token.clone(),
                cache,
            }),
        })
    }

    /// Fetch every shipping order.
    ///
    /// Served from the cache while the entry is fresh. Failures are returned
    /// to the caller and are neither cached nor retried.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a
    /// non-success status, or the body is not a list of orders.
    #[instrument(skip(self), fields(cache_key = CacheKey::ShippingOrders.as_str()))]
    pub async fn fetch_orders(&self) -> Result<OrderSnapshot, ShippingError> {
        let key = CacheKey::ShippingOrders;

        self.inner
            .cache
            .try_get_with(key, async {
                debug!("Order cache miss, fetching from shipping API");
                self.request_orders().await.map(Arc::new)
            })
            .await
            .map_err(ShippingError::from)
    }

    /// Drop the cached order list so the next fetch goes to the API.
    pub async fn invalidate(&self) {
        self.inner
            .cache
            .invalidate(&CacheKey::ShippingOrders)
            .await;
        debug!("Order cache invalidated");
    }

    async fn request_orders(&self) -> Result<Vec<ShippingOrder>, ShippingError> {
        let url = self.inner.base_url.join(ORDERS_PATH)?;

        let mut request = self
            .inner
            .client
            .get(url)
            .header(ACCEPT, "application/json");
        if let Some(token) = &self.inner.token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!(
                status = %status,
                body = %truncate(&body),
                "Shipping API returned non-success status"
            );
            return Err(ShippingError::Api {
                status: status.as_u16(),
                body: truncate(&body),
            });
        }

        let orders: Vec<ShippingOrder> = serde_json::from_str(&body).map_err(|e| {
            error!(
                error = %e,
                body = %truncate(&body),
                "Failed to parse shipping orders"
            );
            e
        })?;

        debug!(count = orders.len(), "Fetched shipping orders");
        Ok(orders)
    }
}

fn truncate(body: &str) -> String {
    body.chars().take(MAX_LOGGED_BODY_CHARS).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short"), "short");
        assert_eq!(truncate(&"x".repeat(900)).len(), MAX_LOGGED_BODY_CHARS);
    }

    #[test]
    fn test_debug_redacts_token() {
        let mut config = ShippingApiConfig::new(Url::parse("https://api.example.com/").unwrap());
        config.token = Some(SecretString::from("tok_live_abcdef123456"));
        let client = ShippingClient::new(&config, Duration::from_secs(5)).unwrap();

        let debug = format!("{client:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("tok_live"));
    }
}
