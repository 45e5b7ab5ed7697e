//! Integration tests for the back-office API clients.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p backoffice-integration-tests
//! ```
//!
//! The remote shipping and chat APIs are replaced by in-process `axum`
//! routers bound to an ephemeral localhost port, so no network access or
//! external services are needed.
//!
//! # Test Categories
//!
//! - `shipping_orders` - Order fetching, caching, and the dashboard page service
//! - `chat` - Chat API wire format and error handling

use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use url::Url;

use backoffice_admin::config::{ChatApiConfig, ShippingApiConfig};

/// Timeout used by every client built in tests.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Serve `router` on `127.0.0.1:<ephemeral>` and return its base URL.
///
/// The server runs on a background task until the test runtime shuts down.
///
/// # Panics
///
/// Panics if the listener cannot be bound.
pub async fn spawn_server(router: Router) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("test server failed");
    });

    Url::parse(&format!("http://{addr}/api/")).expect("test server URL")
}

/// Shipping API configuration pointing at a test server.
#[must_use]
pub const fn shipping_config(base_url: Url) -> ShippingApiConfig {
    ShippingApiConfig::new(base_url)
}

/// Chat API configuration pointing at a test server.
#[must_use]
pub const fn chat_config(base_url: Url) -> ChatApiConfig {
    ChatApiConfig { base_url }
}
