//! Shipping API errors.

use std::sync::Arc;

use thiserror::Error;

/// Errors that can occur when fetching shipping orders.
#[derive(Debug, Error)]
pub enum ShippingError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint URL could not be built from the configured base URL.
    #[error("invalid shipping API URL: {0}")]
    Url(#[from] url::ParseError),

    /// The API answered with a non-success status.
    #[error("Shipping API error: {status} - {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated.
        body: String,
    },

    /// The response body was not a list of orders.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A failure from a fetch another caller started for the same cache key.
    #[error(transparent)]
    Shared(Arc<ShippingError>),
}

impl From<Arc<ShippingError>> for ShippingError {
    fn from(err: Arc<ShippingError>) -> Self {
        Arc::try_unwrap(err).unwrap_or_else(Self::Shared)
    }
}
