//! Shipping-order API integration.
//!
//! This module provides:
//! - [`ShippingClient`] for fetching the order collection
//! - A short-lived, request-coalescing cache keyed by [`CacheKey`]

mod cache;
mod client;
mod error;

pub use cache::{CacheKey, OrderSnapshot};
pub use client::ShippingClient;
pub use error::ShippingError;
