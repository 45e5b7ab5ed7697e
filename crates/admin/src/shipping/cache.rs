//! Cache types for shipping API responses.

use std::sync::Arc;

use backoffice_core::ShippingOrder;

/// Cache key for fetched collections.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum CacheKey {
    ShippingOrders,
}

impl CacheKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShippingOrders => "shipping-orders",
        }
    }
}

/// A fetched order list. Shared so cache hits do not copy the orders.
pub type OrderSnapshot = Arc<Vec<ShippingOrder>>;
