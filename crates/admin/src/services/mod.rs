//! Page services for admin.
//!
//! # Services
//!
//! - `orders` - Shipping-orders dashboard: metrics, paging, fetch-error notification

pub mod orders;

pub use orders::{OrderSource, OrdersPage, OrdersPageService};
