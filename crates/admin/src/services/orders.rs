//! Shipping-orders page service.
//!
//! Fetches the order snapshot, then derives the dashboard metrics and the
//! requested page from it. A failed fetch does not fail the page: it becomes
//! an error notification next to an empty data set.

use std::future::Future;
use std::num::NonZeroUsize;

use serde::Serialize;
use tracing::{instrument, warn};

use backoffice_core::{
    MetricsSummary, Notification, Pager, ShippingOrder, format_usd_whole, summarize,
};

use crate::shipping::{OrderSnapshot, ShippingClient, ShippingError};

/// Anything that can produce the full order collection.
pub trait OrderSource {
    /// Fetch every order.
    fn fetch_orders(&self) -> impl Future<Output = Result<OrderSnapshot, ShippingError>> + Send;
}

impl OrderSource for ShippingClient {
    fn fetch_orders(&self) -> impl Future<Output = Result<OrderSnapshot, ShippingError>> + Send {
        Self::fetch_orders(self)
    }
}

/// Everything the shipping-orders page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrdersPage {
    pub summary: MetricsSummary,
    /// `summary.average_cost` as whole US dollars, e.g. `$1,235`.
    pub average_cost_display: String,
    /// The current page of orders.
    pub orders: Vec<ShippingOrder>,
    pub pager: Pager,
    pub can_go_next: bool,
    pub can_go_previous: bool,
    /// Set when the fetch failed.
    pub notification: Option<Notification>,
}

impl OrdersPage {
    fn from_snapshot(orders: &[ShippingOrder], page: NonZeroUsize) -> Self {
        let summary = summarize(orders);
        let mut pager = Pager::new(orders.len());
        pager.go_to(page);

        Self {
            summary,
            average_cost_display: format_usd_whole(summary.average_cost),
            orders: pager.window(orders).to_vec(),
            pager,
            can_go_next: pager.can_go_next(),
            can_go_previous: pager.can_go_previous(),
            notification: None,
        }
    }
}

/// Builds [`OrdersPage`]s from an [`OrderSource`].
#[derive(Debug, Clone)]
pub struct OrdersPageService<S> {
    source: S,
}

impl<S: OrderSource> OrdersPageService<S> {
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Load `page` of the shipping-orders dashboard.
    #[instrument(skip(self), fields(page = page.get()))]
    pub async fn load(&self, page: NonZeroUsize) -> OrdersPage {
        match self.source.fetch_orders().await {
            Ok(orders) => OrdersPage::from_snapshot(&orders, page),
            Err(e) => {
                warn!(error = %e, "Failed to load shipping orders");
                OrdersPage {
                    notification: Some(Notification::fetch_error(e.to_string())),
                    ..OrdersPage::from_snapshot(&[], page)
                }
            }
        }
    }

    /// Metrics for the whole collection, without paging.
    ///
    /// # Errors
    ///
    /// Returns the fetch error unchanged.
    pub async fn summary(&self) -> Result<MetricsSummary, ShippingError> {
        let orders = self.source.fetch_orders().await?;
        Ok(summarize(&orders))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rust_decimal::Decimal;

    use super::*;

    struct FixedSource {
        orders: OrderSnapshot,
        calls: AtomicUsize,
    }

    impl OrderSource for FixedSource {
        async fn fetch_orders(&self) -> Result<OrderSnapshot, ShippingError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::clone(&self.orders))
        }
    }

    struct FailingSource;

    impl OrderSource for FailingSource {
        async fn fetch_orders(&self) -> Result<OrderSnapshot, ShippingError> {
            Err(ShippingError::Api {
                status: 502,
                body: "upstream down".to_string(),
            })
        }
    }

    fn orders(count: usize) -> OrderSnapshot {
        Arc::new(
            (0..count)
                .map(|i| {
                    let status = if i % 2 == 0 { "Pending" } else { "Confirmed" };
                    ShippingOrder::new(status, Some(Decimal::from(15)), "US")
                })
                .collect(),
        )
    }

    fn page(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[tokio::test]
    async fn test_load_last_partial_page() {
        let service = OrdersPageService::new(FixedSource {
            orders: orders(23),
            calls: AtomicUsize::new(0),
        });

        let view = service.load(page(3)).await;
        assert_eq!(view.orders.len(), 3);
        assert_eq!(view.summary.total_orders, 23);
        assert_eq!(view.average_cost_display, "$15");
        assert!(!view.can_go_next);
        assert!(view.can_go_previous);
        assert!(view.notification.is_none());
    }

    #[tokio::test]
    async fn test_each_load_recomputes_from_source() {
        let service = OrdersPageService::new(FixedSource {
            orders: orders(12),
            calls: AtomicUsize::new(0),
        });

        let first = service.load(page(1)).await;
        let second = service.load(page(2)).await;
        assert_eq!(first.summary, second.summary);
        assert_eq!(first.orders.len(), 10);
        assert_eq!(second.orders.len(), 2);
        assert_eq!(service.source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_fetch_failure_becomes_notification() {
        let service = OrdersPageService::new(FailingSource);

        let view = service.load(page(1)).await;
        let notification = view.notification.unwrap();
        assert!(notification.is_error());
        assert_eq!(notification.title, "Error");
        assert_eq!(
            notification.description,
            "Shipping API error: 502 - upstream down"
        );
        assert!(view.orders.is_empty());
        assert_eq!(view.summary, MetricsSummary::default());
        assert_eq!(view.average_cost_display, "$0");
        assert!(!view.can_go_next);
        assert!(!view.can_go_previous);
    }

    #[tokio::test]
    async fn test_summary_propagates_error() {
        let service = OrdersPageService::new(FailingSource);
        assert!(matches!(
            service.summary().await,
            Err(ShippingError::Api { status: 502, .. })
        ));
    }
}
