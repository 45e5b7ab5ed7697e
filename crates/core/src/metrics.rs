//! Dashboard metrics over a snapshot of shipping orders.
//!
//! The summary is recomputed from the full fetched collection every time the
//! page renders. Nothing is updated incrementally.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{ShippingOrder, ShippingStatus};

/// Aggregate counts shown on the shipping-orders dashboard.
///
/// `pending_orders + confirmed_orders <= total_orders` and
/// `unique_countries <= total_orders` always hold; `average_cost` is never
/// negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    pub total_orders: usize,
    pub pending_orders: usize,
    pub confirmed_orders: usize,
    /// Total shipping cost divided by `total_orders`; zero for no orders.
    pub average_cost: Decimal,
    pub unique_countries: usize,
}

/// Summarize a collection of orders in a single pass.
///
/// Statuses other than `Pending` and `Confirmed`, and orders with no status,
/// count toward the total only. Countries are compared by exact value; all
/// orders without a country share one bucket.
#[must_use]
pub fn summarize(orders: &[ShippingOrder]) -> MetricsSummary {
    let mut pending_orders = 0;
    let mut confirmed_orders = 0;
    let mut total_cost = Decimal::ZERO;
    let mut countries: HashSet<Option<&str>> = HashSet::new();

    for order in orders {
        match order.status {
            Some(ShippingStatus::Pending) => pending_orders += 1,
            Some(ShippingStatus::Confirmed) => confirmed_orders += 1,
            Some(ShippingStatus::Other(_)) | None => {}
        }
        total_cost += order.effective_cost();
        countries.insert(order.country.as_deref());
    }

    let total_orders = orders.len();
    let average_cost = if total_orders == 0 {
        Decimal::ZERO
    } else {
        total_cost / Decimal::from(total_orders)
    };

    MetricsSummary {
        total_orders,
        pending_orders,
        confirmed_orders,
        average_cost,
        unique_countries: countries.len(),
    }
}
