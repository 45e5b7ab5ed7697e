//! Shipping order record as returned by the shipping API.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id::ShippingOrderId;
use super::status::ShippingStatus;

/// A shipping order.
///
/// Only `status`, `shipping_cost` and `country` feed the dashboard metrics.
/// Fields this crate does not model are kept in `extra` so the order list can
/// show them unchanged. A missing or `null` status or country is kept as
/// `None` rather than rejecting the whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShippingOrder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ShippingOrderId>,
    /// `None` when the API sends no status; such orders match neither
    /// tracked label.
    #[serde(default)]
    pub status: Option<ShippingStatus>,
    /// Cost in USD. `null`, missing and negative values count as zero.
    #[serde(default)]
    pub shipping_cost: Option<Decimal>,
    /// Destination country identifier. Missing and `null` count as one
    /// distinct value.
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ShippingOrder {
    /// Build an order from the three fields the metrics look at.
    #[must_use]
    pub fn new(
        status: impl Into<ShippingStatus>,
        shipping_cost: Option<Decimal>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            status: Some(status.into()),
            shipping_cost,
            country: Some(country.into()),
            ..Self::default()
        }
    }

    /// The cost that counts toward totals: zero when absent or negative.
    #[must_use]
    pub fn effective_cost(&self) -> Decimal {
        self.shipping_cost
            .filter(|cost| cost.is_sign_positive())
            .unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize_api_payload() {
        let order: ShippingOrder = serde_json::from_value(json!({
            "id": 17,
            "status": "Shipped",
            "shipping_cost": 42.5,
            "country": "DE",
            "created_at": "2025-03-01T10:00:00Z",
            "tracking_number": "1Z999"
        }))
        .unwrap();

        assert_eq!(order.id, Some(ShippingOrderId::new(17)));
        assert_eq!(order.status, Some(ShippingStatus::Other("Shipped".to_owned())));
        assert_eq!(order.shipping_cost, Some(Decimal::new(425, 1)));
        assert_eq!(order.country.as_deref(), Some("DE"));
        assert_eq!(order.extra.get("tracking_number"), Some(&json!("1Z999")));
    }

    #[test]
    fn test_missing_status_is_not_pending() {
        let order: ShippingOrder =
            serde_json::from_value(json!({"shipping_cost": 10, "country": "US"})).unwrap();
        assert_eq!(order.status, None);
        assert_eq!(order.country.as_deref(), Some("US"));
    }

    #[test]
    fn test_null_status_and_country_are_accepted() {
        let orders: Vec<ShippingOrder> = serde_json::from_str(
            r#"[{"status": null, "country": "US"}, {"status": "Pending", "country": null}]"#,
        )
        .unwrap();

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].status, None);
        assert_eq!(orders[1].status, Some(ShippingStatus::Pending));
        assert_eq!(orders[1].country, None);
    }

    #[test]
    fn test_null_cost_is_none() {
        let order: ShippingOrder =
            serde_json::from_value(json!({"status": "Pending", "shipping_cost": null, "country": "US"}))
                .unwrap();
        assert_eq!(order.shipping_cost, None);
        assert_eq!(order.effective_cost(), Decimal::ZERO);
    }

    #[test]
    fn test_negative_cost_counts_as_zero() {
        let order = ShippingOrder::new("Pending", Some(Decimal::new(-5, 0)), "US");
        assert_eq!(order.effective_cost(), Decimal::ZERO);
    }
}
