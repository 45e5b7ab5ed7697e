//! Shipping-orders dashboard commands.
//!
//! # Environment Variables
//!
//! - `SHIPPING_API_URL` - Base URL of the shipping-order API
//! - `SHIPPING_API_TOKEN` - Optional bearer token

use std::num::NonZeroUsize;

use tracing::{error, info};

use backoffice_admin::AppState;
use backoffice_core::{ShippingStatus, format_usd_whole};

use super::Output;

/// Print metrics for every order.
///
/// # Errors
///
/// Returns an error if the orders cannot be fetched.
pub async fn summary(state: &AppState, output: Output) -> Result<(), Box<dyn std::error::Error>> {
    let summary = state.orders_page().summary().await?;

    output.emit(&summary, |summary| {
        info!("Total orders: {}", summary.total_orders);
        info!("Pending orders: {}", summary.pending_orders);
        info!("Confirmed orders: {}", summary.confirmed_orders);
        info!("Average cost: {}", format_usd_whole(summary.average_cost));
        info!("Destinations: {}", summary.unique_countries);
    })?;
    Ok(())
}

/// Print one page of orders with the pager state.
///
/// # Errors
///
/// Returns an error if the orders cannot be fetched. The failure is also
/// reported the way the dashboard shows it.
pub async fn list(
    state: &AppState,
    page: NonZeroUsize,
    output: Output,
) -> Result<(), Box<dyn std::error::Error>> {
    let view = state.orders_page().load(page).await;

    if let Some(notification) = &view.notification {
        error!(title = %notification.title, "{}", notification.description);
        return Err(notification.description.clone().into());
    }

    output.emit(&view, |view| {
        info!(
            "Page {} of {} ({} orders)",
            view.pager.current_page(),
            view.pager.total_pages(),
            view.summary.total_orders
        );
        for order in &view.orders {
            let id = order.id.map_or_else(|| "-".to_string(), |id| id.to_string());
            let cost = order
                .shipping_cost
                .map_or_else(|| "-".to_string(), format_usd_whole);
            let status = order.status.as_ref().map_or("-", ShippingStatus::as_str);
            let country = order.country.as_deref().unwrap_or("-");
            info!("  #{id}  {status:<12} {country:<4} {cost}");
        }
        info!(
            "previous: {}  next: {}",
            if view.can_go_previous { "yes" } else { "no" },
            if view.can_go_next { "yes" } else { "no" }
        );
    })?;
    Ok(())
}
