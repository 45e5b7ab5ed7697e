//! Back Office Core - Shared types and order metrics.
//!
//! This crate provides everything the back-office screens derive from data:
//! - shipping order records and their dashboard metrics
//! - client-side pagination state
//! - role-gated menu tables, the profile popover view, demo chart data
//! - notifications for the toast layer
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. Fetching lives in `backoffice-admin`.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, emails, statuses and records, plus money formatting
//! - [`metrics`] - [`summarize`] over a snapshot of orders
//! - [`pagination`] - [`paginate`] and the [`Pager`] state machine

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod chart;
pub mod menu;
pub mod metrics;
pub mod notification;
pub mod pagination;
pub mod profile;
pub mod types;

pub use metrics::{MetricsSummary, summarize};
pub use notification::{Notification, NotificationVariant};
pub use pagination::{PAGE_SIZE, Pager, paginate, total_pages};
pub use profile::ProfileView;
pub use types::*;
