//! Domain types for the back office.
//!
//! This module provides type-safe wrappers for the records the remote
//! services hand us.

pub mod email;
pub mod id;
pub mod order;
pub mod price;
pub mod status;
pub mod user;

pub use email::{Email, EmailError};
pub use id::*;
pub use order::ShippingOrder;
pub use price::format_usd_whole;
pub use status::*;
pub use user::User;
