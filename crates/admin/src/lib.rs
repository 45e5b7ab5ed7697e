//! Back Office Admin library.
//!
//! Remote API clients and the page services built on them:
//! - Shipping-order API (cached order collection)
//! - Chat API (assistant queries)
//!
//! Presentation is handled elsewhere; everything here returns typed values
//! from `backoffice-core`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod chat;
pub mod config;
pub mod error;
pub mod services;
pub mod shipping;
pub mod state;

pub use config::AdminConfig;
pub use error::AdminError;
pub use state::AppState;
