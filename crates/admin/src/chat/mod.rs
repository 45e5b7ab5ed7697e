//! Chat assistant API integration.

mod client;
mod error;
mod types;

pub use client::ChatClient;
pub use error::{ChatError, ChatOperation};
pub use types::{ChatRequest, ChatResponse, ContextData};
