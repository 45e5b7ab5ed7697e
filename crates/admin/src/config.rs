//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHIPPING_API_URL` - Base URL of the shipping-order API
//!
//! ## Optional
//! - `SHIPPING_API_TOKEN` - Bearer token sent to the shipping-order API
//! - `CHAT_API_URL` - Base URL of the chat API (chat is disabled without it)
//! - `ORDERS_CACHE_TTL_SECS` - How long a fetched order list is reused (default: 300)
//! - `HTTP_TIMEOUT_SECS` - Per-request timeout for both APIs (default: 30)

use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_ORDERS_CACHE_TTL_SECS: u64 = 300;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Shipping-order API configuration
    pub shipping: ShippingApiConfig,
    /// Chat API configuration (optional)
    pub chat: Option<ChatApiConfig>,
    /// Timeout applied to every outbound request
    pub http_timeout: Duration,
}

/// Shipping-order API configuration.
///
/// Implements `Debug` manually to redact the token.
#[derive(Clone)]
pub struct ShippingApiConfig {
    /// Base URL, e.g. `https://api.example.com/v1/`
    pub base_url: Url,
    /// Bearer token, if the API requires one
    pub token: Option<SecretString>,
    /// Lifetime of the cached order list
    pub cache_ttl: Duration,
}

impl std::fmt::Debug for ShippingApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShippingApiConfig")
            .field("base_url", &self.base_url.as_str())
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("cache_ttl", &self.cache_ttl)
            .finish()
    }
}

/// Chat API configuration.
#[derive(Debug, Clone)]
pub struct ChatApiConfig {
    /// Base URL, e.g. `http://localhost:8000`
    pub base_url: Url,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required variable is missing or a value
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let http_timeout = Duration::from_secs(parse_secs(
            "HTTP_TIMEOUT_SECS",
            get_optional_env("HTTP_TIMEOUT_SECS").as_deref(),
            DEFAULT_HTTP_TIMEOUT_SECS,
        )?);

        Ok(Self {
            shipping: ShippingApiConfig::from_env()?,
            chat: ChatApiConfig::from_env()?,
            http_timeout,
        })
    }

    /// Returns a reference to the chat configuration, if available.
    ///
    /// Returns `None` if `CHAT_API_URL` was not set.
    #[must_use]
    pub const fn chat(&self) -> Option<&ChatApiConfig> {
        self.chat.as_ref()
    }
}

impl ShippingApiConfig {
    /// Configuration for a shipping API at `base_url` with no token and the
    /// default cache lifetime.
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self {
            base_url,
            token: None,
            cache_ttl: Duration::from_secs(DEFAULT_ORDERS_CACHE_TTL_SECS),
        }
    }

    fn from_env() -> Result<Self, ConfigError> {
        let base_url = parse_base_url("SHIPPING_API_URL", &get_required_env("SHIPPING_API_URL")?)?;
        let cache_ttl = Duration::from_secs(parse_secs(
            "ORDERS_CACHE_TTL_SECS",
            get_optional_env("ORDERS_CACHE_TTL_SECS").as_deref(),
            DEFAULT_ORDERS_CACHE_TTL_SECS,
        )?);

        Ok(Self {
            base_url,
            token: get_optional_env("SHIPPING_API_TOKEN").map(SecretString::from),
            cache_ttl,
        })
    }
}

impl ChatApiConfig {
    /// Load chat configuration from environment.
    ///
    /// Returns `None` if `CHAT_API_URL` is not set (chat disabled).
    fn from_env() -> Result<Option<Self>, ConfigError> {
        get_optional_env("CHAT_API_URL")
            .map(|raw| parse_base_url("CHAT_API_URL", &raw).map(|base_url| Self { base_url }))
            .transpose()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable. Empty values count as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Parse an API base URL.
///
/// A trailing slash is added so that joining a relative endpoint keeps any
/// path prefix (`https://host/api` + `chat` = `https://host/api/chat`).
pub(crate) fn parse_base_url(key: &str, raw: &str) -> Result<Url, ConfigError> {
    let mut url =
        Url::parse(raw).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be an absolute http(s) URL".to_string(),
        ));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Parse a whole number of seconds, falling back to `default` when unset.
fn parse_secs(key: &str, raw: Option<&str>, default: u64) -> Result<u64, ConfigError> {
    raw.map_or(Ok(default), |value| {
        value
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_url_adds_trailing_slash() {
        let url = parse_base_url("X", "https://api.example.com/v1").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/");
        assert_eq!(
            url.join("shipping-orders").unwrap().as_str(),
            "https://api.example.com/v1/shipping-orders"
        );
    }

    #[test]
    fn test_parse_base_url_keeps_existing_slash() {
        let url = parse_base_url("X", "http://localhost:8000/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/");
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        assert!(matches!(
            parse_base_url("CHAT_API_URL", "not a url"),
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "CHAT_API_URL"
        ));
        assert!(parse_base_url("X", "mailto:ops@example.com").is_err());
    }

    #[test]
    fn test_parse_secs() {
        assert_eq!(parse_secs("T", None, 300).unwrap(), 300);
        assert_eq!(parse_secs("T", Some(" 60 "), 300).unwrap(), 60);
        assert!(parse_secs("T", Some("soon"), 300).is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let mut config = ShippingApiConfig::new(Url::parse("https://api.example.com/").unwrap());
        config.token = Some(SecretString::from("tok_live_abcdef123456"));
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("tok_live"));
    }
}
