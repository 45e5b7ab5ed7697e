//! Command implementations.

pub mod chart;
pub mod chat;
pub mod menu;
pub mod orders;

use serde::Serialize;

use backoffice_admin::{AdminConfig, AppState};

/// How results are reported.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    /// Print a JSON document on stdout instead of log lines.
    pub json: bool,
}

impl Output {
    /// Print `value` as pretty JSON when JSON output is on, otherwise run
    /// `log` to report it through tracing.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` cannot be serialized.
    #[allow(clippy::print_stdout)]
    pub fn emit<T: Serialize>(
        self,
        value: &T,
        log: impl FnOnce(&T),
    ) -> Result<(), serde_json::Error> {
        if self.json {
            let rendered = serde_json::to_string_pretty(value)?;
            println!("{rendered}");
        } else {
            log(value);
        }
        Ok(())
    }
}

/// Load configuration from the environment and build the API clients.
///
/// # Errors
///
/// Returns an error if configuration is missing or invalid.
pub fn load_state() -> Result<AppState, backoffice_admin::AdminError> {
    let config = AdminConfig::from_env()?;
    tracing::debug!(?config, "Configuration loaded");
    AppState::new(config)
}
