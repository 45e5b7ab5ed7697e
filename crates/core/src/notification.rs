//! User-visible notifications handed to the toast layer.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationVariant {
    #[default]
    Default,
    /// Errors; rendered in the alert style.
    Destructive,
}

/// A toast notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub variant: NotificationVariant,
    pub title: String,
    pub description: String,
}

impl Notification {
    /// The notification shown when loading remote data fails.
    #[must_use]
    pub fn fetch_error(message: impl Into<String>) -> Self {
        Self {
            variant: NotificationVariant::Destructive,
            title: "Error".to_owned(),
            description: message.into(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}
