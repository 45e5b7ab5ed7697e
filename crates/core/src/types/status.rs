//! Status and role enums.

use serde::{Deserialize, Serialize};

/// Shipping order status.
///
/// The shipping API uses an open set of labels. Only `Pending` and
/// `Confirmed` are interpreted here; every other label is carried through
/// unchanged in [`ShippingStatus::Other`]. Labels compare case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShippingStatus {
    Pending,
    Confirmed,
    Other(String),
}

impl ShippingStatus {
    /// The label as sent by the shipping API.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for ShippingStatus {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Pending" => Self::Pending,
            "Confirmed" => Self::Confirmed,
            _ => Self::Other(label),
        }
    }
}

impl From<&str> for ShippingStatus {
    fn from(label: &str) -> Self {
        Self::from(label.to_owned())
    }
}

impl From<ShippingStatus> for String {
    fn from(status: ShippingStatus) -> Self {
        match status {
            ShippingStatus::Other(label) => label,
            tracked => tracked.as_str().to_owned(),
        }
    }
}

impl std::fmt::Display for ShippingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid user role: {0}")]
pub struct ParseRoleError(pub String);

/// Back-office user role. Menus are gated on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Full access, including administration.
    Admin,
    /// Basic signed-in user.
    User,
    Sales,
    Purchasing,
    Accounting,
    Shipping,
}

impl UserRole {
    /// Every role, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Admin,
        Self::User,
        Self::Sales,
        Self::Purchasing,
        Self::Accounting,
        Self::Shipping,
    ];

    /// Lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Sales => "sales",
            Self::Purchasing => "purchasing",
            Self::Accounting => "accounting",
            Self::Shipping => "shipping",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ParseRoleError(s.to_owned()))
    }
}
