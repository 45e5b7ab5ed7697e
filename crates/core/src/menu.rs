//! Role-gated navigation menus.
//!
//! The tables are static. Filtering by role is the only logic here.

use serde::Serialize;

use crate::types::UserRole;

/// Icon identifier understood by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Settings,
    Users,
    FileText,
    Truck,
    Package,
}

/// A navigation entry and the roles allowed to see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub name: &'static str,
    pub icon: Icon,
    pub path: &'static str,
    pub roles: &'static [UserRole],
    /// Child entries, shown under the parent.
    pub requirements: Vec<MenuItem>,
}

impl MenuItem {
    const fn leaf(
        name: &'static str,
        icon: Icon,
        path: &'static str,
        roles: &'static [UserRole],
    ) -> Self {
        Self {
            name,
            icon,
            path,
            roles,
            requirements: Vec::new(),
        }
    }

    /// Whether `role` may see this entry.
    #[must_use]
    pub fn is_visible_to(&self, role: UserRole) -> bool {
        self.roles.contains(&role)
    }

    /// A copy of this entry keeping only the children `role` may see.
    fn filtered_for(&self, role: UserRole) -> Self {
        Self {
            requirements: self
                .requirements
                .iter()
                .filter(|child| child.is_visible_to(role))
                .map(|child| child.filtered_for(role))
                .collect(),
            ..self.clone()
        }
    }
}

const ADMIN_ONLY: &[UserRole] = &[UserRole::Admin];
const SHIPPING_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::Shipping];

/// The administration section.
#[must_use]
pub fn admin_menu_items() -> Vec<MenuItem> {
    vec![MenuItem {
        requirements: vec![
            MenuItem::leaf("Users", Icon::Users, "/admin/users", ADMIN_ONLY),
            MenuItem::leaf("Settings", Icon::Settings, "/admin/settings", ADMIN_ONLY),
            MenuItem::leaf("Reports", Icon::FileText, "/admin/reports", ADMIN_ONLY),
        ],
        ..MenuItem::leaf("Administration", Icon::Settings, "/admin", ADMIN_ONLY)
    }]
}

/// The shipping section.
#[must_use]
pub fn shipping_menu_items() -> Vec<MenuItem> {
    vec![MenuItem {
        requirements: vec![MenuItem::leaf(
            "Shipping Orders",
            Icon::Package,
            "/shipping/orders",
            SHIPPING_ROLES,
        )],
        ..MenuItem::leaf("Shipping", Icon::Truck, "/shipping", SHIPPING_ROLES)
    }]
}

/// Every top-level section, in sidebar order.
#[must_use]
pub fn all_menu_items() -> Vec<MenuItem> {
    let mut items = shipping_menu_items();
    items.extend(admin_menu_items());
    items
}

/// The sections `role` may see, with children filtered the same way.
#[must_use]
pub fn menu_for_role(role: UserRole) -> Vec<MenuItem> {
    all_menu_items()
        .iter()
        .filter(|item| item.is_visible_to(role))
        .map(|item| item.filtered_for(role))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[MenuItem]) -> Vec<&'static str> {
        items.iter().map(|item| item.name).collect()
    }

    #[test]
    fn test_admin_menu_table() {
        let items = admin_menu_items();
        assert_eq!(names(&items), ["Administration"]);
        let children: Vec<_> = items
            .iter()
            .flat_map(|item| item.requirements.iter().map(|child| child.path))
            .collect();
        assert_eq!(
            children,
            ["/admin/users", "/admin/settings", "/admin/reports"]
        );
    }

    #[test]
    fn test_admin_sees_everything() {
        assert_eq!(
            names(&menu_for_role(UserRole::Admin)),
            ["Shipping", "Administration"]
        );
    }

    #[test]
    fn test_shipping_role_sees_shipping_only() {
        let items = menu_for_role(UserRole::Shipping);
        assert_eq!(names(&items), ["Shipping"]);
        assert_eq!(names(&items[0].requirements), ["Shipping Orders"]);
    }

    #[test]
    fn test_sales_sees_nothing() {
        assert!(menu_for_role(UserRole::Sales).is_empty());
    }
}
