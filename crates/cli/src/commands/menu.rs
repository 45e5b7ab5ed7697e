//! Role-gated menu listing.

use tracing::info;

use backoffice_core::UserRole;
use backoffice_core::menu::menu_for_role;

use super::Output;

/// Print the menu `role` can see.
///
/// # Errors
///
/// Returns an error if JSON output fails to serialize.
pub fn show(role: UserRole, output: Output) -> Result<(), serde_json::Error> {
    let items = menu_for_role(role);

    output.emit(&items, |items| {
        if items.is_empty() {
            info!("No menu entries for role {role}");
        }
        for item in items {
            info!("{} ({})", item.name, item.path);
            for child in &item.requirements {
                info!("  {} ({})", child.name, child.path);
            }
        }
    })
}
