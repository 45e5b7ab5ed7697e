//! Demo chart data.

use tracing::info;

use backoffice_core::chart::purchase_metrics_demo;

use super::Output;

/// Print the demo purchase metrics series.
///
/// # Errors
///
/// Returns an error if JSON output fails to serialize.
pub fn show(output: Output) -> Result<(), serde_json::Error> {
    output.emit(&purchase_metrics_demo(), |series| {
        info!("{}", series.title);
        for point in &series.points {
            info!("  {:<4} {}", point.name, point.value);
        }
    })
}
