//! CLI mode implementations

mod amortization;
mod dashboard;
mod radar;

pub use amortization::run_amortization;
pub use dashboard::run_dashboard;
pub use radar::run_radar;

use crate::chart::{ChartSpec, RADAR_AXES};
use crate::engine::EchartsHandle;
use crate::output::{print_error, print_warning};
use crate::panel::PanelRegistry;

/// Element id of the risk profile panel on the stock dashboard page.
pub const RADAR_ELEMENT: &str = "riskChart";

/// Element id of the amortization panel on the stock dashboard page.
pub const DONUT_ELEMENT: &str = "loanChart";

/// Chart container size the stock dashboard page declares.
const PANEL_WIDTH: u32 = 640;
const PANEL_HEIGHT: u32 = 400;

/// The chart containers of the stock dashboard page.
pub fn dashboard_page() -> PanelRegistry {
    PanelRegistry::new()
        .with_panel(RADAR_ELEMENT, PANEL_WIDTH, PANEL_HEIGHT)
        .with_panel(DONUT_ELEMENT, PANEL_WIDTH, PANEL_HEIGHT)
}

/// Artifact paths a chart mode may write.
#[derive(Debug, Default)]
pub struct ArtifactPaths<'a> {
    pub spec: Option<&'a str>,
    pub image: Option<&'a str>,
    pub html: Option<&'a str>,
}

/// Warn when the metric count does not match the radar axes. The spec
/// is still built as-is; values bind by position.
pub(crate) fn warn_metric_count(metrics: &[f64]) {
    if metrics.len() != RADAR_AXES.len() {
        print_warning(&format!(
            "{} metrics supplied for {} radar axes; values bind by position",
            metrics.len(),
            RADAR_AXES.len()
        ));
    }
}

/// Write `spec` as pretty JSON to `path`.
pub(crate) fn write_spec_json(spec: &ChartSpec, path: &str) -> Result<(), String> {
    let json =
        serde_json::to_string_pretty(spec).map_err(|e| format!("Failed to encode spec: {}", e))?;
    std::fs::write(path, json).map_err(|e| format!("Failed to write {}: {}", path, e))
}

/// Write the requested artifacts for a rendered chart. Failures are
/// reported and the remaining artifacts are still attempted.
pub(crate) fn emit_artifacts(handle: &EchartsHandle, title: &str, paths: &ArtifactPaths) {
    if let Some(path) = paths.spec {
        if let Err(e) = write_spec_json(handle.spec(), path) {
            print_error(&e);
        } else {
            eprintln!("Spec saved to: {}", path);
        }
    }

    if let Some(path) = paths.image {
        if let Err(e) = handle.save_png(path) {
            print_error(&e);
        } else {
            eprintln!("Preview saved to: {}", path);
        }
    }

    if let Some(path) = paths.html {
        if let Err(e) = handle.save_html(title, path) {
            print_error(&e);
        } else {
            eprintln!("Preview saved to: {}", path);
        }
    }
}
