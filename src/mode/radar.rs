//! Risk profile radar mode

use crate::chart::{CreditCharts, Outcome};
use crate::engine::EchartsEngine;
use crate::output::{print_error, print_legend, print_radar_summary};

use super::{ArtifactPaths, dashboard_page, emit_artifacts, warn_metric_count};

/// Build the risk profile radar and write any requested artifacts.
pub fn run_radar(
    element_id: &str,
    metrics: &[f64],
    outcome: Outcome,
    quiet: bool,
    artifacts: &ArtifactPaths,
) {
    warn_metric_count(metrics);

    let charts = CreditCharts::new(dashboard_page(), EchartsEngine::new());

    let Some(handle) = charts.init_radar(element_id, metrics, outcome) else {
        print_error(&format!(
            "Element '{}' is not declared by the dashboard page",
            element_id
        ));
        std::process::exit(1);
    };

    print_radar_summary(handle.spec(), outcome, element_id);

    if !quiet {
        println!();
        print_legend();
    }

    emit_artifacts(&handle, "Risk Profile", artifacts);
}
