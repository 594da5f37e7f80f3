//! Amortization donut mode

use crate::chart::{CreditCharts, Outcome};
use crate::engine::EchartsEngine;
use crate::output::{print_amortization_summary, print_error, print_legend};

use super::{ArtifactPaths, dashboard_page, emit_artifacts};

/// Build the amortization donut and write any requested artifacts.
pub fn run_amortization(
    element_id: &str,
    principal: f64,
    interest: f64,
    outcome: Outcome,
    quiet: bool,
    artifacts: &ArtifactPaths,
) {
    let charts = CreditCharts::new(dashboard_page(), EchartsEngine::new());

    let Some(handle) = charts.init_amortization(element_id, principal, interest, outcome) else {
        print_error(&format!(
            "Element '{}' is not declared by the dashboard page",
            element_id
        ));
        std::process::exit(1);
    };

    print_amortization_summary(handle.spec(), outcome, element_id);

    if !quiet {
        println!();
        print_legend();
    }

    emit_artifacts(&handle, "Amortization Breakdown", artifacts);
}
