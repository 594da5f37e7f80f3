//! Full dashboard mode: both charts in one pass

use crate::chart::{ChartSpec, CreditCharts, Outcome};
use crate::engine::EchartsEngine;
use crate::output::{print_amortization_summary, print_error, print_legend, print_radar_summary};

use super::{DONUT_ELEMENT, RADAR_ELEMENT, dashboard_page, warn_metric_count};

/// Build both dashboard charts, and optionally bundle their specs into
/// one JSON document keyed by element id.
pub fn run_dashboard(
    metrics: &[f64],
    principal: f64,
    interest: f64,
    outcome: Outcome,
    quiet: bool,
    spec_path: Option<&str>,
) {
    warn_metric_count(metrics);

    let charts = CreditCharts::new(dashboard_page(), EchartsEngine::new());

    let Some(radar) = charts.init_radar(RADAR_ELEMENT, metrics, outcome) else {
        print_error(&format!(
            "Element '{}' is not declared by the dashboard page",
            RADAR_ELEMENT
        ));
        std::process::exit(1);
    };
    let Some(donut) = charts.init_amortization(DONUT_ELEMENT, principal, interest, outcome) else {
        print_error(&format!(
            "Element '{}' is not declared by the dashboard page",
            DONUT_ELEMENT
        ));
        std::process::exit(1);
    };

    print_radar_summary(radar.spec(), outcome, RADAR_ELEMENT);
    println!();
    print_amortization_summary(donut.spec(), outcome, DONUT_ELEMENT);

    if !quiet {
        println!();
        print_legend();
    }

    if let Some(path) = spec_path {
        if let Err(e) = write_bundle_json(radar.spec(), donut.spec(), path) {
            print_error(&e);
        } else {
            eprintln!("Specs saved to: {}", path);
        }
    }
}

/// Write both specs as one JSON object keyed by element id, the form
/// a dashboard page consumes in a single fetch.
fn write_bundle_json(radar: &ChartSpec, donut: &ChartSpec, path: &str) -> Result<(), String> {
    let encode_err = |e: serde_json::Error| format!("Failed to encode spec: {}", e);

    let mut bundle = serde_json::Map::new();
    bundle.insert(
        RADAR_ELEMENT.to_string(),
        serde_json::to_value(radar).map_err(encode_err)?,
    );
    bundle.insert(
        DONUT_ELEMENT.to_string(),
        serde_json::to_value(donut).map_err(encode_err)?,
    );

    let json =
        serde_json::to_string_pretty(&serde_json::Value::Object(bundle)).map_err(encode_err)?;
    std::fs::write(path, json).map_err(|e| format!("Failed to write {}: {}", path, e))
}
