//! Terminal output helpers

use colored::*;

use crate::chart::{ChartSpec, Dataset, Fill, Outcome, Paint};

pub fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

fn style_accent(token: &str, outcome: Outcome) -> ColoredString {
    match outcome {
        Outcome::Approved => token.green().bold(),
        Outcome::Rejected => token.red().bold(),
    }
}

/// Print the radar spec as an axis/score table.
pub fn print_radar_summary(spec: &ChartSpec, outcome: Outcome, element_id: &str) {
    println!("Chart: {} ({})", element_id.bold(), spec.kind);
    println!();

    print!("{:<6}", "Axis");
    for label in &spec.data.labels {
        print!(" {:>10}", label);
    }
    println!();

    print!("{:<6}", "Score");
    if let Some(ds) = spec.data.datasets.first() {
        for value in &ds.data {
            if value.is_finite() {
                print!(" {:>10.1}", value);
            } else {
                print!("          -");
            }
        }
    }
    println!();
    println!();

    if let Some(accent) = spec
        .data
        .datasets
        .first()
        .and_then(|ds| ds.border_color.as_ref())
    {
        println!(
            "Accent: {} ({})",
            style_accent(accent.as_str(), outcome),
            outcome
        );
    }
}

/// Print the donut spec as a segment/amount table.
pub fn print_amortization_summary(spec: &ChartSpec, outcome: Outcome, element_id: &str) {
    println!("Chart: {} ({})", element_id.bold(), spec.kind);
    println!();

    let Some(ds) = spec.data.datasets.first() else {
        return;
    };
    let total: f64 = ds.data.iter().sum();

    for (label, value) in spec.data.labels.iter().zip(&ds.data) {
        let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
        println!("  {:<20} {:>14.2}  {:>5.1}%", label, value, share);
    }
    println!("  {:<20} {:>14.2}", "TOTAL REPAYMENT".bold(), total);
    println!();

    if let Some(accent) = segment_accent(ds) {
        println!("Accent: {} ({})", style_accent(accent, outcome), outcome);
    }
}

/// The flat accent fill of a dataset, if it has one. Gradient segments
/// are skipped.
fn segment_accent(ds: &Dataset) -> Option<&str> {
    match &ds.background_color {
        Some(Paint::PerSegment(fills)) => fills.iter().rev().find_map(|fill| match fill {
            Fill::Solid(token) => Some(token.as_str()),
            Fill::Gradient(_) => None,
        }),
        Some(Paint::Uniform(Fill::Solid(token))) => Some(token.as_str()),
        _ => None,
    }
}

pub fn print_legend() {
    println!("Score: Metric value bound to the axis label above it (0-100 scale)");
    println!("Accent: Outcome color applied to chart strokes and the interest segment");
    println!("Spec: Declarative chart description the dashboard renderer consumes");
}
