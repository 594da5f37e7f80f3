//! Amortization breakdown donut spec construction.

use super::Outcome;
use super::gradient::build_gradient;
use super::palette::{DEFAULTS, PRINCIPAL_GRADIENT_END, PRINCIPAL_GRADIENT_START};
use super::spec::{
    Animation, ChartData, ChartKind, ChartOptions, ChartSpec, Dataset, Fill, FontSpec, Legend,
    LegendLabels, LegendPosition, Paint, Plugins,
};
use crate::panel::DrawingContext;

/// Donut segment labels. Segment values bind to these positionally:
/// principal first, interest second.
pub const SEGMENT_LABELS: [&str; 2] = ["PRINCIPAL CAPITAL", "ESTIMATED INTEREST"];

/// Build the amortization donut spec.
///
/// The principal segment carries the standard vertical gradient built
/// on `ctx`; the interest segment carries the outcome accent. Amounts
/// are forwarded as-is.
pub(super) fn build_spec(
    ctx: &DrawingContext,
    principal: f64,
    interest: f64,
    outcome: Outcome,
) -> ChartSpec {
    let principal_fill = Fill::Gradient(build_gradient(
        ctx,
        PRINCIPAL_GRADIENT_START,
        PRINCIPAL_GRADIENT_END,
    ));

    ChartSpec {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels: SEGMENT_LABELS.iter().map(|s| s.to_string()).collect(),
            datasets: vec![Dataset {
                data: vec![principal, interest],
                background_color: Some(Paint::PerSegment(vec![
                    principal_fill,
                    Fill::Solid(outcome.accent()),
                ])),
                border_width: Some(0),
                hover_offset: Some(20),
                ..Default::default()
            }],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            cutout: Some("85%".to_string()),
            scales: None,
            plugins: Plugins {
                legend: Legend {
                    display: true,
                    position: Some(LegendPosition::Bottom),
                    labels: Some(LegendLabels {
                        color: DEFAULTS.color,
                        font: FontSpec {
                            family: DEFAULTS.font_family.to_string(),
                            size: 10,
                            weight: None,
                        },
                        padding: 20,
                    }),
                },
            },
            animation: Animation {
                duration: 2000,
                easing: None,
                animate_rotate: Some(true),
                animate_scale: Some(true),
            },
        },
    }
}
