//! Risk profile radar spec construction.

use super::Outcome;
use super::palette::DEFAULTS;
use super::spec::{
    Animation, ChartData, ChartKind, ChartOptions, ChartSpec, ColorToken, Dataset, Easing, Fill,
    FontSpec, GridLine, Legend, Paint, Plugins, PointLabels, RadialScale, Scales, Ticks,
};

/// Radar axis labels in canonical order. Metric values bind to these
/// positionally.
pub const RADAR_AXES: [&str; 5] = ["LIQUIDITY", "TENURE", "HISTORY", "DTI", "STABILITY"];

/// Alpha appended to the accent token for the translucent area fill.
const FILL_ALPHA: u8 = 0x15;

/// Build the radar spec for a scored risk profile.
///
/// `metrics` is forwarded as-is: extra values stay in the dataset and
/// missing ones leave their axes empty. Callers own any validation.
pub(super) fn build_spec(metrics: &[f64], outcome: Outcome) -> ChartSpec {
    let accent = outcome.accent();

    ChartSpec {
        kind: ChartKind::Radar,
        data: ChartData {
            labels: RADAR_AXES.iter().map(|s| s.to_string()).collect(),
            datasets: vec![Dataset {
                data: metrics.to_vec(),
                background_color: Some(Paint::Uniform(Fill::Solid(
                    accent.with_alpha(FILL_ALPHA),
                ))),
                border_color: Some(accent.clone()),
                border_width: Some(3),
                point_background_color: Some(accent),
                point_border_color: Some(ColorToken::from_static("#fff")),
                point_hover_radius: Some(8),
                fill: Some(true),
                ..Default::default()
            }],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            cutout: None,
            scales: Some(Scales {
                r: RadialScale {
                    angle_lines: GridLine {
                        color: DEFAULTS.grid_color,
                    },
                    grid: GridLine {
                        color: DEFAULTS.grid_color,
                    },
                    point_labels: PointLabels {
                        color: DEFAULTS.color,
                        font: FontSpec {
                            family: DEFAULTS.font_family.to_string(),
                            size: 11,
                            weight: Some("bold".to_string()),
                        },
                    },
                    ticks: Ticks { display: false },
                    suggested_min: 0.0,
                    suggested_max: 100.0,
                },
            }),
            plugins: Plugins {
                legend: Legend {
                    display: false,
                    position: None,
                    labels: None,
                },
            },
            animation: Animation {
                duration: 2500,
                easing: Some(Easing::EaseOutQuart),
                animate_rotate: None,
                animate_scale: None,
            },
        },
    }
}
