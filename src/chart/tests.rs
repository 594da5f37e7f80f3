//! Unit tests for chart spec construction

use super::*;
use crate::engine::ChartEngine;
use crate::panel::{DrawingContext, PanelRegistry, Surface};

/// Engine that hands the spec back unchanged, for inspecting what the
/// facade sends to rendering.
struct SpecEngine;

struct RenderedSpec {
    spec: ChartSpec,
    surface_width: u32,
    surface_height: u32,
}

impl ChartEngine for SpecEngine {
    type Handle = RenderedSpec;

    fn render(&self, ctx: &DrawingContext, spec: ChartSpec) -> RenderedSpec {
        RenderedSpec {
            spec,
            surface_width: ctx.width(),
            surface_height: ctx.height(),
        }
    }
}

/// Facade over the stock two-panel page and the spec-capturing engine.
fn charts() -> CreditCharts<PanelRegistry, SpecEngine> {
    let page = PanelRegistry::new()
        .with_panel("riskChart", 640, 400)
        .with_panel("loanChart", 640, 400);
    CreditCharts::new(page, SpecEngine)
}

const METRICS: [f64; 5] = [82.0, 64.0, 91.0, 38.0, 75.0];

#[test]
fn test_radar_kind_and_axis_labels() {
    let handle = charts()
        .init_radar("riskChart", &METRICS, Outcome::Approved)
        .unwrap();

    assert_eq!(handle.spec.kind, ChartKind::Radar);
    let labels: Vec<&str> = handle.spec.data.labels.iter().map(|s| s.as_str()).collect();
    assert_eq!(labels, RADAR_AXES, "Axis labels should keep canonical order");
}

#[test]
fn test_radar_binds_metrics_positionally() {
    let handle = charts()
        .init_radar("riskChart", &METRICS, Outcome::Approved)
        .unwrap();

    assert_eq!(handle.spec.data.datasets.len(), 1);
    assert_eq!(handle.spec.data.datasets[0].data, METRICS);
}

#[test]
fn test_radar_approved_accent() {
    let handle = charts()
        .init_radar("riskChart", &METRICS, Outcome::Approved)
        .unwrap();
    let ds = &handle.spec.data.datasets[0];

    assert_eq!(ds.border_color.as_ref().unwrap().as_str(), "#10b981");
    assert_eq!(
        ds.point_background_color.as_ref().unwrap().as_str(),
        "#10b981"
    );
    assert_eq!(
        ds.background_color,
        Some(Paint::Uniform(Fill::Solid("#10b98115".into()))),
        "Area fill is the accent with a hex alpha suffix"
    );
}

#[test]
fn test_radar_rejected_accent() {
    let handle = charts()
        .init_radar("riskChart", &METRICS, Outcome::Rejected)
        .unwrap();
    let ds = &handle.spec.data.datasets[0];

    assert_eq!(ds.border_color.as_ref().unwrap().as_str(), "#e11d48");
    assert_eq!(
        ds.background_color,
        Some(Paint::Uniform(Fill::Solid("#e11d4815".into())))
    );
}

#[test]
fn test_radar_point_styling() {
    let handle = charts()
        .init_radar("riskChart", &METRICS, Outcome::Approved)
        .unwrap();
    let ds = &handle.spec.data.datasets[0];

    assert_eq!(ds.border_width, Some(3));
    assert_eq!(ds.point_border_color.as_ref().unwrap().as_str(), "#fff");
    assert_eq!(ds.point_hover_radius, Some(8));
    assert_eq!(ds.fill, Some(true));
    assert_eq!(ds.hover_offset, None, "Radar datasets have no hover offset");
}

#[test]
fn test_radar_scale_and_options() {
    let handle = charts()
        .init_radar("riskChart", &METRICS, Outcome::Approved)
        .unwrap();
    let options = &handle.spec.options;

    let scales = options.scales.as_ref().expect("radar carries a radial scale");
    assert_eq!(scales.r.suggested_min, 0.0);
    assert_eq!(scales.r.suggested_max, 100.0);
    assert!(!scales.r.ticks.display, "Radial ticks should be hidden");
    assert_eq!(scales.r.angle_lines.color, DEFAULTS.grid_color);
    assert_eq!(scales.r.grid.color, DEFAULTS.grid_color);
    assert_eq!(scales.r.point_labels.color, DEFAULTS.color);
    assert_eq!(scales.r.point_labels.font.family, DEFAULTS.font_family);
    assert_eq!(scales.r.point_labels.font.size, 11);
    assert_eq!(scales.r.point_labels.font.weight.as_deref(), Some("bold"));

    assert!(options.responsive);
    assert!(!options.maintain_aspect_ratio);
    assert_eq!(options.cutout, None);
    assert!(!options.plugins.legend.display, "Radar hides its legend");
    assert_eq!(options.animation.duration, 2500);
    assert_eq!(options.animation.easing, Some(Easing::EaseOutQuart));
}

#[test]
fn test_radar_metric_count_passes_through() {
    // Counts other than the axis count are kept as-is; values bind by
    // position.
    let short = charts()
        .init_radar("riskChart", &[5.0, 10.0, 15.0], Outcome::Approved)
        .unwrap();
    assert_eq!(short.spec.data.datasets[0].data, [5.0, 10.0, 15.0]);
    assert_eq!(short.spec.data.labels.len(), 5, "Axis labels stay canonical");

    let long = charts()
        .init_radar("riskChart", &[1.0; 7], Outcome::Approved)
        .unwrap();
    assert_eq!(long.spec.data.datasets[0].data.len(), 7);
}

#[test]
fn test_unknown_element_returns_none() {
    let charts = charts();

    assert!(
        charts
            .init_radar("missingChart", &METRICS, Outcome::Approved)
            .is_none(),
        "Radar init should be a no-op for undeclared containers"
    );
    assert!(
        charts
            .init_amortization("missingChart", 15000.0, 3240.0, Outcome::Approved)
            .is_none(),
        "Donut init should be a no-op for undeclared containers"
    );
}

#[test]
fn test_repeated_calls_build_equal_specs() {
    let charts = charts();

    let a = charts
        .init_radar("riskChart", &METRICS, Outcome::Rejected)
        .unwrap();
    let b = charts
        .init_radar("riskChart", &METRICS, Outcome::Rejected)
        .unwrap();
    assert_eq!(a.spec, b.spec);

    let c = charts
        .init_amortization("loanChart", 15000.0, 3240.0, Outcome::Approved)
        .unwrap();
    let d = charts
        .init_amortization("loanChart", 15000.0, 3240.0, Outcome::Approved)
        .unwrap();
    assert_eq!(c.spec, d.spec);
}

#[test]
fn test_render_receives_surface_context() {
    let page = PanelRegistry::new().with_panel("riskChart", 800, 500);
    let handle = CreditCharts::new(page, SpecEngine)
        .init_radar("riskChart", &METRICS, Outcome::Approved)
        .unwrap();

    assert_eq!(handle.surface_width, 800);
    assert_eq!(handle.surface_height, 500);
}

#[test]
fn test_donut_kind_labels_and_segment_order() {
    let handle = charts()
        .init_amortization("loanChart", 15000.0, 3240.0, Outcome::Approved)
        .unwrap();

    assert_eq!(handle.spec.kind, ChartKind::Doughnut);
    let labels: Vec<&str> = handle.spec.data.labels.iter().map(|s| s.as_str()).collect();
    assert_eq!(labels, SEGMENT_LABELS);
    assert_eq!(
        handle.spec.data.datasets[0].data,
        [15000.0, 3240.0],
        "Principal comes first, interest second"
    );
}

#[test]
fn test_donut_segment_fills() {
    let handle = charts()
        .init_amortization("loanChart", 15000.0, 3240.0, Outcome::Approved)
        .unwrap();
    let ds = &handle.spec.data.datasets[0];

    let Some(Paint::PerSegment(fills)) = &ds.background_color else {
        panic!("Donut should carry per-segment fills");
    };
    assert_eq!(fills.len(), 2);

    match &fills[0] {
        Fill::Gradient(gradient) => {
            assert_eq!(gradient.stops().len(), 2);
            assert_eq!(gradient.stops()[0].offset, 0.0);
            assert_eq!(gradient.stops()[0].color.as_str(), "#3b82f6");
            assert_eq!(gradient.stops()[1].offset, 1.0);
            assert_eq!(gradient.stops()[1].color.as_str(), "#1d4ed8");
        }
        Fill::Solid(_) => panic!("Principal segment should be a gradient"),
    }

    assert_eq!(fills[1], Fill::Solid(ACCENT_APPROVED));
}

#[test]
fn test_donut_interest_fill_follows_outcome() {
    let handle = charts()
        .init_amortization("loanChart", 15000.0, 3240.0, Outcome::Rejected)
        .unwrap();

    let Some(Paint::PerSegment(fills)) = &handle.spec.data.datasets[0].background_color else {
        panic!("Donut should carry per-segment fills");
    };
    assert_eq!(fills[1], Fill::Solid(ACCENT_REJECTED));
}

#[test]
fn test_donut_gradient_extent_is_fixed() {
    // The fill gradient runs over a fixed vertical extent, independent
    // of the surface dimensions.
    let page = PanelRegistry::new().with_panel("loanChart", 800, 900);
    let handle = CreditCharts::new(page, SpecEngine)
        .init_amortization("loanChart", 15000.0, 3240.0, Outcome::Approved)
        .unwrap();

    let Some(Paint::PerSegment(fills)) = &handle.spec.data.datasets[0].background_color else {
        panic!("Donut should carry per-segment fills");
    };
    let Fill::Gradient(gradient) = &fills[0] else {
        panic!("Principal segment should be a gradient");
    };

    assert_eq!(
        (gradient.x0, gradient.y0, gradient.x1, gradient.y1),
        (0.0, 0.0, 0.0, 400.0)
    );
}

#[test]
fn test_donut_options() {
    let handle = charts()
        .init_amortization("loanChart", 15000.0, 3240.0, Outcome::Approved)
        .unwrap();
    let options = &handle.spec.options;
    let ds = &handle.spec.data.datasets[0];

    assert_eq!(options.cutout.as_deref(), Some("85%"));
    assert!(options.scales.is_none(), "Donuts have no radial scale");
    assert_eq!(ds.border_width, Some(0));
    assert_eq!(ds.hover_offset, Some(20));

    let legend = &options.plugins.legend;
    assert!(legend.display);
    assert_eq!(legend.position, Some(LegendPosition::Bottom));
    let labels_cfg = legend.labels.as_ref().expect("legend labels configured");
    assert_eq!(labels_cfg.color, DEFAULTS.color);
    assert_eq!(labels_cfg.font.family, DEFAULTS.font_family);
    assert_eq!(labels_cfg.font.size, 10);
    assert_eq!(labels_cfg.font.weight, None);
    assert_eq!(labels_cfg.padding, 20);

    assert_eq!(options.animation.duration, 2000);
    assert_eq!(options.animation.animate_rotate, Some(true));
    assert_eq!(options.animation.animate_scale, Some(true));
    assert_eq!(options.animation.easing, None);
}

#[test]
fn test_donut_amounts_pass_through_unvalidated() {
    let handle = charts()
        .init_amortization("loanChart", -250.0, 0.0, Outcome::Rejected)
        .unwrap();

    assert_eq!(handle.spec.data.datasets[0].data, [-250.0, 0.0]);
}

#[test]
fn test_gradient_builder_stop_order() {
    let ctx = Surface::new("loanChart", 640, 400).context();
    let gradient = gradient::build_gradient(&ctx, "#3b82f6".into(), "#1d4ed8".into());

    assert_eq!(gradient.stops().len(), 2);
    assert_eq!(gradient.stops()[0].offset, 0.0);
    assert_eq!(gradient.stops()[0].color.as_str(), "#3b82f6");
    assert_eq!(gradient.stops()[1].offset, 1.0);
    assert_eq!(gradient.stops()[1].color.as_str(), "#1d4ed8");
}

#[test]
fn test_with_alpha_appends_hex_pair() {
    let token = ColorToken::from_static("#10b981");

    assert_eq!(token.with_alpha(0x15).as_str(), "#10b98115");
    assert_eq!(token.with_alpha(0xff).as_str(), "#10b981ff");
    assert_eq!(token.with_alpha(0x05).as_str(), "#10b98105");
    assert_eq!(token.as_str(), "#10b981", "Base token is untouched");
}

#[test]
fn test_outcome_accents() {
    assert_eq!(Outcome::Approved.accent(), ACCENT_APPROVED);
    assert_eq!(Outcome::Rejected.accent(), ACCENT_REJECTED);
    assert_eq!(Outcome::Approved.to_string(), "approved");
    assert_eq!(Outcome::Rejected.to_string(), "rejected");
}

#[test]
fn test_palette_defaults() {
    assert_eq!(DEFAULTS.font_family, "'JetBrains Mono', monospace");
    assert_eq!(DEFAULTS.color.as_str(), "#94a3b8");
    assert_eq!(DEFAULTS.grid_color.as_str(), "rgba(255, 255, 255, 0.05)");
}

#[test]
fn test_radar_spec_json_shape() {
    let handle = charts()
        .init_radar("riskChart", &METRICS, Outcome::Approved)
        .unwrap();
    let json = serde_json::to_value(&handle.spec).unwrap();

    assert_eq!(json["type"], "radar");
    assert_eq!(json["data"]["labels"][0], "LIQUIDITY");
    assert_eq!(json["data"]["datasets"][0]["data"][2], 91.0);
    assert_eq!(json["data"]["datasets"][0]["borderColor"], "#10b981");
    assert_eq!(json["data"]["datasets"][0]["backgroundColor"], "#10b98115");
    assert_eq!(json["data"]["datasets"][0]["pointBorderColor"], "#fff");
    assert_eq!(json["data"]["datasets"][0]["pointHoverRadius"], 8);
    assert_eq!(json["options"]["maintainAspectRatio"], false);
    assert_eq!(json["options"]["scales"]["r"]["suggestedMax"], 100.0);
    assert_eq!(json["options"]["scales"]["r"]["ticks"]["display"], false);
    assert_eq!(
        json["options"]["scales"]["r"]["pointLabels"]["font"]["weight"],
        "bold"
    );
    assert_eq!(json["options"]["animation"]["easing"], "easeOutQuart");

    // Unset fields are skipped, not serialized as null.
    assert!(json["options"].get("cutout").is_none());
    assert!(json["data"]["datasets"][0].get("hoverOffset").is_none());
}

#[test]
fn test_donut_spec_json_shape() {
    let handle = charts()
        .init_amortization("loanChart", 15000.0, 3240.0, Outcome::Rejected)
        .unwrap();
    let json = serde_json::to_value(&handle.spec).unwrap();

    assert_eq!(json["type"], "doughnut");
    assert_eq!(json["data"]["labels"][0], "PRINCIPAL CAPITAL");
    assert_eq!(json["data"]["datasets"][0]["data"][0], 15000.0);

    let fills = json["data"]["datasets"][0]["backgroundColor"]
        .as_array()
        .expect("per-segment fills serialize as an array");
    assert!(fills[0].is_object(), "Gradient fills serialize structurally");
    assert_eq!(fills[0]["y1"], 400.0);
    assert_eq!(fills[0]["stops"][0]["color"], "#3b82f6");
    assert_eq!(fills[0]["stops"][1]["offset"], 1.0);
    assert_eq!(fills[1], "#e11d48", "Solid fills serialize as bare tokens");

    assert_eq!(json["options"]["cutout"], "85%");
    assert_eq!(json["options"]["plugins"]["legend"]["position"], "bottom");
    assert_eq!(json["options"]["plugins"]["legend"]["labels"]["padding"], 20);
    assert_eq!(json["options"]["animation"]["animateRotate"], true);
    assert!(json["options"].get("scales").is_none());
}
