//! ECharts-backed rendering engine.
//!
//! Translates chart specs into charming charts and writes PNG or HTML
//! previews of them. The spec stays the source of truth; nothing here
//! feeds back into spec construction.

use charming::{
    Chart, HtmlRenderer, ImageRenderer,
    component::{Legend, RadarCoordinate},
    datatype::DataPointItem,
    element::{AreaStyle, Color, ColorStop, ItemStyle, Label, TextStyle},
    renderer::ImageFormat,
    series::{Pie, Radar},
};

use super::ChartEngine;
use crate::chart::{ChartKind, ChartSpec, Fill, GradientSpec, Paint};
use crate::panel::DrawingContext;

/// Page background behind preview renders.
const BACKGROUND: &str = "#0f172a";

/// Previews render at 2x surface size for Retina quality.
const PREVIEW_SCALE: u32 = 2;

/// Outer ring radius of donut previews, in percent of the surface.
const DONUT_OUTER_PCT: f64 = 90.0;

/// Engine that realizes specs through charming's ECharts builder.
#[derive(Debug, Default)]
pub struct EchartsEngine;

impl EchartsEngine {
    pub fn new() -> EchartsEngine {
        EchartsEngine
    }
}

impl ChartEngine for EchartsEngine {
    type Handle = EchartsHandle;

    fn render(&self, ctx: &DrawingContext, spec: ChartSpec) -> EchartsHandle {
        let chart = match spec.kind {
            ChartKind::Radar => radar_chart(&spec),
            ChartKind::Doughnut => donut_chart(&spec),
        };

        EchartsHandle {
            spec,
            chart,
            width: ctx.width(),
            height: ctx.height(),
        }
    }
}

/// A realized chart, kept together with the spec it came from.
pub struct EchartsHandle {
    spec: ChartSpec,
    chart: Chart,
    width: u32,
    height: u32,
}

impl EchartsHandle {
    /// The spec this chart was realized from.
    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    /// The realized charming chart.
    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Write a PNG preview of the chart.
    pub fn save_png(&self, output_path: &str) -> Result<(), String> {
        let mut renderer = ImageRenderer::new(
            self.width * PREVIEW_SCALE,
            self.height * PREVIEW_SCALE,
        );
        renderer
            .save_format(ImageFormat::Png, &self.chart, output_path)
            .map_err(|e| format!("Failed to save preview: {}", e))
    }

    /// Write a standalone HTML page previewing the chart.
    pub fn save_html(&self, title: &str, output_path: &str) -> Result<(), String> {
        HtmlRenderer::new(
            title,
            (self.width * PREVIEW_SCALE).into(),
            (self.height * PREVIEW_SCALE).into(),
        )
        .save(&self.chart, output_path)
        .map_err(|e| format!("Failed to save preview: {}", e))
    }
}

fn radar_chart(spec: &ChartSpec) -> Chart {
    let (min, max) = spec
        .options
        .scales
        .as_ref()
        .map(|s| (s.r.suggested_min, s.r.suggested_max))
        .unwrap_or((0.0, 100.0));
    let indicators: Vec<(&str, f64, f64)> = spec
        .data
        .labels
        .iter()
        .map(|label| (label.as_str(), min, max))
        .collect();

    let mut chart = Chart::new()
        .background_color(Color::Value(BACKGROUND.to_string()))
        .radar(RadarCoordinate::new().indicator(indicators));

    if let Some(ds) = spec.data.datasets.first() {
        let mut item = DataPointItem::new(ds.data.clone());
        if let Some(accent) = &ds.border_color {
            item = item.item_style(ItemStyle::new().color(accent.as_str()));
        }
        let mut series = Radar::new().data(vec![item]);
        if let Some(Paint::Uniform(Fill::Solid(fill))) = &ds.background_color {
            series = series.area_style(AreaStyle::new().color(fill.as_str()));
        }
        chart = chart.series(series);
    }

    chart
}

fn donut_chart(spec: &ChartSpec) -> Chart {
    let labels = &spec.data.labels;

    let mut chart = Chart::new().background_color(Color::Value(BACKGROUND.to_string()));

    let legend_cfg = &spec.options.plugins.legend;
    if legend_cfg.display {
        let mut legend = Legend::new().data(labels.clone()).bottom("3%");
        if let Some(labels_cfg) = &legend_cfg.labels {
            legend = legend.text_style(
                TextStyle::new()
                    .color(labels_cfg.color.as_str())
                    .font_size(labels_cfg.font.size * PREVIEW_SCALE),
            );
        }
        chart = chart.legend(legend);
    }

    if let Some(ds) = spec.data.datasets.first() {
        let fills: Vec<&Fill> = match &ds.background_color {
            Some(Paint::PerSegment(fills)) => fills.iter().collect(),
            Some(Paint::Uniform(fill)) => ds.data.iter().map(|_| fill).collect(),
            None => Vec::new(),
        };

        let items: Vec<DataPointItem> = ds
            .data
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let mut item = DataPointItem::new(*value);
                if let Some(label) = labels.get(i) {
                    item = item.name(label.clone());
                }
                if let Some(fill) = fills.get(i) {
                    item = item.item_style(ItemStyle::new().color(fill_color(fill)));
                }
                item
            })
            .collect();

        chart = chart.series(
            Pie::new()
                .radius(ring_radii(spec.options.cutout.as_deref()))
                .label(Label::new().show(false))
                .data(items),
        );
    }

    chart
}

/// Inner and outer ring radii from the spec's cutout percentage. The
/// cutout names the hole as a share of the ring's outer edge.
pub(super) fn ring_radii(cutout: Option<&str>) -> Vec<String> {
    let cutout_pct = cutout
        .and_then(|c| c.strip_suffix('%'))
        .and_then(|n| n.parse::<f64>().ok())
        .unwrap_or(85.0);
    let inner = DONUT_OUTER_PCT * cutout_pct / 100.0;

    vec![format!("{}%", inner), format!("{}%", DONUT_OUTER_PCT)]
}

fn fill_color(fill: &Fill) -> Color {
    match fill {
        Fill::Solid(token) => Color::Value(token.as_str().to_string()),
        Fill::Gradient(gradient) => gradient_color(gradient),
    }
}

/// ECharts gradients use unit coordinates relative to the painted box;
/// spec gradients are in surface pixels.
pub(super) fn gradient_color(gradient: &GradientSpec) -> Color {
    let span = [gradient.x0, gradient.y0, gradient.x1, gradient.y1]
        .into_iter()
        .fold(1.0_f64, f64::max);

    Color::LinearGradient {
        x: gradient.x0 / span,
        y: gradient.y0 / span,
        x2: gradient.x1 / span,
        y2: gradient.y1 / span,
        color_stops: gradient
            .stops()
            .iter()
            .map(|stop| ColorStop::new(stop.offset, stop.color.as_str()))
            .collect(),
    }
}
