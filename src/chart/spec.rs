//! Declarative chart spec model.
//!
//! A spec is the `{ kind, data, options }` triple the dashboard's
//! rendering engine consumes. Field names serialize in the engine's
//! camelCase wire form, so a spec written as JSON can be handed to the
//! frontend untouched.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// A complete chart description ready for the rendering engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

/// Chart families the dashboard renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Radar,
    Doughnut,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Radar => write!(f, "radar"),
            ChartKind::Doughnut => write!(f, "doughnut"),
        }
    }
}

/// Labels plus the datasets bound to them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// One dataset and its visual styling.
///
/// Only the fields a chart family actually styles are populated; the
/// rest stay `None` and are skipped during serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<ColorToken>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<ColorToken>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_color: Option<ColorToken>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

/// Paint applied to a dataset: one fill for the whole dataset, or one
/// fill per segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Uniform(Fill),
    PerSegment(Vec<Fill>),
}

/// A single fill: a flat color token or a gradient.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Fill {
    Solid(ColorToken),
    Gradient(GradientSpec),
}

/// A CSS color token, e.g. `#10b981` or `rgba(255, 255, 255, 0.05)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColorToken(Cow<'static, str>);

impl ColorToken {
    pub const fn from_static(token: &'static str) -> ColorToken {
        ColorToken(Cow::Borrowed(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append a two-digit hex alpha channel to the token.
    pub fn with_alpha(&self, alpha: u8) -> ColorToken {
        ColorToken(Cow::Owned(format!("{}{:02x}", self.0, alpha)))
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ColorToken {
    fn from(token: &str) -> ColorToken {
        ColorToken(Cow::Owned(token.to_string()))
    }
}

/// A linear gradient in surface pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientSpec {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    stops: Vec<GradientStop>,
}

impl GradientSpec {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> GradientSpec {
        GradientSpec {
            x0,
            y0,
            x1,
            y1,
            stops: Vec::new(),
        }
    }

    /// Append a color stop. Offsets run from 0.0 at the gradient start
    /// to 1.0 at its end.
    pub fn add_stop(&mut self, offset: f64, color: ColorToken) {
        self.stops.push(GradientStop { offset, color });
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }
}

/// One color stop of a gradient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: ColorToken,
}

/// Chart-level options.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
    pub plugins: Plugins,
    pub animation: Animation,
}

/// Scale configuration; radars only use the radial `r` scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub r: RadialScale,
}

/// The radial scale of a radar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadialScale {
    pub angle_lines: GridLine,
    pub grid: GridLine,
    pub point_labels: PointLabels,
    pub ticks: Ticks,
    pub suggested_min: f64,
    pub suggested_max: f64,
}

/// Color of a grid or angle line family.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridLine {
    pub color: ColorToken,
}

/// Styling of the labels at each radar axis tip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointLabels {
    pub color: ColorToken,
    pub font: FontSpec,
}

/// Tick visibility on a scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ticks {
    pub display: bool,
}

/// Font shorthand used across labels and legends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontSpec {
    pub family: String,
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

/// Plugin options; the dashboard only configures the legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

/// Legend visibility and placement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<LegendPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<LegendLabels>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Bottom,
}

/// Styling of legend entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendLabels {
    pub color: ColorToken,
    pub font: FontSpec,
    pub padding: u32,
}

/// Entry animation of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    pub duration: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animate_rotate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animate_scale: Option<bool>,
}

/// Easing curves the dashboard uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Easing {
    #[serde(rename = "easeOutQuart")]
    EaseOutQuart,
}
