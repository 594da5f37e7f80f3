//! Palette and typography defaults shared by every dashboard chart.

use super::spec::ColorToken;

/// Baseline styling applied at spec-build time.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteDefaults {
    /// Font family stack for all chart text.
    pub font_family: &'static str,
    /// Default foreground for labels and legends.
    pub color: ColorToken,
    /// Near-invisible line color for grids and angle lines.
    pub grid_color: ColorToken,
}

/// The stock dashboard theme.
pub const DEFAULTS: PaletteDefaults = PaletteDefaults {
    font_family: "'JetBrains Mono', monospace",
    color: ColorToken::from_static("#94a3b8"),
    grid_color: ColorToken::from_static("rgba(255, 255, 255, 0.05)"),
};

/// Accent applied when the credit decision is an approval.
pub const ACCENT_APPROVED: ColorToken = ColorToken::from_static("#10b981");

/// Accent applied when the credit decision is a rejection.
pub const ACCENT_REJECTED: ColorToken = ColorToken::from_static("#e11d48");

/// First stop of the principal segment gradient.
pub const PRINCIPAL_GRADIENT_START: ColorToken = ColorToken::from_static("#3b82f6");

/// Second stop of the principal segment gradient.
pub const PRINCIPAL_GRADIENT_END: ColorToken = ColorToken::from_static("#1d4ed8");
