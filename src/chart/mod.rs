//! Chart spec construction for the credit risk dashboard.
//!
//! The dashboard shows two charts per application: a radar of the five
//! scored risk metrics and a donut splitting the requested loan into
//! principal and estimated interest. Both are described declaratively
//! as [`ChartSpec`] values and handed to a rendering engine; nothing
//! in this module draws.

mod donut;
mod gradient;
mod palette;
mod radar;
mod spec;

#[cfg(test)]
mod tests;

pub use donut::SEGMENT_LABELS;
pub use palette::{
    ACCENT_APPROVED, ACCENT_REJECTED, DEFAULTS, PRINCIPAL_GRADIENT_END, PRINCIPAL_GRADIENT_START,
    PaletteDefaults,
};
pub use radar::RADAR_AXES;
pub use spec::{
    Animation, ChartData, ChartKind, ChartOptions, ChartSpec, ColorToken, Dataset, Easing, Fill,
    FontSpec, GradientSpec, GradientStop, GridLine, Legend, LegendLabels, LegendPosition, Paint,
    Plugins, PointLabels, RadialScale, Scales, Ticks,
};

use std::fmt;

use crate::engine::ChartEngine;
use crate::panel::ElementLocator;

/// Credit decision driving the accent color of both charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Approved,
    Rejected,
}

impl Outcome {
    /// Accent token tied to this outcome.
    pub fn accent(self) -> ColorToken {
        match self {
            Outcome::Approved => ACCENT_APPROVED,
            Outcome::Rejected => ACCENT_REJECTED,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Approved => write!(f, "approved"),
            Outcome::Rejected => write!(f, "rejected"),
        }
    }
}

/// Builds the dashboard's chart specs and hands them to a rendering
/// engine.
///
/// Both initializers resolve their target container through the
/// locator first and return `None` without side effects when the page
/// does not declare it, so dashboard variants missing a panel need no
/// special casing.
pub struct CreditCharts<L, E> {
    locator: L,
    engine: E,
}

impl<L: ElementLocator, E: ChartEngine> CreditCharts<L, E> {
    pub fn new(locator: L, engine: E) -> CreditCharts<L, E> {
        CreditCharts { locator, engine }
    }

    /// Render the risk profile radar into the container `element_id`.
    ///
    /// `metrics` bind positionally to [`RADAR_AXES`] and are forwarded
    /// unvalidated. Returns the engine's handle, or `None` when the
    /// container is not declared.
    pub fn init_radar(
        &self,
        element_id: &str,
        metrics: &[f64],
        outcome: Outcome,
    ) -> Option<E::Handle> {
        let surface = self.locator.resolve(element_id)?;
        let spec = radar::build_spec(metrics, outcome);
        Some(self.engine.render(&surface.context(), spec))
    }

    /// Render the amortization donut into the container `element_id`.
    ///
    /// `principal` and `interest` become the two segment values, in
    /// that order. Returns the engine's handle, or `None` when the
    /// container is not declared.
    pub fn init_amortization(
        &self,
        element_id: &str,
        principal: f64,
        interest: f64,
        outcome: Outcome,
    ) -> Option<E::Handle> {
        let surface = self.locator.resolve(element_id)?;
        let ctx = surface.context();
        let spec = donut::build_spec(&ctx, principal, interest, outcome);
        Some(self.engine.render(&ctx, spec))
    }
}
