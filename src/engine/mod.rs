//! Rendering engines that realize chart specs.

mod echarts;


pub use echarts::{EchartsEngine, EchartsHandle};

use crate::chart::ChartSpec;
use crate::panel::DrawingContext;

/// Realizes chart specs on a drawing surface.
///
/// Spec construction never knows how a chart gets drawn. An engine
/// decides that and returns whatever handle its charts are controlled
/// through afterwards.
pub trait ChartEngine {
    type Handle;

    /// Realize `spec` on the surface behind `ctx`.
    fn render(&self, ctx: &DrawingContext, spec: ChartSpec) -> Self::Handle;
}
