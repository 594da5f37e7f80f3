//! Two-stop vertical fill gradients.

use super::spec::{ColorToken, GradientSpec};
use crate::panel::DrawingContext;

/// Vertical extent of fill gradients, in surface pixels. Fixed; the
/// builder does not consult the surface height.
pub(crate) const GRADIENT_EXTENT: f64 = 400.0;

/// Build the standard top-to-bottom fill gradient on `ctx`, running
/// from `start` at the top to `end` at the bottom.
pub(crate) fn build_gradient(
    ctx: &DrawingContext,
    start: ColorToken,
    end: ColorToken,
) -> GradientSpec {
    let mut gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, GRADIENT_EXTENT);
    gradient.add_stop(0.0, start);
    gradient.add_stop(1.0, end);
    gradient
}
