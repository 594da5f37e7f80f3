//! Dashboard page model: chart containers and their drawing contexts.
//!
//! Chart builders never touch the page directly. They ask an
//! [`ElementLocator`] for the container they were pointed at and walk
//! away silently when the page does not declare it, so a dashboard
//! variant without some panel costs nothing to support.

use std::collections::HashMap;

use crate::chart::GradientSpec;

/// Looks up chart containers by element id.
pub trait ElementLocator {
    /// Resolve an element id to its container, or `None` when the
    /// page does not declare that id.
    fn resolve(&self, id: &str) -> Option<Surface>;
}

/// A chart container on the dashboard page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    id: String,
    width: u32,
    height: u32,
}

impl Surface {
    pub fn new(id: &str, width: u32, height: u32) -> Surface {
        Surface {
            id: id.to_string(),
            width,
            height,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The 2D drawing context of this container.
    pub fn context(&self) -> DrawingContext {
        DrawingContext {
            width: self.width,
            height: self.height,
        }
    }
}

/// Drawing context of a resolved container.
///
/// Builders only ever use it to allocate gradients; painting belongs
/// to the rendering engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawingContext {
    width: u32,
    height: u32,
}

impl DrawingContext {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Allocate a linear gradient along the given axis with no stops
    /// yet. Coordinates are surface pixels.
    pub fn create_linear_gradient(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> GradientSpec {
        GradientSpec::new(x0, y0, x1, y1)
    }
}

/// In-memory model of a dashboard page: the chart containers it
/// declares, resolvable by element id.
#[derive(Debug, Clone, Default)]
pub struct PanelRegistry {
    panels: HashMap<String, Surface>,
}

impl PanelRegistry {
    pub fn new() -> PanelRegistry {
        PanelRegistry::default()
    }

    /// Declare a chart container on the page.
    pub fn with_panel(mut self, id: &str, width: u32, height: u32) -> PanelRegistry {
        self.panels.insert(id.to_string(), Surface::new(id, width, height));
        self
    }
}

impl ElementLocator for PanelRegistry {
    fn resolve(&self, id: &str) -> Option<Surface> {
        self.panels.get(id).cloned()
    }
}
