//! Layout engines.
//!
//! Geometry is a pure function of the diagram and the viewport: the same
//! inputs always produce the same coordinates, bit for bit. Nothing computed
//! here is written back into the model.

mod column;
mod framework;
mod funnel;
mod tapered;

pub use column::{ColumnGrid, ItemStack};
pub use framework::{ColumnLayout, Connector, ElementSlot, FrameworkLayout, LinkStyle};
pub use funnel::{FunnelLayout, PANEL_TITLE_LINE_HEIGHT, PanelLayout, StageLayout};
pub use tapered::{TAPER_FACTOR, TaperedLayout};

use log::debug;

use placard_core::geometry::Size;

use crate::{
    hover::Hotspot,
    model::{Diagram, DiagramBody},
};

/// Visible canvas size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn with_width(self, width: f32) -> Self {
        Self { width, ..self }
    }
}

/// Geometry for one diagram at one viewport.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagramLayout {
    Framework(FrameworkLayout),
    Funnel(FunnelLayout),
}

impl DiagramLayout {
    pub fn viewport(&self) -> Viewport {
        match self {
            Self::Framework(layout) => layout.viewport,
            Self::Funnel(layout) => layout.viewport,
        }
    }

    /// Interactive boxes in draw order.
    pub fn hotspots(&self) -> Vec<Hotspot> {
        match self {
            Self::Framework(layout) => layout.hotspots(),
            Self::Funnel(layout) => layout.hotspots(),
        }
    }
}

/// Computes the layout of `diagram` for `viewport`.
pub fn compute(diagram: &Diagram, viewport: Viewport) -> DiagramLayout {
    debug!(
        kind = diagram.kind().name(),
        width = viewport.width(),
        height = viewport.height();
        "Computing layout"
    );
    match diagram.body() {
        DiagramBody::Framework(framework) => {
            DiagramLayout::Framework(FrameworkLayout::compute(diagram, framework, viewport))
        }
        DiagramBody::Funnel(funnel) => {
            DiagramLayout::Funnel(FunnelLayout::compute(funnel, viewport))
        }
    }
}
