//! Placard - config-driven box diagrams with hover details.
//!
//! A diagram is described by a JSON document: a *framework* (a banner, columns
//! of process boxes, and a foundation) or a *funnel* (numbered stages in a
//! tapered outline between two side panels). Placard validates the document,
//! lays it out for a viewport, hit-tests the pointer, and renders an SVG frame
//! with a detail popover for the hovered element.
//!
//! [`session::Session`] is the interactive entry point; [`DiagramBuilder`]
//! renders a single frame in one call.

pub mod config;
pub mod export;
pub mod hover;
pub mod layout;
pub mod loader;
pub mod model;
pub mod popover;
pub mod render;
pub mod scene;
pub mod schema;
pub mod session;
pub mod validate;

mod error;

pub use placard_core::{color, draw, geometry};

pub use error::PlacardError;

use log::{debug, info, trace};

use config::AppConfig;
use geometry::Point;
use hover::HoverState;
use layout::Viewport;
use model::Diagram;

/// Builder for parsing and rendering Placard diagrams.
///
/// # Examples
///
/// ```rust
/// use placard::{DiagramBuilder, config::AppConfig, layout::Viewport};
///
/// let source = r##"{ "diagram": "funnel", "taskStages": [ { "name": "Plan", "color": "#3498db" } ] }"##;
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let diagram = builder.parse(source).expect("Failed to parse");
/// let svg = builder
///     .render_svg(&diagram, Viewport::new(1200.0, 700.0), None)
///     .expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The viewport a diagram gets at the configured width and its kind's height.
    pub fn default_viewport(&self, diagram: &Diagram) -> Viewport {
        let canvas = self.config.canvas();
        Viewport::new(canvas.width(), canvas.height_for(diagram.kind()))
    }

    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`PlacardError::Schema`] when the text is not a valid document,
    /// and [`PlacardError::Validation`] with every semantic problem found.
    pub fn parse(&self, source: &str) -> Result<Diagram, PlacardError> {
        info!("Parsing diagram");
        let loaded = loader::load_str(source)?;
        let diagram = loaded.validate(self.config.style())?;

        debug!("Diagram validated successfully");
        trace!(diagram:?; "Validated diagram");

        Ok(diagram)
    }

    /// Render one frame of `diagram` to an SVG string.
    ///
    /// `pointer` selects the hovered element; `None` renders without hover.
    ///
    /// # Errors
    ///
    /// Returns [`PlacardError::Export`] when the viewport has no area.
    pub fn render_svg(
        &self,
        diagram: &Diagram,
        viewport: Viewport,
        pointer: Option<Point>,
    ) -> Result<String, PlacardError> {
        if !(viewport.width() > 0.0 && viewport.height() > 0.0) {
            return Err(export::Error::Render(format!(
                "viewport must have a positive size, got {}x{}",
                viewport.width(),
                viewport.height()
            ))
            .into());
        }

        info!(kind = diagram.kind().name(); "Computing layout");
        let layout = layout::compute(diagram, viewport);
        let hover = HoverState::resolve(pointer, &layout.hotspots());
        debug!(hovered:? = hover.hovered(); "Hover resolved");

        let scene = render::scene(diagram, &layout, &hover, self.config.style());
        let svg = export::svg::document(&scene).to_string();

        info!("SVG rendered successfully");
        Ok(svg)
    }
}
