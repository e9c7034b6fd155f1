//! The host-facing session: one diagram, one viewport, one frame at a time.
//!
//! A session starts in the loading state and renders a placeholder until
//! [`Session::init`] receives a document. The host then calls
//! [`Session::frame`] with the current pointer every time it redraws, and
//! [`Session::resize`] whenever its container changes size.
//!
//! # Example
//!
//! ```
//! # use placard::{config::AppConfig, layout::Viewport, loader, session::Session};
//! # use placard_core::geometry::Point;
//! let mut session = Session::new(Viewport::new(800.0, 700.0), AppConfig::default());
//! assert!(!session.is_ready());
//!
//! let loaded = loader::load_str(r##"{
//!     "diagram": "funnel",
//!     "taskStages": [ { "name": "Plan", "color": "#3498db", "description": "Decide." } ]
//! }"##);
//! session.init(loaded).unwrap();
//!
//! let frame = session.frame(Some(Point::new(400.0, 130.0)));
//! assert!(frame.snapshot().hover().hovered().is_some());
//! ```

use log::{debug, error, info, warn};
use svg::Document;

use placard_core::geometry::Point;

use crate::{
    PlacardError,
    config::AppConfig,
    export,
    hover::HoverState,
    layout::{self, DiagramLayout, Viewport},
    loader::LoadedDocument,
    model::Diagram,
    render,
    scene::Scene,
    schema::DiagramKind,
};

#[derive(Debug)]
enum State {
    Loading,
    Ready {
        diagram: Box<Diagram>,
        layout: DiagramLayout,
    },
}

/// What a frame was rendered from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    viewport: Viewport,
    hover: HoverState,
}

impl FrameSnapshot {
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn hover(&self) -> HoverState {
        self.hover
    }
}

/// One rendered frame.
#[derive(Debug)]
pub struct Frame {
    scene: Scene,
    snapshot: FrameSnapshot,
}

impl Frame {
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        self.snapshot
    }

    /// The frame as an SVG document.
    pub fn document(&self) -> Document {
        export::svg::document(&self.scene)
    }
}

/// A diagram bound to a viewport.
#[derive(Debug)]
pub struct Session {
    config: AppConfig,
    viewport: Viewport,
    state: State,
}

impl Session {
    pub fn new(viewport: Viewport, config: AppConfig) -> Self {
        Self {
            config,
            viewport,
            state: State::Loading,
        }
    }

    /// Accepts the loader's result.
    ///
    /// A load failure is logged and leaves the session loading for good. A
    /// valid document becomes the session's diagram and gets its first
    /// layout. A diagram is accepted once; later calls are ignored.
    ///
    /// # Errors
    ///
    /// Schema and validation errors are returned and leave
    /// the session loading.
    pub fn init(&mut self, loaded: Result<LoadedDocument, PlacardError>) -> Result<(), PlacardError> {
        if self.is_ready() {
            warn!("Session already has a diagram, ignoring init");
            return Ok(());
        }

        let loaded = match loaded {
            Ok(loaded) => loaded,
            Err(err) if err.is_load_failure() => {
                error!(err:err; "Error loading diagram document");
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        let diagram = loaded.validate(self.config.style())?;
        info!(
            kind = diagram.kind().name(),
            elements = diagram.elements().len();
            "Diagram loaded successfully"
        );
        let description = diagram
            .header()
            .description
            .as_deref()
            .unwrap_or_else(|| default_description(&diagram));
        info!(description; "Diagram description");

        let layout = layout::compute(&diagram, self.viewport);
        self.state = State::Ready {
            diagram: Box::new(diagram),
            layout,
        };
        Ok(())
    }

    /// Recomputes the layout for a new viewport before the next frame.
    pub fn resize(&mut self, viewport: Viewport) {
        debug!(width = viewport.width(), height = viewport.height(); "Viewport resized");
        self.viewport = viewport;
        if let State::Ready { diagram, layout } = &mut self.state {
            *layout = layout::compute(diagram, viewport);
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready { .. })
    }

    pub fn diagram(&self) -> Option<&Diagram> {
        match &self.state {
            State::Loading => None,
            State::Ready { diagram, .. } => Some(diagram.as_ref()),
        }
    }

    pub fn layout(&self) -> Option<&DiagramLayout> {
        match &self.state {
            State::Loading => None,
            State::Ready { layout, .. } => Some(layout),
        }
    }

    /// Renders the current state with the pointer at `pointer`.
    pub fn frame(&self, pointer: Option<Point>) -> Frame {
        match &self.state {
            State::Loading => Frame {
                scene: render::loading_scene(self.viewport, self.config.style()),
                snapshot: FrameSnapshot {
                    viewport: self.viewport,
                    hover: HoverState::resolve(pointer, &[]),
                },
            },
            State::Ready { diagram, layout } => {
                let hover = HoverState::resolve(pointer, &layout.hotspots());
                Frame {
                    scene: render::scene(diagram, layout, &hover, self.config.style()),
                    snapshot: FrameSnapshot {
                        viewport: self.viewport,
                        hover,
                    },
                }
            }
        }
    }
}

fn default_description(diagram: &Diagram) -> &'static str {
    match diagram.kind() {
        DiagramKind::Framework => "Framework structure diagram",
        DiagramKind::Funnel => "Interactive task infographic",
    }
}
