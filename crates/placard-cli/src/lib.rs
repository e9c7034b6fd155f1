//! CLI logic for the Placard diagram tool.
//!
//! The CLI plays the host's part: it loads the document, sizes the viewport,
//! places the pointer, and writes the resulting frame to an SVG file.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Pointer};

use log::{info, warn};

use placard::{
    PlacardError,
    config::AppConfig,
    export::{Exporter, svg::Svg},
    geometry::Point,
    layout::Viewport,
    loader::{self, LoadedDocument},
    schema::DiagramKind,
    session::Session,
};

/// Run the Placard CLI application
///
/// A document that cannot be read is logged and rendered as the loading
/// placeholder; the run still succeeds.
///
/// # Errors
///
/// Returns `PlacardError` for:
/// - Configuration loading errors
/// - Schema and validation errors in the document
/// - Export errors for a viewport without area
/// - I/O errors while writing the output file
pub fn run(args: &Args) -> Result<(), PlacardError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read the document; the viewport height depends on its kind
    let loaded = loader::load_path(&args.input);
    let viewport = viewport(args, &app_config, loaded.as_ref().ok());

    let mut session = Session::new(viewport, app_config);
    session.init(loaded)?;
    if !session.is_ready() {
        warn!(input_path = args.input; "Document not loaded, writing placeholder");
    }

    let pointer = args.pointer.map(|p| Point::new(p.x, p.y));
    let frame = session.frame(pointer);

    // Write output file
    Svg::new(&args.output).export_scene(frame.scene())?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

/// Width from the flag or the configuration; height from the flag or the
/// configured height of the document's kind.
fn viewport(args: &Args, config: &AppConfig, loaded: Option<&LoadedDocument>) -> Viewport {
    let canvas = config.canvas();
    let kind = loaded.map_or(DiagramKind::Framework, |loaded| loaded.document().diagram);
    Viewport::new(
        args.width.unwrap_or_else(|| canvas.width()),
        args.height.unwrap_or_else(|| canvas.height_for(kind)),
    )
}
