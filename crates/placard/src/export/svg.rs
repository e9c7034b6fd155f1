//! SVG output.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use log::{debug, error, info};
use svg::Document;

use crate::{export, scene::Scene};

/// Builds the SVG document for a scene.
///
/// The document is exactly the scene's size; the background is the scene's
/// first drawable, so no extra fill is added here.
pub fn document(scene: &Scene) -> Document {
    let size = scene.size();
    let doc = Document::new()
        .set("viewBox", format!("0 0 {} {}", size.width(), size.height()))
        .set("width", size.width())
        .set("height", size.height());

    let nodes = scene.render_to_layers().render();
    debug!(groups = nodes.len(); "Scene rendered to layer groups");
    nodes.into_iter().fold(doc, |doc, node| doc.add(node))
}

/// Writes scenes to an SVG file.
#[derive(Debug)]
pub struct Svg {
    path: PathBuf,
}

impl Svg {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes an SVG document to the target file.
    pub fn write_document(&self, doc: &Document) -> Result<(), export::Error> {
        let file_name = self.path.display().to_string();
        info!(file_name; "Creating SVG file");

        let file = File::create(&self.path).map_err(|err| {
            error!(file_name, err:err; "Failed to create SVG file");
            export::Error::Io(err)
        })?;

        let mut writer = BufWriter::new(file);
        write!(writer, "{doc}")
            .and_then(|()| writer.flush())
            .map_err(|err| {
                error!(file_name, err:err; "Failed to write SVG content");
                export::Error::Io(err)
            })
    }
}

impl export::Exporter for Svg {
    fn export_scene(&mut self, scene: &Scene) -> Result<(), export::Error> {
        let size = scene.size();
        if !(size.width() > 0.0 && size.height() > 0.0) {
            return Err(export::Error::Render(format!(
                "canvas must have a positive size, got {}x{}",
                size.width(),
                size.height()
            )));
        }

        let doc = document(scene);
        debug!("SVG document rendered");
        self.write_document(&doc)
    }
}

#[cfg(test)]
mod tests {
    use placard_core::{color::Color, geometry::Size};

    use super::*;
    use crate::export::Exporter;

    #[test]
    fn test_document_has_viewbox_and_background() {
        let scene = Scene::new(Size::new(800.0, 600.0), Color::from_rgb8(240, 248, 255));
        let svg = document(&scene).to_string();
        assert!(svg.contains("viewBox=\"0 0 800 600\""));
        assert!(svg.contains("data-layer=\"background\""));
    }

    #[test]
    fn test_zero_size_is_a_render_error() {
        let scene = Scene::new(Size::new(0.0, 600.0), Color::default());
        let mut exporter = Svg::new("unused.svg");
        let err = exporter.export_scene(&scene).unwrap_err();
        assert!(matches!(err, export::Error::Render(_)));
    }

    #[test]
    fn test_unwritable_path_is_io_error() {
        let scene = Scene::new(Size::new(100.0, 100.0), Color::default());
        let mut exporter = Svg::new("/nonexistent-dir/placard/out.svg");
        let err = exporter.export_scene(&scene).unwrap_err();
        assert!(matches!(err, export::Error::Io(_)));
    }
}
