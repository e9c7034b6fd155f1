//! Scene construction.
//!
//! Turns a diagram, its layout, and the frame's hover state into a [`Scene`].
//! Every visual element becomes a drawable on a fixed layer:
//!
//! | Layer | Contents |
//! |-------|----------|
//! | Background | Canvas fill |
//! | Title | Diagram title |
//! | Decoration | Banner, column headers, funnel outline, side panels |
//! | Shape | Processes, foundation, stages and their labels |
//! | Connector | Connector lines, arrowheads, flow markers |
//! | Badge | Stage numbers |
//! | Popover | Detail box for the hovered element |

mod framework;
mod funnel;

use std::rc::Rc;

use log::{debug, warn};

use placard_core::{
    color::Color,
    draw::{RenderLayer, Text, TextBaseline, TextDefinition},
    geometry::Point,
};

use crate::{
    config::StyleConfig,
    hover::HoverState,
    layout::{DiagramLayout, Viewport},
    model::{Diagram, DiagramBody, Element},
    popover::{Popover, PopoverStyle},
    scene::Scene,
};

/// Border of a box that is not hovered.
fn border_color() -> Color {
    Color::from_rgb8(0x34, 0x49, 0x5e)
}

/// Border of the hovered box, also used for badges.
fn hover_border_color() -> Color {
    Color::from_rgb8(0x2c, 0x3e, 0x50)
}

/// Connectors, captions, and the funnel outline.
fn muted_color() -> Color {
    Color::from_rgb8(0x7f, 0x8c, 0x8d)
}

/// Builds the scene for one frame.
pub fn scene(
    diagram: &Diagram,
    layout: &DiagramLayout,
    hover: &HoverState,
    style: &StyleConfig,
) -> Scene {
    let viewport = layout.viewport();
    let mut scene = Scene::new(viewport.size(), diagram.header().background);
    let painter = Painter::new(style.font_family());

    match (diagram.body(), layout) {
        (DiagramBody::Framework(model), DiagramLayout::Framework(layout)) => {
            framework::paint(&mut scene, &painter, diagram, model, layout, hover);
        }
        (DiagramBody::Funnel(model), DiagramLayout::Funnel(layout)) => {
            funnel::paint(&mut scene, &painter, diagram, model, layout, hover);
        }
        _ => {
            warn!(kind = diagram.kind().name(); "Layout does not match the diagram kind");
            return scene;
        }
    }

    if let Some((id, pointer)) = hover.target() {
        if let Some(element) = diagram.element(id) {
            debug!(element = id.to_string(); "Showing popover");
            scene.push(popover(
                element,
                diagram,
                pointer,
                viewport,
                painter.font_family(),
            ));
        }
    }

    scene
}

/// The placeholder shown until a diagram is ready.
pub fn loading_scene(viewport: Viewport, style: &StyleConfig) -> Scene {
    let mut scene = Scene::new(viewport.size(), Color::from_rgb8(220, 220, 220));
    let painter = Painter::new(style.font_family());
    let definition = painter.definition(14, Color::default());
    scene.push(
        Text::new(
            definition,
            "Loading...",
            Point::new(viewport.width() / 2.0, viewport.height() / 2.0),
        )
        .with_layer(RenderLayer::Title),
    );
    scene
}

fn popover(
    element: &Element,
    diagram: &Diagram,
    pointer: Point,
    viewport: Viewport,
    font_family: &str,
) -> Popover {
    Popover::new(
        &PopoverStyle::for_kind(diagram.kind()),
        pointer,
        viewport.size(),
        element.name(),
        element.description(),
        font_family,
    )
}

/// Text definitions sharing one font family.
#[derive(Debug)]
struct Painter<'a> {
    font_family: &'a str,
}

impl<'a> Painter<'a> {
    fn new(font_family: &'a str) -> Self {
        Self { font_family }
    }

    fn font_family(&self) -> &str {
        self.font_family
    }

    fn text(&self, size: u16, color: Color) -> TextDefinition {
        let mut definition = TextDefinition::new();
        definition.set_font_family(self.font_family);
        definition.set_font_size(size);
        definition.set_color(Some(color));
        definition
    }

    fn definition(&self, size: u16, color: Color) -> Rc<TextDefinition> {
        Rc::new(self.text(size, color))
    }

    /// Centered horizontally, hanging from its anchor.
    fn top_aligned(&self, size: u16, color: Color) -> Rc<TextDefinition> {
        let mut definition = self.text(size, color);
        definition.set_baseline(TextBaseline::Top);
        Rc::new(definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{hover::HoverState, layout, schema::DiagramDocument, validate::validate};

    pub(super) fn diagram(json: &str) -> Diagram {
        let document: DiagramDocument = serde_json::from_str(json).unwrap();
        validate(&document, None).unwrap()
    }

    pub(super) fn svg(scene: &Scene) -> String {
        scene
            .render_to_layers()
            .render()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    const FRAMEWORK: &str = r##"{
        "diagram": "framework",
        "title": "ITIL Framework",
        "columns": [
            { "title": "Service Support", "color": "#3498db",
              "processes": [ { "name": "Incident Management", "color": "#5dade2",
                               "description": "Restores service." } ] }
        ],
        "foundation": { "title": "CMDB", "color": "#e67e22" }
    }"##;

    #[test]
    fn test_layer_order_without_hover() {
        let diagram = diagram(FRAMEWORK);
        let layout = layout::compute(&diagram, Viewport::new(1200.0, 800.0));
        let scene = scene(&diagram, &layout, &HoverState::default(), &StyleConfig::default());
        assert_eq!(
            scene.layers(),
            vec![
                RenderLayer::Background,
                RenderLayer::Title,
                RenderLayer::Decoration,
                RenderLayer::Shape,
            ]
        );
    }

    #[test]
    fn test_popover_only_when_hovered() {
        let diagram = diagram(FRAMEWORK);
        let layout = layout::compute(&diagram, Viewport::new(1200.0, 800.0));
        let hover = HoverState::resolve(Some(Point::new(300.0, 270.0)), &layout.hotspots());
        assert!(hover.hovered().is_some());

        let scene = scene(&diagram, &layout, &hover, &StyleConfig::default());
        assert_eq!(scene.layers().last(), Some(&RenderLayer::Popover));
        assert!(svg(&scene).contains("Restores service."));
    }

    #[test]
    fn test_pointer_outside_draws_no_popover() {
        let diagram = diagram(FRAMEWORK);
        let layout = layout::compute(&diagram, Viewport::new(1200.0, 800.0));
        let hover = HoverState::resolve(Some(Point::new(5.0, 5.0)), &layout.hotspots());
        let scene = scene(&diagram, &layout, &hover, &StyleConfig::default());
        assert!(!scene.layers().contains(&RenderLayer::Popover));
    }

    #[test]
    fn test_loading_scene() {
        let scene = loading_scene(Viewport::new(800.0, 600.0), &StyleConfig::default());
        assert_eq!(scene.background(), Color::from_rgb8(220, 220, 220));
        assert_eq!(scene.layers(), vec![RenderLayer::Background, RenderLayer::Title]);
        assert!(svg(&scene).contains("Loading..."));
    }
}
