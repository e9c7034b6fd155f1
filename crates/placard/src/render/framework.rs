//! Framework diagram: title, banner, columns of processes, and the foundation.

use std::rc::Rc;

use placard_core::{
    color::Color,
    draw::{
        BoxShape, CornerRadii, Line, RenderLayer, StrokeDefinition, Text, TextBaseline, Triangle,
        split_after_words,
    },
    geometry::Point,
};

use super::{Painter, border_color, hover_border_color, muted_color};
use crate::{
    hover::HoverState,
    layout::{Connector, ElementSlot, FrameworkLayout, LinkStyle},
    model::{Diagram, FrameworkDiagram},
    scene::Scene,
};

const ARROWHEAD_SIZE: f32 = 8.0;
const LABEL_WORDS: usize = 2;

pub(super) fn paint(
    scene: &mut Scene,
    painter: &Painter<'_>,
    diagram: &Diagram,
    model: &FrameworkDiagram,
    layout: &FrameworkLayout,
    hover: &HoverState,
) {
    let header = diagram.header();
    scene.push(
        Text::new(
            painter.top_aligned(26, header.title_color),
            &header.title,
            layout.title_anchor,
        )
        .with_layer(RenderLayer::Title),
    );

    if let Some(banner) = &model.banner {
        scene.push(
            BoxShape::new(layout.banner)
                .with_fill(banner.fill)
                .with_stroke(StrokeDefinition::solid(banner.border, 2.0))
                .with_rounded(8.0)
                .with_layer(RenderLayer::Decoration),
        );
        scene.push(
            Text::new(
                painter.definition(22, banner.text_color),
                &banner.title,
                layout.banner.center(),
            )
            .with_layer(RenderLayer::Decoration),
        );
    }

    let caption = {
        let mut definition = painter.text(12, muted_color());
        definition.set_italic(true);
        Rc::new(definition)
    };
    for (column, column_layout) in model.columns.iter().zip(&layout.columns) {
        scene.push(
            BoxShape::new(column_layout.header)
                .with_fill(column.fill)
                .with_stroke(StrokeDefinition::solid(hover_border_color(), 2.0))
                .with_radii(CornerRadii::top(8.0))
                .with_layer(RenderLayer::Decoration),
        );
        scene.push(
            Text::new(
                painter.definition(20, column.text_color),
                &column.title,
                column_layout.header.center(),
            )
            .with_layer(RenderLayer::Decoration),
        );
        if !column.label.is_empty() {
            scene.push(
                Text::new(Rc::clone(&caption), &column.label, column_layout.caption_anchor)
                    .with_layer(RenderLayer::Decoration),
            );
        }

        for slot in &column_layout.processes {
            paint_process(scene, painter, diagram, slot, hover);
        }
    }

    paint_foundation(scene, painter, diagram, model, layout.foundation, hover);

    for connector in &layout.connectors {
        paint_connector(scene, connector);
    }
}

fn paint_process(
    scene: &mut Scene,
    painter: &Painter<'_>,
    diagram: &Diagram,
    slot: &ElementSlot,
    hover: &HoverState,
) {
    let Some(element) = diagram.element(slot.id) else {
        return;
    };

    let stroke = if hover.is_hovered(slot.id) {
        StrokeDefinition::solid(hover_border_color(), 3.0)
    } else {
        StrokeDefinition::solid(border_color(), 2.0)
    };
    scene.push(
        BoxShape::new(slot.bounds)
            .with_fill(element.fill())
            .with_stroke(stroke)
            .with_rounded(6.0),
    );

    let mut label = painter.text(14, element.text_color().unwrap_or_default());
    label.set_line_height(16.0);
    scene.push(Text::with_lines(
        Rc::new(label),
        split_after_words(element.short_label(), LABEL_WORDS),
        slot.bounds.center(),
    ));
}

fn paint_foundation(
    scene: &mut Scene,
    painter: &Painter<'_>,
    diagram: &Diagram,
    model: &FrameworkDiagram,
    slot: ElementSlot,
    hover: &HoverState,
) {
    let Some(element) = diagram.element(slot.id) else {
        return;
    };

    let stroke = if hover.is_hovered(slot.id) {
        StrokeDefinition::solid(hover_border_color(), 3.0)
    } else {
        StrokeDefinition::solid(model.foundation.border, 2.0)
    };
    scene.push(
        BoxShape::new(slot.bounds)
            .with_fill(element.fill())
            .with_stroke(stroke)
            .with_rounded(8.0),
    );

    let text_color = element.text_color().unwrap_or_default();
    let center_x = slot.bounds.center().x();
    scene.push(Text::new(
        painter.top_aligned(20, text_color),
        element.name(),
        Point::new(center_x, slot.bounds.min_y() + 15.0),
    ));

    if !element.short_label().is_empty() && element.short_label() != element.name() {
        let mut label = painter.text(12, text_color);
        label.set_italic(true);
        label.set_baseline(TextBaseline::Top);
        scene.push(Text::new(
            Rc::new(label),
            element.short_label(),
            Point::new(center_x, slot.bounds.min_y() + 45.0),
        ));
    }
}

fn connector_stroke(style: LinkStyle) -> StrokeDefinition {
    match style {
        LinkStyle::Solid => StrokeDefinition::solid(muted_color(), 2.0),
        LinkStyle::Dashed => StrokeDefinition::dashed(muted_color(), 2.0),
        LinkStyle::Highlight => StrokeDefinition::solid(Color::from_rgb8(0xff, 0xd7, 0x00), 3.0),
    }
}

fn paint_connector(scene: &mut Scene, connector: &Connector) {
    let stroke = connector_stroke(connector.style);
    scene.push(Line::new(connector.from, connector.to, stroke));
    if let Some(direction) = connector.direction() {
        scene.push(Triangle::arrowhead(
            connector.to,
            direction,
            ARROWHEAD_SIZE,
            stroke.color(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::super::{
        scene,
        tests::{diagram, svg},
    };
    use crate::{
        config::StyleConfig,
        hover::HoverState,
        layout::{self, Viewport},
    };
    use placard_core::{draw::RenderLayer, geometry::Point};

    const CONNECTED: &str = r##"{
        "diagram": "framework",
        "banner": { "title": "ITIL Framework" },
        "columns": [
            { "title": "Service Support", "label": "Operational", "color": "#3498db",
              "connector": "solid",
              "processes": [ { "name": "Configuration Management Database", "color": "#5dade2" },
                             { "name": "Change", "color": "#f1c40f", "highlight": true } ] },
            { "title": "Service Delivery", "color": "#27ae60", "connector": "dashed",
              "processes": [ { "name": "Capacity Management", "color": "#58d68d" } ] }
        ],
        "foundation": { "title": "CMDB", "label": "Single source of truth", "color": "#e67e22" }
    }"##;

    #[test]
    fn test_all_static_layers() {
        let diagram = diagram(CONNECTED);
        let layout = layout::compute(&diagram, Viewport::new(1200.0, 800.0));
        let scene = scene(&diagram, &layout, &HoverState::default(), &StyleConfig::default());
        assert_eq!(
            scene.layers(),
            vec![
                RenderLayer::Background,
                RenderLayer::Title,
                RenderLayer::Decoration,
                RenderLayer::Shape,
                RenderLayer::Connector,
            ]
        );
    }

    #[test]
    fn test_long_label_splits_after_two_words() {
        let diagram = diagram(CONNECTED);
        let layout = layout::compute(&diagram, Viewport::new(1200.0, 800.0));
        let svg = svg(&scene(&diagram, &layout, &HoverState::default(), &StyleConfig::default()));
        assert!(svg.contains(">Configuration Management<"));
        assert!(svg.contains(">Database<"));
        assert!(svg.contains(">Capacity Management<"));
    }

    #[test]
    fn test_hovered_process_gets_thick_border() {
        let diagram = diagram(CONNECTED);
        let layout = layout::compute(&diagram, Viewport::new(1200.0, 800.0));

        let thick = |svg: &str| svg.matches("stroke-width=\"3\"").count();

        let idle = svg(&scene(&diagram, &layout, &HoverState::default(), &StyleConfig::default()));
        let hover = HoverState::resolve(Some(Point::new(900.0, 270.0)), &layout.hotspots());
        let hovered = svg(&scene(&diagram, &layout, &hover, &StyleConfig::default()));
        assert_eq!(thick(&hovered), thick(&idle) + 1);
    }

    #[test]
    fn test_no_columns_keeps_banner_and_foundation() {
        let diagram = diagram(
            r##"{ "diagram": "framework", "banner": { "title": "ITIL Framework" }, "columns": [],
                  "foundation": { "title": "CMDB", "color": "#e67e22", "description": "Stores items." } }"##,
        );
        let layout = layout::compute(&diagram, Viewport::new(1200.0, 800.0));
        assert_eq!(layout.hotspots().len(), 1);

        let hover = HoverState::resolve(Some(Point::new(600.0, 700.0)), &layout.hotspots());
        let scene = scene(&diagram, &layout, &hover, &StyleConfig::default());
        let svg = svg(&scene);
        assert!(svg.contains(">ITIL Framework<"));
        assert!(svg.contains(">CMDB<"));
        assert!(svg.contains("Stores items."));
        assert!(!scene.layers().contains(&RenderLayer::Connector));
    }

    #[test]
    fn test_column_without_processes_renders_header() {
        let diagram = diagram(
            r##"{ "diagram": "framework",
                  "columns": [ { "title": "Service Support", "color": "#3498db", "connector": "solid" } ],
                  "foundation": { "title": "CMDB", "color": "#e67e22" } }"##,
        );
        let layout = layout::compute(&diagram, Viewport::new(1200.0, 800.0));
        assert_eq!(layout.hotspots().len(), 1);

        let scene = scene(&diagram, &layout, &HoverState::default(), &StyleConfig::default());
        assert!(svg(&scene).contains(">Service Support<"));
        assert!(!scene.layers().contains(&RenderLayer::Connector));
    }
}
