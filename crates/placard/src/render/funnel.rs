//! Funnel diagram: side panels, the tapered outline, numbered stages, and flow markers.

use std::rc::Rc;

use placard_core::{
    color::Color,
    draw::{
        Badge, BoxShape, Line, RenderLayer, StrokeDefinition, Text, TextAnchor, TextBaseline,
        Triangle, split_after_words, split_in_half,
    },
};

use super::{Painter, border_color, hover_border_color, muted_color};
use crate::{
    hover::HoverState,
    layout::{FunnelLayout, PANEL_TITLE_LINE_HEIGHT, PanelLayout, StageLayout},
    model::{Diagram, FunnelDiagram, PanelStyle},
    scene::Scene,
};

const BADGE_DIAMETER: f32 = 20.0;
const LABEL_WORDS: usize = 2;

pub(super) fn paint(
    scene: &mut Scene,
    painter: &Painter<'_>,
    diagram: &Diagram,
    model: &FunnelDiagram,
    layout: &FunnelLayout,
    hover: &HoverState,
) {
    let header = diagram.header();
    scene.push(
        Text::new(
            painter.top_aligned(28, header.title_color),
            &header.title,
            layout.title_anchor,
        )
        .with_layer(RenderLayer::Title),
    );

    if let (Some(panel), Some(panel_layout)) = (&model.left_panel, &layout.left_panel) {
        paint_panel(scene, painter, &panel.title, &panel.style, &panel.items, panel_layout);
        if let Some(button) = panel_layout.button {
            scene.push(
                BoxShape::new(button)
                    .with_fill(panel.button_color)
                    .with_rounded(5.0)
                    .with_layer(RenderLayer::Decoration),
            );
            scene.push(
                Text::new(
                    painter.definition(14, Color::from_rgb8(255, 255, 255)),
                    &panel.button_text,
                    button.center(),
                )
                .with_layer(RenderLayer::Decoration),
            );
        }
    }

    if let (Some(panel), Some(panel_layout)) = (&model.right_panel, &layout.right_panel) {
        paint_panel(scene, painter, &panel.title, &panel.style, &panel.stats, panel_layout);
        for (bar, color) in panel_layout.chart.iter().zip(&panel.chart_colors) {
            scene.push(
                BoxShape::new(*bar)
                    .with_fill(*color)
                    .with_layer(RenderLayer::Decoration),
            );
        }
    }

    for (top, bottom) in layout.outline {
        scene.push(
            Line::new(top, bottom, StrokeDefinition::solid(muted_color(), 2.0))
                .with_layer(RenderLayer::Decoration),
        );
    }

    let badge_text = painter.definition(14, Color::from_rgb8(255, 255, 255));
    for (index, stage) in layout.stages.iter().enumerate() {
        paint_stage(scene, painter, diagram, stage, hover);
        scene.push(Badge::new(
            stage.badge_center,
            BADGE_DIAMETER,
            index + 1,
            hover_border_color(),
            Rc::clone(&badge_text),
        ));
    }

    for marker in &layout.flow_markers {
        scene.push(Triangle::new(*marker, muted_color()));
    }
    if let (Some(marker), Some(panel)) = (layout.entry_marker, &model.left_panel) {
        scene.push(Triangle::new(marker, panel.style.border));
    }
    if let (Some(marker), Some(panel)) = (layout.exit_marker, &model.right_panel) {
        scene.push(Triangle::new(marker, panel.style.border));
    }
}

fn paint_panel(
    scene: &mut Scene,
    painter: &Painter<'_>,
    title: &str,
    style: &PanelStyle,
    rows: &[String],
    layout: &PanelLayout,
) {
    scene.push(
        BoxShape::new(layout.bounds)
            .with_fill(style.background)
            .with_stroke(StrokeDefinition::solid(style.border, 2.0))
            .with_rounded(10.0)
            .with_layer(RenderLayer::Decoration),
    );

    let mut title_definition = painter.text(16, style.title_color);
    title_definition.set_baseline(TextBaseline::Top);
    title_definition.set_line_height(PANEL_TITLE_LINE_HEIGHT);
    scene.push(
        Text::with_lines(
            Rc::new(title_definition),
            split_in_half(title),
            layout.title_anchor,
        )
        .with_layer(RenderLayer::Decoration),
    );

    let mut row_definition = painter.text(12, border_color());
    row_definition.set_anchor(TextAnchor::Start);
    row_definition.set_baseline(TextBaseline::Top);
    let row_definition = Rc::new(row_definition);
    for (row, anchor) in rows.iter().zip(&layout.rows) {
        scene.push(
            Text::new(Rc::clone(&row_definition), row, *anchor)
                .with_layer(RenderLayer::Decoration),
        );
    }
}

fn paint_stage(
    scene: &mut Scene,
    painter: &Painter<'_>,
    diagram: &Diagram,
    stage: &StageLayout,
    hover: &HoverState,
) {
    let Some(element) = diagram.element(stage.slot.id) else {
        return;
    };

    let stroke = if hover.is_hovered(stage.slot.id) {
        StrokeDefinition::solid(hover_border_color(), 4.0)
    } else {
        StrokeDefinition::solid(border_color(), 2.0)
    };
    scene.push(
        BoxShape::new(stage.slot.bounds)
            .with_fill(element.fill())
            .with_stroke(stroke)
            .with_rounded(8.0),
    );

    let mut label = painter.text(16, element.text_color().unwrap_or_default());
    label.set_line_height(18.0);
    scene.push(Text::with_lines(
        Rc::new(label),
        split_after_words(element.short_label(), LABEL_WORDS),
        stage.slot.bounds.center(),
    ));
}
