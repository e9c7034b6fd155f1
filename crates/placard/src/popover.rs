//! Detail box shown next to the pointer for the hovered element.

use std::rc::Rc;

use placard_core::{
    color::Color,
    draw::{
        BoxShape, Drawable, LayeredOutput, RenderLayer, StrokeDefinition, Text, TextAnchor,
        TextBaseline, TextDefinition, wrap_to_width,
    },
    geometry::{Bounds, Point, Size},
};

use crate::schema::DiagramKind;

/// Minimum distance kept between the box and the viewport edges.
const EDGE_PADDING: f32 = 20.0;
const FLIP_GAP: f32 = 15.0;
const TEXT_INSET: f32 = 15.0;
const DESCRIPTION_LINE_HEIGHT: f32 = 15.0;
const CORNER_RADIUS: f32 = 8.0;

/// Places a box of `box_size` near `pointer`.
///
/// The box starts at `pointer + offset`. It flips to the pointer's left when
/// its right edge would pass `W - 20`, then its top is clamped to 20, then its
/// bottom is clamped to `H - 20`. The bottom clamp runs last and wins when the
/// viewport is too short for both.
///
/// ```
/// # use placard::popover::position;
/// # use placard_core::geometry::{Point, Size};
/// let at = position(
///     Point::new(750.0, 10.0),
///     Size::new(800.0, 600.0),
///     Size::new(400.0, 120.0),
///     Point::new(15.0, -60.0),
/// );
/// assert_eq!(at, Point::new(335.0, 20.0));
/// ```
pub fn position(pointer: Point, viewport: Size, box_size: Size, offset: Point) -> Point {
    let mut x = pointer.x() + offset.x();
    let mut y = pointer.y() + offset.y();

    if x + box_size.width() > viewport.width() - EDGE_PADDING {
        x = pointer.x() - box_size.width() - FLIP_GAP;
    }
    if y < EDGE_PADDING {
        y = EDGE_PADDING;
    }
    if y + box_size.height() > viewport.height() - EDGE_PADDING {
        y = viewport.height() - box_size.height() - EDGE_PADDING;
    }

    Point::new(x, y)
}

/// Per-diagram popover dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopoverStyle {
    size: Size,
    offset: Point,
    description_offset: f32,
    /// Height below the description that stays empty
    reserved: f32,
    fill_alpha: u8,
}

impl PopoverStyle {
    /// 400×120, 60 px above the pointer.
    pub fn framework() -> Self {
        Self {
            size: Size::new(400.0, 120.0),
            offset: Point::new(15.0, -60.0),
            description_offset: 45.0,
            reserved: 55.0,
            fill_alpha: 250,
        }
    }

    /// 350×100, 50 px above the pointer.
    pub fn funnel() -> Self {
        Self {
            size: Size::new(350.0, 100.0),
            offset: Point::new(15.0, -50.0),
            description_offset: 40.0,
            reserved: 50.0,
            fill_alpha: 240,
        }
    }

    pub fn for_kind(kind: DiagramKind) -> Self {
        match kind {
            DiagramKind::Framework => Self::framework(),
            DiagramKind::Funnel => Self::funnel(),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    /// How many description lines fit in the box.
    pub fn max_description_lines(&self) -> usize {
        ((self.size.height() - self.reserved) / DESCRIPTION_LINE_HEIGHT)
            .floor()
            .max(0.0) as usize
    }
}

/// The popover drawable: a translucent rounded box, a bold title, and the
/// wrapped description.
#[derive(Debug, Clone)]
pub struct Popover {
    frame: BoxShape,
    title: Text,
    description: Text,
}

impl Popover {
    pub fn new(
        style: &PopoverStyle,
        pointer: Point,
        viewport: Size,
        title: &str,
        description: &str,
        font_family: &str,
    ) -> Self {
        let top_left = position(pointer, viewport, style.size, style.offset);
        let bounds = Bounds::new_from_top_left(top_left, style.size);

        let frame = BoxShape::new(bounds)
            .with_fill(Color::from_rgba8(255, 255, 255, style.fill_alpha))
            .with_stroke(StrokeDefinition::solid(Color::from_rgb8(0x2c, 0x3e, 0x50), 2.0))
            .with_rounded(CORNER_RADIUS)
            .with_layer(RenderLayer::Popover);

        let mut title_def = TextDefinition::new();
        title_def.set_font_family(font_family);
        title_def.set_font_size(16);
        title_def.set_bold(true);
        title_def.set_color(Some(Color::from_rgb8(0x2c, 0x3e, 0x50)));
        title_def.set_anchor(TextAnchor::Start);
        title_def.set_baseline(TextBaseline::Top);
        let title = Text::new(
            Rc::new(title_def),
            title,
            Point::new(top_left.x() + TEXT_INSET, top_left.y() + TEXT_INSET),
        )
        .with_layer(RenderLayer::Popover);

        let mut description_def = TextDefinition::new();
        description_def.set_font_family(font_family);
        description_def.set_font_size(12);
        description_def.set_color(Some(Color::from_rgb8(0x34, 0x49, 0x5e)));
        description_def.set_anchor(TextAnchor::Start);
        description_def.set_baseline(TextBaseline::Top);
        description_def.set_line_height(DESCRIPTION_LINE_HEIGHT);

        let mut lines = wrap_to_width(
            description,
            &description_def,
            style.size.width() - 2.0 * TEXT_INSET,
        );
        lines.truncate(style.max_description_lines());

        let description = Text::with_lines(
            Rc::new(description_def),
            lines,
            Point::new(
                top_left.x() + TEXT_INSET,
                top_left.y() + style.description_offset,
            ),
        )
        .with_layer(RenderLayer::Popover);

        Self {
            frame,
            title,
            description,
        }
    }

    pub fn description_lines(&self) -> &[String] {
        self.description.lines()
    }
}

impl Drawable for Popover {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = self.frame.render_to_layers();
        output.merge(self.title.render_to_layers());
        output.merge(self.description.render_to_layers());
        output
    }

    fn bounds(&self) -> Bounds {
        self.frame.bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_and_clamp_top() {
        let style = PopoverStyle::framework();
        let at = position(
            Point::new(750.0, 10.0),
            Size::new(800.0, 600.0),
            style.size(),
            style.offset(),
        );
        assert_eq!(at, Point::new(335.0, 20.0));
    }

    #[test]
    fn test_default_anchor() {
        let style = PopoverStyle::funnel();
        let at = position(
            Point::new(100.0, 300.0),
            Size::new(1200.0, 700.0),
            style.size(),
            style.offset(),
        );
        assert_eq!(at, Point::new(115.0, 250.0));
    }

    #[test]
    fn test_clamp_bottom() {
        let style = PopoverStyle::framework();
        let at = position(
            Point::new(100.0, 790.0),
            Size::new(1200.0, 800.0),
            style.size(),
            style.offset(),
        );
        assert_eq!(at.y(), 800.0 - 120.0 - 20.0);
    }

    #[test]
    fn test_line_budget() {
        assert_eq!(PopoverStyle::framework().max_description_lines(), 4);
        assert_eq!(PopoverStyle::funnel().max_description_lines(), 3);
    }

    #[test]
    fn test_popover_on_top_layer() {
        let popover = Popover::new(
            &PopoverStyle::framework(),
            Point::new(300.0, 300.0),
            Size::new(1200.0, 800.0),
            "Incident Management",
            "Restores normal service operation as quickly as possible.",
            "Arial",
        );
        assert_eq!(popover.render_to_layers().layers(), vec![RenderLayer::Popover]);
        let bounds = popover.bounds();
        assert_eq!((bounds.min_x(), bounds.min_y()), (315.0, 240.0));
        assert!(!popover.description_lines().is_empty());
    }

    #[test]
    fn test_long_description_is_truncated() {
        let description = "word ".repeat(400);
        let popover = Popover::new(
            &PopoverStyle::funnel(),
            Point::new(300.0, 300.0),
            Size::new(1200.0, 700.0),
            "Stage",
            &description,
            "Arial",
        );
        assert_eq!(popover.description_lines().len(), 3);
    }
}
