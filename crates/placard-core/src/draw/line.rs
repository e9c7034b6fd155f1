//! Straight line segments, solid or dashed.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition, StrokeStyle},
    geometry::{Bounds, Point, Size},
};

/// Splits the segment `from -> to` into dashes by arc length.
///
/// Walks the segment alternating `dash` drawn and `gap` skipped, starting with
/// a dash. The final dash is clipped at `to`. Returns the drawn pieces only.
/// A zero-length segment, or a non-positive dash or gap, yields no dashes.
///
/// ```
/// # use placard_core::{draw::dash_segments, geometry::Point};
/// let dashes = dash_segments(Point::new(0.0, 0.0), Point::new(0.0, 22.0), 5.0, 5.0);
/// assert_eq!(dashes.len(), 3);
/// assert_eq!(dashes[2], (Point::new(0.0, 20.0), Point::new(0.0, 22.0)));
/// ```
pub fn dash_segments(from: Point, to: Point, dash: f32, gap: f32) -> Vec<(Point, Point)> {
    let total = from.distance(to);
    if total <= 0.0 || dash <= 0.0 || gap <= 0.0 {
        return Vec::new();
    }

    let direction = Point::new((to.x() - from.x()) / total, (to.y() - from.y()) / total);
    let at = |length: f32| {
        Point::new(
            from.x() + direction.x() * length,
            from.y() + direction.y() * length,
        )
    };

    let mut segments = Vec::new();
    let mut current = 0.0;
    let mut drawing = true;

    while current < total {
        let step = if drawing { dash } else { gap };
        let next = (current + step).min(total);

        if drawing {
            segments.push((at(current), at(next)));
        }

        current = next;
        drawing = !drawing;
    }

    segments
}

/// A straight line between two points.
#[derive(Debug, Clone)]
pub struct Line {
    from: Point,
    to: Point,
    stroke: StrokeDefinition,
    layer: RenderLayer,
}

impl Line {
    /// A line on the connector layer.
    pub fn new(from: Point, to: Point, stroke: StrokeDefinition) -> Self {
        Self {
            from,
            to,
            stroke,
            layer: RenderLayer::Connector,
        }
    }

    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    pub fn from(&self) -> Point {
        self.from
    }

    pub fn to(&self) -> Point {
        self.to
    }

    fn svg_line(&self, from: Point, to: Point) -> svg_element::Line {
        let line = svg_element::Line::new()
            .set("x1", from.x())
            .set("y1", from.y())
            .set("x2", to.x())
            .set("y2", to.y());
        apply_stroke!(line, &self.stroke)
    }
}

impl Drawable for Line {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        match self.stroke.style() {
            StrokeStyle::Solid => {
                output.add_to_layer(self.layer, Box::new(self.svg_line(self.from, self.to)));
            }
            StrokeStyle::Dashed { dash, gap } => {
                let group = dash_segments(self.from, self.to, dash, gap)
                    .into_iter()
                    .fold(svg_element::Group::new(), |group, (start, end)| {
                        group.add(self.svg_line(start, end))
                    });
                output.add_to_layer(self.layer, Box::new(group));
            }
        }

        output
    }

    fn bounds(&self) -> Bounds {
        let top_left = Point::new(self.from.x().min(self.to.x()), self.from.y().min(self.to.y()));
        let size = Size::new(
            (self.to.x() - self.from.x()).abs(),
            (self.to.y() - self.from.y()).abs(),
        );
        Bounds::new_from_top_left(top_left, size)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::color::Color;

    #[test]
    fn test_dash_segments_exact_multiple() {
        let dashes = dash_segments(Point::new(0.0, 0.0), Point::new(20.0, 0.0), 5.0, 5.0);
        assert_eq!(
            dashes,
            vec![
                (Point::new(0.0, 0.0), Point::new(5.0, 0.0)),
                (Point::new(10.0, 0.0), Point::new(15.0, 0.0)),
            ]
        );
    }

    #[test]
    fn test_dash_segments_clips_last_dash() {
        let dashes = dash_segments(Point::new(0.0, 0.0), Point::new(0.0, 12.0), 5.0, 5.0);
        assert_eq!(dashes.len(), 2);
        assert_eq!(dashes[1], (Point::new(0.0, 10.0), Point::new(0.0, 12.0)));
    }

    #[test]
    fn test_dash_segments_upward() {
        let dashes = dash_segments(Point::new(0.0, 100.0), Point::new(0.0, 80.0), 5.0, 5.0);
        assert_eq!(dashes.len(), 2);
        assert_approx_eq!(f32, dashes[0].0.y(), 100.0);
        assert_approx_eq!(f32, dashes[0].1.y(), 95.0);
        assert_approx_eq!(f32, dashes[1].1.y(), 85.0);
    }

    #[test]
    fn test_dash_segments_degenerate() {
        let p = Point::new(3.0, 3.0);
        assert!(dash_segments(p, p, 5.0, 5.0).is_empty());
        assert!(dash_segments(p, Point::new(9.0, 3.0), 0.0, 5.0).is_empty());
        assert!(dash_segments(p, Point::new(9.0, 3.0), 5.0, 0.0).is_empty());
    }

    #[test]
    fn test_solid_line_renders_single_element() {
        let line = Line::new(
            Point::new(10.0, 0.0),
            Point::new(10.0, 50.0),
            StrokeDefinition::solid(Color::default(), 2.0),
        );
        let rendered: String = line
            .render_to_layers()
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(rendered.matches("<line").count(), 1);
    }

    #[test]
    fn test_dashed_line_renders_each_dash() {
        let line = Line::new(
            Point::new(10.0, 0.0),
            Point::new(10.0, 50.0),
            StrokeDefinition::dashed(Color::default(), 2.0),
        );
        let rendered: String = line
            .render_to_layers()
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(rendered.matches("<line").count(), 5);
    }

    #[test]
    fn test_line_bounds_normalized() {
        let line = Line::new(
            Point::new(30.0, 90.0),
            Point::new(10.0, 40.0),
            StrokeDefinition::default(),
        );
        let bounds = line.bounds();
        assert_eq!(bounds.min_x(), 10.0);
        assert_eq!(bounds.min_y(), 40.0);
        assert_eq!(bounds.max_x(), 30.0);
        assert_eq!(bounds.max_y(), 90.0);
    }
}
