//! Filled triangles, used for arrowheads and flow markers.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Bounds, Point, Size},
};

/// Vertical direction an arrowhead points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Up,
    Down,
}

impl ArrowDirection {
    /// Direction from the sign of a vertical delta. Zero has no direction.
    pub fn from_vertical(dy: f32) -> Option<Self> {
        if dy < 0.0 {
            Some(Self::Up)
        } else if dy > 0.0 {
            Some(Self::Down)
        } else {
            None
        }
    }
}

/// A filled, unstroked triangle.
#[derive(Debug, Clone)]
pub struct Triangle {
    points: [Point; 3],
    fill: Color,
    layer: RenderLayer,
}

impl Triangle {
    /// A triangle on the connector layer.
    pub fn new(points: [Point; 3], fill: Color) -> Self {
        Self {
            points,
            fill,
            layer: RenderLayer::Connector,
        }
    }

    /// An isosceles arrowhead with its tip at `tip`.
    ///
    /// The base is `size` wide and sits `size` above the tip for
    /// [`ArrowDirection::Up`], below it for [`ArrowDirection::Down`].
    ///
    /// ```
    /// # use placard_core::{color::Color, draw::{ArrowDirection, Triangle}, geometry::Point};
    /// let head = Triangle::arrowhead(Point::new(100.0, 50.0), ArrowDirection::Up, 8.0, Color::default());
    /// assert_eq!(head.points()[1], Point::new(96.0, 42.0));
    /// ```
    pub fn arrowhead(tip: Point, direction: ArrowDirection, size: f32, fill: Color) -> Self {
        let base_y = match direction {
            ArrowDirection::Up => tip.y() - size,
            ArrowDirection::Down => tip.y() + size,
        };
        Self::new(
            [
                tip,
                Point::new(tip.x() - size / 2.0, base_y),
                Point::new(tip.x() + size / 2.0, base_y),
            ],
            fill,
        )
    }

    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    pub fn points(&self) -> &[Point; 3] {
        &self.points
    }
}

impl Drawable for Triangle {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let points = self
            .points
            .iter()
            .map(|p| format!("{},{}", p.x(), p.y()))
            .collect::<Vec<_>>()
            .join(" ");
        let polygon = svg_element::Polygon::new()
            .set("points", points)
            .set("fill", self.fill.to_string())
            .set("fill-opacity", self.fill.alpha())
            .set("stroke", "none");

        output.add_to_layer(self.layer, Box::new(polygon));
        output
    }

    fn bounds(&self) -> Bounds {
        let min_x = self.points.iter().map(|p| p.x()).fold(f32::INFINITY, f32::min);
        let min_y = self.points.iter().map(|p| p.y()).fold(f32::INFINITY, f32::min);
        let max_x = self.points.iter().map(|p| p.x()).fold(f32::NEG_INFINITY, f32::max);
        let max_y = self.points.iter().map(|p| p.y()).fold(f32::NEG_INFINITY, f32::max);
        Bounds::new_from_top_left(
            Point::new(min_x, min_y),
            Size::new(max_x - min_x, max_y - min_y),
        )
    }
}
