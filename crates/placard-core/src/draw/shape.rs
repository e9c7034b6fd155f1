//! Filled, optionally stroked boxes with rounded corners.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::Bounds,
};

/// Per-corner radii, clockwise from top-left.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    /// Same radius on every corner.
    pub fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Rounded top corners, square bottom corners.
    pub fn top(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: 0.0,
            bottom_left: 0.0,
        }
    }

    fn uniform_value(&self) -> Option<f32> {
        let r = self.top_left;
        (self.top_right == r && self.bottom_right == r && self.bottom_left == r).then_some(r)
    }
}

/// An axis-aligned box.
///
/// Renders as a `<rect>` when all corners share one radius, and as a `<path>`
/// otherwise.
///
/// ```
/// # use placard_core::{color::Color, draw::{BoxShape, Drawable, RenderLayer}};
/// # use placard_core::geometry::{Bounds, Point, Size};
/// let bounds = Bounds::new_from_top_left(Point::new(10.0, 10.0), Size::new(100.0, 60.0));
/// let shape = BoxShape::new(bounds)
///     .with_fill(Color::from_rgb8(0x34, 0x98, 0xdb))
///     .with_rounded(8.0);
/// assert_eq!(shape.render_to_layers().layers(), vec![RenderLayer::Shape]);
/// ```
#[derive(Debug, Clone)]
pub struct BoxShape {
    bounds: Bounds,
    fill: Option<Color>,
    stroke: Option<StrokeDefinition>,
    radii: CornerRadii,
    layer: RenderLayer,
}

impl BoxShape {
    /// A box with no fill, no stroke, square corners, on the shape layer.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            fill: None,
            stroke: None,
            radii: CornerRadii::default(),
            layer: RenderLayer::Shape,
        }
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn with_rounded(mut self, radius: f32) -> Self {
        self.radii = CornerRadii::uniform(radius);
        self
    }

    pub fn with_radii(mut self, radii: CornerRadii) -> Self {
        self.radii = radii;
        self
    }

    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    /// Returns the stroke, if any.
    pub fn stroke(&self) -> Option<&StrokeDefinition> {
        self.stroke.as_ref()
    }

    /// Returns the fill color, if any.
    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    fn path_data(&self) -> String {
        let b = self.bounds;
        let CornerRadii {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        } = self.radii;
        format!(
            "M {} {} L {} {} Q {} {} {} {} L {} {} Q {} {} {} {} L {} {} Q {} {} {} {} L {} {} Q {} {} {} {} Z",
            b.min_x() + top_left,
            b.min_y(),
            b.max_x() - top_right,
            b.min_y(),
            b.max_x(),
            b.min_y(),
            b.max_x(),
            b.min_y() + top_right,
            b.max_x(),
            b.max_y() - bottom_right,
            b.max_x(),
            b.max_y(),
            b.max_x() - bottom_right,
            b.max_y(),
            b.min_x() + bottom_left,
            b.max_y(),
            b.min_x(),
            b.max_y(),
            b.min_x(),
            b.max_y() - bottom_left,
            b.min_x(),
            b.min_y() + top_left,
            b.min_x(),
            b.min_y(),
            b.min_x() + top_left,
            b.min_y(),
        )
    }
}

impl Drawable for BoxShape {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let fill = self
            .fill
            .map_or_else(|| "none".to_string(), |color| color.to_string());
        let fill_opacity = self.fill.map_or(1.0, |color| color.alpha());

        let node: Box<dyn svg::Node> = match self.radii.uniform_value() {
            Some(radius) => {
                let mut rect = svg_element::Rectangle::new()
                    .set("x", self.bounds.min_x())
                    .set("y", self.bounds.min_y())
                    .set("width", self.bounds.width())
                    .set("height", self.bounds.height())
                    .set("rx", radius)
                    .set("fill", fill)
                    .set("fill-opacity", fill_opacity);
                if let Some(stroke) = &self.stroke {
                    rect = apply_stroke!(rect, stroke);
                }
                Box::new(rect)
            }
            None => {
                let mut path = svg_element::Path::new()
                    .set("d", self.path_data())
                    .set("fill", fill)
                    .set("fill-opacity", fill_opacity);
                if let Some(stroke) = &self.stroke {
                    path = apply_stroke!(path, stroke);
                }
                Box::new(path)
            }
        };

        output.add_to_layer(self.layer, node);
        output
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Size};

    fn sample_bounds() -> Bounds {
        Bounds::new_from_top_left(Point::new(40.0, 60.0), Size::new(1120.0, 60.0))
    }

    #[test]
    fn test_uniform_radius_renders_rect() {
        let shape = BoxShape::new(sample_bounds())
            .with_fill(Color::from_rgb8(0x34, 0x49, 0x5e))
            .with_stroke(StrokeDefinition::solid(Color::default(), 2.0))
            .with_rounded(8.0);

        let rendered: String = shape
            .render_to_layers()
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect();

        assert!(rendered.contains("<rect"));
        assert!(rendered.contains("rx=\"8\""));
        assert!(rendered.contains("stroke-width=\"2\""));
    }

    #[test]
    fn test_mixed_radii_render_path() {
        let shape = BoxShape::new(sample_bounds()).with_radii(CornerRadii::top(8.0));
        let rendered: String = shape
            .render_to_layers()
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect();

        assert!(rendered.contains("<path"));
        assert!(rendered.contains("fill=\"none\""));
    }

    #[test]
    fn test_layer_override() {
        let shape = BoxShape::new(sample_bounds()).with_layer(RenderLayer::Decoration);
        assert_eq!(
            shape.render_to_layers().layers(),
            vec![RenderLayer::Decoration]
        );
        assert_eq!(shape.bounds(), sample_bounds());
    }
}
