//! Numbered circular badges.

use std::rc::Rc;

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, Text, TextDefinition},
    geometry::{Bounds, Point, Size},
};

/// A filled circle with a centered number.
#[derive(Debug, Clone)]
pub struct Badge {
    center: Point,
    diameter: f32,
    fill: Color,
    label: Text,
}

impl Badge {
    /// A badge showing `number`, drawn with `text` for the digit.
    pub fn new(center: Point, diameter: f32, number: usize, fill: Color, text: Rc<TextDefinition>) -> Self {
        let label = Text::new(text, &number.to_string(), center).with_layer(RenderLayer::Badge);
        Self {
            center,
            diameter,
            fill,
            label,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn label(&self) -> &str {
        self.label.lines().first().map_or("", String::as_str)
    }
}

impl Drawable for Badge {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let circle = svg_element::Circle::new()
            .set("cx", self.center.x())
            .set("cy", self.center.y())
            .set("r", self.diameter / 2.0)
            .set("fill", self.fill.to_string())
            .set("fill-opacity", self.fill.alpha());
        output.add_to_layer(RenderLayer::Badge, Box::new(circle));
        output.merge(self.label.render_to_layers());

        output
    }

    fn bounds(&self) -> Bounds {
        Bounds::new_from_center(self.center, Size::new(self.diameter, self.diameter))
    }
}
