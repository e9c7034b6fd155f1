//! Stroke definitions for borders and lines.
//!
//! A [`StrokeDefinition`] carries color, width, and [`StrokeStyle`]. Borders
//! apply it through [`apply_stroke!`](crate::apply_stroke!). Dashed lines are
//! not expressed as an SVG dasharray: [`Line`](crate::draw::Line) subdivides
//! them into explicit dash segments so the geometry is testable.

use crate::color::Color;

/// Line pattern of a stroke.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum StrokeStyle {
    /// Continuous line
    #[default]
    Solid,
    /// Alternating dashes and gaps measured along the line, in pixels
    Dashed { dash: f32, gap: f32 },
}

impl StrokeStyle {
    /// The 5 px dash / 5 px gap pattern used for dashed connectors.
    pub fn dashed() -> Self {
        Self::Dashed {
            dash: 5.0,
            gap: 5.0,
        }
    }
}

/// A stroke definition for rendering lines and borders.
///
/// ```
/// use placard_core::{color::Color, draw::{StrokeDefinition, StrokeStyle}};
///
/// let border = StrokeDefinition::solid(Color::from_rgb8(0x34, 0x49, 0x5e), 2.0);
/// let connector = StrokeDefinition::dashed(Color::from_rgb8(0x7f, 0x8c, 0x8d), 2.0);
/// assert_eq!(border.style(), StrokeStyle::Solid);
/// assert_eq!(connector.style(), StrokeStyle::dashed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a solid stroke.
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Creates a 5/5 dashed stroke.
    pub fn dashed(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::dashed(),
        }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// Returns a copy with a different width.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::solid(Color::default(), 1.0)
    }
}

/// Apply stroke color, opacity, and width to an SVG element.
///
/// ```
/// use placard_core::{color::Color, draw::StrokeDefinition};
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::solid(Color::new("black").unwrap(), 2.0);
/// let rect = svg_element::Rectangle::new().set("width", 100).set("height", 50);
/// let rect = placard_core::apply_stroke!(rect, &stroke);
/// assert!(rect.to_string().contains("stroke-width=\"2\""));
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.style(), StrokeStyle::Solid);
    }

    #[test]
    fn test_stroke_dashed_pattern() {
        let stroke = StrokeDefinition::dashed(Color::default(), 2.0);
        assert_eq!(
            stroke.style(),
            StrokeStyle::Dashed {
                dash: 5.0,
                gap: 5.0
            }
        );
    }

    #[test]
    fn test_stroke_with_width_keeps_color() {
        let color = Color::from_rgb8(0x2c, 0x3e, 0x50);
        let stroke = StrokeDefinition::solid(color, 2.0).with_width(4.0);
        assert_eq!(stroke.width(), 4.0);
        assert_eq!(stroke.color(), color);
    }
}
