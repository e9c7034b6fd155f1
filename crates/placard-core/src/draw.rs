//! Drawable primitives for diagram rendering.
//!
//! Every visual element implements [`Drawable`], which renders it into a
//! [`LayeredOutput`]. Callers collect drawables in any order; the layer each
//! primitive writes to decides the final z-order.

mod badge;
mod layer;
mod line;
mod shape;
mod stroke;
mod text;
mod triangle;

pub use badge::Badge;
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use line::{Line, dash_segments};
pub use shape::{BoxShape, CornerRadii};
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{
    Text, TextAnchor, TextBaseline, TextDefinition, split_after_words, split_in_half, wrap_to_width,
};
pub use triangle::{ArrowDirection, Triangle};

use crate::geometry::Bounds;

/// A visual element with absolute geometry.
pub trait Drawable: std::fmt::Debug {
    /// Renders this element into layered SVG output.
    fn render_to_layers(&self) -> LayeredOutput;

    /// The axis-aligned box this element covers.
    fn bounds(&self) -> Bounds;
}
