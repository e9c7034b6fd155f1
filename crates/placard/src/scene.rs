//! An ordered list of drawables for one frame.
//!
//! Drawables are pushed in paint order. Each one writes into its own
//! [`RenderLayer`](placard_core::draw::RenderLayer); the layer decides the
//! final z-order and push order only breaks ties inside a layer.

use placard_core::{
    color::Color,
    draw::{BoxShape, Drawable, LayeredOutput, RenderLayer},
    geometry::{Bounds, Point, Size},
};

#[derive(Debug)]
pub struct Scene {
    size: Size,
    background: Color,
    drawables: Vec<Box<dyn Drawable>>,
}

impl Scene {
    /// A scene whose first drawable is a background rectangle covering `size`.
    pub fn new(size: Size, background: Color) -> Self {
        let backdrop = BoxShape::new(Bounds::new_from_top_left(Point::default(), size))
            .with_fill(background)
            .with_layer(RenderLayer::Background);
        Self {
            size,
            background,
            drawables: vec![Box::new(backdrop)],
        }
    }

    pub fn push(&mut self, drawable: impl Drawable + 'static) {
        self.drawables.push(Box::new(drawable));
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    pub fn drawables(&self) -> impl Iterator<Item = &dyn Drawable> {
        self.drawables.iter().map(AsRef::as_ref)
    }

    /// Renders every drawable, in push order.
    pub fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        for drawable in &self.drawables {
            output.merge(drawable.render_to_layers());
        }
        output
    }

    /// Non-empty layers in paint order.
    pub fn layers(&self) -> Vec<RenderLayer> {
        self.render_to_layers().layers()
    }
}
