//! Layer-based rendering for SVG output.
//!
//! Drawables push SVG nodes into a [`LayeredOutput`] tagged with a
//! [`RenderLayer`]. Rendering sorts nodes by layer with a stable sort, so
//! nodes keep their insertion order inside a layer.
//!
//! # Example
//!
//! ```
//! # use placard_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::Rectangle;
//! let mut output = LayeredOutput::new();
//!
//! output.add_to_layer(RenderLayer::Popover, Box::new(Rectangle::new()));
//! output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));
//!
//! assert_eq!(output.layers(), vec![RenderLayer::Background, RenderLayer::Popover]);
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers, bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Canvas fill
    Background,
    /// Diagram title text
    Title,
    /// Banners, outlines, side panels, column headers
    Decoration,
    /// Interactive shapes and their labels
    Shape,
    /// Arrows and connecting lines
    Connector,
    /// Numbering badges
    Badge,
    /// Hover detail box, always on top
    Popover,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Title => "title",
            Self::Decoration => "decoration",
            Self::Shape => "shape",
            Self::Connector => "connector",
            Self::Badge => "badge",
            Self::Popover => "popover",
        }
    }
}

/// SVG nodes grouped by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Appends all nodes of another output, keeping their order.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of nodes across all layers.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The distinct non-empty layers, in rendering order.
    pub fn layers(&self) -> Vec<RenderLayer> {
        let mut layers: Vec<RenderLayer> = self.items.iter().map(|(layer, _)| *layer).collect();
        layers.sort();
        layers.dedup();
        layers
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes a `<g data-layer="...">` element. Groups
    /// are emitted bottom to top.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable: insertion order is kept within a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use svg::node::element::{Circle, Rectangle};

    use super::*;

    #[test]
    fn test_layered_output_new_is_empty() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert_eq!(output.len(), 0);
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layered_output_merge_same_layer() {
        let mut output1 = LayeredOutput::new();
        output1.add_to_layer(RenderLayer::Shape, Box::new(Rectangle::new()));

        let mut output2 = LayeredOutput::new();
        output2.add_to_layer(RenderLayer::Shape, Box::new(Rectangle::new()));

        output1.merge(output2);
        assert_eq!(output1.len(), 2);

        let nodes = output1.render();
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn test_layered_output_render_sorts_layers() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Popover, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Connector, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));

        let rendered: Vec<String> = output.render().iter().map(|n| n.to_string()).collect();
        assert_eq!(rendered.len(), 3);
        assert!(rendered[0].contains("data-layer=\"background\""));
        assert!(rendered[1].contains("data-layer=\"connector\""));
        assert!(rendered[2].contains("data-layer=\"popover\""));
    }

    #[test]
    fn test_layered_output_keeps_insertion_order_within_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Shape, Box::new(Rectangle::new().set("id", "first")));
        output.add_to_layer(RenderLayer::Badge, Box::new(Circle::new()));
        output.add_to_layer(RenderLayer::Shape, Box::new(Rectangle::new().set("id", "second")));

        let rendered = output.render()[0].to_string();
        let first = rendered.find("first").unwrap();
        let second = rendered.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_layer_order() {
        assert!(RenderLayer::Background < RenderLayer::Title);
        assert!(RenderLayer::Title < RenderLayer::Decoration);
        assert!(RenderLayer::Decoration < RenderLayer::Shape);
        assert!(RenderLayer::Shape < RenderLayer::Connector);
        assert!(RenderLayer::Connector < RenderLayer::Badge);
        assert!(RenderLayer::Badge < RenderLayer::Popover);
    }
}
