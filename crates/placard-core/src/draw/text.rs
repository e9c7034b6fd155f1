//! Text definitions, measurement, and line breaking.
//!
//! - [`TextDefinition`] - Reusable text style (font, size, weight, alignment)
//! - [`Text`] - One or more lines of text placed at an anchor point
//! - [`wrap_to_width`], [`split_after_words`], [`split_in_half`] - Line breaking
//!
//! Measurement goes through a process-wide font system, created on first use.
//!
//! ```
//! # use std::rc::Rc;
//! # use placard_core::draw::{Text, TextDefinition};
//! # use placard_core::geometry::Point;
//! let mut style = TextDefinition::new();
//! style.set_font_size(14);
//!
//! let text = Text::new(Rc::new(style), "Incident Management", Point::new(300.0, 240.0));
//! assert!(text.calculate_size().width() > 0.0);
//! ```

use std::{
    rc::Rc,
    sync::{Mutex, OnceLock, PoisonError},
};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Style, Weight};
use log::info;
use svg::{self, node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Bounds, Point, Size},
};

/// Horizontal alignment relative to the anchor point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text starts at the anchor
    Start,
    /// Text is centered on the anchor
    #[default]
    Middle,
}

impl TextAnchor {
    fn svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
        }
    }
}

/// Vertical alignment relative to the anchor point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    /// The first line's top edge sits at the anchor
    Top,
    /// The block of lines is centered on the anchor
    #[default]
    Middle,
}

/// Visual style for text.
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"Arial"` |
/// | Font size | `14` |
/// | Color | `None` (SVG default, black) |
/// | Bold / italic | `false` |
/// | Anchor | [`TextAnchor::Middle`] |
/// | Baseline | [`TextBaseline::Middle`] |
/// | Line height | `font_size + 2` |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    color: Option<Color>,
    bold: bool,
    italic: bool,
    anchor: TextAnchor,
    baseline: TextBaseline,
    line_height: Option<f32>,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in pixels.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family (e.g., "Arial", "sans-serif").
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the fill color. `None` leaves the SVG default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }

    pub fn set_italic(&mut self, italic: bool) {
        self.italic = italic;
    }

    pub fn set_anchor(&mut self, anchor: TextAnchor) {
        self.anchor = anchor;
    }

    pub fn set_baseline(&mut self, baseline: TextBaseline) {
        self.baseline = baseline;
    }

    /// Sets the distance between consecutive line anchors.
    pub fn set_line_height(&mut self, line_height: f32) {
        self.line_height = Some(line_height);
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    pub fn baseline(&self) -> TextBaseline {
        self.baseline
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
            .unwrap_or_else(|| f32::from(self.font_size) + 2.0)
    }

    /// Measures a single run of text in this style.
    pub fn measure(&self, text: &str) -> Size {
        TEXT_MANAGER
            .get_or_init(TextManager::new)
            .calculate_text_size(text, self)
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 14,
            color: None,
            bold: false,
            italic: false,
            anchor: TextAnchor::default(),
            baseline: TextBaseline::default(),
            line_height: None,
        }
    }
}

/// Lines of text placed at an anchor point.
///
/// Lines are spaced by the definition's line height. With
/// [`TextBaseline::Middle`] the block is centered vertically on the anchor, so
/// two lines with a 16 px line height land at `y - 8` and `y + 8`.
#[derive(Debug, Clone)]
pub struct Text {
    definition: Rc<TextDefinition>,
    lines: Vec<String>,
    position: Point,
    layer: RenderLayer,
}

impl Text {
    /// A single-line text on the shape layer. Embedded newlines start new lines.
    pub fn new(definition: Rc<TextDefinition>, content: &str, position: Point) -> Self {
        Self::with_lines(
            definition,
            content.lines().map(str::to_string).collect(),
            position,
        )
    }

    /// Text made of pre-broken lines.
    pub fn with_lines(definition: Rc<TextDefinition>, lines: Vec<String>, position: Point) -> Self {
        Self {
            definition,
            lines,
            position,
            layer: RenderLayer::Shape,
        }
    }

    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Widest line by the measured width, times the number of lines by line height.
    pub fn calculate_size(&self) -> Size {
        let width = self
            .lines
            .iter()
            .map(|line| self.definition.measure(line).width())
            .fold(0.0, f32::max);
        Size::new(width, self.lines.len() as f32 * self.definition.line_height())
    }

    /// Y coordinate of each line's anchor.
    pub fn line_positions(&self) -> Vec<f32> {
        let line_height = self.definition.line_height();
        let first = match self.definition.baseline() {
            TextBaseline::Top => self.position.y(),
            TextBaseline::Middle => {
                self.position.y() - (self.lines.len().saturating_sub(1) as f32) * line_height / 2.0
            }
        };
        (0..self.lines.len())
            .map(|i| first + i as f32 * line_height)
            .collect()
    }
}

impl Drawable for Text {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        if self.lines.is_empty() {
            return output;
        }

        let definition = &self.definition;
        let dominant_baseline = match definition.baseline() {
            TextBaseline::Top => "hanging",
            TextBaseline::Middle => "central",
        };

        let mut rendered_text = svg_element::Text::new("")
            .set("x", self.position.x())
            .set("y", self.position.y())
            .set("text-anchor", definition.anchor().svg_value())
            .set("dominant-baseline", dominant_baseline)
            .set("font-family", definition.font_family())
            .set("font-size", definition.font_size());

        if definition.bold {
            rendered_text = rendered_text.set("font-weight", "bold");
        }
        if definition.italic {
            rendered_text = rendered_text.set("font-style", "italic");
        }
        if let Some(color) = definition.color() {
            rendered_text = rendered_text
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        for (line, y) in self.lines.iter().zip(self.line_positions()) {
            let tspan = svg_element::TSpan::new("")
                .set("x", self.position.x())
                .set("y", y)
                .add(SvgText::new(line.as_str()));
            rendered_text = rendered_text.add(tspan);
        }

        output.add_to_layer(self.layer, Box::new(rendered_text));
        output
    }

    fn bounds(&self) -> Bounds {
        let size = self.calculate_size();
        let min_x = match self.definition.anchor() {
            TextAnchor::Start => self.position.x(),
            TextAnchor::Middle => self.position.x() - size.width() / 2.0,
        };
        let min_y = match self.definition.baseline() {
            TextBaseline::Top => self.position.y(),
            TextBaseline::Middle => self.position.y() - size.height() / 2.0,
        };
        Bounds::new_from_top_left(Point::new(min_x, min_y), size)
    }
}

/// Breaks `text` into lines no wider than `max_width`, greedily by word.
///
/// A word wider than `max_width` on its own still gets its own line.
/// Whitespace runs collapse to a single space.
pub fn wrap_to_width(text: &str, definition: &TextDefinition, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = format!("{current} {word}");
        if definition.measure(&candidate).width() <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Splits a label after its first `words` words when it has more than that.
///
/// ```
/// # use placard_core::draw::split_after_words;
/// assert_eq!(
///     split_after_words("Configuration Management Database", 2),
///     vec!["Configuration Management", "Database"],
/// );
/// assert_eq!(split_after_words("Incident Management", 2), vec!["Incident Management"]);
/// ```
pub fn split_after_words(label: &str, words: usize) -> Vec<String> {
    let parts: Vec<&str> = label.split_whitespace().collect();
    if parts.len() <= words {
        return vec![parts.join(" ")];
    }
    vec![parts[..words].join(" "), parts[words..].join(" ")]
}

/// Splits a title into two lines, the first taking `ceil(n / 2)` words.
///
/// A one-word title yields a single line.
pub fn split_in_half(title: &str) -> Vec<String> {
    let parts: Vec<&str> = title.split_whitespace().collect();
    let mid = parts.len().div_ceil(2);
    [parts[..mid].join(" "), parts[mid..].join(" ")]
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect()
}

/// Text measurement backed by a shared cosmic-text `FontSystem`.
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    /// Measures `text` with real font metrics and shaping.
    ///
    /// Falls back to an estimate from the character count when no font could
    /// shape the text.
    fn calculate_text_size(&self, text: &str, text_def: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let font_size_px = f32::from(text_def.font_size());
        let metrics = Metrics::new(font_size_px, font_size_px * 1.15);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let mut attrs = Attrs::new().family(Family::Name(text_def.font_family()));
        if text_def.bold {
            attrs = attrs.weight(Weight::BOLD);
        }
        if text_def.italic {
            attrs = attrs.style(Style::Italic);
        }

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;
        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
            total_height += metrics.line_height;
        }

        if max_width <= 0.0 {
            max_width = text.chars().count() as f32 * font_size_px * 0.55;
            total_height = total_height.max(metrics.line_height);
        }

        Size::new(max_width, total_height)
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();
