//! Configuration types for Placard rendering.
//!
//! All types implement [`serde::Deserialize`] so hosts can load them from
//! external sources; every field is optional and falls back to a default.
//!
//! - [`AppConfig`] - Top-level configuration combining canvas and style settings.
//! - [`CanvasConfig`] - Default viewport width and the fixed height of each diagram kind.
//! - [`StyleConfig`] - Visual fallbacks such as background color and font family.
//!
//! # Example
//!
//! ```
//! # use placard::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.canvas().width(), 1200.0);
//! assert!(config.style().background_color().is_none());
//! ```

use serde::Deserialize;

use placard_core::color::Color;

use crate::schema::DiagramKind;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    canvas: CanvasConfig,

    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(canvas: CanvasConfig, style: StyleConfig) -> Self {
        Self { canvas, style }
    }

    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Canvas dimensions.
///
/// Width follows the host; height is fixed per diagram kind.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    width: f32,
    framework_height: f32,
    funnel_height: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            framework_height: 800.0,
            funnel_height: 700.0,
        }
    }
}

impl CanvasConfig {
    pub fn new(width: f32, framework_height: f32, funnel_height: f32) -> Self {
        Self {
            width,
            framework_height,
            funnel_height,
        }
    }

    /// Default viewport width when the host does not report one.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Fixed canvas height for a diagram kind.
    pub fn height_for(&self, kind: DiagramKind) -> f32 {
        match kind {
            DiagramKind::Framework => self.framework_height,
            DiagramKind::Funnel => self.funnel_height,
        }
    }

    /// Checks that every dimension is positive and finite.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first bad dimension.
    pub fn validate(&self) -> Result<(), String> {
        [
            ("canvas.width", self.width),
            ("canvas.framework_height", self.framework_height),
            ("canvas.funnel_height", self.funnel_height),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite() || *value <= 0.0)
        .map_or(Ok(()), |(name, value)| {
            Err(format!("{name} must be a positive number, got {value}"))
        })
    }
}

/// Visual styling fallbacks.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Background used when a diagram omits `background`.
    background_color: Option<Color>,

    font_family: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            font_family: "Arial".to_string(),
        }
    }
}

impl StyleConfig {
    pub fn new(background_color: Option<Color>, font_family: impl Into<String>) -> Self {
        Self {
            background_color,
            font_family: font_family.into(),
        }
    }

    /// Fallback background, or `None` if no color is configured.
    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }
}
