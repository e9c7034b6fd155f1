//! Raw diagram document as it appears on disk.
//!
//! These types mirror the JSON shape one to one, with camelCase keys. Colors
//! stay strings here; [`validate`](crate::validate) parses them and reports
//! every bad value with its path.
//!
//! ```
//! # use placard::schema::{DiagramDocument, DiagramKind};
//! let doc: DiagramDocument = serde_json::from_str(r##"{
//!     "diagram": "funnel",
//!     "taskStages": [{ "name": "Plan", "color": "#3498db" }]
//! }"##).unwrap();
//! assert_eq!(doc.diagram, DiagramKind::Funnel);
//! ```

use serde::Deserialize;

/// Which renderer a document targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramKind {
    Framework,
    Funnel,
}

impl DiagramKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Framework => "framework",
            Self::Funnel => "funnel",
        }
    }
}

/// Line style drawn from the foundation up to each process of a column.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectorStyle {
    #[default]
    None,
    Solid,
    Dashed,
}

/// Top-level document. Sections that do not belong to `diagram` are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramDocument {
    pub diagram: DiagramKind,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub title_color: Option<String>,
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub banner: Option<BannerDocument>,
    #[serde(default)]
    pub columns: Option<Vec<ColumnDocument>>,
    #[serde(default)]
    pub foundation: Option<FoundationDocument>,

    #[serde(default)]
    pub task_stages: Option<Vec<StageDocument>>,
    #[serde(default)]
    pub left_panel: Option<LeftPanelDocument>,
    #[serde(default)]
    pub right_panel: Option<RightPanelDocument>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerDocument {
    pub title: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub border_color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDocument {
    pub title: String,
    #[serde(default)]
    pub label: String,
    pub color: String,
    #[serde(default)]
    pub text_color: Option<String>,
    #[serde(default)]
    pub connector: ConnectorStyle,
    #[serde(default)]
    pub processes: Vec<ProcessDocument>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDocument {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub color: String,
    #[serde(default)]
    pub text_color: Option<String>,
    #[serde(default)]
    pub highlight: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundationDocument {
    pub title: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub color: String,
    #[serde(default)]
    pub border_color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageDocument {
    pub name: String,
    #[serde(default)]
    pub short_label: Option<String>,
    #[serde(default)]
    pub description: String,
    pub color: String,
    #[serde(default)]
    pub text_color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeftPanelDocument {
    pub title: String,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub border_color: Option<String>,
    #[serde(default)]
    pub title_color: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub button_color: Option<String>,
    #[serde(default)]
    pub button_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RightPanelDocument {
    pub title: String,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub border_color: Option<String>,
    #[serde(default)]
    pub title_color: Option<String>,
    #[serde(default)]
    pub stats: Vec<String>,
    #[serde(default)]
    pub chart_colors: Vec<String>,
}
