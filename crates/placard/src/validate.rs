//! Validation from the raw document into the semantic model.
//!
//! Every problem is collected with the JSON path it was found at, so a single
//! run reports all bad colors and empty names at once. Defaults for omitted
//! optional fields are resolved here; the model never sees a missing color.

use std::fmt;

use log::{debug, warn};

use placard_core::color::Color;

use crate::{
    model::{
        Banner, Column, Diagram, DiagramBody, DiagramHeader, Element, ElementId, Foundation,
        FrameworkDiagram, FunnelDiagram, LeftPanel, PanelStyle, RightPanel,
    },
    schema::{
        BannerDocument, ColumnDocument, DiagramDocument, DiagramKind, FoundationDocument,
        LeftPanelDocument, RightPanelDocument, StageDocument,
    },
};

/// A single semantic problem in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    path: String,
    message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// JSON path of the offending value, e.g. `columns[1].processes[0].color`.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Last key of the path, without any index suffix.
    pub fn field(&self) -> &str {
        let last = self.path.rsplit('.').next().unwrap_or(&self.path);
        last.split('[').next().unwrap_or(last)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

impl std::error::Error for ValidationError {}

const DEFAULT_BACKGROUND: &str = "aliceblue";
const DEFAULT_TITLE_COLOR: &str = "#2c3e50";

/// Validates `document`, resolving omitted colors and labels.
///
/// `fallback_background` is used when the document has no `background`.
///
/// # Errors
///
/// Returns every [`ValidationError`] found, in document order.
pub fn validate(
    document: &DiagramDocument,
    fallback_background: Option<Color>,
) -> Result<Diagram, Vec<ValidationError>> {
    let mut validator = Validator::default();

    let default_title = match document.diagram {
        DiagramKind::Framework => "Framework",
        DiagramKind::Funnel => "Task Infographic",
    };
    let background = match &document.background {
        Some(background) => validator.color("background", background),
        None => match fallback_background {
            Some(color) => color,
            None => validator.color("background", DEFAULT_BACKGROUND),
        },
    };
    let header = DiagramHeader {
        title: document
            .title
            .clone()
            .unwrap_or_else(|| default_title.to_string()),
        background,
        title_color: validator.color_or("titleColor", document.title_color.as_deref(), DEFAULT_TITLE_COLOR),
        description: document.description.clone(),
    };

    let body = match document.diagram {
        DiagramKind::Framework => {
            warn_unused(document.task_stages.is_some(), "taskStages", document.diagram);
            warn_unused(document.left_panel.is_some(), "leftPanel", document.diagram);
            warn_unused(document.right_panel.is_some(), "rightPanel", document.diagram);
            validator.framework(document).map(DiagramBody::Framework)
        }
        DiagramKind::Funnel => {
            warn_unused(document.banner.is_some(), "banner", document.diagram);
            warn_unused(document.columns.is_some(), "columns", document.diagram);
            warn_unused(document.foundation.is_some(), "foundation", document.diagram);
            Some(DiagramBody::Funnel(validator.funnel(document)))
        }
    };

    match body {
        Some(body) if validator.errors.is_empty() => {
            debug!(elements = validator.elements.len(); "Diagram validated");
            Ok(Diagram::new(header, body, validator.elements))
        }
        _ => Err(validator.errors),
    }
}

fn warn_unused(present: bool, section: &str, kind: DiagramKind) {
    if present {
        warn!(section, kind = kind.name(); "Section is ignored for this diagram kind");
    }
}

#[derive(Default)]
struct Validator {
    errors: Vec<ValidationError>,
    elements: Vec<Element>,
}

impl Validator {
    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ValidationError::new(path, message));
    }

    /// Parses a color. On failure the error is recorded and black stands in
    /// so validation can keep going.
    fn color(&mut self, path: &str, value: &str) -> Color {
        Color::new(value).unwrap_or_else(|err| {
            self.error(path, err.to_string());
            Color::default()
        })
    }

    fn color_or(&mut self, path: &str, value: Option<&str>, default: &str) -> Color {
        self.color(path, value.unwrap_or(default))
    }

    fn non_empty(&mut self, path: &str, value: &str) -> String {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.error(path, "must not be empty");
        }
        trimmed.to_string()
    }

    fn push_element(
        &mut self,
        name: String,
        short_label: String,
        description: &str,
        fill: Color,
        text_color: Option<Color>,
        highlight: bool,
    ) -> ElementId {
        let id = ElementId::new(self.elements.len());
        self.elements.push(Element::new(
            id,
            name,
            short_label,
            description.to_string(),
            fill,
            text_color,
            highlight,
        ));
        id
    }

    fn framework(&mut self, document: &DiagramDocument) -> Option<FrameworkDiagram> {
        let banner = document.banner.as_ref().map(|banner| self.banner(banner));

        let columns = match &document.columns {
            Some(columns) => columns
                .iter()
                .enumerate()
                .map(|(i, column)| self.column(&format!("columns[{i}]"), column))
                .collect(),
            None => {
                self.error("columns", "framework diagram requires `columns`");
                Vec::new()
            }
        };

        let foundation = match &document.foundation {
            Some(foundation) => Some(self.foundation(foundation)),
            None => {
                self.error("foundation", "framework diagram requires `foundation`");
                None
            }
        };

        Some(FrameworkDiagram {
            banner,
            columns,
            foundation: foundation?,
        })
    }

    fn banner(&mut self, banner: &BannerDocument) -> Banner {
        Banner {
            title: self.non_empty("banner.title", &banner.title),
            fill: self.color_or("banner.color", banner.color.as_deref(), "#34495e"),
            border: self.color_or("banner.borderColor", banner.border_color.as_deref(), "#2c3e50"),
            text_color: self.color_or("banner.textColor", banner.text_color.as_deref(), "white"),
        }
    }

    fn column(&mut self, path: &str, column: &ColumnDocument) -> Column {
        let title = self.non_empty(&format!("{path}.title"), &column.title);
        let fill = self.color(&format!("{path}.color"), &column.color);
        let text_color =
            self.color_or(&format!("{path}.textColor"), column.text_color.as_deref(), "white");

        let processes = column
            .processes
            .iter()
            .enumerate()
            .map(|(j, process)| {
                let path = format!("{path}.processes[{j}]");
                let name = self.non_empty(&format!("{path}.name"), &process.name);
                let fill = self.color(&format!("{path}.color"), &process.color);
                let default_text = if process.highlight { "black" } else { "white" };
                let text_color = self.color_or(
                    &format!("{path}.textColor"),
                    process.text_color.as_deref(),
                    default_text,
                );
                self.push_element(
                    name.clone(),
                    name,
                    &process.description,
                    fill,
                    Some(text_color),
                    process.highlight,
                )
            })
            .collect();

        Column {
            title,
            label: column.label.clone(),
            fill,
            text_color,
            connector: column.connector,
            processes,
        }
    }

    fn foundation(&mut self, foundation: &FoundationDocument) -> Foundation {
        let title = self.non_empty("foundation.title", &foundation.title);
        let fill = self.color("foundation.color", &foundation.color);
        let border = self.color_or(
            "foundation.borderColor",
            foundation.border_color.as_deref(),
            "#d35400",
        );
        let text_color = self.color_or(
            "foundation.textColor",
            foundation.text_color.as_deref(),
            "white",
        );
        let element = self.push_element(
            title,
            foundation.label.clone(),
            &foundation.description,
            fill,
            Some(text_color),
            false,
        );
        Foundation { element, border }
    }

    fn funnel(&mut self, document: &DiagramDocument) -> FunnelDiagram {
        let stages = match &document.task_stages {
            Some(stages) => stages
                .iter()
                .enumerate()
                .map(|(i, stage)| self.stage(&format!("taskStages[{i}]"), stage))
                .collect(),
            None => {
                self.error("taskStages", "funnel diagram requires `taskStages`");
                Vec::new()
            }
        };

        FunnelDiagram {
            stages,
            left_panel: document.left_panel.as_ref().map(|panel| self.left_panel(panel)),
            right_panel: document
                .right_panel
                .as_ref()
                .map(|panel| self.right_panel(panel)),
        }
    }

    fn stage(&mut self, path: &str, stage: &StageDocument) -> ElementId {
        let name = self.non_empty(&format!("{path}.name"), &stage.name);
        let short_label = match &stage.short_label {
            Some(label) => self.non_empty(&format!("{path}.shortLabel"), label),
            None => name.clone(),
        };
        let fill = self.color(&format!("{path}.color"), &stage.color);
        let text_color =
            self.color_or(&format!("{path}.textColor"), stage.text_color.as_deref(), "white");
        self.push_element(
            name,
            short_label,
            &stage.description,
            fill,
            Some(text_color),
            false,
        )
    }

    fn panel_style(
        &mut self,
        path: &str,
        colors: [Option<&str>; 3],
        defaults: [&str; 3],
    ) -> PanelStyle {
        let [background, border, title] = colors;
        let [default_background, default_border, default_title] = defaults;
        PanelStyle {
            background: self.color_or(&format!("{path}.backgroundColor"), background, default_background),
            border: self.color_or(&format!("{path}.borderColor"), border, default_border),
            title_color: self.color_or(&format!("{path}.titleColor"), title, default_title),
        }
    }

    fn left_panel(&mut self, panel: &LeftPanelDocument) -> LeftPanel {
        let style = self.panel_style(
            "leftPanel",
            [
                panel.background_color.as_deref(),
                panel.border_color.as_deref(),
                panel.title_color.as_deref(),
            ],
            ["#e8f4fd", "#3498db", "#2980b9"],
        );
        LeftPanel {
            title: panel.title.clone(),
            style,
            items: panel.items.clone(),
            button_color: self.color_or(
                "leftPanel.buttonColor",
                panel.button_color.as_deref(),
                "#27ae60",
            ),
            button_text: panel
                .button_text
                .clone()
                .unwrap_or_else(|| "Submit".to_string()),
        }
    }

    fn right_panel(&mut self, panel: &RightPanelDocument) -> RightPanel {
        let style = self.panel_style(
            "rightPanel",
            [
                panel.background_color.as_deref(),
                panel.border_color.as_deref(),
                panel.title_color.as_deref(),
            ],
            ["#fff5e6", "#f39c12", "#e67e22"],
        );
        let chart_colors = panel
            .chart_colors
            .iter()
            .enumerate()
            .map(|(i, color)| self.color(&format!("rightPanel.chartColors[{i}]"), color))
            .collect();
        RightPanel {
            title: panel.title.clone(),
            style,
            stats: panel.stats.clone(),
            chart_colors,
        }
    }
}
