//! Validated semantic model.
//!
//! A [`Diagram`] owns every interactive [`Element`] in an arena indexed by
//! [`ElementId`]. Ids are assigned in document order, which is also draw
//! order. Nothing here carries geometry; layout derives it per viewport.

use std::fmt;

use placard_core::color::Color;

use crate::schema::{ConnectorStyle, DiagramKind};

/// Index of an element in its diagram's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A hoverable box: a process, a foundation, or a funnel stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    id: ElementId,
    name: String,
    short_label: String,
    description: String,
    fill: Color,
    text_color: Option<Color>,
    highlight: bool,
}

impl Element {
    pub(crate) fn new(
        id: ElementId,
        name: String,
        short_label: String,
        description: String,
        fill: Color,
        text_color: Option<Color>,
        highlight: bool,
    ) -> Self {
        Self {
            id,
            name,
            short_label,
            description,
            fill,
            text_color,
            highlight,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Full display name, shown as the popover title.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Label drawn inside the box.
    pub fn short_label(&self) -> &str {
        &self.short_label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn text_color(&self) -> Option<Color> {
        self.text_color
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlight
    }
}

/// Fields shared by every diagram kind.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramHeader {
    pub title: String,
    pub background: Color,
    pub title_color: Color,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub title: String,
    pub fill: Color,
    pub border: Color,
    pub text_color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub title: String,
    pub label: String,
    pub fill: Color,
    pub text_color: Color,
    pub connector: ConnectorStyle,
    pub processes: Vec<ElementId>,
}

/// The full-width box under the columns. Its name is the document's
/// `title` and its short label the document's `label`.
#[derive(Debug, Clone, PartialEq)]
pub struct Foundation {
    pub element: ElementId,
    pub border: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameworkDiagram {
    pub banner: Option<Banner>,
    pub columns: Vec<Column>,
    pub foundation: Foundation,
}

/// Colors shared by both side panels.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelStyle {
    pub background: Color,
    pub border: Color,
    pub title_color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeftPanel {
    pub title: String,
    pub style: PanelStyle,
    pub items: Vec<String>,
    pub button_color: Color,
    pub button_text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RightPanel {
    pub title: String,
    pub style: PanelStyle,
    pub stats: Vec<String>,
    pub chart_colors: Vec<Color>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunnelDiagram {
    pub stages: Vec<ElementId>,
    pub left_panel: Option<LeftPanel>,
    pub right_panel: Option<RightPanel>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DiagramBody {
    Framework(FrameworkDiagram),
    Funnel(FunnelDiagram),
}

/// A validated diagram, immutable for the rest of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    header: DiagramHeader,
    body: DiagramBody,
    elements: Vec<Element>,
}

impl Diagram {
    pub(crate) fn new(header: DiagramHeader, body: DiagramBody, elements: Vec<Element>) -> Self {
        Self {
            header,
            body,
            elements,
        }
    }

    pub fn header(&self) -> &DiagramHeader {
        &self.header
    }

    pub fn body(&self) -> &DiagramBody {
        &self.body
    }

    pub fn kind(&self) -> DiagramKind {
        match self.body {
            DiagramBody::Framework(_) => DiagramKind::Framework,
            DiagramBody::Funnel(_) => DiagramKind::Funnel,
        }
    }

    /// Looks up an element by id. Ids from another diagram may miss.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.index())
    }

    /// All elements in document order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}
