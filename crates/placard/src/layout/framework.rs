//! Geometry of a framework diagram.

use placard_core::{
    draw::ArrowDirection,
    geometry::{Bounds, Point, Size},
};

use crate::{
    hover::Hotspot,
    layout::{ColumnGrid, ItemStack, Viewport},
    model::{Diagram, ElementId, FrameworkDiagram},
    schema::ConnectorStyle,
};

const MARGIN: f32 = 40.0;
const TITLE_Y: f32 = 15.0;
const BANNER_Y: f32 = 60.0;
const BANNER_HEIGHT: f32 = 60.0;
const COLUMNS_Y: f32 = BANNER_Y + BANNER_HEIGHT + 30.0;
const COLUMN_GAP: f32 = 60.0;
const HEADER_HEIGHT: f32 = 50.0;
const CAPTION_OFFSET: f32 = 15.0;
const PROCESS_OFFSET: f32 = 35.0;
const PROCESS_HEIGHT: f32 = 70.0;
const PROCESS_GAP: f32 = 15.0;
const PROCESS_INSET: f32 = 20.0;
const FOUNDATION_HEIGHT: f32 = 80.0;
const FOUNDATION_BOTTOM_GAP: f32 = 20.0;
const HIGHLIGHT_RETURN_OFFSET: f32 = 10.0;

/// How a connector line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    Solid,
    Dashed,
    /// One half of the pair drawn for a highlighted process
    Highlight,
}

/// A line with an arrowhead at `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    pub from: Point,
    pub to: Point,
    pub style: LinkStyle,
}

impl Connector {
    /// `None` for a horizontal or zero-length connector.
    pub fn direction(&self) -> Option<ArrowDirection> {
        ArrowDirection::from_vertical(self.to.y() - self.from.y())
    }
}

/// A hoverable box and the element it shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementSlot {
    pub id: ElementId,
    pub bounds: Bounds,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    /// Header box, rounded on top only
    pub header: Bounds,
    /// Center of the italic caption under the header
    pub caption_anchor: Point,
    pub processes: Vec<ElementSlot>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameworkLayout {
    pub viewport: Viewport,
    /// Top-center of the diagram title
    pub title_anchor: Point,
    pub banner: Bounds,
    pub columns: Vec<ColumnLayout>,
    pub foundation: ElementSlot,
    pub connectors: Vec<Connector>,
}

impl FrameworkLayout {
    pub fn compute(diagram: &Diagram, framework: &FrameworkDiagram, viewport: Viewport) -> Self {
        let width = viewport.width();
        let content_width = (width - 2.0 * MARGIN).max(0.0);

        let banner = Bounds::new_from_top_left(
            Point::new(MARGIN, BANNER_Y),
            Size::new(content_width, BANNER_HEIGHT),
        );

        let foundation = ElementSlot {
            id: framework.foundation.element,
            bounds: Bounds::new_from_top_left(
                Point::new(
                    MARGIN,
                    viewport.height() - MARGIN - FOUNDATION_HEIGHT - FOUNDATION_BOTTOM_GAP,
                ),
                Size::new(content_width, FOUNDATION_HEIGHT),
            ),
        };

        let grid = ColumnGrid::new(MARGIN, COLUMN_GAP);
        let stack = ItemStack::new(
            COLUMNS_Y + HEADER_HEIGHT + PROCESS_OFFSET,
            PROCESS_HEIGHT,
            PROCESS_GAP,
            PROCESS_INSET,
        );

        let mut connectors = Vec::new();
        let columns = framework
            .columns
            .iter()
            .zip(grid.spans(width, framework.columns.len()))
            .map(|(column, (x, column_width))| {
                let processes: Vec<ElementSlot> = column
                    .processes
                    .iter()
                    .enumerate()
                    .map(|(i, id)| ElementSlot {
                        id: *id,
                        bounds: stack.item(x, column_width, i),
                    })
                    .collect();

                let center_x = x + column_width / 2.0;
                connectors.extend(column_connectors(
                    column.connector,
                    center_x,
                    &processes,
                    foundation.bounds.min_y(),
                    |id| diagram.element(id).is_some_and(|e| e.is_highlighted()),
                ));

                ColumnLayout {
                    header: Bounds::new_from_top_left(
                        Point::new(x, COLUMNS_Y),
                        Size::new(column_width, HEADER_HEIGHT),
                    ),
                    caption_anchor: Point::new(center_x, COLUMNS_Y + HEADER_HEIGHT + CAPTION_OFFSET),
                    processes,
                }
            })
            .collect();

        Self {
            viewport,
            title_anchor: Point::new(width / 2.0, TITLE_Y),
            banner,
            columns,
            foundation,
            connectors,
        }
    }

    /// Interactive boxes in draw order: processes column by column, then the foundation.
    pub fn hotspots(&self) -> Vec<Hotspot> {
        self.columns
            .iter()
            .flat_map(|column| column.processes.iter())
            .chain(std::iter::once(&self.foundation))
            .map(|slot| Hotspot::new(slot.id, slot.bounds))
            .collect()
    }
}

/// Connectors from the foundation's top edge up to each process of a column.
///
/// Highlighted processes get an up line at the column center and a down line
/// offset to its right instead of the column's style.
fn column_connectors(
    style: ConnectorStyle,
    center_x: f32,
    processes: &[ElementSlot],
    foundation_top: f32,
    highlighted: impl Fn(ElementId) -> bool,
) -> Vec<Connector> {
    let link = match style {
        ConnectorStyle::None => return Vec::new(),
        ConnectorStyle::Solid => LinkStyle::Solid,
        ConnectorStyle::Dashed => LinkStyle::Dashed,
    };

    let mut connectors = Vec::new();
    for slot in processes {
        let bottom = slot.bounds.max_y();
        if highlighted(slot.id) {
            let return_x = center_x + HIGHLIGHT_RETURN_OFFSET;
            connectors.push(Connector {
                from: Point::new(center_x, foundation_top),
                to: Point::new(center_x, bottom),
                style: LinkStyle::Highlight,
            });
            connectors.push(Connector {
                from: Point::new(return_x, bottom),
                to: Point::new(return_x, foundation_top),
                style: LinkStyle::Highlight,
            });
        } else {
            connectors.push(Connector {
                from: Point::new(center_x, foundation_top),
                to: Point::new(center_x, bottom),
                style: link,
            });
        }
    }
    connectors
}
