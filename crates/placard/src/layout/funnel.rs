//! Geometry of a funnel diagram.

use placard_core::geometry::{Bounds, Point, Size};

use crate::{
    hover::Hotspot,
    layout::{TaperedLayout, Viewport, framework::ElementSlot},
    model::{FunnelDiagram, LeftPanel, RightPanel},
};

const MARGIN: f32 = 30.0;
const TITLE_Y: f32 = 20.0;
const START_Y: f32 = 100.0;
const END_Y: f32 = 600.0;
const TOP_WIDTH: f32 = 300.0;
const BOTTOM_WIDTH: f32 = 100.0;
const STAGE_HEIGHT: f32 = 60.0;
const BADGE_OFFSET: f32 = 25.0;
const FLOW_MARKER_GAP: f32 = 10.0;
const FLOW_MARKER_SIZE: f32 = 10.0;

const PANEL_WIDTH: f32 = 180.0;
const PANEL_HEIGHT: f32 = 300.0;
const PANEL_Y: f32 = START_Y + 50.0;
const PANEL_TITLE_OFFSET: f32 = 15.0;
const PANEL_ROWS_OFFSET: f32 = 70.0;
const PANEL_ROW_HEIGHT: f32 = 25.0;
const PANEL_ROW_INSET: f32 = 15.0;
const BUTTON_INSET: f32 = 30.0;
const BUTTON_HEIGHT: f32 = 35.0;
const CHART_BAR_WIDTHS: [f32; 3] = [40.0, 30.0, 50.0];
const CHART_BAR_DEFAULT_WIDTH: f32 = 30.0;
const CHART_BAR_HEIGHT: f32 = 20.0;
const CHART_BAR_GAP: f32 = 5.0;
const SIDE_MARKER_OFFSET: f32 = 190.0;
const SIDE_MARKER_DEPTH: f32 = 10.0;
const SIDE_MARKER_HALF: f32 = 5.0;

/// Distance between the two title lines of a panel.
pub const PANEL_TITLE_LINE_HEIGHT: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageLayout {
    pub slot: ElementSlot,
    pub badge_center: Point,
}

/// Side panel geometry. Rows hold the top-left anchor of each text row.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    pub bounds: Bounds,
    /// Top-center of the first title line
    pub title_anchor: Point,
    pub rows: Vec<Point>,
    /// Submit button, left panel only
    pub button: Option<Bounds>,
    /// Chart strip bars, right panel only
    pub chart: Vec<Bounds>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunnelLayout {
    pub viewport: Viewport,
    pub title_anchor: Point,
    pub center_x: f32,
    /// Left and right edges of the tapered outline
    pub outline: [(Point, Point); 2],
    pub stages: Vec<StageLayout>,
    /// Small down-pointing triangles between consecutive stages
    pub flow_markers: Vec<[Point; 3]>,
    pub left_panel: Option<PanelLayout>,
    pub right_panel: Option<PanelLayout>,
    /// Marker next to the left panel
    pub entry_marker: Option<[Point; 3]>,
    /// Marker next to the right panel
    pub exit_marker: Option<[Point; 3]>,
}

impl FunnelLayout {
    pub fn compute(funnel: &FunnelDiagram, viewport: Viewport) -> Self {
        let width = viewport.width();
        let center_x = width / 2.0;

        let outline = [
            (
                Point::new(center_x - TOP_WIDTH / 2.0, START_Y),
                Point::new(center_x - BOTTOM_WIDTH / 2.0, END_Y),
            ),
            (
                Point::new(center_x + TOP_WIDTH / 2.0, START_Y),
                Point::new(center_x + BOTTOM_WIDTH / 2.0, END_Y),
            ),
        ];

        let tapered = TaperedLayout::new(
            START_Y,
            END_Y,
            TOP_WIDTH,
            BOTTOM_WIDTH,
            center_x,
            STAGE_HEIGHT,
        );
        let stages: Vec<StageLayout> = funnel
            .stages
            .iter()
            .zip(tapered.layout(funnel.stages.len()))
            .map(|(id, bounds)| StageLayout {
                slot: ElementSlot { id: *id, bounds },
                badge_center: Point::new(bounds.min_x() - BADGE_OFFSET, bounds.center().y()),
            })
            .collect();

        let flow_markers = stages
            .iter()
            .take(stages.len().saturating_sub(1))
            .map(|stage| {
                let top = stage.slot.bounds.max_y() + FLOW_MARKER_GAP;
                [
                    Point::new(center_x, top + FLOW_MARKER_SIZE),
                    Point::new(center_x - FLOW_MARKER_SIZE / 2.0, top),
                    Point::new(center_x + FLOW_MARKER_SIZE / 2.0, top),
                ]
            })
            .collect();

        let left_x = MARGIN;
        let right_x = width - MARGIN - PANEL_WIDTH;

        let left_panel = funnel
            .left_panel
            .as_ref()
            .map(|panel| left_panel_layout(panel, left_x));
        let right_panel = funnel
            .right_panel
            .as_ref()
            .map(|panel| right_panel_layout(panel, right_x));

        let entry_marker = funnel.left_panel.as_ref().map(|_| {
            let y = START_Y + 25.0;
            let tip_x = MARGIN + SIDE_MARKER_OFFSET;
            [
                Point::new(tip_x, y),
                Point::new(tip_x + SIDE_MARKER_DEPTH, y - SIDE_MARKER_HALF),
                Point::new(tip_x + SIDE_MARKER_DEPTH, y + SIDE_MARKER_HALF),
            ]
        });
        let exit_marker = funnel.right_panel.as_ref().map(|_| {
            let y = START_Y + 200.0;
            let tip_x = width - MARGIN - SIDE_MARKER_OFFSET;
            [
                Point::new(tip_x, y),
                Point::new(tip_x - SIDE_MARKER_DEPTH, y - SIDE_MARKER_HALF),
                Point::new(tip_x - SIDE_MARKER_DEPTH, y + SIDE_MARKER_HALF),
            ]
        });

        Self {
            viewport,
            title_anchor: Point::new(center_x, TITLE_Y),
            center_x,
            outline,
            stages,
            flow_markers,
            left_panel,
            right_panel,
            entry_marker,
            exit_marker,
        }
    }

    /// Stage boxes in draw order.
    pub fn hotspots(&self) -> Vec<Hotspot> {
        self.stages
            .iter()
            .map(|stage| Hotspot::new(stage.slot.id, stage.slot.bounds))
            .collect()
    }
}

fn panel_frame(x: f32, rows: usize) -> (Bounds, Point, Vec<Point>) {
    let bounds = Bounds::new_from_top_left(
        Point::new(x, PANEL_Y),
        Size::new(PANEL_WIDTH, PANEL_HEIGHT),
    );
    let title_anchor = Point::new(x + PANEL_WIDTH / 2.0, PANEL_Y + PANEL_TITLE_OFFSET);
    let rows = (0..rows)
        .map(|i| {
            Point::new(
                x + PANEL_ROW_INSET,
                PANEL_Y + PANEL_ROWS_OFFSET + i as f32 * PANEL_ROW_HEIGHT,
            )
        })
        .collect();
    (bounds, title_anchor, rows)
}

/// Y just below the last row, where the button or chart strip starts.
fn after_rows(rows: usize) -> f32 {
    PANEL_Y + PANEL_ROWS_OFFSET + rows as f32 * PANEL_ROW_HEIGHT + 10.0
}

fn left_panel_layout(panel: &LeftPanel, x: f32) -> PanelLayout {
    let (bounds, title_anchor, rows) = panel_frame(x, panel.items.len());
    let button = Bounds::new_from_top_left(
        Point::new(x + BUTTON_INSET, after_rows(panel.items.len())),
        Size::new(PANEL_WIDTH - 2.0 * BUTTON_INSET, BUTTON_HEIGHT),
    );
    PanelLayout {
        bounds,
        title_anchor,
        rows,
        button: Some(button),
        chart: Vec::new(),
    }
}

fn right_panel_layout(panel: &RightPanel, x: f32) -> PanelLayout {
    let (bounds, title_anchor, rows) = panel_frame(x, panel.stats.len());
    let chart_y = after_rows(panel.stats.len());

    let mut bar_x = x + PANEL_ROW_INSET;
    let chart = (0..panel.chart_colors.len())
        .map(|i| {
            let bar_width = CHART_BAR_WIDTHS
                .get(i)
                .copied()
                .unwrap_or(CHART_BAR_DEFAULT_WIDTH);
            let bar = Bounds::new_from_top_left(
                Point::new(bar_x, chart_y),
                Size::new(bar_width, CHART_BAR_HEIGHT),
            );
            bar_x += bar_width + CHART_BAR_GAP;
            bar
        })
        .collect();

    PanelLayout {
        bounds,
        title_anchor,
        rows,
        button: None,
        chart,
    }
}
