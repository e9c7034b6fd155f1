//! Tapered layout: stacked boxes that narrow linearly from top to bottom.

use placard_core::geometry::{Bounds, Point, Size};

/// Share of the outline width a stage box takes, leaving a visible margin.
pub const TAPER_FACTOR: f32 = 0.9;

/// A trapezoid between `start_y` and `end_y` that narrows from `top_width`
/// to `bottom_width`, centered on `center_x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaperedLayout {
    start_y: f32,
    end_y: f32,
    top_width: f32,
    bottom_width: f32,
    center_x: f32,
    item_height: f32,
}

impl TaperedLayout {
    pub fn new(
        start_y: f32,
        end_y: f32,
        top_width: f32,
        bottom_width: f32,
        center_x: f32,
        item_height: f32,
    ) -> Self {
        Self {
            start_y,
            end_y,
            top_width,
            bottom_width,
            center_x,
            item_height,
        }
    }

    /// Normalized vertical position of `y` in the span, 0 when the span is empty.
    pub fn progress(&self, y: f32) -> f32 {
        let span = self.end_y - self.start_y;
        if span == 0.0 {
            0.0
        } else {
            (y - self.start_y) / span
        }
    }

    /// Box width at `y`, already scaled by [`TAPER_FACTOR`].
    pub fn width_at(&self, y: f32) -> f32 {
        let outline = self.top_width - (self.top_width - self.bottom_width) * self.progress(y);
        outline * TAPER_FACTOR
    }

    /// Distance between consecutive items: `span / (count + 1)`.
    pub fn spacing(&self, count: usize) -> f32 {
        (self.end_y - self.start_y) / (count + 1) as f32
    }

    /// One box per item, top to bottom.
    ///
    /// ```
    /// # use placard::layout::TaperedLayout;
    /// let layout = TaperedLayout::new(100.0, 600.0, 300.0, 100.0, 600.0, 60.0);
    /// let boxes = layout.layout(4);
    /// assert_eq!(boxes[0].width(), 270.0);
    /// assert_eq!(boxes[1].min_y(), 200.0);
    /// ```
    pub fn layout(&self, count: usize) -> Vec<Bounds> {
        let spacing = self.spacing(count);
        (0..count)
            .map(|i| {
                let y = self.start_y + i as f32 * spacing;
                let width = self.width_at(y);
                Bounds::new_from_top_left(
                    Point::new(self.center_x - width / 2.0, y),
                    Size::new(width, self.item_height),
                )
            })
            .collect()
    }
}
