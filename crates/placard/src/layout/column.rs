//! Equal-width columns and vertically stacked items.

use placard_core::geometry::{Bounds, Point, Size};

/// Splits a width into equal columns separated by a fixed gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnGrid {
    margin: f32,
    gap: f32,
}

impl ColumnGrid {
    pub fn new(margin: f32, gap: f32) -> Self {
        Self { margin, gap }
    }

    /// `(W - 2*margin - (n-1)*gap) / n`, never negative. Zero columns have zero width.
    ///
    /// ```
    /// # use placard::layout::ColumnGrid;
    /// assert_eq!(ColumnGrid::new(40.0, 60.0).column_width(1200.0, 2), 530.0);
    /// ```
    pub fn column_width(&self, total_width: f32, count: usize) -> f32 {
        if count == 0 {
            return 0.0;
        }
        let gaps = (count - 1) as f32 * self.gap;
        ((total_width - 2.0 * self.margin - gaps) / count as f32).max(0.0)
    }

    /// Left edge and width of each column.
    pub fn spans(&self, total_width: f32, count: usize) -> Vec<(f32, f32)> {
        let width = self.column_width(total_width, count);
        (0..count)
            .map(|i| (self.margin + i as f32 * (width + self.gap), width))
            .collect()
    }
}

/// Fixed-height items stacked top to bottom inside a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStack {
    start_y: f32,
    item_height: f32,
    gap: f32,
    inset: f32,
}

impl ItemStack {
    /// `inset` is the horizontal padding on both sides of each item.
    pub fn new(start_y: f32, item_height: f32, gap: f32, inset: f32) -> Self {
        Self {
            start_y,
            item_height,
            gap,
            inset,
        }
    }

    /// Bounds of the item at `index` in a column spanning `x .. x + width`.
    pub fn item(&self, x: f32, width: f32, index: usize) -> Bounds {
        let y = self.start_y + index as f32 * (self.item_height + self.gap);
        Bounds::new_from_top_left(
            Point::new(x + self.inset, y),
            Size::new((width - 2.0 * self.inset).max(0.0), self.item_height),
        )
    }

    pub fn items(&self, x: f32, width: f32, count: usize) -> Vec<Bounds> {
        (0..count).map(|i| self.item(x, width, i)).collect()
    }
}
