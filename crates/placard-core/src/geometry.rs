//! Geometric primitives for diagram layout, drawing, and hit-testing.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned bounding box used both for drawing and hit-testing
//!
//! # Coordinate System
//!
//! Placard uses the canvas/SVG convention:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Coordinates are `f32`. Layout functions are pure, so the same inputs always
//! produce bit-identical coordinates.

/// A 2D point in canvas coordinate space.
///
/// # Examples
///
/// ```
/// # use placard_core::geometry::Point;
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
///
/// assert_eq!(a.distance(b), 5.0);
/// assert_eq!(b.y(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// An axis-aligned rectangle with minimum and maximum coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Strict containment test used for hover detection.
    ///
    /// Points on an edge are outside: `min_x < x < max_x && min_y < y < max_y`.
    ///
    /// ```
    /// # use placard_core::geometry::{Bounds, Point, Size};
    /// let bounds = Bounds::new_from_top_left(Point::new(10.0, 10.0), Size::new(20.0, 20.0));
    /// assert!(!bounds.contains_strict(Point::new(10.0, 15.0)));
    /// assert!(bounds.contains_strict(Point::new(11.0, 15.0)));
    /// ```
    pub fn contains_strict(self, point: Point) -> bool {
        self.min_x < point.x && point.x < self.max_x && self.min_y < point.y && point.y < self.max_y
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn bounds_strategy() -> impl Strategy<Value = Bounds> {
        (
            -1000.0f32..1000.0,
            -1000.0f32..1000.0,
            1.0f32..500.0,
            1.0f32..500.0,
        )
            .prop_map(|(x, y, w, h)| Bounds::new_from_top_left(Point::new(x, y), Size::new(w, h)))
    }

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    /// The center of a non-degenerate box is always strictly inside it.
    fn check_center_is_contained(bounds: Bounds) -> Result<(), TestCaseError> {
        prop_assert!(bounds.contains_strict(bounds.center()));
        Ok(())
    }

    /// Distance is symmetric and never shorter than either axis offset.
    fn check_distance_symmetric(a: Point, b: Point) -> Result<(), TestCaseError> {
        let d = a.distance(b);
        prop_assert!(approx_eq!(f32, d, b.distance(a), ulps = 2));
        prop_assert!(d >= (a.x() - b.x()).abs() - 0.01);
        prop_assert!(d >= (a.y() - b.y()).abs() - 0.01);
        Ok(())
    }

    /// Corners are never strictly contained.
    fn check_corners_are_outside(bounds: Bounds) -> Result<(), TestCaseError> {
        let corners = [
            Point::new(bounds.min_x(), bounds.min_y()),
            Point::new(bounds.max_x(), bounds.min_y()),
            Point::new(bounds.min_x(), bounds.max_y()),
            Point::new(bounds.max_x(), bounds.max_y()),
        ];
        for corner in corners {
            prop_assert!(!bounds.contains_strict(corner));
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn center_is_contained(bounds in bounds_strategy()) {
            check_center_is_contained(bounds)?;
        }

        #[test]
        fn corners_are_outside(bounds in bounds_strategy()) {
            check_corners_are_outside(bounds)?;
        }

        #[test]
        fn distance_symmetric(a in point_strategy(), b in point_strategy()) {
            check_distance_symmetric(a, b)?;
        }
    }
}
