//! Pointer hit-testing.
//!
//! Hover state is recomputed from scratch every frame. Nothing carries over
//! between passes, so the same pointer over the same layout always resolves
//! to the same element.

use placard_core::geometry::{Bounds, Point};

use crate::model::ElementId;

/// An interactive box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hotspot {
    id: ElementId,
    bounds: Bounds,
}

impl Hotspot {
    pub fn new(id: ElementId, bounds: Bounds) -> Self {
        Self { id, bounds }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// The pointer and what it hovers, for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HoverState {
    pointer: Option<Point>,
    hovered: Option<ElementId>,
}

impl HoverState {
    /// Runs a fresh hit-test pass; the result never depends on an earlier frame.
    pub fn resolve(pointer: Option<Point>, hotspots: &[Hotspot]) -> Self {
        Self {
            pointer,
            hovered: hit_test(pointer, hotspots),
        }
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn hovered(&self) -> Option<ElementId> {
        self.hovered
    }

    pub fn is_hovered(&self, id: ElementId) -> bool {
        self.hovered == Some(id)
    }

    /// The hovered element together with the pointer, if both are present.
    pub fn target(&self) -> Option<(ElementId, Point)> {
        self.hovered.zip(self.pointer)
    }
}

/// Finds the element under `pointer`.
///
/// Containment is strict, so a pointer on an edge hovers nothing. Every
/// hotspot is tested in draw order and a later match replaces an earlier one:
/// when boxes overlap, the last one drawn wins.
pub fn hit_test(pointer: Option<Point>, hotspots: &[Hotspot]) -> Option<ElementId> {
    let pointer = pointer?;
    let mut hovered = None;
    for hotspot in hotspots {
        if hotspot.bounds.contains_strict(pointer) {
            hovered = Some(hotspot.id);
        }
    }
    hovered
}

#[cfg(test)]
mod tests {
    use placard_core::geometry::Size;

    use super::*;

    fn hotspot(index: usize, x: f32, y: f32, w: f32, h: f32) -> Hotspot {
        Hotspot::new(
            ElementId::new(index),
            Bounds::new_from_top_left(Point::new(x, y), Size::new(w, h)),
        )
    }

    #[test]
    fn test_edge_is_not_hovered() {
        let hotspots = [hotspot(0, 60.0, 235.0, 490.0, 70.0)];
        assert_eq!(hit_test(Some(Point::new(60.0, 260.0)), &hotspots), None);
        assert_eq!(hit_test(Some(Point::new(550.0, 260.0)), &hotspots), None);
        assert_eq!(hit_test(Some(Point::new(100.0, 235.0)), &hotspots), None);
        assert_eq!(hit_test(Some(Point::new(100.0, 305.0)), &hotspots), None);
    }

    #[test]
    fn test_one_unit_inside_is_hovered() {
        let hotspots = [hotspot(0, 60.0, 235.0, 490.0, 70.0)];
        assert_eq!(
            hit_test(Some(Point::new(61.0, 260.0)), &hotspots),
            Some(ElementId::new(0))
        );
    }

    #[test]
    fn test_overlap_last_wins() {
        let hotspots = [
            hotspot(0, 0.0, 0.0, 100.0, 100.0),
            hotspot(1, 50.0, 50.0, 100.0, 100.0),
        ];
        assert_eq!(
            hit_test(Some(Point::new(75.0, 75.0)), &hotspots),
            Some(ElementId::new(1))
        );
        assert_eq!(
            hit_test(Some(Point::new(25.0, 25.0)), &hotspots),
            Some(ElementId::new(0))
        );
    }

    #[test]
    fn test_state_resets_every_pass() {
        let hotspots = [hotspot(0, 0.0, 0.0, 100.0, 100.0)];
        let hovered = HoverState::resolve(Some(Point::new(50.0, 50.0)), &hotspots);
        assert!(hovered.is_hovered(ElementId::new(0)));
        assert_eq!(hovered.target(), Some((ElementId::new(0), Point::new(50.0, 50.0))));

        let moved = HoverState::resolve(Some(Point::new(150.0, 50.0)), &hotspots);
        assert_eq!(moved.hovered(), None);
        assert_eq!(moved.pointer(), Some(Point::new(150.0, 50.0)));
        assert_eq!(moved.target(), None);
    }

    #[test]
    fn test_no_pointer_or_no_hotspots() {
        let hotspots = [hotspot(0, 0.0, 0.0, 100.0, 100.0)];
        assert_eq!(hit_test(None, &hotspots), None);
        assert_eq!(hit_test(Some(Point::new(10.0, 10.0)), &[]), None);
    }
}
