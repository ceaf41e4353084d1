//! The room boundary polygon

use rackplan_core::{BoundingBox, Point};
use serde::{Deserialize, Serialize};
use tracing::info;

/// An ordered loop of boundary points scanned or drawn around the room.
///
/// The polygon is replaced wholesale (the VR surface commits its scan as one
/// bulk upload); the derived bounding box is the only figure downstream
/// consumers ever see.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryPolygon {
    points: Vec<Point>,
}

impl BoundaryPolygon {
    /// Create an empty boundary
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a boundary from an ordered point sequence
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Replace the whole polygon (one-shot bulk commit)
    pub fn replace(&mut self, points: Vec<Point>) {
        info!(count = points.len(), "replaced boundary polygon");
        self.points = points;
    }

    /// The ordered points of the loop
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The axis-aligned envelope of the polygon.
    ///
    /// Fewer than 3 points yields a degenerate (possibly zero-area) box, not
    /// an error.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(self.points.iter().copied())
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_boundary_has_zero_box() {
        let boundary = BoundaryPolygon::new();
        assert_eq!(boundary.bounding_box(), BoundingBox::ZERO);
    }

    #[test]
    fn test_two_points_degenerate_box() {
        let boundary = BoundaryPolygon::from_points(vec![Point::new(0, 0), Point::new(10, 0)]);
        let bounds = boundary.bounding_box();
        assert_eq!(bounds.width(), 10);
        assert_eq!(bounds.height(), 0);
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut boundary = BoundaryPolygon::from_points(vec![Point::new(0, 0), Point::new(5, 5)]);
        boundary.replace(vec![
            Point::new(0, 0),
            Point::new(1000, 0),
            Point::new(1000, 500),
            Point::new(0, 500),
        ]);

        let bounds = boundary.bounding_box();
        assert_eq!(bounds.width(), 1000);
        assert_eq!(bounds.height(), 500);
        assert_eq!(boundary.points().len(), 4);
    }
}
