//! Layout geometry types

use serde::{Deserialize, Serialize};

/// A 2D point on the layout grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn from_array(arr: [i64; 2]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
        }
    }

    pub fn to_array(&self) -> [i64; 2] {
        [self.x, self.y]
    }
}

/// An axis-aligned bounding box over layout points.
///
/// The box is the authoritative "available space" envelope for a layout:
/// a free-form room boundary is reduced to this envelope and all spatial
/// constraints are checked against it, not against the literal polygon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl BoundingBox {
    /// The zero-area box at the origin
    pub const ZERO: Self = Self {
        min_x: 0,
        min_y: 0,
        max_x: 0,
        max_y: 0,
    };

    /// Resolve the envelope of an ordered point sequence.
    ///
    /// Total function: duplicate and collinear points are fine, an empty
    /// sequence yields the zero box. Polygon concavity and winding order are
    /// intentionally discarded; only the envelope matters downstream.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = match iter.next() {
            Some(p) => p,
            None => return Self::ZERO,
        };

        let mut bounds = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };

        for p in iter {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.max_y = bounds.max_y.max(p.y);
        }

        bounds
    }

    /// Box width (max_x - min_x), never negative
    pub fn width(&self) -> i64 {
        self.max_x - self.min_x
    }

    /// Box height (max_y - min_y), never negative
    pub fn height(&self) -> i64 {
        self.max_y - self.min_y
    }
}
