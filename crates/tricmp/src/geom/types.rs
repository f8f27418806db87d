//! Point and triangle value types.

use super::orient::{orientation, Orientation};

/// Query points and triangle vertices.
pub type Point = nalgebra::Point2<f64>;

/// Ordered vertex triple (A, B, C).
///
/// No winding order is imposed; non-degeneracy is a generator invariant, not a
/// type invariant, so classifiers must cope with collinear vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    /// Build from raw coordinates `(x1, y1, x2, y2, x3, y3)`.
    #[inline]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2), Point::new(x3, y3))
    }

    /// Winding of A → B → C.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        orientation(&self.a, &self.b, &self.c)
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.orientation().is_collinear()
    }

    /// Vertices in evaluation order.
    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// Directed edges A→B, B→C, C→A.
    #[inline]
    pub fn edges(&self) -> [(Point, Point); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }
}
