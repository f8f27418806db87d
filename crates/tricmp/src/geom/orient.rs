//! Orientation (winding) of three ordered points.

use super::types::Point;
use crate::cfg::EPSILON;

/// Winding of an ordered point triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

impl Orientation {
    /// Sign classification of a raw orientation value.
    ///
    /// The value is `(y2-y1)(x3-x2) - (x2-x1)(y3-y2)`, i.e. the negated cross
    /// product, so a negative value means counter-clockwise.
    #[inline]
    pub fn from_value(val: f64) -> Self {
        if val.abs() < EPSILON {
            Orientation::Collinear
        } else {
            Self::from_sign(val)
        }
    }

    /// Like `from_value` without the collinear band.
    #[inline]
    pub(crate) fn from_sign(val: f64) -> Self {
        if val < 0.0 {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        }
    }

    /// Opposite winding; `Collinear` maps to itself.
    #[inline]
    pub fn reverse(self) -> Self {
        match self {
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
            Orientation::Collinear => Orientation::Collinear,
        }
    }

    #[inline]
    pub fn is_cw(self) -> bool {
        self == Orientation::Clockwise
    }
    #[inline]
    pub fn is_ccw(self) -> bool {
        self == Orientation::CounterClockwise
    }
    #[inline]
    pub fn is_collinear(self) -> bool {
        self == Orientation::Collinear
    }
}

/// Orientation value of the triple (p1, p2, p3) before classification.
#[inline]
pub(crate) fn orientation_value(p1: &Point, p2: &Point, p3: &Point) -> f64 {
    (p2.y - p1.y) * (p3.x - p2.x) - (p2.x - p1.x) * (p3.y - p2.y)
}

/// Winding of walking `p1 → p2 → p3`, collinear within `EPSILON`.
#[inline]
pub fn orientation(p1: &Point, p2: &Point, p3: &Point) -> Orientation {
    Orientation::from_value(orientation_value(p1, p2, p3))
}
