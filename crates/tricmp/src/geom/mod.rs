//! 2D points, triangles and the orientation primitive.
//!
//! Purpose
//! - Keep the geometric vocabulary small: a point is `nalgebra::Point2<f64>`,
//!   a triangle is an ordered vertex triple, orientation is a three-way sign.
//! - Tolerances come from `crate::cfg::EPSILON` only.

mod orient;
mod types;

pub use orient::{orientation, Orientation};
pub use types::{Point, Triangle};

#[cfg(test)]
mod tests;
