//! Point-in-triangle membership tests.
//!
//! Two independent formulations that must agree on non-degenerate input:
//! - `barycentric`: solve for barycentric weights via Cramer's rule.
//! - `orientation`: same-side test against all three directed edges.
//!
//! Boundary points (vertices, edges) count as contained in both. Degenerate
//! triangles classify every point as outside in both.

mod barycentric;
mod orientation;

pub use barycentric::{barycentric_weights, point_in_triangle_barycentric};
pub use orientation::point_in_triangle_orientation;
