//! Barycentric point-in-triangle test via Cramer's rule.

use crate::cfg::EPSILON;
use crate::geom::{Point, Triangle};

/// Barycentric weights `[w_a, w_b, w_c]` of `p` with respect to `tri`.
///
/// Returns `None` when the signed-area determinant is below `EPSILON` in
/// magnitude. Edge cross-terms are formed once and scaled by `1/D`.
#[inline]
pub fn barycentric_weights(tri: &Triangle, p: &Point) -> Option<[f64; 3]> {
    let (a, b, c) = (&tri.a, &tri.b, &tri.c);

    let by_cy = b.y - c.y;
    let cx_bx = c.x - b.x;
    let bxcy_cxby = b.x * c.y - c.x * b.y;
    let cy_ay = c.y - a.y;
    let ax_cx = a.x - c.x;
    let cxay_axcy = c.x * a.y - a.x * c.y;
    let ay_by = a.y - b.y;
    let bx_ax = b.x - a.x;
    let axby_bxay = a.x * b.y - b.x * a.y;

    let det = a.x * by_cy + b.x * cy_ay + c.x * ay_by;
    if det.abs() < EPSILON {
        return None;
    }
    let inv = 1.0 / det;

    Some([
        (p.x * by_cy + p.y * cx_bx + bxcy_cxby) * inv,
        (p.x * cy_ay + p.y * ax_cx + cxay_axcy) * inv,
        (p.x * ay_by + p.y * bx_ax + axby_bxay) * inv,
    ])
}

/// Barycentric membership: all weights non-negative, sum at most `1 + EPSILON`.
///
/// Only the upper bound of the sum carries a tolerance; the per-weight lower
/// bounds are exact. Degenerate triangles contain nothing.
#[inline]
pub fn point_in_triangle_barycentric(tri: &Triangle, p: &Point) -> bool {
    match barycentric_weights(tri, p) {
        Some([w1, w2, w3]) => {
            w1 >= 0.0 && w2 >= 0.0 && w3 >= 0.0 && w1 + w2 + w3 <= 1.0 + EPSILON
        }
        None => false,
    }
}
