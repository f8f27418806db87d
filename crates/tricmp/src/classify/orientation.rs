//! Same-side point-in-triangle test against the three directed edges.

use crate::cfg::EPSILON;
use crate::geom::{Orientation, Point, Triangle};

#[inline]
fn coincides(v: &Point, p: &Point) -> bool {
    (v.x - p.x).abs() < EPSILON && (v.y - p.y).abs() < EPSILON
}

/// Closed bounding box of segment `e f`, endpoint order irrelevant.
#[inline]
fn within_segment_box(e: &Point, f: &Point, p: &Point) -> bool {
    ((p.x >= e.x && p.x <= f.x) || (p.x >= f.x && p.x <= e.x))
        && ((p.y >= e.y && p.y <= f.y) || (p.y >= f.y && p.y <= e.y))
}

/// Orientation of `p` relative to the directed edge `e → f`.
#[inline]
fn edge_value(e: &Point, f: &Point, p: &Point) -> f64 {
    (e.y - p.y) * (f.x - e.x) - (e.x - p.x) * (f.y - e.y)
}

/// Same-side membership test.
///
/// Order of checks:
/// 1. degenerate (collinear) triangle: `false`;
/// 2. `p` on a vertex (per-axis within `EPSILON`): `true`;
/// 3. edges A→B, B→C, C→A in turn: the first edge with `p` collinear decides
///    the answer alone via its bounding box;
/// 4. otherwise `p` is inside iff all three edge orientations agree.
pub fn point_in_triangle_orientation(tri: &Triangle, p: &Point) -> bool {
    if tri.is_degenerate() {
        return false;
    }
    if tri.vertices().iter().any(|v| coincides(v, p)) {
        return true;
    }

    let mut sides = [Orientation::Collinear; 3];
    for (side, (e, f)) in sides.iter_mut().zip(tri.edges().iter()) {
        let val = edge_value(e, f, p);
        if val.abs() < EPSILON {
            return within_segment_box(e, f, p);
        }
        *side = Orientation::from_sign(val);
    }
    sides[0] == sides[1] && sides[1] == sides[2]
}
