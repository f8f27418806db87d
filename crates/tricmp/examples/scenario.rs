//! Classify a few hand-picked points against the right triangle (0,0), (10,0), (0,10).
//!
//! Usage:
//!   cargo run -p tricmp --example scenario

use tricmp::prelude::*;

fn main() {
    let tri = Triangle::from_coords(0.0, 0.0, 10.0, 0.0, 0.0, 10.0);
    let queries = [
        ("inside", Point::new(1.0, 1.0)),
        ("outside", Point::new(20.0, 20.0)),
        ("on edge A-B", Point::new(5.0, 0.0)),
        ("at vertex A", Point::new(0.0, 0.0)),
        ("1e-9 past B-C", Point::new(5.000_000_001, 5.0)),
    ];
    println!("triangle winding: {:?}", tri.orientation());
    for (name, p) in queries {
        println!(
            "{name:>14}: barycentric={} orientation={}",
            point_in_triangle_barycentric(&tri, &p),
            point_in_triangle_orientation(&tri, &p)
        );
    }
}
