use super::*;
use proptest::prelude::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn orientation_basic_turns() {
    let p1 = pt(0.0, 0.0);
    let p2 = pt(0.0, 1.0);
    assert!(orientation(&p1, &p2, &pt(0.0, 2.0)).is_collinear());
    // Left turn (x decreasing) is counter-clockwise.
    assert!(orientation(&p1, &p2, &pt(-1.0, 2.0)).is_ccw());
    assert!(orientation(&p1, &p2, &pt(1.0, 2.0)).is_cw());
}

#[test]
fn orientation_collinear_band() {
    let p1 = pt(0.0, 0.0);
    let p2 = pt(1.0, 0.0);
    // |val| = 1e-7 < EPSILON
    assert!(orientation(&p1, &p2, &pt(2.0, 1e-7)).is_collinear());
    // |val| = 1e-3 is well outside the band
    assert!(!orientation(&p1, &p2, &pt(2.0, 1e-3)).is_collinear());
}

#[test]
fn orientation_from_value_sign_convention() {
    assert_eq!(Orientation::from_value(-1.0), Orientation::CounterClockwise);
    assert_eq!(Orientation::from_value(1.0), Orientation::Clockwise);
    assert_eq!(Orientation::from_value(5e-7), Orientation::Collinear);
    assert_eq!(Orientation::from_value(-5e-7), Orientation::Collinear);
}

#[test]
fn reverse_is_involution() {
    for o in [
        Orientation::Clockwise,
        Orientation::CounterClockwise,
        Orientation::Collinear,
    ] {
        assert_eq!(o.reverse().reverse(), o);
    }
    assert_eq!(Orientation::Collinear.reverse(), Orientation::Collinear);
}

#[test]
fn triangle_helpers() {
    let t = Triangle::from_coords(0.0, 0.0, 10.0, 0.0, 0.0, 10.0);
    assert!(t.orientation().is_ccw());
    assert!(!t.is_degenerate());
    let flat = Triangle::from_coords(0.0, 0.0, 1.0, 1.0, 2.0, 2.0);
    assert!(flat.is_degenerate());
    let e = t.edges();
    assert_eq!(e[0], (t.a, t.b));
    assert_eq!(e[2], (t.c, t.a));
}

fn grid_point() -> impl Strategy<Value = Point> {
    (0i32..1000, 0i32..1000).prop_map(|(x, y)| pt(x as f64, y as f64))
}

proptest! {
    #[test]
    fn cyclic_rotation_preserves_orientation(a in grid_point(), b in grid_point(), c in grid_point()) {
        let o = orientation(&a, &b, &c);
        prop_assume!(!o.is_collinear());
        prop_assert_eq!(orientation(&b, &c, &a), o);
        prop_assert_eq!(orientation(&c, &a, &b), o);
    }

    #[test]
    fn single_swap_reverses_orientation(a in grid_point(), b in grid_point(), c in grid_point()) {
        let o = orientation(&a, &b, &c);
        prop_assume!(!o.is_collinear());
        prop_assert_eq!(orientation(&b, &a, &c), o.reverse());
        prop_assert_eq!(orientation(&a, &c, &b), o.reverse());
        prop_assert_eq!(orientation(&c, &b, &a), o.reverse());
    }
}
