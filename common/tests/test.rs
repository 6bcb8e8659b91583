use common::shapes::*;
use common::ShapeError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

#[test]
fn test_view_getters() {
    let view = View::new(0.0, 4.0, 0.0, 6.0).unwrap();
    assert_eq!(view.left_x(), 0.0);
    assert_eq!(view.right_x(), 4.0);
    assert_eq!(view.top_y(), 0.0);
    assert_eq!(view.bottom_y(), 6.0);
    assert_eq!(view.width(), 4.0);
    assert_eq!(view.height(), 6.0);
    assert_eq!(view.center(), (2.0, 3.0));
}

#[test]
fn test_degenerate_view_rejected() {
    assert!(matches!(
        View::new(4.0, 4.0, 0.0, 6.0),
        Err(ShapeError::DegenerateView { .. })
    ));
    assert!(View::new(5.0, 4.0, 0.0, 6.0).is_err());
    assert!(View::new(0.0, 4.0, 6.0, 6.0).is_err());
    assert!(View::new(0.0, 4.0, 7.0, 6.0).is_err());
    assert!(View::new(f64::NAN, 4.0, 0.0, 6.0).is_err());
    assert!(View::new(0.0, f64::INFINITY, 0.0, 6.0).is_err());
}

#[test]
fn test_shrink_by() {
    let view = View::new(0.0, 10.0, 0.0, 20.0).unwrap();
    let shrunk = view.shrink_by(2.0).unwrap();
    assert_eq!(shrunk, View::new(2.0, 8.0, 2.0, 18.0).unwrap());
    // Shrinking the narrow axis to nothing is degenerate.
    assert!(view.shrink_by(5.0).is_err());
    assert!(view.shrink_by(6.0).is_err());
}

#[test]
fn test_grow_by() {
    let view = View::new(0.0, 10.0, 0.0, 20.0).unwrap();
    assert_eq!(view.grow_by(2.0).unwrap(), View::new(-2.0, 12.0, -2.0, 22.0).unwrap());
    assert_eq!(view.grow_by(0.0).unwrap(), view);
}

#[test]
fn test_contains_point() {
    let view = View::new(0.0, 4.0, 0.0, 6.0).unwrap();
    assert!(view.contains_point(2.0, 3.0));
    assert!(view.contains_point(4.0, 6.0));
    assert!(!view.contains_point(6.0, 3.0));
    assert!(!view.contains_point(2.0, 8.0));
}

#[test]
fn test_intersects_shares_area_or_boundary() {
    let view = View::new(0.0, 10.0, 0.0, 10.0).unwrap();
    assert!(view.intersects(&View::new(5.0, 15.0, 5.0, 15.0).unwrap()));
    assert!(view.intersects(&View::new(10.0, 15.0, 0.0, 10.0).unwrap()));
    // A cross shape: neither view has a corner inside the other.
    assert!(view.intersects(&View::new(-5.0, 15.0, 4.0, 6.0).unwrap()));
    assert!(!view.intersects(&View::new(10.5, 15.0, 0.0, 10.0).unwrap()));
}

#[test]
fn test_contains_view() {
    let view = View::new(0.0, 10.0, 0.0, 10.0).unwrap();
    assert!(view.contains_view(&View::new(0.0, 10.0, 0.0, 10.0).unwrap()));
    assert!(view.contains_view(&View::new(2.0, 3.0, 2.0, 3.0).unwrap()));
    assert!(!view.contains_view(&View::new(2.0, 11.0, 2.0, 3.0).unwrap()));
}

#[test]
fn test_quadrants_split_at_midpoint() {
    let view = View::new(0.0, 10.0, 0.0, 20.0).unwrap();
    let [top_left, bottom_left, top_right, bottom_right] = view.quadrants();
    assert_eq!(top_left, View::new(0.0, 5.0, 0.0, 10.0).unwrap());
    assert_eq!(bottom_left, View::new(0.0, 5.0, 10.0, 20.0).unwrap());
    assert_eq!(top_right, View::new(5.0, 10.0, 0.0, 10.0).unwrap());
    assert_eq!(bottom_right, View::new(5.0, 10.0, 10.0, 20.0).unwrap());
}

#[test]
fn test_circle_overlaps_is_strict() {
    let a = Circle::new(0.0, 0.0, 5.0);
    assert!(a.overlaps(&Circle::new(9.0, 0.0, 5.0)));
    assert!(!a.overlaps(&Circle::new(10.0, 0.0, 5.0)));
    assert!(!a.overlaps(&Circle::new(0.0, 20.0, 5.0)));
    assert_eq!(a.distance(&Circle::new(3.0, 4.0, 1.0)), 5.0);
}

#[test]
fn test_circle_touches_view() {
    let view = View::new(0.0, 10.0, 0.0, 10.0).unwrap();
    // Centre inside.
    assert!(Circle::new(5.0, 5.0, 1.0).touches_view(&view));
    // Crosses the right edge.
    assert!(Circle::new(12.0, 5.0, 3.0).touches_view(&view));
    // Tangent to the right edge only.
    assert!(!Circle::new(12.0, 5.0, 2.0).touches_view(&view));
    // Covers the corner.
    assert!(Circle::new(12.0, 12.0, 3.0).touches_view(&view));
    // Near the corner but outside it.
    assert!(!Circle::new(12.0, 12.0, 2.5).touches_view(&view));
    // A zero radius circle touches only when its centre is inside.
    assert!(Circle::new(10.0, 10.0, 0.0).touches_view(&view));
}

#[test]
fn test_circle_validate() {
    assert!(Circle::new(1.0, 1.0, 0.0).validate().is_ok());
    assert_eq!(
        Circle::new(1.0, 1.0, -1.0).validate(),
        Err(ShapeError::InvalidCircleRadius { radius: -1.0 })
    );
    assert!(Circle::new(1.0, 1.0, f64::NAN).validate().is_err());
    assert!(matches!(
        Circle::new(f64::INFINITY, 1.0, 1.0).validate(),
        Err(ShapeError::NonFiniteCenter { .. })
    ));
}

#[test]
fn test_circle_value_equality_collapses_in_sets() {
    let mut set = HashSet::new();
    set.insert(Circle::new(1.0, 2.0, 3.0));
    set.insert(Circle::new(1.0, 2.0, 3.0));
    set.insert(Circle::new(0.0, 2.0, 3.0));
    set.insert(Circle::new(-0.0, 2.0, 3.0));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_display() {
    assert_eq!(Circle::new(1.5, 2.0, 3.0).to_string(), "1.5, 2, 3");
    assert_eq!(
        View::new(0.0, 1.0, 2.0, 3.0).unwrap().to_string(),
        "View [left_x=0, right_x=1, top_y=2, bottom_y=3]"
    );
}

#[test]
fn test_random_circle_center_inside() {
    let view = View::new(0.0, 60.0, 0.0, 80.0).unwrap();
    let radius = 5.0;

    // Use a fixed seed for reproducibility.
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    for _ in 0..100 {
        let (x, y) = view.random_circle_center(radius, &mut rng);
        assert!(view.shrink_by(radius - 1e-9).unwrap().contains_point(x, y));
    }
}

#[test]
fn test_random_circle_center_small_view() {
    let view = View::new(0.0, 2.0, 0.0, 2.0).unwrap();
    let radius = 2.0;

    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    let (x, y) = view.random_circle_center(radius, &mut rng);
    // The generated coordinates should be clamped to the left/top of the view.
    assert_eq!(x, view.left_x() + radius);
    assert_eq!(y, view.top_y() + radius);
}
