//! Tests for the rectangle type

use crate::coordinate::{Point, Rectangle};

#[test]
fn test_new_orders_bounds() {
    let rect = Rectangle::new(10.0, 20.0, 0.0, 5.0);
    assert_eq!(rect, Rectangle::new(0.0, 5.0, 10.0, 20.0));
    assert_eq!(rect.width(), 10.0);
    assert_eq!(rect.height(), 15.0);
}

#[test]
fn test_from_corners_any_drag_direction() {
    let dragged_up_left = Rectangle::from_corners(Point::new(50.0, 80.0), Point::new(10.0, 20.0));
    assert_eq!(dragged_up_left, Rectangle::new(10.0, 20.0, 50.0, 80.0));
}

#[test]
fn test_degenerate() {
    let click = Rectangle::from_corners(Point::new(3.0, 3.0), Point::new(3.0, 3.0));
    assert!(click.is_degenerate());

    let line = Rectangle::new(0.0, 0.0, 10.0, 0.0);
    assert!(line.is_degenerate());

    assert!(!Rectangle::new(0.0, 0.0, 1.0, 1.0).is_degenerate());
}

#[test]
fn test_ring_is_closed_and_clockwise_from_upper_left() {
    let ring = Rectangle::new(0.0, 0.0, 100.0, 50.0).ring();
    assert_eq!(ring[0], Point::new(0.0, 50.0));
    assert_eq!(ring[1], Point::new(100.0, 50.0));
    assert_eq!(ring[2], Point::new(100.0, 0.0));
    assert_eq!(ring[3], Point::new(0.0, 0.0));
    assert_eq!(ring[4], ring[0]);
}

#[test]
fn test_union_and_envelope() {
    let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    let b = Rectangle::new(5.0, -5.0, 20.0, 8.0);
    assert_eq!(a.union(&b), Rectangle::new(0.0, -5.0, 20.0, 10.0));

    assert!(Rectangle::envelope(&[]).is_none());
    let env = Rectangle::envelope(&[Point::new(3.0, 4.0), Point::new(-1.0, 9.0)]);
    assert_eq!(env, Some(Rectangle::new(-1.0, 4.0, 3.0, 9.0)));
}

#[test]
fn test_from_string() {
    let rect = Rectangle::from_string("100000, 450000,100500,450300").unwrap();
    assert_eq!(rect, Rectangle::new(100000.0, 450000.0, 100500.0, 450300.0));
    assert_eq!(rect.to_string(), "100000,450000,100500,450300");

    assert!(Rectangle::from_string("1,2,3").is_err());
    assert!(Rectangle::from_string("1,2,x,4").is_err());
}
