use kurbo::{PathEl, Shape};

use super::*;

#[test]
fn line_to_without_current_point_acts_as_move() {
    let mut p = CanvasPath::new();
    p.line_to(Point::new(3.0, 4.0));
    assert_eq!(p.bez_path().elements(), &[PathEl::MoveTo(Point::new(3.0, 4.0))]);
    assert_eq!(p.current_point(), Some(Point::new(3.0, 4.0)));
}

#[test]
fn close_path_returns_current_point_to_subpath_start() {
    let mut p = CanvasPath::new();
    p.move_to(Point::new(1.0, 1.0));
    p.line_to(Point::new(5.0, 1.0));
    p.close_path();
    assert_eq!(p.current_point(), Some(Point::new(1.0, 1.0)));

    p.line_to(Point::new(1.0, 9.0));
    let els = p.bez_path().elements();
    assert_eq!(els[2], PathEl::ClosePath);
    assert_eq!(els[3], PathEl::MoveTo(Point::new(1.0, 1.0)));
    assert_eq!(els[4], PathEl::LineTo(Point::new(1.0, 9.0)));
}

#[test]
fn close_on_empty_path_is_a_noop() {
    let mut p = CanvasPath::new();
    p.close_path();
    assert!(p.is_empty());
}

#[test]
fn negative_radius_is_invalid_geometry() {
    let mut p = CanvasPath::new();
    let err = p
        .arc(Point::new(0.0, 0.0), -1.0, 0.0, PI, false)
        .unwrap_err();
    assert!(matches!(err, Path2dError::InvalidGeometry(_)));

    let err = p
        .arc_to(Point::new(0.0, 0.0), Point::new(1.0, 1.0), -2.0)
        .unwrap_err();
    assert!(matches!(err, Path2dError::InvalidGeometry(_)));

    let err = p
        .ellipse(
            Point::new(0.0, 0.0),
            Vec2::new(1.0, -1.0),
            0.0,
            0.0,
            PI,
            false,
        )
        .unwrap_err();
    assert!(matches!(err, Path2dError::InvalidGeometry(_)));
}

#[test]
fn full_circle_arc_spans_its_diameter() {
    let mut p = CanvasPath::new();
    p.arc(Point::new(50.0, 50.0), 10.0, 0.0, TAU, false).unwrap();
    let b = p.bez_path().bounding_box();
    assert!((b.x0 - 40.0).abs() < 0.15);
    assert!((b.x1 - 60.0).abs() < 0.15);
    assert!((b.y0 - 40.0).abs() < 0.15);
    assert!((b.y1 - 60.0).abs() < 0.15);
}

#[test]
fn arc_connects_from_current_point() {
    let mut p = CanvasPath::new();
    p.move_to(Point::new(0.0, 0.0));
    p.arc(Point::new(20.0, 0.0), 5.0, 0.0, PI / 2.0, false).unwrap();
    assert_eq!(p.bez_path().elements()[1], PathEl::LineTo(Point::new(25.0, 0.0)));
    let end = p.current_point().unwrap();
    assert!((end.x - 20.0).abs() < 1e-9);
    assert!((end.y - 5.0).abs() < 1e-9);
}

#[test]
fn canvas_sweep_normalizes_direction() {
    assert!((canvas_sweep(0.0, PI / 2.0, false) - PI / 2.0).abs() < 1e-12);
    assert!((canvas_sweep(0.0, PI / 2.0, true) + 3.0 * PI / 2.0).abs() < 1e-12);
    assert_eq!(canvas_sweep(0.0, 3.0 * TAU, false), TAU);
    assert_eq!(canvas_sweep(3.0 * TAU, 0.0, true), -TAU);
    assert_eq!(canvas_sweep(1.0, 1.0, false), 0.0);
}

#[test]
fn arc_to_rounds_a_right_angle_corner() {
    let mut p = CanvasPath::new();
    p.move_to(Point::new(0.0, 0.0));
    p.arc_to(Point::new(10.0, 0.0), Point::new(10.0, 10.0), 5.0)
        .unwrap();
    let PathEl::LineTo(t1) = p.bez_path().elements()[1] else {
        panic!("expected a line to the first tangent point");
    };
    assert!((t1.x - 5.0).abs() < 1e-9);
    assert!(t1.y.abs() < 1e-9);
    let end = p.current_point().unwrap();
    assert!((end.x - 10.0).abs() < 1e-9);
    assert!((end.y - 5.0).abs() < 1e-9);
    let b = p.bez_path().bounding_box();
    assert!(b.x1 <= 10.0 + 1e-6);
    assert!(b.y1 <= 5.0 + 1e-6);
}

#[test]
fn arc_to_with_collinear_points_draws_a_line() {
    let mut p = CanvasPath::new();
    p.move_to(Point::new(0.0, 0.0));
    p.arc_to(Point::new(5.0, 0.0), Point::new(10.0, 0.0), 3.0)
        .unwrap();
    assert_eq!(p.bez_path().elements()[1], PathEl::LineTo(Point::new(5.0, 0.0)));
}

#[test]
fn rect_is_closed_and_leaves_current_point_at_origin() {
    let mut p = CanvasPath::new();
    p.rect(2.0, 3.0, 10.0, 20.0);
    assert_eq!(p.bez_path().bounding_box(), kurbo::Rect::new(2.0, 3.0, 12.0, 23.0));
    assert_eq!(p.current_point(), Some(Point::new(2.0, 3.0)));
    assert_eq!(p.bez_path().elements().last(), Some(&PathEl::ClosePath));
}

#[test]
fn arc_after_rect_connects_from_rect_origin() {
    let mut p = CanvasPath::new();
    p.rect(10.0, 10.0, 20.0, 20.0);
    p.arc(Point::new(80.0, 80.0), 5.0, 0.0, 1.0, false).unwrap();

    let els = p.bez_path().elements();
    assert_eq!(els[4], PathEl::ClosePath);
    assert_eq!(els[5], PathEl::MoveTo(Point::new(10.0, 10.0)));
    assert_eq!(els[6], PathEl::LineTo(Point::new(85.0, 80.0)));
    assert!(matches!(els[7], PathEl::CurveTo(..)));
}

#[test]
fn ellipse_after_close_connects_from_subpath_start() {
    let mut p = CanvasPath::new();
    p.move_to(Point::new(0.0, 0.0));
    p.line_to(Point::new(10.0, 0.0));
    p.close_path();
    p.ellipse(
        Point::new(50.0, 50.0),
        Vec2::new(4.0, 2.0),
        0.0,
        0.0,
        PI,
        false,
    )
    .unwrap();

    let els = p.bez_path().elements();
    assert_eq!(els[3], PathEl::MoveTo(Point::new(0.0, 0.0)));
    assert_eq!(els[4], PathEl::LineTo(Point::new(54.0, 50.0)));
}
