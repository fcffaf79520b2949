use super::*;

fn commands(d: &str) -> Vec<AbsCommand> {
    translate(d)
        .unwrap()
        .into_iter()
        .map(|s| s.command)
        .collect()
}

#[test]
fn empty_and_blank_input_translate_to_nothing() {
    assert!(translate("").unwrap().is_empty());
    assert!(translate("   \n\t").unwrap().is_empty());
}

#[test]
fn relative_commands_become_absolute() {
    assert_eq!(
        commands("m 10 20 l 5 5 h 10 v -5"),
        vec![
            AbsCommand::MoveTo { x: 10.0, y: 20.0 },
            AbsCommand::LineTo { x: 15.0, y: 25.0 },
            AbsCommand::HorizontalLineTo { x: 25.0 },
            AbsCommand::VerticalLineTo { y: 20.0 },
        ]
    );
}

#[test]
fn implicit_lineto_after_move_is_resolved() {
    assert_eq!(
        commands("M 0 0 10 0 10 10"),
        vec![
            AbsCommand::MoveTo { x: 0.0, y: 0.0 },
            AbsCommand::LineTo { x: 10.0, y: 0.0 },
            AbsCommand::LineTo { x: 10.0, y: 10.0 },
        ]
    );
}

#[test]
fn smooth_variants_keep_their_kind() {
    let cmds = commands("M0 0 c 1 1 2 2 3 3 s 1 1 2 2 q 1 0 2 0 t 2 0");
    assert_eq!(
        cmds,
        vec![
            AbsCommand::MoveTo { x: 0.0, y: 0.0 },
            AbsCommand::CurveTo {
                x1: 1.0,
                y1: 1.0,
                x2: 2.0,
                y2: 2.0,
                x: 3.0,
                y: 3.0
            },
            AbsCommand::SmoothCurveTo {
                x2: 4.0,
                y2: 4.0,
                x: 5.0,
                y: 5.0
            },
            AbsCommand::QuadTo {
                x1: 6.0,
                y1: 5.0,
                x: 7.0,
                y: 5.0
            },
            AbsCommand::SmoothQuadTo { x: 9.0, y: 5.0 },
        ]
    );
    let codes: String = cmds.iter().map(AbsCommand::code).collect();
    assert_eq!(codes, "MCSQT");
}

#[test]
fn arc_endpoint_is_resolved_but_radii_are_kept() {
    assert_eq!(
        commands("M10 10 a 5 6 30 1 0 10 0"),
        vec![
            AbsCommand::MoveTo { x: 10.0, y: 10.0 },
            AbsCommand::ArcTo {
                rx: 5.0,
                ry: 6.0,
                x_axis_rotation: 30.0,
                large_arc: true,
                sweep: false,
                x: 20.0,
                y: 10.0
            },
        ]
    );
}

#[test]
fn close_path_returns_to_subpath_start() {
    let segs = translate("M 5 5 l 10 0 l 0 10 z l 1 1").unwrap();
    let close = &segs[3];
    assert_eq!(close.command, AbsCommand::ClosePath);
    assert_eq!(close.from, Point::new(15.0, 15.0));
    assert_eq!(close.to, Point::new(5.0, 5.0));
    assert_eq!(segs[4].command, AbsCommand::LineTo { x: 6.0, y: 6.0 });
}

#[test]
fn segments_track_from_and_to_points() {
    let segs = translate("M 1 2 H 7 V 9").unwrap();
    assert_eq!(segs[1].from, Point::new(1.0, 2.0));
    assert_eq!(segs[1].to, Point::new(7.0, 2.0));
    assert_eq!(segs[2].to, Point::new(7.0, 9.0));
}

#[test]
fn malformed_data_is_a_parse_error() {
    let err = translate("M 10 10 L 20 x").unwrap_err();
    assert!(matches!(err, Path2dError::Parse { .. }));
    assert!(err.to_string().contains("invalid path data"));
}

#[test]
fn path_must_start_with_a_move() {
    assert!(translate("L 10 10").is_err());
}

#[test]
fn bez_path_reflects_smooth_cubic_control_points() {
    let segs = translate("M0 0 C 0 10 10 10 10 0 S 20 -10 20 0").unwrap();
    let path = to_bez_path(&segs);
    let els: Vec<kurbo::PathEl> = path.elements().to_vec();
    assert_eq!(els.len(), 3);
    match els[2] {
        kurbo::PathEl::CurveTo(c1, c2, p) => {
            assert_eq!(c1, Point::new(10.0, -10.0));
            assert_eq!(c2, Point::new(20.0, -10.0));
            assert_eq!(p, Point::new(20.0, 0.0));
        }
        other => panic!("expected cubic, got {other:?}"),
    }
}

#[test]
fn bez_path_smooth_quad_without_previous_quad_uses_current_point() {
    let segs = translate("M0 0 L 10 0 T 20 0").unwrap();
    let path = to_bez_path(&segs);
    match path.elements()[2] {
        kurbo::PathEl::QuadTo(c, p) => {
            assert_eq!(c, Point::new(10.0, 0.0));
            assert_eq!(p, Point::new(20.0, 0.0));
        }
        other => panic!("expected quad, got {other:?}"),
    }
}

#[test]
fn bez_path_arc_bounds_cover_the_half_circle() {
    use kurbo::Shape;

    let segs = translate("M 0 50 A 50 50 0 0 1 100 50").unwrap();
    let bounds = to_bez_path(&segs).bounding_box();
    assert!((bounds.x0 - 0.0).abs() < 1e-6);
    assert!((bounds.x1 - 100.0).abs() < 1e-6);
    assert!((bounds.y0 - 0.0).abs() < 0.5);
    assert!((bounds.y1 - 50.0).abs() < 1e-6);
}

#[test]
fn bez_path_restarts_subpath_after_close() {
    let segs = translate("M 0 0 L 10 0 Z L 0 10").unwrap();
    let path = to_bez_path(&segs);
    let els = path.elements();
    assert!(matches!(els[2], kurbo::PathEl::ClosePath));
    assert_eq!(els[3], kurbo::PathEl::MoveTo(Point::new(0.0, 0.0)));
    assert_eq!(els[4], kurbo::PathEl::LineTo(Point::new(0.0, 10.0)));
}
