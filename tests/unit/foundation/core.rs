use super::*;

#[test]
fn color_parses_named_hex_and_transparent() {
    assert_eq!(Color::parse("black").unwrap(), Color::BLACK);
    assert_eq!(Color::parse("#ff0000").unwrap(), Color::rgba(255, 0, 0, 255));
    assert_eq!(Color::parse("#0f0").unwrap(), Color::rgba(0, 255, 0, 255));
    assert_eq!(Color::parse("transparent").unwrap(), Color::TRANSPARENT);
    assert_eq!(Color::parse(" none ").unwrap(), Color::TRANSPARENT);
}

#[test]
fn color_rejects_garbage() {
    let err = Color::parse("definitely-not-a-color").unwrap_err();
    assert!(err.to_string().contains("validation error:"));
}

#[test]
fn color_display_matches_canvas_serialization() {
    assert_eq!(Color::rgba(255, 0, 16, 255).to_string(), "#ff0010");
    assert_eq!(Color::TRANSPARENT.to_string(), "rgba(0, 0, 0, 0)");
    assert_eq!(Color::rgba(1, 2, 3, 0).to_string(), "rgba(1, 2, 3, 0)");
}

#[test]
fn color_serde_uses_strings() {
    let json = serde_json::to_string(&Color::rgba(0, 0, 255, 255)).unwrap();
    assert_eq!(json, "\"#0000ff\"");
    let back: Color = serde_json::from_str("\"red\"").unwrap();
    assert_eq!(back, Color::rgba(255, 0, 0, 255));
    assert!(serde_json::from_str::<Color>("\"nope nope\"").is_err());
}

#[test]
fn premultiplied_scales_channels_by_alpha() {
    assert_eq!(Color::rgba(255, 255, 255, 0).premultiplied(), [0, 0, 0, 0]);
    assert_eq!(Color::rgba(200, 100, 0, 255).premultiplied(), [200, 100, 0, 255]);
    assert_eq!(Color::rgba(255, 0, 0, 128).premultiplied(), [128, 0, 0, 128]);
}

#[test]
fn line_cap_and_join_keywords() {
    assert_eq!("round".parse::<LineCap>().unwrap(), LineCap::Round);
    assert_eq!("bevel".parse::<LineJoin>().unwrap(), LineJoin::Bevel);
    assert_eq!(LineCap::default().as_str(), "butt");
    assert_eq!(LineJoin::default().to_string(), "miter");
    assert!("pointy".parse::<LineCap>().is_err());
    assert!("".parse::<LineJoin>().is_err());
}

#[test]
fn paint_style_defaults_match_a_fresh_context() {
    let s = PaintStyle::default();
    assert_eq!(s.line_width, 1.0);
    assert_eq!(s.line_cap, LineCap::Butt);
    assert_eq!(s.line_join, LineJoin::Miter);
    assert_eq!(s.stroke, Color::BLACK);
    assert_eq!(s.fill, Color::BLACK);
    assert_eq!(PaintMode::default(), PaintMode::Stroke);
}
