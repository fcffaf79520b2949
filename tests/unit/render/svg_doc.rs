use super::*;

fn doc(d: &str) -> PathDocument<'_> {
    PathDocument {
        d,
        width: 20,
        height: 10,
        line_width: 2.0,
        line_cap: LineCap::Round,
        line_join: LineJoin::Bevel,
        stroke: Color::BLACK,
        fill: None,
    }
}

#[test]
fn markup_carries_every_style_attribute() {
    let svg = doc("M0 0 L10 0").to_svg();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"width="20" height="10""#));
    assert!(svg.contains(r#"d="M0 0 L10 0""#));
    assert!(svg.contains(r##"stroke="#000000""##));
    assert!(svg.contains(r#"fill="none""#));
    assert!(svg.contains(r#"stroke-width="2""#));
    assert!(svg.contains(r#"stroke-linecap="round""#));
    assert!(svg.contains(r#"stroke-linejoin="bevel""#));
}

#[test]
fn translucent_and_transparent_colors() {
    let mut d = doc("M0 0");
    d.stroke = Color::TRANSPARENT;
    d.fill = Some(Color::rgba(255, 0, 0, 51));
    let svg = d.to_svg();
    assert!(svg.contains(r#"stroke="none""#));
    assert!(svg.contains(r##"fill="#ff0000""##));
    assert!(svg.contains(r#"fill-opacity="0.2""#));
}

#[test]
fn path_data_is_escaped() {
    let svg = doc(r#"M0 0"/><script/>"#).to_svg();
    assert!(!svg.contains("<script"));
    assert!(svg.contains("&quot;"));
}

#[test]
fn resvg_rasterizer_renders_a_stroke() {
    let bitmap = ResvgRasterizer.rasterize(&doc("M0 5 L20 5")).unwrap();
    assert_eq!((bitmap.width, bitmap.height), (20, 10));
    assert!(bitmap.pixel(10, 4).unwrap()[3] > 0);
    assert_eq!(bitmap.pixel(10, 0).unwrap()[3], 0);
}
