use resvg::tiny_skia;

use crate::{
    foundation::{
        core::{BezPath, Color, LineCap, LineJoin, PaintStyle, Point, Vec2},
        error::{Path2dError, Path2dResult},
    },
    path::geometry::CanvasPath,
    render::{
        bitmap::{Bitmap, demultiply_rgba8_in_place},
        context::{ImageData, RenderContext2d},
    },
};

/// CPU raster surface that is also its own 2-D context.
///
/// Pixels are premultiplied RGBA8 and painted with `tiny-skia`, anti-aliased. The path and
/// styling model follow the canvas rules implemented by [`CanvasPath`].
pub struct CpuCanvas {
    pixmap: tiny_skia::Pixmap,
    path: CanvasPath,
    style: PaintStyle,
    saved: Vec<PaintStyle>,
}

impl std::fmt::Debug for CpuCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuCanvas")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("style", &self.style)
            .field("saved", &self.saved.len())
            .finish()
    }
}

impl CpuCanvas {
    /// Transparent surface of `width x height` pixels.
    pub fn new(width: u32, height: u32) -> Path2dResult<Self> {
        let pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
            Path2dError::render(format!("failed to allocate {width}x{height} surface"))
        })?;
        Ok(Self {
            pixmap,
            path: CanvasPath::new(),
            style: PaintStyle::default(),
            saved: Vec::new(),
        })
    }

    /// Premultiplied RGBA8 bytes of the whole surface.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Copy of the surface as a [`Bitmap`].
    pub fn to_bitmap(&self) -> Bitmap {
        Bitmap {
            width: self.pixmap.width(),
            height: self.pixmap.height(),
            rgba8_premul: std::sync::Arc::new(self.pixmap.data().to_vec()),
        }
    }

    /// The path built since the last `begin_path`.
    pub fn current_path(&self) -> &BezPath {
        self.path.bez_path()
    }

    fn skia_path(&self) -> Option<tiny_skia::Path> {
        bezpath_to_skia(self.path.bez_path())
    }
}

impl RenderContext2d for CpuCanvas {
    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn save(&mut self) {
        self.saved.push(self.style);
    }

    fn restore(&mut self) {
        if let Some(style) = self.saved.pop() {
            self.style = style;
        }
    }

    fn begin_path(&mut self) {
        self.path = CanvasPath::new();
    }

    fn close_path(&mut self) {
        self.path.close_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to(Point::new(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.line_to(Point::new(x, y));
    }

    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64) {
        self.path.curve_to(
            Point::new(cp1x, cp1y),
            Point::new(cp2x, cp2y),
            Point::new(x, y),
        );
    }

    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
        self.path.quad_to(Point::new(cpx, cpy), Point::new(x, y));
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) -> Path2dResult<()> {
        self.path.arc(
            Point::new(x, y),
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        )
    }

    fn arc_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, radius: f64) -> Path2dResult<()> {
        self.path
            .arc_to(Point::new(x1, y1), Point::new(x2, y2), radius)
    }

    fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) -> Path2dResult<()> {
        self.path.ellipse(
            Point::new(x, y),
            Vec2::new(radius_x, radius_y),
            rotation,
            start_angle,
            end_angle,
            anticlockwise,
        )
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.path.rect(x, y, width, height);
    }

    fn stroke(&mut self) -> Path2dResult<()> {
        if self.style.stroke.is_transparent() {
            return Ok(());
        }
        let Some(path) = self.skia_path() else {
            return Ok(());
        };
        let paint = solid_paint(self.style.stroke);
        let stroke = tiny_skia::Stroke {
            width: self.style.line_width as f32,
            line_cap: skia_cap(self.style.line_cap),
            line_join: skia_join(self.style.line_join),
            ..tiny_skia::Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &paint,
            &stroke,
            tiny_skia::Transform::identity(),
            None,
        );
        Ok(())
    }

    fn fill(&mut self) -> Path2dResult<()> {
        if self.style.fill.is_transparent() {
            return Ok(());
        }
        let Some(path) = self.skia_path() else {
            return Ok(());
        };
        let paint = solid_paint(self.style.fill);
        self.pixmap.fill_path(
            &path,
            &paint,
            tiny_skia::FillRule::Winding,
            tiny_skia::Transform::identity(),
            None,
        );
        Ok(())
    }

    fn draw_image(&mut self, image: &Bitmap, x: i32, y: i32) -> Path2dResult<()> {
        if image.width == 0 || image.height == 0 {
            return Err(Path2dError::render("cannot draw an empty image"));
        }
        let src = tiny_skia::PixmapRef::from_bytes(&image.rgba8_premul, image.width, image.height)
            .ok_or_else(|| Path2dError::render("image byte length does not match its size"))?;
        self.pixmap.draw_pixmap(
            x,
            y,
            src,
            &tiny_skia::PixmapPaint::default(),
            tiny_skia::Transform::identity(),
            None,
        );
        Ok(())
    }

    fn get_image_data(&self, x: i32, y: i32, width: u32, height: u32) -> Path2dResult<ImageData> {
        if width == 0 || height == 0 {
            return Err(Path2dError::render(format!(
                "image data size {width}x{height} must be non-zero"
            )));
        }
        let src_w = i64::from(self.pixmap.width());
        let src_h = i64::from(self.pixmap.height());
        let src = self.pixmap.data();

        let mut data = vec![0u8; (width as usize) * (height as usize) * 4];
        for row in 0..i64::from(height) {
            let sy = i64::from(y) + row;
            if sy < 0 || sy >= src_h {
                continue;
            }
            let x0 = i64::from(x).max(0);
            let x1 = (i64::from(x) + i64::from(width)).min(src_w);
            if x0 >= x1 {
                continue;
            }
            let src_start = ((sy * src_w + x0) * 4) as usize;
            let src_end = ((sy * src_w + x1) * 4) as usize;
            let dst_start = ((row * i64::from(width) + (x0 - i64::from(x))) * 4) as usize;
            data[dst_start..dst_start + (src_end - src_start)]
                .copy_from_slice(&src[src_start..src_end]);
        }
        demultiply_rgba8_in_place(&mut data);

        Ok(ImageData {
            width,
            height,
            data,
        })
    }

    fn line_width(&self) -> f64 {
        self.style.line_width
    }

    fn set_line_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.style.line_width = width;
        }
    }

    fn line_cap(&self) -> LineCap {
        self.style.line_cap
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.style.line_cap = cap;
    }

    fn line_join(&self) -> LineJoin {
        self.style.line_join
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.style.line_join = join;
    }

    fn stroke_style(&self) -> Color {
        self.style.stroke
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.style.stroke = color;
    }

    fn fill_style(&self) -> Color {
        self.style.fill
    }

    fn set_fill_style(&mut self, color: Color) {
        self.style.fill = color;
    }
}

fn solid_paint(color: Color) -> tiny_skia::Paint<'static> {
    let mut paint = tiny_skia::Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

fn skia_cap(cap: LineCap) -> tiny_skia::LineCap {
    match cap {
        LineCap::Butt => tiny_skia::LineCap::Butt,
        LineCap::Round => tiny_skia::LineCap::Round,
        LineCap::Square => tiny_skia::LineCap::Square,
    }
}

fn skia_join(join: LineJoin) -> tiny_skia::LineJoin {
    match join {
        LineJoin::Miter => tiny_skia::LineJoin::Miter,
        LineJoin::Round => tiny_skia::LineJoin::Round,
        LineJoin::Bevel => tiny_skia::LineJoin::Bevel,
    }
}

/// `None` when the path has no drawable segment.
fn bezpath_to_skia(path: &BezPath) -> Option<tiny_skia::Path> {
    use kurbo::PathEl;

    let mut pb = tiny_skia::PathBuilder::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(p1, p2) => pb.quad_to(p1.x as f32, p1.y as f32, p2.x as f32, p2.y as f32),
            PathEl::CurveTo(p1, p2, p3) => pb.cubic_to(
                p1.x as f32,
                p1.y as f32,
                p2.x as f32,
                p2.y as f32,
                p3.x as f32,
                p3.y as f32,
            ),
            PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
