//! The 2-D drawing context interface replay and bounding-box scanning are written against.

use std::ops::{Deref, DerefMut};

use crate::{
    foundation::{
        core::{Color, LineCap, LineJoin, PaintStyle},
        error::Path2dResult,
    },
    render::bitmap::Bitmap,
};

/// Straight-alpha RGBA8 pixels read back from a context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageData {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, straight alpha, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl ImageData {
    /// Pixel at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// A stateful 2-D drawing surface with canvas semantics.
///
/// Path-building calls mutate the context's current path; [`RenderContext2d::stroke`] and
/// [`RenderContext2d::fill`] paint it with the current style without clearing it. Styling
/// properties are part of the state that [`RenderContext2d::save`] and
/// [`RenderContext2d::restore`] push and pop.
pub trait RenderContext2d {
    /// Surface width in pixels.
    fn width(&self) -> u32;
    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Push the current styling state.
    fn save(&mut self);
    /// Pop the most recently saved styling state. Unbalanced calls are ignored.
    fn restore(&mut self);

    /// Discard the current path.
    fn begin_path(&mut self);
    /// Close the current subpath.
    fn close_path(&mut self);
    /// Start a new subpath.
    fn move_to(&mut self, x: f64, y: f64);
    /// Straight segment to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64);
    /// Cubic Bézier segment.
    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64);
    /// Quadratic Bézier segment.
    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64);
    /// Circular arc. Fails with `InvalidGeometry` on a negative radius.
    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) -> Path2dResult<()>;
    /// Tangent arc through the corner `(x1, y1)`.
    fn arc_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, radius: f64) -> Path2dResult<()>;
    /// Elliptical arc.
    #[allow(clippy::too_many_arguments)]
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
    ) -> Path2dResult<()>;
    /// Closed rectangle subpath.
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Stroke the current path.
    fn stroke(&mut self) -> Path2dResult<()>;
    /// Fill the current path (nonzero winding).
    fn fill(&mut self) -> Path2dResult<()>;

    /// Composite `image` with its top-left corner at `(x, y)`.
    fn draw_image(&mut self, image: &Bitmap, x: i32, y: i32) -> Path2dResult<()>;
    /// Read back a rectangle of pixels. Pixels outside the surface read as transparent.
    fn get_image_data(&self, x: i32, y: i32, width: u32, height: u32) -> Path2dResult<ImageData>;

    /// Current line width.
    fn line_width(&self) -> f64;
    /// Set the line width. Non-finite or non-positive values are ignored.
    fn set_line_width(&mut self, width: f64);
    /// Current line cap.
    fn line_cap(&self) -> LineCap;
    /// Set the line cap.
    fn set_line_cap(&mut self, cap: LineCap);
    /// Current line join.
    fn line_join(&self) -> LineJoin;
    /// Set the line join.
    fn set_line_join(&mut self, join: LineJoin);
    /// Current stroke color.
    fn stroke_style(&self) -> Color;
    /// Set the stroke color.
    fn set_stroke_style(&mut self, color: Color);
    /// Current fill color.
    fn fill_style(&self) -> Color;
    /// Set the fill color.
    fn set_fill_style(&mut self, color: Color);

    /// Snapshot of every styling property.
    fn paint_style(&self) -> PaintStyle {
        PaintStyle {
            line_width: self.line_width(),
            line_cap: self.line_cap(),
            line_join: self.line_join(),
            stroke: self.stroke_style(),
            fill: self.fill_style(),
        }
    }

    /// Apply every styling property from `style`.
    fn set_paint_style(&mut self, style: &PaintStyle) {
        self.set_line_width(style.line_width);
        self.set_line_cap(style.line_cap);
        self.set_line_join(style.line_join);
        self.set_stroke_style(style.stroke);
        self.set_fill_style(style.fill);
    }
}

/// Scoped `save`/`restore` pair. The state is restored when the guard drops, on every exit path.
pub struct SavedState<'a, C: RenderContext2d + ?Sized> {
    ctx: &'a mut C,
}

impl<'a, C: RenderContext2d + ?Sized> SavedState<'a, C> {
    /// Save `ctx` and borrow it for the lifetime of the guard.
    pub fn new(ctx: &'a mut C) -> Self {
        ctx.save();
        Self { ctx }
    }
}

impl<C: RenderContext2d + ?Sized> Deref for SavedState<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.ctx
    }
}

impl<C: RenderContext2d + ?Sized> DerefMut for SavedState<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.ctx
    }
}

impl<C: RenderContext2d + ?Sized> Drop for SavedState<'_, C> {
    fn drop(&mut self) {
        self.ctx.restore();
    }
}
