//! Replaying recorded path logs onto a drawing context.

use crate::{
    foundation::{core::PaintMode, error::Path2dResult},
    path::log::{PathCommand, PathLog},
    render::{
        context::{RenderContext2d, SavedState},
        svg_doc::{PathDocument, PathRasterizer, ResvgRasterizer},
    },
};

/// Issues the drawing calls recorded in a [`PathLog`] on a [`RenderContext2d`].
///
/// Every recorded operation is painted on its own: the primitive is issued and immediately
/// stroked or filled. Raw path strings are rendered as standalone documents with the context's
/// current style and composited at the origin.
#[derive(Clone, Debug, Default)]
pub struct ReplayEngine<R = ResvgRasterizer> {
    rasterizer: R,
}

impl ReplayEngine {
    /// Engine rendering raw paths with `resvg`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: PathRasterizer> ReplayEngine<R> {
    /// Engine rendering raw paths with a custom rasterizer.
    pub fn with_rasterizer(rasterizer: R) -> Self {
        Self { rasterizer }
    }

    /// Replay `log` onto `ctx` in `mode`.
    ///
    /// Context state is saved before the first call and restored on every exit path. Errors from
    /// the context propagate unchanged; whatever was painted before the failure stays painted.
    #[tracing::instrument(skip_all, fields(commands = log.len(), ?mode))]
    pub fn draw<C: RenderContext2d + ?Sized>(
        &self,
        log: &PathLog,
        ctx: &mut C,
        mode: PaintMode,
    ) -> Path2dResult<()> {
        let mut ctx = SavedState::new(ctx);
        ctx.begin_path();

        for command in log.commands() {
            match command {
                PathCommand::RawPath { d } => self.draw_raw(&mut *ctx, d, mode)?,
                other => {
                    issue_primitive(&mut *ctx, other)?;
                    paint(&mut *ctx, mode)?;
                }
            }
        }
        Ok(())
    }

    fn draw_raw<C: RenderContext2d + ?Sized>(
        &self,
        ctx: &mut C,
        d: &str,
        mode: PaintMode,
    ) -> Path2dResult<()> {
        if d.trim().is_empty() {
            tracing::debug!("skipping blank raw path");
            return Ok(());
        }
        let style = ctx.paint_style();
        let doc = PathDocument {
            d,
            width: ctx.width(),
            height: ctx.height(),
            line_width: style.line_width,
            line_cap: style.line_cap,
            line_join: style.line_join,
            stroke: style.stroke,
            fill: match mode {
                PaintMode::Stroke => None,
                PaintMode::Fill => Some(style.fill),
            },
        };
        let bitmap = self.rasterizer.rasterize(&doc)?;
        tracing::trace!(
            width = bitmap.width,
            height = bitmap.height,
            "compositing raw path"
        );
        ctx.draw_image(&bitmap, 0, 0)
    }
}

fn issue_primitive<C: RenderContext2d + ?Sized>(
    ctx: &mut C,
    command: &PathCommand,
) -> Path2dResult<()> {
    match *command {
        PathCommand::MoveTo { x, y } => ctx.move_to(x, y),
        PathCommand::LineTo { x, y } => ctx.line_to(x, y),
        PathCommand::BezierCurveTo {
            cp1x,
            cp1y,
            cp2x,
            cp2y,
            x,
            y,
        } => ctx.bezier_curve_to(cp1x, cp1y, cp2x, cp2y, x, y),
        PathCommand::QuadraticCurveTo { cpx, cpy, x, y } => ctx.quadratic_curve_to(cpx, cpy, x, y),
        PathCommand::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        } => ctx.arc(x, y, radius, start_angle, end_angle, anticlockwise)?,
        PathCommand::ArcTo {
            x1,
            y1,
            x2,
            y2,
            radius,
        } => ctx.arc_to(x1, y1, x2, y2, radius)?,
        PathCommand::Ellipse {
            x,
            y,
            radius_x,
            radius_y,
            rotation,
            start_angle,
            end_angle,
            anticlockwise,
        } => ctx.ellipse(
            x,
            y,
            radius_x,
            radius_y,
            rotation,
            start_angle,
            end_angle,
            anticlockwise,
        )?,
        PathCommand::Rect {
            x,
            y,
            width,
            height,
        } => ctx.rect(x, y, width, height),
        PathCommand::RawPath { .. } => {}
    }
    Ok(())
}

fn paint<C: RenderContext2d + ?Sized>(ctx: &mut C, mode: PaintMode) -> Path2dResult<()> {
    match mode {
        PaintMode::Stroke => ctx.stroke(),
        PaintMode::Fill => ctx.fill(),
    }
}

/// Replay `log` onto `ctx` with the default engine.
pub fn draw<C: RenderContext2d + ?Sized>(
    log: &PathLog,
    ctx: &mut C,
    mode: PaintMode,
) -> Path2dResult<()> {
    ReplayEngine::new().draw(log, ctx, mode)
}

/// Something that can be painted on a context in a given mode.
pub trait Paintable {
    /// Paint `self` on `ctx`.
    fn paint(&self, ctx: &mut dyn RenderContext2d, mode: PaintMode) -> Path2dResult<()>;
}

/// The context's own current path, painted natively.
#[derive(Clone, Copy, Debug, Default)]
pub struct CurrentPath;

impl Paintable for CurrentPath {
    fn paint(&self, ctx: &mut dyn RenderContext2d, mode: PaintMode) -> Path2dResult<()> {
        paint(ctx, mode)
    }
}

impl Paintable for PathLog {
    fn paint(&self, ctx: &mut dyn RenderContext2d, mode: PaintMode) -> Path2dResult<()> {
        draw(self, ctx, mode)
    }
}

/// Stroke `target` on `ctx`: a [`PathLog`] is replayed, [`CurrentPath`] strokes natively.
pub fn stroke(ctx: &mut dyn RenderContext2d, target: &dyn Paintable) -> Path2dResult<()> {
    target.paint(ctx, PaintMode::Stroke)
}

/// Fill `target` on `ctx`: a [`PathLog`] is replayed, [`CurrentPath`] fills natively.
pub fn fill(ctx: &mut dyn RenderContext2d, target: &dyn Paintable) -> Path2dResult<()> {
    target.paint(ctx, PaintMode::Fill)
}

#[cfg(test)]
#[path = "../../tests/unit/render/replay.rs"]
mod tests;
