//! Raster bounding boxes for path-description strings.
//!
//! The path is rendered alone on an offscreen surface and the surface is scanned for ink. The
//! result follows the rasterizer, so it includes stroke width and cap/join geometry but is only
//! pixel-accurate.

use crate::{
    foundation::{
        core::{Color, LineCap, LineJoin, Rect},
        error::{Path2dError, Path2dResult},
        settings::ScanSettings,
    },
    path::translate::translate,
    render::{
        context::RenderContext2d,
        cpu::CpuCanvas,
        svg_doc::{PathDocument, PathRasterizer, ResvgRasterizer},
    },
};

/// Stroke width used for every scan.
const SCAN_LINE_WIDTH: f64 = 1.0;

/// Input to [`compute_bounding_box`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoundingBoxOptions {
    /// Path data to measure.
    pub d: String,
    /// Cap style used when rendering.
    pub line_cap: LineCap,
    /// Join style used when rendering.
    pub line_join: LineJoin,
    /// Stroke color; transparent disables the stroke.
    pub stroke_color: Color,
    /// Fill color; transparent disables the fill.
    pub fill_color: Color,
}

impl Default for BoundingBoxOptions {
    fn default() -> Self {
        Self {
            d: String::new(),
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            stroke_color: Color::BLACK,
            fill_color: Color::TRANSPARENT,
        }
    }
}

impl BoundingBoxOptions {
    /// Default options for `d`.
    pub fn new(d: impl Into<String>) -> Self {
        Self {
            d: d.into(),
            ..Self::default()
        }
    }
}

/// Integer box in the path's coordinate space.
///
/// A non-positive width or height means nothing was drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct BoundingBox {
    /// Left edge.
    pub x: i64,
    /// Top edge.
    pub y: i64,
    /// Horizontal extent.
    pub width: i64,
    /// Vertical extent.
    pub height: i64,
}

impl BoundingBox {
    /// The box reported for empty input.
    pub const ZERO: Self = Self {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    /// True when the box covers no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Float rectangle, or `None` for an empty box.
    pub fn to_rect(&self) -> Option<Rect> {
        if self.is_empty() {
            return None;
        }
        Some(Rect::new(
            self.x as f64,
            self.y as f64,
            (self.x + self.width) as f64,
            (self.y + self.height) as f64,
        ))
    }

    /// `(x, y, width, height)`.
    pub fn as_tuple(&self) -> (i64, i64, i64, i64) {
        (self.x, self.y, self.width, self.height)
    }
}

/// Scan a straight RGBA8 buffer for ink and report its extent.
///
/// A pixel is ink when any of its four channels is non-zero. The box is inset by one pixel on
/// the leading edges and shrunk by one on the extents; a buffer without ink reports negative
/// extents.
pub fn scan_ink_extent(data: &[u8], width: u32, height: u32) -> Path2dResult<BoundingBox> {
    let expected = (width as usize) * (height as usize) * 4;
    if data.len() != expected {
        return Err(Path2dError::render(format!(
            "pixel buffer has {} bytes, expected {expected} for {width}x{height}",
            data.len()
        )));
    }

    let (w, h) = (i64::from(width), i64::from(height));
    let mut left = w;
    let mut top = h;
    let mut right = 0i64;
    let mut bottom = 0i64;

    let mut i = 0usize;
    for y in 0..h {
        for x in 0..w {
            if data[i] != 0 || data[i + 1] != 0 || data[i + 2] != 0 || data[i + 3] != 0 {
                left = left.min(x);
                top = top.min(y);
                right = right.max(x);
                bottom = bottom.max(y);
            }
            i += 4;
        }
    }

    Ok(BoundingBox {
        x: left + 1,
        y: top + 1,
        width: right - left - 1,
        height: bottom - top - 1,
    })
}

/// Renders paths offscreen and measures their ink.
#[derive(Clone, Debug)]
pub struct BoundingBoxScanner<R = ResvgRasterizer> {
    settings: ScanSettings,
    rasterizer: R,
}

impl Default for BoundingBoxScanner {
    fn default() -> Self {
        Self::with_settings(ScanSettings::default())
    }
}

impl BoundingBoxScanner {
    /// Scanner using [`ScanSettings::from_env`].
    pub fn new() -> Self {
        Self::with_settings(ScanSettings::from_env())
    }

    /// Scanner with explicit settings.
    pub fn with_settings(settings: ScanSettings) -> Self {
        Self {
            settings: settings.clamped(),
            rasterizer: ResvgRasterizer,
        }
    }
}

impl<R: PathRasterizer> BoundingBoxScanner<R> {
    /// Scanner rendering through a custom rasterizer.
    pub fn with_rasterizer(settings: ScanSettings, rasterizer: R) -> Self {
        Self {
            settings: settings.clamped(),
            rasterizer,
        }
    }

    /// Active scan settings.
    pub fn settings(&self) -> ScanSettings {
        self.settings
    }

    /// Bounding box of `opts.d`, or [`BoundingBox::ZERO`] for an empty string.
    ///
    /// Whitespace-only data is rendered like any other path and leaves no ink.
    #[tracing::instrument(skip_all, fields(d_len = opts.d.len()))]
    pub fn compute(&self, opts: &BoundingBoxOptions) -> Path2dResult<BoundingBox> {
        if opts.d.is_empty() {
            return Ok(BoundingBox::ZERO);
        }
        translate(&opts.d)?;

        let ScanSettings { width, height } = self.settings;
        let doc = PathDocument {
            d: &opts.d,
            width,
            height,
            line_width: SCAN_LINE_WIDTH,
            line_cap: opts.line_cap,
            line_join: opts.line_join,
            stroke: opts.stroke_color,
            fill: Some(opts.fill_color),
        };
        let bitmap = self.rasterizer.rasterize(&doc)?;

        let mut canvas = CpuCanvas::new(width, height)?;
        canvas.draw_image(&bitmap, 0, 0)?;
        let pixels = canvas.get_image_data(0, 0, width, height)?;

        let bbox = scan_ink_extent(&pixels.data, pixels.width, pixels.height)?;
        if bbox.is_empty() {
            tracing::debug!(?bbox, "path left no ink");
        }
        Ok(bbox)
    }
}

/// Bounding box of `opts.d` with the default scanner.
pub fn compute_bounding_box(opts: &BoundingBoxOptions) -> Path2dResult<BoundingBox> {
    BoundingBoxScanner::new().compute(opts)
}

#[cfg(test)]
#[path = "../tests/unit/bbox.rs"]
mod tests;
