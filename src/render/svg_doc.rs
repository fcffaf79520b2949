//! Standalone single-path SVG documents and their rasterization.

use std::fmt::Write as _;

use anyhow::Context;

use crate::{
    foundation::{
        core::{Color, LineCap, LineJoin},
        error::{Path2dError, Path2dResult},
    },
    render::bitmap::Bitmap,
};

/// A minimal SVG document holding exactly one `<path>`.
#[derive(Clone, Debug, PartialEq)]
pub struct PathDocument<'a> {
    /// Path data, inserted verbatim (XML-escaped).
    pub d: &'a str,
    /// Document width in pixels.
    pub width: u32,
    /// Document height in pixels.
    pub height: u32,
    /// `stroke-width`.
    pub line_width: f64,
    /// `stroke-linecap`.
    pub line_cap: LineCap,
    /// `stroke-linejoin`.
    pub line_join: LineJoin,
    /// `stroke`.
    pub stroke: Color,
    /// `fill`; `None` renders as `fill="none"`.
    pub fill: Option<Color>,
}

impl PathDocument<'_> {
    /// Serialize to SVG markup.
    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(self.d.len() + 256);
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height,
        );
        let _ = write!(out, r#"<path d="{}""#, escape_attr(self.d));
        paint_attr(&mut out, "stroke", Some(self.stroke));
        paint_attr(&mut out, "fill", self.fill);
        let _ = write!(
            out,
            r#" stroke-width="{}" stroke-linecap="{}" stroke-linejoin="{}"/></svg>"#,
            self.line_width, self.line_cap, self.line_join,
        );
        out
    }
}

fn paint_attr(out: &mut String, name: &str, color: Option<Color>) {
    match color {
        Some(c) if !c.is_transparent() => {
            let _ = write!(out, r#" {name}="{}""#, c.to_hex());
            if c.a != 255 {
                let _ = write!(out, r#" {name}-opacity="{}""#, c.opacity());
            }
        }
        _ => {
            let _ = write!(out, r#" {name}="none""#);
        }
    }
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Renders a [`PathDocument`] to pixels.
pub trait PathRasterizer {
    /// Rasterize `doc` into a bitmap of exactly `doc.width x doc.height`.
    fn rasterize(&self, doc: &PathDocument<'_>) -> Path2dResult<Bitmap>;
}

impl<R: PathRasterizer + ?Sized> PathRasterizer for &R {
    fn rasterize(&self, doc: &PathDocument<'_>) -> Path2dResult<Bitmap> {
        (**self).rasterize(doc)
    }
}

/// [`PathRasterizer`] backed by `usvg` + `resvg`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResvgRasterizer;

impl PathRasterizer for ResvgRasterizer {
    fn rasterize(&self, doc: &PathDocument<'_>) -> Path2dResult<Bitmap> {
        let svg = doc.to_svg();
        let opts = usvg::Options::default();
        let tree = usvg::Tree::from_str(&svg, &opts).context("parse path document")?;

        let mut pixmap =
            resvg::tiny_skia::Pixmap::new(doc.width, doc.height).ok_or_else(|| {
                Path2dError::render(format!(
                    "failed to allocate {}x{} document pixmap",
                    doc.width, doc.height
                ))
            })?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );

        Bitmap::from_premul(doc.width, doc.height, pixmap.take())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg_doc.rs"]
mod tests;
