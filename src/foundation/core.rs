use std::{fmt, str::FromStr};

use crate::foundation::error::{Path2dError, Path2dResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Whether a path is outlined or filled when painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaintMode {
    /// Outline the path with the current stroke style.
    #[default]
    Stroke,
    /// Fill the path interior with the current fill style.
    Fill,
}

/// Shape drawn at the open ends of stroked segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    /// Flat end exactly at the endpoint.
    #[default]
    Butt,
    /// Half-disc centered on the endpoint.
    Round,
    /// Half-square extending past the endpoint.
    Square,
}

impl LineCap {
    /// Keyword used by both the canvas API and SVG `stroke-linecap`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

impl FromStr for LineCap {
    type Err = Path2dError;

    fn from_str(s: &str) -> Path2dResult<Self> {
        match s.trim() {
            "butt" => Ok(Self::Butt),
            "round" => Ok(Self::Round),
            "square" => Ok(Self::Square),
            other => Err(Path2dError::validation(format!(
                "unknown line cap '{other}'"
            ))),
        }
    }
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape drawn where two stroked segments meet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    /// Sharp corner, limited by the miter limit.
    #[default]
    Miter,
    /// Rounded corner.
    Round,
    /// Corner cut off by a straight edge.
    Bevel,
}

impl LineJoin {
    /// Keyword used by both the canvas API and SVG `stroke-linejoin`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

impl FromStr for LineJoin {
    type Err = Path2dError;

    fn from_str(s: &str) -> Path2dResult<Self> {
        match s.trim() {
            "miter" => Ok(Self::Miter),
            "round" => Ok(Self::Round),
            "bevel" => Ok(Self::Bevel),
            other => Err(Path2dError::validation(format!(
                "unknown line join '{other}'"
            ))),
        }
    }
}

impl fmt::Display for LineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Straight (non-premultiplied) RGBA8 color.
///
/// Parses any CSS color accepted by `svgtypes`, plus `transparent` and `none`. Serializes to the
/// same string form canvas contexts report for `strokeStyle`/`fillStyle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 is opaque).
    pub a: u8,
}

impl Color {
    /// Opaque black, the canvas default for both stroke and fill.
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Build a color from straight channel values.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a CSS color string.
    pub fn parse(s: &str) -> Path2dResult<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("transparent") || s.eq_ignore_ascii_case("none") {
            return Ok(Self::TRANSPARENT);
        }
        let c = svgtypes::Color::from_str(s)
            .map_err(|e| Path2dError::validation(format!("invalid color '{s}': {e}")))?;
        Ok(Self::rgba(c.red, c.green, c.blue, c.alpha))
    }

    /// True when nothing painted with this color would be visible.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Alpha as a unit fraction.
    pub fn opacity(self) -> f32 {
        f32::from(self.a) / 255.0
    }

    /// `#rrggbb`, ignoring alpha.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Premultiplied channels, rounding like the rest of the pixel pipeline.
    pub fn premultiplied(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }
}

impl FromStr for Color {
    type Err = Path2dError;

    fn from_str(s: &str) -> Path2dResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            f.write_str(&self.to_hex())
        } else {
            let alpha = format!("{:.3}", self.opacity());
            let alpha = alpha.trim_end_matches('0').trim_end_matches('.');
            let alpha = if alpha.is_empty() { "0" } else { alpha };
            write!(f, "rgba({}, {}, {}, {alpha})", self.r, self.g, self.b)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = Path2dError;

    fn try_from(s: String) -> Path2dResult<Self> {
        Self::parse(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

/// Snapshot of the styling properties a 2D context exposes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PaintStyle {
    /// Stroke width in user units.
    pub line_width: f64,
    /// Cap style for open segment ends.
    pub line_cap: LineCap,
    /// Join style between segments.
    pub line_join: LineJoin,
    /// Stroke color.
    pub stroke: Color,
    /// Fill color.
    pub fill: Color,
}

impl Default for PaintStyle {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            stroke: Color::BLACK,
            fill: Color::BLACK,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
