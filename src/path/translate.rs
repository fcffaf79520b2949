//! Path-description string parsing.
//!
//! Tokenizing is delegated to `svgtypes`; this module only resolves relative coordinates into
//! absolute ones and keeps track of the current point and subpath start while doing so.

use crate::foundation::{
    core::{BezPath, Point, Vec2},
    error::{Path2dError, Path2dResult},
};

/// Absolute-coordinate path command.
///
/// Horizontal/vertical lines and the smooth curve forms keep their kind; only their coordinates
/// are resolved.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "code")]
pub enum AbsCommand {
    /// `M x y`
    #[serde(rename = "M")]
    MoveTo {
        /// Target x.
        x: f64,
        /// Target y.
        y: f64,
    },
    /// `L x y`
    #[serde(rename = "L")]
    LineTo {
        /// Target x.
        x: f64,
        /// Target y.
        y: f64,
    },
    /// `H x`
    #[serde(rename = "H")]
    HorizontalLineTo {
        /// Target x.
        x: f64,
    },
    /// `V y`
    #[serde(rename = "V")]
    VerticalLineTo {
        /// Target y.
        y: f64,
    },
    /// `C x1 y1 x2 y2 x y`
    #[serde(rename = "C")]
    CurveTo {
        /// First control point x.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x.
        x2: f64,
        /// Second control point y.
        y2: f64,
        /// Target x.
        x: f64,
        /// Target y.
        y: f64,
    },
    /// `S x2 y2 x y`; the first control point is the reflection of the previous one.
    #[serde(rename = "S")]
    SmoothCurveTo {
        /// Second control point x.
        x2: f64,
        /// Second control point y.
        y2: f64,
        /// Target x.
        x: f64,
        /// Target y.
        y: f64,
    },
    /// `Q x1 y1 x y`
    #[serde(rename = "Q")]
    QuadTo {
        /// Control point x.
        x1: f64,
        /// Control point y.
        y1: f64,
        /// Target x.
        x: f64,
        /// Target y.
        y: f64,
    },
    /// `T x y`; the control point is the reflection of the previous one.
    #[serde(rename = "T")]
    SmoothQuadTo {
        /// Target x.
        x: f64,
        /// Target y.
        y: f64,
    },
    /// `A rx ry rotation large-arc sweep x y`
    #[serde(rename = "A")]
    ArcTo {
        /// Ellipse x radius.
        rx: f64,
        /// Ellipse y radius.
        ry: f64,
        /// Ellipse x-axis rotation in degrees.
        x_axis_rotation: f64,
        /// Take the arc spanning more than 180 degrees.
        large_arc: bool,
        /// Draw in the positive-angle direction.
        sweep: bool,
        /// Target x.
        x: f64,
        /// Target y.
        y: f64,
    },
    /// `Z`
    #[serde(rename = "Z")]
    ClosePath,
}

impl AbsCommand {
    /// Single-letter SVG command code in its absolute (uppercase) form.
    pub fn code(&self) -> char {
        match self {
            Self::MoveTo { .. } => 'M',
            Self::LineTo { .. } => 'L',
            Self::HorizontalLineTo { .. } => 'H',
            Self::VerticalLineTo { .. } => 'V',
            Self::CurveTo { .. } => 'C',
            Self::SmoothCurveTo { .. } => 'S',
            Self::QuadTo { .. } => 'Q',
            Self::SmoothQuadTo { .. } => 'T',
            Self::ArcTo { .. } => 'A',
            Self::ClosePath => 'Z',
        }
    }
}

/// One translated command together with the current point it starts from.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    /// Current point before the command runs.
    pub from: Point,
    /// Current point after the command runs.
    pub to: Point,
    /// The absolute command.
    pub command: AbsCommand,
}

/// Parse `d` into absolute commands.
///
/// Empty or whitespace-only input yields no segments. The first syntax error aborts the whole
/// translation.
pub fn translate(d: &str) -> Path2dResult<Vec<Segment>> {
    use svgtypes::PathSegment as S;

    let mut out = Vec::new();
    let mut current = Point::ZERO;
    let mut subpath_start = Point::ZERO;

    for seg in svgtypes::PathParser::from(d) {
        let seg = seg.map_err(|e| parse_error(d, e))?;
        let from = current;
        let rel = |abs: bool, x: f64, y: f64| {
            if abs {
                Point::new(x, y)
            } else {
                Point::new(from.x + x, from.y + y)
            }
        };

        let command = match seg {
            S::MoveTo { abs, x, y } => {
                let p = rel(abs, x, y);
                subpath_start = p;
                AbsCommand::MoveTo { x: p.x, y: p.y }
            }
            S::LineTo { abs, x, y } => {
                let p = rel(abs, x, y);
                AbsCommand::LineTo { x: p.x, y: p.y }
            }
            S::HorizontalLineTo { abs, x } => AbsCommand::HorizontalLineTo {
                x: if abs { x } else { from.x + x },
            },
            S::VerticalLineTo { abs, y } => AbsCommand::VerticalLineTo {
                y: if abs { y } else { from.y + y },
            },
            S::CurveTo {
                abs,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let c1 = rel(abs, x1, y1);
                let c2 = rel(abs, x2, y2);
                let p = rel(abs, x, y);
                AbsCommand::CurveTo {
                    x1: c1.x,
                    y1: c1.y,
                    x2: c2.x,
                    y2: c2.y,
                    x: p.x,
                    y: p.y,
                }
            }
            S::SmoothCurveTo { abs, x2, y2, x, y } => {
                let c2 = rel(abs, x2, y2);
                let p = rel(abs, x, y);
                AbsCommand::SmoothCurveTo {
                    x2: c2.x,
                    y2: c2.y,
                    x: p.x,
                    y: p.y,
                }
            }
            S::Quadratic { abs, x1, y1, x, y } => {
                let c = rel(abs, x1, y1);
                let p = rel(abs, x, y);
                AbsCommand::QuadTo {
                    x1: c.x,
                    y1: c.y,
                    x: p.x,
                    y: p.y,
                }
            }
            S::SmoothQuadratic { abs, x, y } => {
                let p = rel(abs, x, y);
                AbsCommand::SmoothQuadTo { x: p.x, y: p.y }
            }
            S::EllipticalArc {
                abs,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => {
                let p = rel(abs, x, y);
                AbsCommand::ArcTo {
                    rx,
                    ry,
                    x_axis_rotation,
                    large_arc,
                    sweep,
                    x: p.x,
                    y: p.y,
                }
            }
            S::ClosePath { .. } => AbsCommand::ClosePath,
        };

        let to = match command {
            AbsCommand::MoveTo { x, y }
            | AbsCommand::LineTo { x, y }
            | AbsCommand::CurveTo { x, y, .. }
            | AbsCommand::SmoothCurveTo { x, y, .. }
            | AbsCommand::QuadTo { x, y, .. }
            | AbsCommand::SmoothQuadTo { x, y }
            | AbsCommand::ArcTo { x, y, .. } => Point::new(x, y),
            AbsCommand::HorizontalLineTo { x } => Point::new(x, from.y),
            AbsCommand::VerticalLineTo { y } => Point::new(from.x, y),
            AbsCommand::ClosePath => subpath_start,
        };
        current = to;
        out.push(Segment { from, to, command });
    }

    Ok(out)
}

fn parse_error(d: &str, err: svgtypes::Error) -> Path2dError {
    let position = match &err {
        svgtypes::Error::UnexpectedData(pos)
        | svgtypes::Error::InvalidNumber(pos)
        | svgtypes::Error::InvalidChar(_, pos)
        | svgtypes::Error::InvalidString(_, pos) => Some(*pos),
        svgtypes::Error::UnexpectedEndOfStream => Some(d.chars().count()),
        _ => None,
    };
    Path2dError::parse(format!("invalid path data: {err}"), position)
}

/// Flatten translated segments into a kurbo path.
///
/// Smooth curves reflect the previous control point (or use the current point when the previous
/// command was not of the same family). Arcs go through `kurbo::SvgArc`; degenerate arcs become
/// straight lines as SVG requires.
pub fn to_bez_path(segments: &[Segment]) -> BezPath {
    let mut path = BezPath::new();
    let mut last_cubic_ctrl: Option<Point> = None;
    let mut last_quad_ctrl: Option<Point> = None;
    let mut open = false;

    for seg in segments {
        let from = seg.from;
        if !open && !matches!(seg.command, AbsCommand::MoveTo { .. }) {
            // Drawing after `Z` (or before any move) restarts at the current point.
            path.move_to(from);
            open = true;
        }

        let mut cubic_ctrl = None;
        let mut quad_ctrl = None;
        match seg.command {
            AbsCommand::MoveTo { x, y } => {
                path.move_to((x, y));
                open = true;
            }
            AbsCommand::LineTo { .. }
            | AbsCommand::HorizontalLineTo { .. }
            | AbsCommand::VerticalLineTo { .. } => path.line_to(seg.to),
            AbsCommand::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                path.curve_to((x1, y1), (x2, y2), (x, y));
                cubic_ctrl = Some(Point::new(x2, y2));
            }
            AbsCommand::SmoothCurveTo { x2, y2, x, y } => {
                let c1 = last_cubic_ctrl.map_or(from, |c| reflect(c, from));
                path.curve_to(c1, Point::new(x2, y2), Point::new(x, y));
                cubic_ctrl = Some(Point::new(x2, y2));
            }
            AbsCommand::QuadTo { x1, y1, x, y } => {
                path.quad_to((x1, y1), (x, y));
                quad_ctrl = Some(Point::new(x1, y1));
            }
            AbsCommand::SmoothQuadTo { x, y } => {
                let c = last_quad_ctrl.map_or(from, |c| reflect(c, from));
                path.quad_to(c, Point::new(x, y));
                quad_ctrl = Some(c);
            }
            AbsCommand::ArcTo {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                ..
            } => {
                let svg_arc = kurbo::SvgArc {
                    from,
                    to: seg.to,
                    radii: Vec2::new(rx.abs(), ry.abs()),
                    x_rotation: x_axis_rotation.to_radians(),
                    large_arc,
                    sweep,
                };
                match kurbo::Arc::from_svg_arc(&svg_arc) {
                    Some(arc) => {
                        for el in arc.append_iter(0.1) {
                            path.push(el);
                        }
                    }
                    None => path.line_to(seg.to),
                }
            }
            AbsCommand::ClosePath => {
                path.close_path();
                open = false;
            }
        }
        last_cubic_ctrl = cubic_ctrl;
        last_quad_ctrl = quad_ctrl;
    }

    path
}

fn reflect(ctrl: Point, about: Point) -> Point {
    Point::new(2.0 * about.x - ctrl.x, 2.0 * about.y - ctrl.y)
}

#[cfg(test)]
#[path = "../../tests/unit/path/translate.rs"]
mod tests;
