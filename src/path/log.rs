use std::str::FromStr;

use crate::{
    foundation::{
        core::{BezPath, Point, Rect, Vec2},
        error::{Path2dError, Path2dResult},
    },
    path::{
        geometry::CanvasPath,
        translate::{AbsCommand, to_bez_path, translate},
    },
};

/// One recorded path-construction operation.
///
/// Arguments are stored exactly as given; validation happens when a context executes them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PathCommand {
    /// `moveTo(x, y)`
    MoveTo {
        /// Target x.
        x: f64,
        /// Target y.
        y: f64,
    },
    /// `lineTo(x, y)`
    LineTo {
        /// Target x.
        x: f64,
        /// Target y.
        y: f64,
    },
    /// `bezierCurveTo(cp1x, cp1y, cp2x, cp2y, x, y)`
    BezierCurveTo {
        /// First control point x.
        cp1x: f64,
        /// First control point y.
        cp1y: f64,
        /// Second control point x.
        cp2x: f64,
        /// Second control point y.
        cp2y: f64,
        /// Target x.
        x: f64,
        /// Target y.
        y: f64,
    },
    /// `quadraticCurveTo(cpx, cpy, x, y)`
    QuadraticCurveTo {
        /// Control point x.
        cpx: f64,
        /// Control point y.
        cpy: f64,
        /// Target x.
        x: f64,
        /// Target y.
        y: f64,
    },
    /// `arc(x, y, radius, startAngle, endAngle, anticlockwise)`
    Arc {
        /// Center x.
        x: f64,
        /// Center y.
        y: f64,
        /// Circle radius.
        radius: f64,
        /// Start angle in radians.
        start_angle: f64,
        /// End angle in radians.
        end_angle: f64,
        /// Draw counter-clockwise.
        #[serde(default)]
        anticlockwise: bool,
    },
    /// `arcTo(x1, y1, x2, y2, radius)`
    ArcTo {
        /// Corner point x.
        x1: f64,
        /// Corner point y.
        y1: f64,
        /// Second tangent point x.
        x2: f64,
        /// Second tangent point y.
        y2: f64,
        /// Corner radius.
        radius: f64,
    },
    /// `ellipse(x, y, radiusX, radiusY, rotation, startAngle, endAngle, anticlockwise)`
    Ellipse {
        /// Center x.
        x: f64,
        /// Center y.
        y: f64,
        /// Horizontal radius before rotation.
        radius_x: f64,
        /// Vertical radius before rotation.
        radius_y: f64,
        /// Rotation of the ellipse in radians.
        rotation: f64,
        /// Start angle in radians.
        start_angle: f64,
        /// End angle in radians.
        end_angle: f64,
        /// Draw counter-clockwise.
        #[serde(default)]
        anticlockwise: bool,
    },
    /// `rect(x, y, width, height)`
    Rect {
        /// Left edge.
        x: f64,
        /// Top edge.
        y: f64,
        /// Width, may be negative.
        width: f64,
        /// Height, may be negative.
        height: f64,
    },
    /// A path-description string kept verbatim and rendered as a self-contained document.
    RawPath {
        /// The path data.
        d: String,
    },
}

impl PathCommand {
    /// Short operation name, matching the canvas method it replays as.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MoveTo { .. } => "moveTo",
            Self::LineTo { .. } => "lineTo",
            Self::BezierCurveTo { .. } => "bezierCurveTo",
            Self::QuadraticCurveTo { .. } => "quadraticCurveTo",
            Self::Arc { .. } => "arc",
            Self::ArcTo { .. } => "arcTo",
            Self::Ellipse { .. } => "ellipse",
            Self::Rect { .. } => "rect",
            Self::RawPath { .. } => "path",
        }
    }
}

/// Ordered, append-only record of path operations.
///
/// Alongside the commands the log keeps a list of footprints: anchor points recorded by the
/// operations that establish a point. The first footprint is where [`PathLog::close_path`]
/// returns to.
///
/// Cloning (or [`PathLog::from_log`]) deep-copies both lists.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathLog {
    commands: Vec<PathCommand>,
    footprints: Vec<Point>,
}

impl PathLog {
    /// Empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Independent copy of `other`.
    pub fn from_log(other: &PathLog) -> Self {
        let mut log = Self::new();
        log.append_path(other);
        log
    }

    /// Log holding `d` as a single raw path.
    ///
    /// `d` is translated only to find its starting point; it is stored verbatim.
    pub fn from_svg(d: &str) -> Path2dResult<Self> {
        let mut log = Self::new();
        log.raw_path(d)?;
        Ok(log)
    }

    /// Rebuild a log from bare commands, recomputing footprints.
    pub fn from_commands(commands: impl IntoIterator<Item = PathCommand>) -> Path2dResult<Self> {
        let mut log = Self::new();
        for command in commands {
            log.push(command)?;
        }
        Ok(log)
    }

    /// Recorded commands in order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Recorded footprints in order.
    pub fn footprints(&self) -> &[Point] {
        &self.footprints
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when no command has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Append any command, recording its footprint.
    ///
    /// Only [`PathCommand::RawPath`] can fail, when its data does not parse.
    pub fn push(&mut self, command: PathCommand) -> Path2dResult<&mut Self> {
        match command {
            PathCommand::RawPath { d } => self.raw_path(&d),
            other => {
                if let Some(p) = footprint_of(&other) {
                    self.footprints.push(p);
                }
                self.commands.push(other);
                Ok(self)
            }
        }
    }

    /// Append a raw path-description string.
    pub fn raw_path(&mut self, d: &str) -> Path2dResult<&mut Self> {
        let segments = translate(d)?;
        if let Some(first) = segments.first()
            && let AbsCommand::MoveTo { x, y } = first.command
        {
            self.footprints.push(Point::new(x, y));
        }
        self.commands.push(PathCommand::RawPath { d: d.to_string() });
        Ok(self)
    }

    /// Concatenate another log's commands and footprints onto this one.
    pub fn append_path(&mut self, other: &PathLog) -> &mut Self {
        self.footprints.extend_from_slice(&other.footprints);
        self.commands.extend(other.commands.iter().cloned());
        self
    }

    /// Move back to the first recorded footprint. No-op when nothing was recorded.
    pub fn close_path(&mut self) -> &mut Self {
        if let Some(&p) = self.footprints.first() {
            self.move_to(p.x, p.y);
        }
        self
    }

    /// Record `moveTo`.
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.record(PathCommand::MoveTo { x, y })
    }

    /// Record `lineTo`.
    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.record(PathCommand::LineTo { x, y })
    }

    /// Record `bezierCurveTo`.
    pub fn bezier_curve_to(
        &mut self,
        cp1x: f64,
        cp1y: f64,
        cp2x: f64,
        cp2y: f64,
        x: f64,
        y: f64,
    ) -> &mut Self {
        self.record(PathCommand::BezierCurveTo {
            cp1x,
            cp1y,
            cp2x,
            cp2y,
            x,
            y,
        })
    }

    /// Record `quadraticCurveTo`.
    pub fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) -> &mut Self {
        self.record(PathCommand::QuadraticCurveTo { cpx, cpy, x, y })
    }

    /// Record `arc`.
    pub fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) -> &mut Self {
        self.record(PathCommand::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        })
    }

    /// Record `arcTo`. Does not record a footprint.
    pub fn arc_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, radius: f64) -> &mut Self {
        self.record(PathCommand::ArcTo {
            x1,
            y1,
            x2,
            y2,
            radius,
        })
    }

    /// Record `ellipse`.
    #[allow(clippy::too_many_arguments)]
    pub fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) -> &mut Self {
        self.record(PathCommand::Ellipse {
            x,
            y,
            radius_x,
            radius_y,
            rotation,
            start_angle,
            end_angle,
            anticlockwise,
        })
    }

    /// Record `rect`.
    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.record(PathCommand::Rect {
            x,
            y,
            width,
            height,
        })
    }

    fn record(&mut self, command: PathCommand) -> &mut Self {
        if let Some(p) = footprint_of(&command) {
            self.footprints.push(p);
        }
        self.commands.push(command);
        self
    }

    /// Centerline geometry of the whole log as one Bézier path.
    ///
    /// Raw paths are expanded here (and only here) so the result can be measured; stroke width,
    /// caps and joins are not part of it.
    pub fn to_bez_path(&self) -> Path2dResult<BezPath> {
        let mut path = CanvasPath::new();
        for command in &self.commands {
            match command {
                PathCommand::MoveTo { x, y } => path.move_to(Point::new(*x, *y)),
                PathCommand::LineTo { x, y } => path.line_to(Point::new(*x, *y)),
                PathCommand::BezierCurveTo {
                    cp1x,
                    cp1y,
                    cp2x,
                    cp2y,
                    x,
                    y,
                } => path.curve_to(
                    Point::new(*cp1x, *cp1y),
                    Point::new(*cp2x, *cp2y),
                    Point::new(*x, *y),
                ),
                PathCommand::QuadraticCurveTo { cpx, cpy, x, y } => {
                    path.quad_to(Point::new(*cpx, *cpy), Point::new(*x, *y))
                }
                PathCommand::Arc {
                    x,
                    y,
                    radius,
                    start_angle,
                    end_angle,
                    anticlockwise,
                } => path.arc(
                    Point::new(*x, *y),
                    *radius,
                    *start_angle,
                    *end_angle,
                    *anticlockwise,
                )?,
                PathCommand::ArcTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    radius,
                } => path.arc_to(Point::new(*x1, *y1), Point::new(*x2, *y2), *radius)?,
                PathCommand::Ellipse {
                    x,
                    y,
                    radius_x,
                    radius_y,
                    rotation,
                    start_angle,
                    end_angle,
                    anticlockwise,
                } => path.ellipse(
                    Point::new(*x, *y),
                    Vec2::new(*radius_x, *radius_y),
                    *rotation,
                    *start_angle,
                    *end_angle,
                    *anticlockwise,
                )?,
                PathCommand::Rect {
                    x,
                    y,
                    width,
                    height,
                } => path.rect(*x, *y, *width, *height),
                PathCommand::RawPath { d } => {
                    let raw = to_bez_path(&translate(d)?);
                    for el in raw.elements() {
                        match *el {
                            kurbo::PathEl::MoveTo(p) => path.move_to(p),
                            kurbo::PathEl::LineTo(p) => path.line_to(p),
                            kurbo::PathEl::QuadTo(c, p) => path.quad_to(c, p),
                            kurbo::PathEl::CurveTo(c1, c2, p) => path.curve_to(c1, c2, p),
                            kurbo::PathEl::ClosePath => path.close_path(),
                        }
                    }
                }
            }
        }
        Ok(path.into_bez_path())
    }

    /// Closed-form bounds of the centerline, or `None` for a log with no geometry.
    pub fn bounds(&self) -> Path2dResult<Option<Rect>> {
        use kurbo::Shape;

        let path = self.to_bez_path()?;
        if path.elements().is_empty() {
            return Ok(None);
        }
        Ok(Some(path.bounding_box()))
    }
}

impl PathLog {
    /// Parse a JSON log: either a full serialized [`PathLog`] or a bare array of commands.
    ///
    /// A bare array is replayed through [`PathLog::push`] so its footprints are recomputed.
    pub fn from_json(json: &str) -> Path2dResult<Self> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum LogJson {
            Full(PathLog),
            Commands(Vec<PathCommand>),
        }

        match serde_json::from_str(json).map_err(|e| Path2dError::serde(e.to_string()))? {
            LogJson::Full(log) => Ok(log),
            LogJson::Commands(commands) => Self::from_commands(commands),
        }
    }

    /// Serialize the log, footprints included.
    pub fn to_json(&self) -> Path2dResult<String> {
        serde_json::to_string(self).map_err(|e| Path2dError::serde(e.to_string()))
    }
}

impl FromStr for PathLog {
    type Err = Path2dError;

    fn from_str(d: &str) -> Path2dResult<Self> {
        Self::from_svg(d)
    }
}

impl From<&PathLog> for PathLog {
    fn from(other: &PathLog) -> Self {
        Self::from_log(other)
    }
}

/// Anchor recorded for a structured command: the end point for segments, the center for arcs
/// and ellipses, the origin corner for rectangles, and nothing for `arcTo`.
fn footprint_of(command: &PathCommand) -> Option<Point> {
    match *command {
        PathCommand::MoveTo { x, y }
        | PathCommand::LineTo { x, y }
        | PathCommand::BezierCurveTo { x, y, .. }
        | PathCommand::QuadraticCurveTo { x, y, .. }
        | PathCommand::Arc { x, y, .. }
        | PathCommand::Ellipse { x, y, .. }
        | PathCommand::Rect { x, y, .. } => Some(Point::new(x, y)),
        PathCommand::ArcTo { .. } | PathCommand::RawPath { .. } => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/log.rs"]
mod tests;
