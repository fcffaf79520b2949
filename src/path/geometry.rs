//! Canvas-semantics path construction on top of `kurbo::BezPath`.
//!
//! The canvas API differs from a raw Bézier path in a few places: segments issued without a
//! current point start a new subpath instead of failing, arcs draw a connecting line from the
//! current point, and `arcTo`/`rect` have their own construction rules. [`CanvasPath`]
//! implements those rules once so every context and the closed-form log bounds agree.

use std::f64::consts::{PI, TAU};

use crate::foundation::{
    core::{BezPath, Point, Vec2},
    error::{Path2dError, Path2dResult},
};

const ARC_TOLERANCE: f64 = 0.1;

/// A path under construction with canvas `CanvasRenderingContext2D` semantics.
#[derive(Clone, Debug, Default)]
pub struct CanvasPath {
    path: BezPath,
    subpath_start: Option<Point>,
    current: Option<Point>,
    needs_move: bool,
}

impl CanvasPath {
    /// Empty path with no current point.
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying Bézier path.
    pub fn bez_path(&self) -> &BezPath {
        &self.path
    }

    /// Consume the builder.
    pub fn into_bez_path(self) -> BezPath {
        self.path
    }

    /// Current point, if any segment has been issued.
    pub fn current_point(&self) -> Option<Point> {
        self.current
    }

    /// True when no segment has been recorded.
    pub fn is_empty(&self) -> bool {
        self.path.elements().is_empty()
    }

    /// Start a new subpath at `p`.
    pub fn move_to(&mut self, p: Point) {
        self.path.move_to(p);
        self.subpath_start = Some(p);
        self.current = Some(p);
        self.needs_move = false;
    }

    /// Straight segment; acts as a move when there is no current point.
    pub fn line_to(&mut self, p: Point) {
        if !self.ensure_subpath(p) {
            return;
        }
        self.path.line_to(p);
        self.current = Some(p);
    }

    /// Quadratic segment.
    pub fn quad_to(&mut self, c: Point, p: Point) {
        self.ensure_subpath(c);
        self.path.quad_to(c, p);
        self.current = Some(p);
    }

    /// Cubic segment.
    pub fn curve_to(&mut self, c1: Point, c2: Point, p: Point) {
        self.ensure_subpath(c1);
        self.path.curve_to(c1, c2, p);
        self.current = Some(p);
    }

    /// Close the current subpath; the current point returns to its start.
    pub fn close_path(&mut self) {
        if self.current.is_none() || self.needs_move {
            return;
        }
        self.path.close_path();
        self.current = self.subpath_start;
        self.needs_move = true;
    }

    /// Circular arc, see [`CanvasPath::ellipse`].
    pub fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) -> Path2dResult<()> {
        if radius < 0.0 {
            return Err(Path2dError::invalid_geometry(format!(
                "arc radius {radius} is negative"
            )));
        }
        self.ellipse(
            center,
            Vec2::new(radius, radius),
            0.0,
            start_angle,
            end_angle,
            anticlockwise,
        )
    }

    /// Elliptical arc around `center`, connected to the current point with a straight line.
    pub fn ellipse(
        &mut self,
        center: Point,
        radii: Vec2,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) -> Path2dResult<()> {
        if radii.x < 0.0 || radii.y < 0.0 {
            return Err(Path2dError::invalid_geometry(format!(
                "ellipse radii ({}, {}) must be non-negative",
                radii.x, radii.y
            )));
        }
        if ![center.x, center.y, radii.x, radii.y, rotation, start_angle, end_angle]
            .iter()
            .all(|v| v.is_finite())
        {
            return Ok(());
        }

        let sweep = canvas_sweep(start_angle, end_angle, anticlockwise);
        let arc = kurbo::Arc::new(center, radii, start_angle, sweep, rotation);
        let start = point_on_ellipse(center, radii, rotation, start_angle);

        match self.current {
            Some(_) if !self.needs_move => self.path.line_to(start),
            Some(cur) => {
                self.move_to(cur);
                self.path.line_to(start);
            }
            None => {
                self.path.move_to(start);
                self.subpath_start = Some(start);
                self.needs_move = false;
            }
        }
        for el in arc.append_iter(ARC_TOLERANCE) {
            self.path.push(el);
        }
        self.current = Some(point_on_ellipse(
            center,
            radii,
            rotation,
            start_angle + sweep,
        ));
        Ok(())
    }

    /// Arc of `radius` tangent to the lines `current -> p1` and `p1 -> p2`.
    pub fn arc_to(&mut self, p1: Point, p2: Point, radius: f64) -> Path2dResult<()> {
        if radius < 0.0 {
            return Err(Path2dError::invalid_geometry(format!(
                "arcTo radius {radius} is negative"
            )));
        }
        let p0 = match self.current {
            Some(p) => p,
            None => {
                self.move_to(p1);
                p1
            }
        };
        if self.needs_move {
            self.move_to(p0);
        }

        let v1 = p0 - p1;
        let v2 = p2 - p1;
        let cross = v1.cross(v2);
        if p0 == p1 || p1 == p2 || radius == 0.0 || cross.abs() < 1e-12 {
            self.line_to(p1);
            return Ok(());
        }

        let u1 = v1.normalize();
        let u2 = v2.normalize();
        let angle = u1.dot(u2).clamp(-1.0, 1.0).acos();
        let tangent_dist = radius / (angle / 2.0).tan();
        let t1 = p1 + u1 * tangent_dist;
        let t2 = p1 + u2 * tangent_dist;
        let center = p1 + (u1 + u2).normalize() * (radius / (angle / 2.0).sin());

        let start = (t1 - center).atan2();
        let end = (t2 - center).atan2();
        let mut sweep = end - start;
        if sweep > PI {
            sweep -= TAU;
        } else if sweep < -PI {
            sweep += TAU;
        }

        self.path.line_to(t1);
        let arc = kurbo::Arc::new(center, Vec2::new(radius, radius), start, sweep, 0.0);
        for el in arc.append_iter(ARC_TOLERANCE) {
            self.path.push(el);
        }
        self.current = Some(t2);
        Ok(())
    }

    /// Closed rectangle subpath; the current point ends at `(x, y)`.
    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.move_to(Point::new(x, y));
        self.path.line_to((x + width, y));
        self.path.line_to((x + width, y + height));
        self.path.line_to((x, y + height));
        self.path.close_path();
        self.current = Some(Point::new(x, y));
        self.needs_move = true;
    }

    /// Makes sure a subpath is open before a drawing segment. Returns `false` when the segment
    /// was consumed as the implicit move.
    fn ensure_subpath(&mut self, p: Point) -> bool {
        match self.current {
            None => {
                self.move_to(p);
                false
            }
            Some(cur) if self.needs_move => {
                self.move_to(cur);
                true
            }
            Some(_) => true,
        }
    }
}

/// Signed sweep for a canvas arc from `start` to `end`.
///
/// A requested turn of a full circle or more draws the whole circle; otherwise the angles are
/// normalized into a single turn in the requested direction.
pub fn canvas_sweep(start: f64, end: f64, anticlockwise: bool) -> f64 {
    if !anticlockwise && end - start >= TAU {
        TAU
    } else if anticlockwise && start - end >= TAU {
        -TAU
    } else if anticlockwise {
        -(start - end).rem_euclid(TAU)
    } else {
        (end - start).rem_euclid(TAU)
    }
}

fn point_on_ellipse(center: Point, radii: Vec2, rotation: f64, angle: f64) -> Point {
    let (s, c) = angle.sin_cos();
    let (rs, rc) = rotation.sin_cos();
    let x = radii.x * c;
    let y = radii.y * s;
    Point::new(center.x + x * rc - y * rs, center.y + x * rs + y * rc)
}

#[cfg(test)]
#[path = "../../tests/unit/path/geometry.rs"]
mod tests;
