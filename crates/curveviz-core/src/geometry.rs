//! Cubic bezier math shared by the ambient animator and the pose demo.

use serde::{Deserialize, Serialize};

/// A point in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Returns the point shifted by `(dx, dy)`.
    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// A cubic bezier segment: two endpoints and two control points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub p0: Point,
    pub c1: Point,
    pub c2: Point,
    pub p1: Point,
}

impl CubicBezier {
    pub const fn new(p0: Point, c1: Point, c2: Point, p1: Point) -> Self {
        Self { p0, c1, c2, p1 }
    }

    /// Position at parameter `t`. See [`evaluate_cubic_bezier`].
    pub fn eval(&self, t: f64) -> Point {
        evaluate_cubic_bezier(self.p0, self.c1, self.c2, self.p1, t)
    }

    /// First derivative `(dx/dt, dy/dt)` at parameter `t`.
    pub fn deriv(&self, t: f64) -> (f64, f64) {
        let mt = 1.0 - t;
        let a = 3.0 * mt * mt;
        let b = 6.0 * mt * t;
        let c = 3.0 * t * t;
        (
            a * (self.c1.x - self.p0.x) + b * (self.c2.x - self.c1.x) + c * (self.p1.x - self.c2.x),
            a * (self.c1.y - self.p0.y) + b * (self.c2.y - self.c1.y) + c * (self.p1.y - self.c2.y),
        )
    }

    /// Heading of the curve at `t`, in radians.
    pub fn tangent_angle(&self, t: f64) -> f64 {
        let (dx, dy) = self.deriv(t);
        dy.atan2(dx)
    }

    /// Position and heading at `t`, the pair a direction-following marker needs.
    pub fn sample(&self, t: f64) -> (Point, f64) {
        (self.eval(t), self.tangent_angle(t))
    }
}

/// Evaluates a cubic bezier in the Bernstein basis.
///
/// `t` is expected in `[0, 1]`; values outside that range extrapolate and
/// clamping is the caller's job.
pub fn evaluate_cubic_bezier(p0: Point, c1: Point, c2: Point, p1: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    let b0 = mt * mt * mt;
    let b1 = 3.0 * mt * mt * t;
    let b2 = 3.0 * mt * t * t;
    let b3 = t * t * t;
    Point::new(
        b0 * p0.x + b1 * c1.x + b2 * c2.x + b3 * p1.x,
        b0 * p0.y + b1 * c1.y + b2 * c2.y + b3 * p1.y,
    )
}

/// Direction of travel along the cubic at `t`, via `atan2(dy/dt, dx/dt)`.
///
/// Always finite. Where the derivative vanishes the result degenerates to
/// `atan2(0, 0) == 0` and may flip between neighbouring frames.
pub fn tangent_angle(p0: Point, c1: Point, c2: Point, p1: Point, t: f64) -> f64 {
    CubicBezier::new(p0, c1, c2, p1).tangent_angle(t)
}

/// Clamps `value` into `[margin, extent - margin]`.
///
/// When the extent is too small to leave a margin on both sides the value
/// collapses to the midpoint instead of producing an inverted range.
pub fn clamp_with_margin(value: f64, extent: f64, margin: f64) -> f64 {
    let lo = margin;
    let hi = extent - margin;
    if hi < lo {
        return extent / 2.0;
    }
    value.clamp(lo, hi)
}
