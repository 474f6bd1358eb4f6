//! Poses and the viewport they live in.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, clamp_with_margin};

/// Upper bound of the orientation controls, in degrees.
pub const MAX_THETA_DEGREES: f64 = 359.0;

/// Which of the two demo poses an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoseId {
    Start,
    End,
}

impl PoseId {
    pub fn as_str(self) -> &'static str {
        match self {
            PoseId::Start => "start",
            PoseId::End => "end",
        }
    }
}

impl fmt::Display for PoseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vehicle placement: position plus heading.
///
/// `theta` is kept in degrees, the unit of the orientation controls, and is
/// only converted to radians when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub theta: f64,
}

impl Pose {
    pub const fn new(x: f64, y: f64, theta: f64) -> Self {
        Self { x, y, theta }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Heading in radians.
    pub fn heading(&self) -> f64 {
        self.theta * PI / 180.0
    }

    /// Merges a partial update; absent fields keep their value.
    pub fn apply(&mut self, patch: PosePatch) {
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(theta) = patch.theta {
            self.theta = clamp_theta(theta);
        }
    }
}

/// Partial pose update.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PosePatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub theta: Option<f64>,
}

impl PosePatch {
    pub fn position(point: Point) -> Self {
        Self {
            x: Some(point.x),
            y: Some(point.y),
            theta: None,
        }
    }

    pub fn theta(theta: f64) -> Self {
        Self {
            theta: Some(theta),
            ..Self::default()
        }
    }
}

/// Clamps an orientation input into `[0, 359]` degrees. No wraparound.
pub fn clamp_theta(theta: f64) -> f64 {
    if theta.is_nan() {
        return 0.0;
    }
    theta.clamp(0.0, MAX_THETA_DEGREES)
}

/// Drawing surface dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamps a point to stay `margin` away from every edge.
    pub fn clamp_point(&self, point: Point, margin: f64) -> Point {
        Point::new(
            clamp_with_margin(point.x, self.width, margin),
            clamp_with_margin(point.y, self.height, margin),
        )
    }

    /// Demo canvas size for a container of the given width: full width,
    /// height following `aspect` but never above `max_height`.
    pub fn fit_width(container_width: f64, max_height: f64, aspect: f64) -> Self {
        let width = container_width.max(0.0);
        Self::new(width, max_height.min(width * aspect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_partial() {
        let mut pose = Pose::new(10.0, 20.0, 45.0);
        pose.apply(PosePatch::theta(90.0));
        assert_eq!(pose, Pose::new(10.0, 20.0, 90.0));

        pose.apply(PosePatch::position(Point::new(1.0, 2.0)));
        assert_eq!(pose, Pose::new(1.0, 2.0, 90.0));

        pose.apply(PosePatch {
            y: Some(7.0),
            ..PosePatch::default()
        });
        assert_eq!(pose, Pose::new(1.0, 7.0, 90.0));
    }

    #[test]
    fn test_theta_clamped_to_control_range() {
        let mut pose = Pose::new(0.0, 0.0, 0.0);
        pose.apply(PosePatch::theta(400.0));
        assert!((pose.theta - MAX_THETA_DEGREES).abs() < f64::EPSILON);
        pose.apply(PosePatch::theta(-5.0));
        assert!(pose.theta.abs() < f64::EPSILON);
        assert!(clamp_theta(f64::NAN).abs() < f64::EPSILON);
    }

    #[test]
    fn test_heading_in_radians() {
        let pose = Pose::new(0.0, 0.0, 90.0);
        assert!((pose.heading() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_fit_width() {
        assert_eq!(Viewport::fit_width(800.0, 300.0, 0.6), Viewport::new(800.0, 300.0));
        assert_eq!(Viewport::fit_width(400.0, 300.0, 0.6), Viewport::new(400.0, 240.0));
    }

    #[test]
    fn test_clamp_point() {
        let vp = Viewport::new(500.0, 300.0);
        assert_eq!(vp.clamp_point(Point::new(0.0, 1000.0), 30.0), Point::new(30.0, 270.0));
    }
}
