//! Drawing surface abstraction.
//!
//! Scenes are rendered against this trait so the engine never touches a
//! concrete canvas. The web client implements it over a 2D canvas context.

use crate::color::{Color, Stroke};
use crate::geometry::{CubicBezier, Point};
use crate::pose::Viewport;

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centered on the origin.
    pub fn centered(width: f64, height: f64) -> Self {
        Self::new(-width / 2.0, -height / 2.0, width, height)
    }
}

/// Immediate-mode 2D drawing operations.
///
/// Transform calls (`translate`, `rotate`) affect every following call until
/// the matching `restore`.
pub trait Surface {
    /// Current pixel size of the surface.
    fn size(&self) -> Viewport;

    /// Erases the whole surface to transparent.
    fn clear(&mut self);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Point);
    /// Rotates by `angle` radians.
    fn rotate(&mut self, angle: f64);

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke);
    fn stroke_cubic(&mut self, curve: &CubicBezier, stroke: Stroke);

    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Color);
    fn fill_polygon(&mut self, points: &[Point], color: Color);
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    /// Fills a disc of `outer_radius` with a radial gradient running from
    /// `inner` at `inner_radius` to `outer` at `outer_radius`.
    fn fill_radial_glow(
        &mut self,
        center: Point,
        inner_radius: f64,
        outer_radius: f64,
        inner: Color,
        outer: Color,
    );
}
