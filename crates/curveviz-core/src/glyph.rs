//! Rendering primitives: background grid, vehicle glyphs and ambient markers.

use crate::color::{Color, Stroke};
use crate::geometry::Point;
use crate::surface::{Rect, Surface};

const BEAM_COLOR: Color = Color::rgb(255, 255, 200);
const HEADLIGHT_COLOR: Color = Color::rgba(255, 255, 0, 0.9);

/// Size of the tiny rectangle riding each ambient curve.
pub const AMBIENT_MARKER_SIZE: (f64, f64) = (12.0, 6.0);

/// Dimensions of a car-shaped glyph, in its local frame (nose along +x).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleStyle {
    pub length: f64,
    pub width: f64,
    pub corner_radius: f64,
    pub wheel: (f64, f64),
    /// Distance from the bumpers to the outer wheel edges.
    pub wheel_inset: f64,
    pub beam_length: f64,
    pub beam_half_width: f64,
    pub beam_alpha: f64,
    /// Headlight position measured back from the nose.
    pub headlight_setback: f64,
    pub headlight_radius: f64,
    /// Whether a soft glow ring is painted around the body.
    pub glow: bool,
}

impl VehicleStyle {
    /// The moving vehicle of the pose demo.
    pub const MARKER: VehicleStyle = VehicleStyle {
        length: 30.0,
        width: 14.0,
        corner_radius: 4.0,
        wheel: (6.0, 4.0),
        wheel_inset: 3.0,
        beam_length: 20.0,
        beam_half_width: 10.0,
        beam_alpha: 0.3,
        headlight_setback: 2.0,
        headlight_radius: 2.0,
        glow: false,
    };

    /// The draggable start/end poses.
    pub const POSE: VehicleStyle = VehicleStyle {
        length: 40.0,
        width: 20.0,
        corner_radius: 5.0,
        wheel: (8.0, 4.0),
        wheel_inset: 5.0,
        beam_length: 30.0,
        beam_half_width: 15.0,
        beam_alpha: 0.4,
        headlight_setback: 0.0,
        headlight_radius: 3.0,
        glow: true,
    };

    fn wheels(&self) -> [Rect; 4] {
        let (ww, wh) = self.wheel;
        let rear = -self.length / 2.0 + self.wheel_inset;
        let front = self.length / 2.0 - self.wheel_inset - ww;
        let left = -self.width / 2.0 - wh / 2.0;
        let right = self.width / 2.0 - wh / 2.0;
        [
            Rect::new(rear, left, ww, wh),
            Rect::new(rear, right, ww, wh),
            Rect::new(front, left, ww, wh),
            Rect::new(front, right, ww, wh),
        ]
    }
}

/// Strokes vertical and horizontal lines every `spacing` units, starting at 0.
pub fn draw_grid(surface: &mut dyn Surface, spacing: f64, stroke: Stroke) {
    if spacing <= 0.0 {
        return;
    }
    let size = surface.size();
    let mut x = 0.0;
    while x < size.width {
        surface.stroke_line(Point::new(x, 0.0), Point::new(x, size.height), stroke);
        x += spacing;
    }
    let mut y = 0.0;
    while y < size.height {
        surface.stroke_line(Point::new(0.0, y), Point::new(size.width, y), stroke);
        y += spacing;
    }
}

/// Draws a car glyph at `at`, rotated by `heading` radians.
pub fn draw_vehicle(
    surface: &mut dyn Surface,
    at: Point,
    heading: f64,
    color: Color,
    style: &VehicleStyle,
) {
    surface.save();
    surface.translate(at);
    surface.rotate(heading);

    surface.fill_rounded_rect(
        Rect::centered(style.length, style.width),
        style.corner_radius,
        color,
    );

    for wheel in style.wheels() {
        surface.fill_rect(wheel, Color::WHEEL);
    }

    let nose = style.length / 2.0;
    surface.fill_polygon(
        &[
            Point::new(nose, 0.0),
            Point::new(nose + style.beam_length, -style.beam_half_width),
            Point::new(nose + style.beam_length, style.beam_half_width),
        ],
        BEAM_COLOR.with_alpha(style.beam_alpha),
    );
    surface.fill_circle(
        Point::new(nose - style.headlight_setback, 0.0),
        style.headlight_radius,
        HEADLIGHT_COLOR,
    );

    if style.glow {
        surface.fill_radial_glow(
            Point::ORIGIN,
            style.length / 2.0,
            style.length,
            Color::TRANSPARENT,
            Color::WHITE.with_alpha(0.1),
        );
    }

    surface.restore();
}

/// Draws the small oriented rectangle that rides an ambient curve.
pub fn draw_ambient_marker(surface: &mut dyn Surface, at: Point, heading: f64, color: Color) {
    let (w, h) = AMBIENT_MARKER_SIZE;
    surface.save();
    surface.translate(at);
    surface.rotate(heading);
    surface.fill_rect(Rect::centered(w, h), color);
    surface.restore();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::Viewport;
    use crate::test_utils::{DrawOp, RecordingSurface};

    #[test]
    fn test_grid_line_count() {
        let mut surface = RecordingSurface::new(Viewport::new(100.0, 50.0));
        draw_grid(&mut surface, 20.0, Stroke::new(Color::GRID, 1.0));
        // x = 0,20,40,60,80 and y = 0,20,40
        assert_eq!(surface.count(|op| matches!(op, DrawOp::Line { .. })), 8);
    }

    #[test]
    fn test_grid_ignores_bad_spacing() {
        let mut surface = RecordingSurface::new(Viewport::new(100.0, 50.0));
        draw_grid(&mut surface, 0.0, Stroke::new(Color::GRID, 1.0));
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn test_marker_wheels_match_layout() {
        let wheels = VehicleStyle::MARKER.wheels();
        assert_eq!(wheels[0], Rect::new(-12.0, -9.0, 6.0, 4.0));
        assert_eq!(wheels[1], Rect::new(-12.0, 5.0, 6.0, 4.0));
        assert_eq!(wheels[2], Rect::new(6.0, -9.0, 6.0, 4.0));
        assert_eq!(wheels[3], Rect::new(6.0, 5.0, 6.0, 4.0));

        let wheels = VehicleStyle::POSE.wheels();
        assert_eq!(wheels[0], Rect::new(-15.0, -12.0, 8.0, 4.0));
        assert_eq!(wheels[3], Rect::new(7.0, 8.0, 8.0, 4.0));
    }

    #[test]
    fn test_vehicle_is_balanced_and_oriented() {
        let mut surface = RecordingSurface::new(Viewport::new(100.0, 100.0));
        draw_vehicle(
            &mut surface,
            Point::new(40.0, 50.0),
            1.25,
            Color::GREEN,
            &VehicleStyle::POSE,
        );
        assert_eq!(surface.ops.first(), Some(&DrawOp::Save));
        assert_eq!(surface.ops[1], DrawOp::Translate(Point::new(40.0, 50.0)));
        assert_eq!(surface.ops[2], DrawOp::Rotate(1.25));
        assert_eq!(surface.ops.last(), Some(&DrawOp::Restore));
        assert_eq!(surface.count(|op| matches!(op, DrawOp::Glow { .. })), 1);

        let mut surface = RecordingSurface::new(Viewport::new(100.0, 100.0));
        draw_vehicle(
            &mut surface,
            Point::ORIGIN,
            0.0,
            Color::BLUE,
            &VehicleStyle::MARKER,
        );
        assert_eq!(surface.count(|op| matches!(op, DrawOp::Glow { .. })), 0);
        assert_eq!(surface.count(|op| matches!(op, DrawOp::Rect { .. })), 4);
    }

    #[test]
    fn test_ambient_marker() {
        let mut surface = RecordingSurface::new(Viewport::new(100.0, 100.0));
        draw_ambient_marker(&mut surface, Point::new(1.0, 2.0), 0.5, Color::AMBER);
        assert!(surface.ops.contains(&DrawOp::Rect {
            rect: Rect::new(-6.0, -3.0, 12.0, 6.0),
            color: Color::AMBER,
        }));
    }
}
