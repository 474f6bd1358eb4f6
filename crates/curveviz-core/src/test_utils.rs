//! Test doubles for the randomness and drawing seams.

use crate::color::{Color, Stroke};
use crate::geometry::{CubicBezier, Point};
use crate::pose::Viewport;
use crate::random::RandomSource;
use crate::surface::{Rect, Surface};

/// Replays a fixed list of unit samples, wrapping around when exhausted.
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let values: Vec<f64> = values.into_iter().collect();
        assert!(!values.is_empty(), "scripted random needs at least one value");
        Self { values, cursor: 0 }
    }

    /// How many samples have been drawn so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Save,
    Restore,
    Translate(Point),
    Rotate(f64),
    Line { from: Point, to: Point, stroke: Stroke },
    Cubic { curve: CubicBezier, stroke: Stroke },
    Rect { rect: Rect, color: Color },
    RoundedRect { rect: Rect, radius: f64, color: Color },
    Polygon { points: Vec<Point>, color: Color },
    Circle { center: Point, radius: f64, color: Color },
    Glow { center: Point, inner_radius: f64, outer_radius: f64 },
}

/// Surface that records every call instead of drawing.
pub struct RecordingSurface {
    pub size: Viewport,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(size: Viewport) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    pub fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    /// All cubic strokes, in draw order.
    pub fn cubics(&self) -> Vec<CubicBezier> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Cubic { curve, .. } => Some(*curve),
                _ => None,
            })
            .collect()
    }

    /// Translations, in draw order; each glyph starts with one.
    pub fn translations(&self) -> Vec<Point> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Translate(p) => Some(*p),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Viewport {
        self.size
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
    }

    fn translate(&mut self, offset: Point) {
        self.ops.push(DrawOp::Translate(offset));
    }

    fn rotate(&mut self, angle: f64) {
        self.ops.push(DrawOp::Rotate(angle));
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.ops.push(DrawOp::Line { from, to, stroke });
    }

    fn stroke_cubic(&mut self, curve: &CubicBezier, stroke: Stroke) {
        self.ops.push(DrawOp::Cubic {
            curve: *curve,
            stroke,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::Rect { rect, color });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Color) {
        self.ops.push(DrawOp::RoundedRect {
            rect,
            radius,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.ops.push(DrawOp::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_radial_glow(
        &mut self,
        center: Point,
        inner_radius: f64,
        outer_radius: f64,
        _inner: Color,
        _outer: Color,
    ) {
        self.ops.push(DrawOp::Glow {
            center,
            inner_radius,
            outer_radius,
        });
    }
}
