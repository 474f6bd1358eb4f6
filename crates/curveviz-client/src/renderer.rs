//! Canvas 2D implementation of the core drawing surface.

#![allow(deprecated)] // web-sys Canvas API deprecation warnings

use std::f64::consts::PI;

use curveviz_core::{Color, CubicBezier, Point, Rect, Stroke, Surface, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("canvas element is not mounted")]
    Unmounted,
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("failed to acquire 2d context: {0}")]
    Js(String),
}

impl From<JsValue> for SurfaceError {
    fn from(value: JsValue) -> Self {
        SurfaceError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

fn css(color: Color) -> JsValue {
    JsValue::from_str(&color.to_css())
}

/// Draws onto an `HtmlCanvasElement` through its 2D context.
///
/// The surface size is read from the canvas on every call, so resizing the
/// element is picked up without rebuilding the surface.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let context = canvas
            .get_context("2d")?
            .ok_or(SurfaceError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::NoContext)?;

        Ok(Self {
            canvas: canvas.clone(),
            context,
        })
    }

    /// Sets the backing store size in pixels. Fractional sizes are floored.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn resize(&self, viewport: Viewport) {
        self.canvas.set_width(viewport.width.max(0.0) as u32);
        self.canvas.set_height(viewport.height.max(0.0) as u32);
    }

    fn trace_rounded_rect(&self, rect: Rect, radius: f64) {
        let ctx = &self.context;
        let (left, top) = (rect.x, rect.y);
        let (right, bottom) = (rect.x + rect.width, rect.y + rect.height);
        let r = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);

        ctx.begin_path();
        ctx.move_to(left + r, top);
        ctx.line_to(right - r, top);
        let _ = ctx.arc_to(right, top, right, top + r, r);
        ctx.line_to(right, bottom - r);
        let _ = ctx.arc_to(right, bottom, right - r, bottom, r);
        ctx.line_to(left + r, bottom);
        let _ = ctx.arc_to(left, bottom, left, bottom - r, r);
        ctx.line_to(left, top + r);
        let _ = ctx.arc_to(left, top, left + r, top, r);
        ctx.close_path();
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Viewport {
        Viewport::new(
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        )
    }

    fn clear(&mut self) {
        let size = self.size();
        self.context.clear_rect(0.0, 0.0, size.width, size.height);
    }

    fn save(&mut self) {
        self.context.save();
    }

    fn restore(&mut self) {
        self.context.restore();
    }

    fn translate(&mut self, offset: Point) {
        let _ = self.context.translate(offset.x, offset.y);
    }

    fn rotate(&mut self, angle: f64) {
        let _ = self.context.rotate(angle);
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        let ctx = &self.context;
        ctx.set_stroke_style(&css(stroke.color));
        ctx.set_line_width(stroke.width);
        ctx.begin_path();
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
        ctx.stroke();
    }

    fn stroke_cubic(&mut self, curve: &CubicBezier, stroke: Stroke) {
        let ctx = &self.context;
        ctx.set_stroke_style(&css(stroke.color));
        ctx.set_line_width(stroke.width);
        ctx.begin_path();
        ctx.move_to(curve.p0.x, curve.p0.y);
        ctx.bezier_curve_to(
            curve.c1.x, curve.c1.y, curve.c2.x, curve.c2.y, curve.p1.x, curve.p1.y,
        );
        ctx.stroke();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.context.set_fill_style(&css(color));
        self.context
            .fill_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Color) {
        self.context.set_fill_style(&css(color));
        self.trace_rounded_rect(rect, radius);
        self.context.fill();
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let ctx = &self.context;
        ctx.set_fill_style(&css(color));
        ctx.begin_path();
        ctx.move_to(first.x, first.y);
        for p in rest {
            ctx.line_to(p.x, p.y);
        }
        ctx.close_path();
        ctx.fill();
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        let ctx = &self.context;
        ctx.set_fill_style(&css(color));
        ctx.begin_path();
        let _ = ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
        ctx.fill();
    }

    fn fill_radial_glow(
        &mut self,
        center: Point,
        inner_radius: f64,
        outer_radius: f64,
        inner: Color,
        outer: Color,
    ) {
        let ctx = &self.context;
        let Ok(gradient) = ctx.create_radial_gradient(
            center.x,
            center.y,
            inner_radius,
            center.x,
            center.y,
            outer_radius,
        ) else {
            return;
        };
        let _ = gradient.add_color_stop(0.0, &inner.to_css());
        let _ = gradient.add_color_stop(1.0, &outer.to_css());

        ctx.set_fill_style(&gradient);
        ctx.begin_path();
        let _ = ctx.arc(center.x, center.y, outer_radius, 0.0, 2.0 * PI);
        ctx.fill();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    fn canvas(width: u32, height: u32) -> HtmlCanvasElement {
        let canvas: HtmlCanvasElement = gloo::utils::document()
            .create_element("canvas")
            .unwrap()
            .dyn_into()
            .unwrap();
        canvas.set_width(width);
        canvas.set_height(height);
        canvas
    }

    #[wasm_bindgen_test]
    fn test_size_follows_canvas() {
        let canvas = canvas(320, 200);
        let surface = CanvasSurface::new(&canvas).unwrap();
        assert_eq!(surface.size(), Viewport::new(320.0, 200.0));

        surface.resize(Viewport::new(640.5, 384.0));
        assert_eq!(surface.size(), Viewport::new(640.0, 384.0));
    }

    #[wasm_bindgen_test]
    fn test_renders_demo_scene() {
        let canvas = canvas(500, 300);
        let mut surface = CanvasSurface::new(&canvas).unwrap();
        let mut demo = curveviz_core::PoseDemo::default();
        demo.set_path_progress(40.0);
        demo.render(&mut surface);
    }
}
