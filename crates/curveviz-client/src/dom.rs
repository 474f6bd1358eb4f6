//! DOM measurement helpers.

use curveviz_core::{Point, Viewport};
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, HtmlElement};

/// Converts client coordinates into canvas-local coordinates.
pub fn canvas_point(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> Point {
    let rect = canvas.get_bounding_client_rect();
    Point::new(
        f64::from(client_x) - rect.left(),
        f64::from(client_y) - rect.top(),
    )
}

/// Layout size of the canvas's parent element.
pub fn parent_offset_size(canvas: &HtmlCanvasElement) -> Option<Viewport> {
    let parent = canvas.parent_element()?.dyn_into::<HtmlElement>().ok()?;
    Some(Viewport::new(
        f64::from(parent.offset_width()),
        f64::from(parent.offset_height()),
    ))
}

/// Rendered width of the canvas's parent element.
pub fn parent_width(canvas: &HtmlCanvasElement) -> Option<f64> {
    Some(canvas.parent_element()?.get_bounding_client_rect().width())
}
