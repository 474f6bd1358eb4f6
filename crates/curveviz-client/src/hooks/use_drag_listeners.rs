//! Mouse and touch listeners that drive the pose demo's drag controller.

use std::cell::RefCell;
use std::rc::Rc;

use curveviz_core::PoseDemo;
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::dom::canvas_point;

fn first_touch(event: &TouchEvent, canvas: &HtmlCanvasElement) -> (usize, Option<curveviz_core::Point>) {
    let touches = event.touches();
    let point = touches
        .get(0)
        .map(|touch| canvas_point(canvas, touch.client_x(), touch.client_y()));
    (touches.length() as usize, point)
}

fn install(
    canvas: &HtmlCanvasElement,
    demo: &Rc<RefCell<PoseDemo>>,
    on_change: &Callback<()>,
) -> Vec<EventListener> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let mut listeners = Vec::with_capacity(7);

    listeners.push({
        let (canvas_el, demo, on_change) = (canvas.clone(), demo.clone(), on_change.clone());
        EventListener::new(canvas, "mousedown", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let at = canvas_point(&canvas_el, event.client_x(), event.client_y());
            if demo.borrow_mut().pointer_down(at).is_some() {
                on_change.emit(());
            }
        })
    });

    listeners.push({
        let (canvas_el, demo, on_change) = (canvas.clone(), demo.clone(), on_change.clone());
        EventListener::new(&window, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let at = canvas_point(&canvas_el, event.client_x(), event.client_y());
            if demo.borrow_mut().pointer_move(at) {
                on_change.emit(());
            }
        })
    });

    listeners.push({
        let (demo, on_change) = (demo.clone(), on_change.clone());
        EventListener::new(&window, "mouseup", move |_| {
            if demo.borrow_mut().pointer_up().is_some() {
                on_change.emit(());
            }
        })
    });

    listeners.push({
        let (canvas_el, demo, on_change) = (canvas.clone(), demo.clone(), on_change.clone());
        EventListener::new_with_options(
            canvas,
            "touchstart",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(touch) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                let (count, Some(at)) = first_touch(touch, &canvas_el) else {
                    return;
                };
                if demo.borrow_mut().touch_start(count, at) {
                    event.prevent_default();
                    on_change.emit(());
                }
            },
        )
    });

    // Must not be passive, or scrolling cannot be suppressed mid-drag.
    listeners.push({
        let (canvas_el, demo, on_change) = (canvas.clone(), demo.clone(), on_change.clone());
        EventListener::new_with_options(
            &window,
            "touchmove",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(touch) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                let (count, Some(at)) = first_touch(touch, &canvas_el) else {
                    return;
                };
                if demo.borrow_mut().touch_move(count, at) {
                    event.prevent_default();
                    on_change.emit(());
                }
            },
        )
    });

    for kind in ["touchend", "touchcancel"] {
        let (demo, on_change) = (demo.clone(), on_change.clone());
        listeners.push(EventListener::new(&window, kind, move |_| {
            let released = if kind == "touchcancel" {
                demo.borrow_mut().touch_cancel()
            } else {
                demo.borrow_mut().touch_end()
            };
            if released.is_some() {
                on_change.emit(());
            }
        }));
    }

    listeners
}

/// Wires pointer input to `demo` for the lifetime of the component.
///
/// Press events are taken from the canvas, move and release events from the
/// window so a drag survives leaving the canvas. Listeners are installed once
/// on mount and removed once on unmount. `on_change` fires whenever the drag
/// state or a pose changed.
#[hook]
pub fn use_drag_listeners(canvas_ref: NodeRef, demo: Rc<RefCell<PoseDemo>>, on_change: Callback<()>) {
    use_effect_with((), move |_| {
        let listeners = match canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => install(&canvas, &demo, &on_change),
            None => {
                tracing::debug!("drag listeners skipped, canvas not mounted");
                Vec::new()
            }
        };
        tracing::debug!(count = listeners.len(), "drag listeners installed");

        move || {
            drop(listeners);
            // A drag interrupted by unmount must not linger.
            demo.borrow_mut().pointer_up();
        }
    });
}
