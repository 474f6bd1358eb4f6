//! Per-frame callback hook built on `requestAnimationFrame`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

type FrameFn = Box<dyn FnMut(f64)>;
type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request_frame(closure: &FrameClosure) -> Option<i32> {
    let window = web_sys::window()?;
    let closure = closure.borrow();
    window
        .request_animation_frame(closure.as_ref()?.as_ref().unchecked_ref())
        .ok()
}

/// Calls `on_frame` with the frame timestamp once per animation frame, from
/// mount until unmount.
///
/// The closure from the latest render is the one invoked. The pending frame
/// is cancelled and the loop closure released when the component unmounts.
#[hook]
pub fn use_animation_frame<F>(on_frame: F)
where
    F: FnMut(f64) + 'static,
{
    let latest: Rc<RefCell<Option<FrameFn>>> = use_mut_ref(|| None);
    *latest.borrow_mut() = Some(Box::new(on_frame));

    use_effect_with((), move |_| {
        let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let closure: FrameClosure = Rc::new(RefCell::new(None));

        {
            let closure_ref = closure.clone();
            let frame_id = frame_id.clone();
            *closure.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
                // Taken out for the call so a re-render can swap in a new one.
                let taken = latest.borrow_mut().take();
                if let Some(mut on_frame) = taken {
                    on_frame(timestamp);
                    let mut slot = latest.borrow_mut();
                    if slot.is_none() {
                        *slot = Some(on_frame);
                    }
                }
                frame_id.set(request_frame(&closure_ref));
            }));
        }

        frame_id.set(request_frame(&closure));
        tracing::debug!("animation frame loop started");

        move || {
            if let Some(id) = frame_id.take() {
                if let Some(window) = web_sys::window() {
                    let _ = window.cancel_animation_frame(id);
                }
            }
            // Break the reference cycle by clearing the closure
            *closure.borrow_mut() = None;
            tracing::debug!("animation frame loop stopped");
        }
    });
}
