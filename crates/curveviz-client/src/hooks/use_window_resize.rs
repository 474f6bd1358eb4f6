//! Window `resize` hook that also runs once on mount.

use std::rc::Rc;

use gloo::events::EventListener;
use yew::prelude::*;

/// Runs `on_resize` once on mount and again on every window resize until
/// unmount. The listener is installed once, with the closure from the first
/// render.
#[hook]
pub fn use_window_resize<F>(on_resize: F)
where
    F: Fn() + 'static,
{
    use_effect_with((), move |_| {
        let on_resize = Rc::new(on_resize);
        on_resize();

        let listener = web_sys::window().map(|window| {
            let on_resize = on_resize.clone();
            EventListener::new(&window, "resize", move |_| on_resize())
        });

        move || drop(listener)
    });
}
