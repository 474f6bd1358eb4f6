//! Interactive start/end pose demo with orientation sliders.

use curveviz_core::{DemoConfig, PoseDemo, PoseId, PosePatch, Viewport};
use web_sys::{HtmlCanvasElement, HtmlInputElement};
use yew::prelude::*;

use crate::dom::parent_width;
use crate::hooks::{use_drag_listeners, use_progress_sweep, use_window_resize};
use crate::renderer::{CanvasSurface, SurfaceError};

#[derive(Properties, PartialEq)]
pub struct PathVisualizerProps {
    #[prop_or_default]
    pub config: DemoConfig,
}

#[derive(Properties, PartialEq)]
struct AngleSliderProps {
    label: AttrValue,
    value: f64,
    on_change: Callback<f64>,
}

#[function_component(AngleSlider)]
fn angle_slider(props: &AngleSliderProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(value) = input.value().parse::<f64>() {
                on_change.emit(value);
            }
        })
    };

    html! {
        <div>
            <label>{ props.label.clone() }</label>
            <input
                type="range"
                min="0"
                max="359"
                step="1"
                value={props.value.to_string()}
                {oninput}
            />
        </div>
    }
}

fn open_surface(canvas_ref: &NodeRef) -> Result<CanvasSurface, SurfaceError> {
    let canvas = canvas_ref
        .cast::<HtmlCanvasElement>()
        .ok_or(SurfaceError::Unmounted)?;
    CanvasSurface::new(&canvas)
}

/// Canvas demo of a path between two draggable vehicles.
///
/// The canvas spans its container's width with a capped height. Poses can be
/// dragged with mouse or a single finger, headings set with the sliders, and
/// "Animate Path" drives a third vehicle along the path.
#[function_component(PathVisualizer)]
pub fn path_visualizer(props: &PathVisualizerProps) -> Html {
    let canvas_ref = use_node_ref();
    let demo = {
        let config = props.config.clone();
        use_mut_ref(move || PoseDemo::new(config))
    };
    let surface = use_mut_ref(|| None::<CanvasSurface>);
    let force_update = use_force_update();

    let on_change = {
        let force_update = force_update.clone();
        Callback::from(move |()| force_update.force_update())
    };

    // Acquire the drawing surface before the first resize pass
    {
        let canvas_ref = canvas_ref.clone();
        let surface = surface.clone();
        use_effect_with((), move |_| {
            match open_surface(&canvas_ref) {
                Ok(opened) => {
                    *surface.borrow_mut() = Some(opened);
                    tracing::info!("path visualizer mounted");
                }
                Err(e) => tracing::debug!(error = %e, "path visualizer has no surface"),
            }
            move || {
                surface.borrow_mut().take();
            }
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        let demo = demo.clone();
        let surface = surface.clone();
        let on_change = on_change.clone();
        use_window_resize(move || {
            let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                return;
            };
            let Some(width) = parent_width(&canvas) else {
                return;
            };
            let viewport = {
                let demo = demo.borrow();
                let config = demo.config();
                Viewport::fit_width(width, config.max_canvas_height, config.aspect)
            };
            if let Some(surface) = surface.borrow().as_ref() {
                surface.resize(viewport);
            }
            demo.borrow_mut().resize(viewport);
            on_change.emit(());
        });
    }

    use_drag_listeners(canvas_ref.clone(), demo.clone(), on_change.clone());
    let sweep = use_progress_sweep(demo.clone(), on_change.clone());

    // Redraw after every render
    {
        let demo = demo.clone();
        let surface = surface.clone();
        use_effect(move || {
            if let Some(surface) = surface.borrow_mut().as_mut() {
                demo.borrow().render(surface);
            }
        });
    }

    let set_theta = |id: PoseId| {
        let demo = demo.clone();
        let on_change = on_change.clone();
        Callback::from(move |theta: f64| {
            demo.borrow_mut().set_pose(id, PosePatch::theta(theta));
            on_change.emit(());
        })
    };

    let on_animate = {
        let animate = sweep.animate.clone();
        Callback::from(move |_: MouseEvent| animate.emit(()))
    };

    let on_reset = {
        let cancel = sweep.cancel.clone();
        let demo = demo.clone();
        let on_change = on_change.clone();
        Callback::from(move |_: MouseEvent| {
            cancel.emit(());
            demo.borrow_mut().reset();
            on_change.emit(());
        })
    };

    let (start, end, dragging) = {
        let demo = demo.borrow();
        (demo.start(), demo.end(), demo.dragging())
    };

    html! {
        <div class="demo">
            <div class="demo-stage">
                <canvas ref={canvas_ref} class="demo-canvas" />
                <div class="demo-overlay instructions">
                    <p><strong>{ "Interactive Demo:" }</strong></p>
                    <ul>
                        <li>{ "Drag the green (start) and red (end) cars to reposition" }</li>
                        <li>{ "Use sliders below to adjust orientation" }</li>
                        <li>{ "Click \"Animate Path\" to see the path in action" }</li>
                    </ul>
                </div>
                if let Some(id) = dragging {
                    <div class="demo-overlay status">{ format!("Dragging {id} car...") }</div>
                }
            </div>

            <div class="demo-sliders">
                <AngleSlider label="Start Angle" value={start.theta} on_change={set_theta(PoseId::Start)} />
                <AngleSlider label="End Angle" value={end.theta} on_change={set_theta(PoseId::End)} />
            </div>

            <div class="demo-buttons">
                <button class="primary" onclick={on_animate}>{ "Animate Path" }</button>
                <button onclick={on_reset}>{ "Reset" }</button>
            </div>
        </div>
    }
}
