//! Decorative animated canvas behind the hero section.

use curveviz_core::{AmbientAnimator, AmbientConfig, Viewport, seeded};
use gloo::events::EventListener;
use rand_chacha::ChaCha8Rng;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::dom::parent_offset_size;
use crate::hooks::use_animation_frame;
use crate::renderer::{CanvasSurface, SurfaceError};

#[derive(Properties, PartialEq)]
pub struct HeroBackgroundProps {
    #[prop_or_default]
    pub config: AmbientConfig,
    pub seed: u64,
}

struct Scene {
    surface: CanvasSurface,
    animator: AmbientAnimator<ChaCha8Rng>,
}

fn fit_to_parent(canvas: &HtmlCanvasElement, surface: &CanvasSurface) -> Viewport {
    let size = parent_offset_size(canvas).unwrap_or(Viewport::new(
        f64::from(canvas.width()),
        f64::from(canvas.height()),
    ));
    surface.resize(size);
    size
}

fn mount(canvas_ref: &NodeRef, config: AmbientConfig, seed: u64) -> Result<(HtmlCanvasElement, Scene), SurfaceError> {
    let canvas = canvas_ref
        .cast::<HtmlCanvasElement>()
        .ok_or(SurfaceError::Unmounted)?;
    let surface = CanvasSurface::new(&canvas)?;
    let viewport = fit_to_parent(&canvas, &surface);
    let mut animator = AmbientAnimator::new(viewport, config, seeded(seed));
    animator.start();
    Ok((canvas, Scene { surface, animator }))
}

/// Full-bleed canvas of slowly travelling curves.
///
/// Fills its parent element and keeps doing so across window resizes.
/// Without a usable canvas it renders nothing and logs at debug level.
#[function_component(HeroBackground)]
pub fn hero_background(props: &HeroBackgroundProps) -> Html {
    let canvas_ref = use_node_ref();
    let scene = use_mut_ref(|| None::<Scene>);

    {
        let canvas_ref = canvas_ref.clone();
        let scene = scene.clone();
        let config = props.config.clone();
        let seed = props.seed;
        use_effect_with((), move |_| {
            let listener = match mount(&canvas_ref, config, seed) {
                Ok((canvas, mounted)) => {
                    tracing::info!(
                        curves = mounted.animator.curves().len(),
                        seed,
                        "hero background mounted"
                    );
                    *scene.borrow_mut() = Some(mounted);
                    let scene = scene.clone();
                    web_sys::window().map(|window| {
                        EventListener::new(&window, "resize", move |_| {
                            if let Some(scene) = scene.borrow_mut().as_mut() {
                                let viewport = fit_to_parent(&canvas, &scene.surface);
                                scene.animator.resize(viewport);
                            }
                        })
                    })
                }
                Err(e) => {
                    tracing::debug!(error = %e, "hero background disabled");
                    None
                }
            };

            move || {
                drop(listener);
                if let Some(mut scene) = scene.borrow_mut().take() {
                    scene.animator.stop();
                    tracing::info!(wraps = scene.animator.wraps(), "hero background unmounted");
                }
            }
        });
    }

    {
        let scene = scene.clone();
        use_animation_frame(move |_| {
            if let Some(scene) = scene.borrow_mut().as_mut() {
                scene.animator.frame(&mut scene.surface);
            }
        });
    }

    html! {
        <canvas ref={canvas_ref} class="hero-background" />
    }
}
