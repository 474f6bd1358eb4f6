//! Main application component.

use yew::prelude::*;

use crate::components::{HeroBackground, PathVisualizer};
use crate::hooks::use_query_config;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_query_config();

    html! {
        <main>
            <section class="hero">
                <HeroBackground config={config.ambient.clone()} seed={config.seed} />
                <h1>{ "Curve Visualizer" }</h1>
            </section>
            <section>
                <PathVisualizer config={config.demo.clone()} />
            </section>
        </main>
    }
}
