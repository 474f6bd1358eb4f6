//! Curveviz Client
//!
//! Yew WASM frontend hosting the ambient hero background and the
//! interactive pose demo.
//!
//! Build with `trunk build` or `cargo check -p curveviz-client --target wasm32-unknown-unknown`.

mod app;
mod components;
mod dom;
mod hooks;
mod renderer;

use app::App;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_web::MakeWebConsoleWriter;

fn main() {
    console_error_panic_hook::set_once();

    let filter = EnvFilter::new("info");

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();

    yew::Renderer::<App>::new().render();
}
