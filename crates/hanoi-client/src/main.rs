//! Hanoi-Live Client
//!
//! Yew WASM frontend application.
//!
//! This crate only does something useful on wasm32. Use `trunk serve` or
//! `cargo check -p hanoi-client --target wasm32-unknown-unknown`.

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod hooks;
#[cfg(target_arch = "wasm32")]
mod surface;

#[cfg(target_arch = "wasm32")]
fn main() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, Layer};
    use tracing_web::MakeWebConsoleWriter;

    console_error_panic_hook::set_once();

    let filter = EnvFilter::new("info,hanoi_core=debug");

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();

    yew::Renderer::<app::App>::new().render();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("hanoi-client only runs in the browser, build it for wasm32-unknown-unknown");
}
