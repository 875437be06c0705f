//! # portfolio-client
//!
//! Leptos front-end for the Xevrion portfolio: a home page with projects and
//! skills, a blog index, and the presentational pieces they share (appearance
//! toggle, grid background, cursor glow, animated text).
//!
//! The crate is rendered on the server by `portfolio-server` (`ssr` feature)
//! and hydrated in the browser from WASM (`hydrate` feature).

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point. Hydrates the server-rendered document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
