//! Course Portal - university course management client
//!
//! Browser client for the course management backend, built with Leptos and
//! WebAssembly. The session store in [`core::session`] keeps the signed-in
//! user and token across reloads; the pages under [`ui`] read it through a
//! reactive context.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
