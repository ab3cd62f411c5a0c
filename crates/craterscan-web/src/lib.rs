//! Craterscan Web - Lunar Crater Analyzer
//!
//! Browser frontend for the crater analysis pipeline. Crater detection
//! runs on an external inference collaborator; this crate orchestrates
//! the run and renders the before/after comparison. No image processing
//! happens on the device.

mod app;
mod components;
mod state;
mod upload;

use wasm_bindgen::prelude::*;

/// Initialize the web application
#[wasm_bindgen(start)]
pub fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(log::Level::Info).expect("Failed to initialize logger");

    log::info!("Craterscan starting...");

    // Mount the Sycamore application
    sycamore::render(app::App);

    log::info!("Craterscan initialized");
}
