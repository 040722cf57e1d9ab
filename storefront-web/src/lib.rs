//! TopUp Shop - Leptos Frontend
//!
//! Browser shell around the `shared` crate: wallet bridge, reactive
//! session context, route guard and pages.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
pub mod utils;

use app::App;
use shared::config::{init_config, AppConfig};

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("TopUp Shop starting...");

    if let Err(e) = AppConfig::from_build_env().and_then(init_config) {
        log::error!("Invalid configuration, using defaults: {}", e);
    }

    leptos::mount::mount_to_body(|| view! { <App/> });
}
