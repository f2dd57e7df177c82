//! Leptos CSR frontend.

pub mod add_product;
pub mod app;
pub mod file_reader;
pub mod home;
pub mod navigation;
pub mod pages;
pub mod product_card;

use wasm_bindgen::prelude::*;

use crate::config::StorefrontConfig;
use app::App;

/// WASM entry point for the frontend.
/// This is called automatically when the WASM module loads.
#[wasm_bindgen(start)]
pub fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let config = StorefrontConfig::from_build_env();
    marketplace_observability::init_with(&config.log_directive);
    tracing::info!(brand = %config.brand, "storefront starting");

    leptos::mount_to_body(move || leptos::view! { <App config=config/> });
}
