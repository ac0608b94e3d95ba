//! Entry point for the WASM application

use model_upload::{init_logging, App, APP_NAME};
use leptos::*;

pub fn main() {
    init_logging();

    log::info!("🦀 {} - Starting model upload page", APP_NAME);

    mount_to_body(|| view! { <App/> })
}
