//! WASM entry point for the demo page
//!
//! This is the binary Trunk compiles to WASM. It mounts the demo page,
//! which attaches the effects once rendered.

use leptos::prelude::*;
use pagefx_ui::demo::DemoPage;

fn main() {
    // Panic hook and console logging
    pagefx_ui::init_logging();

    mount_to_body(|| {
        view! {
            <DemoPage />
        }
    })
}
