//! Browser bindings for the pagefx landing page effects
//!
//! This crate attaches the effects from `pagefx-core` to a page that has
//! already been rendered, typically by the server.
//!
//! ## Architecture
//! - WASM compilation target (wasm32-unknown-unknown)
//! - web-sys for DOM access, `gloo-timers` for intervals and timeouts
//! - One owned handle per effect; dropping a handle removes its listeners
//! - Logging through `tracing`, printed by `console_log`
//!
//! ## Module Structure
//! - `carousel`: testimonial carousel wired to buttons, dots and hover
//! - `reveal`: IntersectionObserver reveal-on-enter
//! - `parallax`: scroll-driven background offset
//! - `page`: all effects behind one handle, plus config loading
//! - `listener`: self-removing event listeners
//! - `dom`: document lookups and style helpers
//! - `demo`: Leptos demo page used by the `pagefx-demo` binary
//! - `error`: Error types and handling
//!
//! ## JavaScript usage
//!
//! ```js
//! import init, { enhancePage } from "./pagefx_ui.js";
//!
//! await init();
//! document.addEventListener("DOMContentLoaded", () => {
//!     const effects = enhancePage();
//!     // later, e.g. on client-side navigation:
//!     effects.dispose();
//! });
//! ```

#![forbid(unsafe_code)]

pub mod carousel;
pub mod demo;
pub mod dom;
pub mod error;
pub mod listener;
pub mod page;
pub mod parallax;
pub mod reveal;

use std::sync::Once;

use wasm_bindgen::prelude::*;

pub use error::{Result, UiError};
pub use page::PageEffects;

static LOGGING: Once = Once::new();

/// Installs the panic hook and routes `log` records to the browser console.
pub fn init_logging() {
    LOGGING.call_once(|| {
        console_error_panic_hook::set_once();
        // fails only if the host page already installed a logger
        _ = console_log::init_with_level(log::Level::Info);
    });
}

/// Page effects handle exported to JavaScript.
#[wasm_bindgen]
#[derive(Debug)]
pub struct PageEffectsHandle {
    effects: Option<PageEffects>,
}

#[wasm_bindgen]
impl PageEffectsHandle {
    /// Tears down every effect. Calling it twice is harmless.
    pub fn dispose(&mut self) {
        if let Some(effects) = self.effects.take() {
            effects.dispose();
        }
    }

    /// Whether any effect is still running.
    #[wasm_bindgen(getter, js_name = isActive)]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.effects.as_ref().is_some_and(PageEffects::is_active)
    }
}

/// Attaches reveal, parallax and carousel to the current document.
///
/// Call once the DOM is ready. Effects whose elements are missing stay
/// dormant.
///
/// # Errors
///
/// Throws only when there is no window or document.
#[wasm_bindgen(js_name = enhancePage)]
pub fn enhance_page() -> std::result::Result<PageEffectsHandle, JsValue> {
    init_logging();
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let config = page::load_config(&document);

    Ok(PageEffectsHandle {
        effects: Some(PageEffects::attach(&window, &document, &config)),
    })
}
