//! Error types for the browser bindings
//!
//! None of these reach the visitor: an effect that fails to attach is logged
//! and left dormant while the others carry on.

use wasm_bindgen::JsValue;

/// Errors raised while wiring effects into the document
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UiError {
    /// No global `window` (not running in a browser)
    #[error("window is not available")]
    WindowNotAvailable,

    /// Window has no document
    #[error("document is not available")]
    DocumentNotAvailable,

    /// `addEventListener` rejected the callback
    #[error("failed to add '{event}' listener: {reason}")]
    ListenerFailed { event: &'static str, reason: String },

    /// IntersectionObserver construction failed
    #[error("failed to create intersection observer: {0}")]
    ObserverFailed(String),

    /// `querySelector` rejected the selector
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// Core validation failure
    #[error(transparent)]
    Core(#[from] pagefx_core::Error),
}

/// Result type alias for browser operations
pub type Result<T> = std::result::Result<T, UiError>;

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Renders a thrown JS value for an error message.
pub(crate) fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
