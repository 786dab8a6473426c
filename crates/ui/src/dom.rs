//! Document lookups shared by the effects
//!
//! Lookups that can legitimately come up empty return `Option`; only
//! environment failures (no window, a selector the browser rejects) are
//! errors.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::{Result, UiError, describe};

/// Get window object
pub fn window() -> Result<Window> {
    web_sys::window().ok_or(UiError::WindowNotAvailable)
}

/// Get document from window
pub fn document(window: &Window) -> Result<Document> {
    window.document().ok_or(UiError::DocumentNotAvailable)
}

/// Element with the given id, if present and styleable.
#[must_use]
pub fn html_element_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// First element matching `selector`.
pub fn query_first(document: &Document, selector: &str) -> Result<Option<HtmlElement>> {
    let found = document
        .query_selector(selector)
        .map_err(|e| invalid_selector(selector, &e))?;
    Ok(found.and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| invalid_selector(selector, &e))?;

    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Element children of `parent`, in order.
#[must_use]
pub fn children(parent: &Element) -> Vec<HtmlElement> {
    let collection = parent.children();
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Sets `transform`, logging instead of failing.
pub fn set_transform(element: &HtmlElement, value: &str) {
    if let Err(e) = element.style().set_property("transform", value) {
        tracing::warn!("failed to set transform '{}': {}", value, describe(&e));
    }
}

/// Adds or removes one class, logging instead of failing.
pub fn toggle_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        tracing::warn!("failed to toggle class '{}': {}", class, describe(&e));
    }
}

fn invalid_selector(selector: &str, err: &wasm_bindgen::JsValue) -> UiError {
    UiError::InvalidSelector {
        selector: selector.to_string(),
        reason: describe(err),
    }
}
