//! Parallax hero background
//!
//! On every window scroll the background is translated by a fixed fraction
//! of the scroll distance.

use pagefx_core::ParallaxConfig;
use pagefx_core::parallax::ParallaxLayer;
use web_sys::{Document, Window};

use crate::dom;
use crate::error::Result;
use crate::listener::EventListener;

/// The scroll listener moving the background.
#[derive(Debug)]
pub struct ParallaxScroll {
    layer: ParallaxLayer,
    listener: EventListener,
}

impl ParallaxScroll {
    /// Registers the scroll listener if a background element exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is rejected, the ratio is not
    /// finite, or the listener cannot be registered.
    pub fn attach(window: &Window, document: &Document, config: &ParallaxConfig) -> Result<Option<Self>> {
        let Some(background) = dom::query_first(document, &config.selector)? else {
            tracing::debug!(selector = %config.selector, "no parallax background");
            return Ok(None);
        };
        let layer = ParallaxLayer::new(config.ratio)?;

        let scroller = window.clone();
        let listener = EventListener::new(window, "scroll", move |_| {
            let scroll_y = scroller.scroll_y().unwrap_or(0.0);
            dom::set_transform(&background, &layer.transform(scroll_y));
        })?;
        tracing::info!(ratio = layer.ratio(), "parallax attached");

        Ok(Some(Self { layer, listener }))
    }

    #[must_use]
    pub const fn ratio(&self) -> f64 {
        self.layer.ratio()
    }

    /// Removes the scroll listener.
    pub fn dispose(self) {
        tracing::debug!(event = self.listener.event(), "parallax detached");
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod tests {
    use super::*;
    use crate::error::UiError;
    use wasm_bindgen_test::*;
    use web_sys::Event;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fixture(html: &str) -> Result<(Window, Document)> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        if let Some(body) = document.body() {
            body.set_inner_html(html);
        }
        Ok((window, document))
    }

    fn background_transform(document: &Document) -> Result<String> {
        let bg = dom::query_first(document, ".parallax-bg")?.ok_or(UiError::DocumentNotAvailable)?;
        Ok(bg.style().get_property_value("transform").unwrap_or_default())
    }

    #[wasm_bindgen_test]
    fn test_no_background_is_dormant() -> Result<()> {
        let (window, document) = fixture("<header></header>")?;
        assert!(ParallaxScroll::attach(&window, &document, &ParallaxConfig::default())?.is_none());
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_scroll_moves_background_by_ratio() -> Result<()> {
        let (window, document) =
            fixture(r#"<div class="parallax-bg"></div><div style="height: 5000px"></div>"#)?;
        window.scroll_to_with_x_and_y(0.0, 0.0);
        let parallax = ParallaxScroll::attach(&window, &document, &ParallaxConfig::default())?
            .ok_or(UiError::DocumentNotAvailable)?;

        // not touched until the first scroll
        assert_eq!(background_transform(&document)?, "");

        window.scroll_to_with_x_and_y(0.0, 500.0);
        assert_eq!(window.scroll_y().ok(), Some(500.0));
        // the browser queues its own scroll event; fire one now
        if let Ok(event) = Event::new("scroll") {
            let _ = window.dispatch_event(&event);
        }
        assert_eq!(background_transform(&document)?, "translateY(200px)");

        parallax.dispose();
        window.scroll_to_with_x_and_y(0.0, 0.0);
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_dispose_stops_following_scroll() -> Result<()> {
        let (window, document) =
            fixture(r#"<div class="parallax-bg"></div><div style="height: 5000px"></div>"#)?;
        window.scroll_to_with_x_and_y(0.0, 0.0);
        let parallax = ParallaxScroll::attach(&window, &document, &ParallaxConfig::default())?
            .ok_or(UiError::DocumentNotAvailable)?;
        parallax.dispose();

        window.scroll_to_with_x_and_y(0.0, 300.0);
        if let Ok(event) = Event::new("scroll") {
            let _ = window.dispatch_event(&event);
        }
        assert_eq!(background_transform(&document)?, "");

        window.scroll_to_with_x_and_y(0.0, 0.0);
        Ok(())
    }
}
