//! All page effects behind one handle
//!
//! Each effect attaches on its own: a missing element or a failure in one
//! leaves that effect dormant and the rest running.

use pagefx_core::{PageConfig, ResultExt};
use web_sys::{Document, Window};

use crate::carousel::TestimonialCarousel;
use crate::error::Result;
use crate::parallax::ParallaxScroll;
use crate::reveal::RevealOnEnter;

/// Id of the optional inline JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "pagefx-config";

/// Reads `<script type="application/json" id="pagefx-config">`.
///
/// Falls back to defaults, with a warning, when the element holds malformed
/// JSON or invalid values; silently when it is absent.
#[must_use]
pub fn load_config(document: &Document) -> PageConfig {
    document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .map_or_else(PageConfig::default, |json| {
            PageConfig::from_json(&json).or_default_logged(PageConfig::default())
        })
}

/// The effects attached to one document.
#[derive(Debug, Default)]
pub struct PageEffects {
    carousel: Option<TestimonialCarousel>,
    reveal: Option<RevealOnEnter>,
    parallax: Option<ParallaxScroll>,
}

impl PageEffects {
    /// Attaches reveal, parallax and carousel, in that order.
    #[must_use]
    pub fn attach(window: &Window, document: &Document, config: &PageConfig) -> Self {
        let effects = Self {
            reveal: dormant_on_error("reveal", RevealOnEnter::attach(document, &config.reveal)),
            parallax: dormant_on_error(
                "parallax",
                ParallaxScroll::attach(window, document, &config.parallax),
            ),
            carousel: dormant_on_error(
                "carousel",
                TestimonialCarousel::attach(document, &config.carousel),
            ),
        };
        tracing::info!(
            carousel = effects.carousel.is_some(),
            reveal = effects.reveal.is_some(),
            parallax = effects.parallax.is_some(),
            "page effects attached"
        );
        effects
    }

    #[must_use]
    pub const fn carousel(&self) -> Option<&TestimonialCarousel> {
        self.carousel.as_ref()
    }

    #[must_use]
    pub const fn reveal(&self) -> Option<&RevealOnEnter> {
        self.reveal.as_ref()
    }

    #[must_use]
    pub const fn parallax(&self) -> Option<&ParallaxScroll> {
        self.parallax.as_ref()
    }

    /// True if at least one effect is running.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.carousel.is_some() || self.reveal.is_some() || self.parallax.is_some()
    }

    /// Stops timers, disconnects the observer and removes every listener.
    pub fn dispose(self) {
        if let Some(carousel) = self.carousel {
            carousel.dispose();
        }
        if let Some(reveal) = self.reveal {
            reveal.dispose();
        }
        if let Some(parallax) = self.parallax {
            parallax.dispose();
        }
        tracing::info!("page effects disposed");
    }
}

fn dormant_on_error<T>(effect: &'static str, attached: Result<Option<T>>) -> Option<T> {
    if attached.is_err() {
        tracing::debug!(effect, "effect failed to attach");
    }
    attached.into_option_logged().flatten()
}
