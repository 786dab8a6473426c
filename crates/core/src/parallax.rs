//! Parallax background math
//!
//! The background moves `ratio` pixels for every pixel scrolled, recomputed
//! on each scroll event. No clamping and no easing.

use crate::error::Error;
use crate::result::Result;

/// Vertical offset for a scroll position.
#[must_use]
pub fn parallax_offset(scroll_y: f64, ratio: f64) -> f64 {
    let offset = scroll_y * ratio;
    // -0.0 would render as "-0px"
    if offset == 0.0 { 0.0 } else { offset }
}

/// A background layer scrolling at a fixed ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxLayer {
    ratio: f64,
}

impl ParallaxLayer {
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `ratio` is not finite.
    pub fn new(ratio: f64) -> Result<Self> {
        if !ratio.is_finite() {
            return Err(Error::invalid_config("parallax.ratio", "must be finite"));
        }
        Ok(Self { ratio })
    }

    #[must_use]
    pub const fn ratio(&self) -> f64 {
        self.ratio
    }

    #[must_use]
    pub fn offset(&self, scroll_y: f64) -> f64 {
        parallax_offset(scroll_y, self.ratio)
    }

    /// CSS `transform` value for a scroll position.
    ///
    /// ```
    /// use pagefx_core::parallax::ParallaxLayer;
    ///
    /// let layer = ParallaxLayer::new(0.4)?;
    /// assert_eq!(layer.transform(250.0), "translateY(100px)");
    /// # Ok::<(), pagefx_core::Error>(())
    /// ```
    #[must_use]
    pub fn transform(&self, scroll_y: f64) -> String {
        format!("translateY({}px)", self.offset(scroll_y))
    }
}
