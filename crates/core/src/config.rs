//! Page configuration
//!
//! Every field has a default matching the landing page markup, so an absent
//! or partial config document is always usable. Values are validated after
//! deserialization; callers fall back to [`PageConfig::default`] on error.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::Error;
use crate::result::Result;
use crate::reveal::MAX_DELAY_MS;

/// Default auto-advance period for the testimonial carousel.
pub const DEFAULT_INTERVAL_MS: u32 = 5000;

/// Default fraction of an element that must be visible before it reveals.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.15;

/// Default background offset per scrolled pixel.
pub const DEFAULT_PARALLAX_RATIO: f64 = 0.4;

/// Configuration for all page effects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub carousel: CarouselConfig,
    pub reveal: RevealConfig,
    pub parallax: ParallaxConfig,
}

impl PageConfig {
    /// Parses and validates a JSON config document.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] for malformed JSON and
    /// [`Error::InvalidConfig`] for out-of-range values.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagefx_core::PageConfig;
    ///
    /// let config = PageConfig::from_json(r#"{ "carousel": { "interval_ms": 8000 } }"#)?;
    /// assert_eq!(config.carousel.interval_ms, 8000);
    /// assert_eq!(config.carousel.slider_id, "testimonialSlider");
    /// # Ok::<(), pagefx_core::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every section.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::InvalidConfig`] found.
    pub fn validate(&self) -> Result<()> {
        self.carousel.validate()?;
        self.reveal.validate()?;
        self.parallax.validate()
    }
}

/// Testimonial carousel settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Id of the slide track; its children are the slides.
    pub slider_id: String,
    pub prev_id: String,
    pub next_id: String,
    /// Id of the dot track; its children are the indicator dots.
    pub dots_id: String,
    pub interval_ms: u32,
    /// Class carried by the active dot.
    pub active_class: String,
    /// Class carried by every other dot.
    pub inactive_class: String,
}

impl CarouselConfig {
    /// Auto-advance period.
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.interval_ms))
    }

    fn validate(&self) -> Result<()> {
        non_blank("carousel.slider_id", &self.slider_id)?;
        non_blank("carousel.prev_id", &self.prev_id)?;
        non_blank("carousel.next_id", &self.next_id)?;
        non_blank("carousel.dots_id", &self.dots_id)?;

        if self.interval_ms == 0 {
            return Err(Error::invalid_config(
                "carousel.interval_ms",
                "must be positive",
            ));
        }
        if u64::from(self.interval_ms) > MAX_DELAY_MS {
            return Err(Error::invalid_config(
                "carousel.interval_ms",
                format!("must not exceed {MAX_DELAY_MS}"),
            ));
        }

        class_token("carousel.active_class", &self.active_class)?;
        class_token("carousel.inactive_class", &self.inactive_class)?;
        if self.active_class == self.inactive_class {
            return Err(Error::invalid_config(
                "carousel.inactive_class",
                "must differ from active_class",
            ));
        }

        Ok(())
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            slider_id: "testimonialSlider".to_string(),
            prev_id: "prevBtn".to_string(),
            next_id: "nextBtn".to_string(),
            dots_id: "testimonialDots".to_string(),
            interval_ms: DEFAULT_INTERVAL_MS,
            active_class: "bg-gray-700".to_string(),
            inactive_class: "bg-gray-300".to_string(),
        }
    }
}

/// Reveal-on-enter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// CSS selector for the elements to reveal.
    pub selector: String,
    /// Attribute holding the per-element delay in milliseconds.
    pub delay_attribute: String,
    pub visible_class: String,
    /// Visible fraction in `[0, 1]` that counts as entering the viewport.
    pub threshold: f64,
}

impl RevealConfig {
    fn validate(&self) -> Result<()> {
        non_blank("reveal.selector", &self.selector)?;
        non_blank("reveal.delay_attribute", &self.delay_attribute)?;
        class_token("reveal.visible_class", &self.visible_class)?;

        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::invalid_config(
                "reveal.threshold",
                format!("{} is outside [0, 1]", self.threshold),
            ));
        }

        Ok(())
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".reveal".to_string(),
            delay_attribute: "data-delay".to_string(),
            visible_class: "visible".to_string(),
            threshold: DEFAULT_REVEAL_THRESHOLD,
        }
    }
}

/// Parallax background settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub selector: String,
    pub ratio: f64,
}

impl ParallaxConfig {
    fn validate(&self) -> Result<()> {
        non_blank("parallax.selector", &self.selector)?;

        if !self.ratio.is_finite() {
            return Err(Error::invalid_config("parallax.ratio", "must be finite"));
        }

        Ok(())
    }
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            selector: ".parallax-bg".to_string(),
            ratio: DEFAULT_PARALLAX_RATIO,
        }
    }
}

fn non_blank(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::invalid_config(field, "must not be empty"));
    }
    Ok(())
}

// classList rejects empty tokens and tokens containing whitespace
fn class_token(field: &'static str, value: &str) -> Result<()> {
    non_blank(field, value)?;
    if value.chars().any(char::is_whitespace) {
        return Err(Error::invalid_config(
            field,
            format!("'{value}' is not a single class name"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_landing_page() {
        let config = PageConfig::default();
        assert_eq!(config.carousel.slider_id, "testimonialSlider");
        assert_eq!(config.carousel.prev_id, "prevBtn");
        assert_eq!(config.carousel.next_id, "nextBtn");
        assert_eq!(config.carousel.dots_id, "testimonialDots");
        assert_eq!(config.carousel.interval(), Duration::from_millis(5000));
        assert_eq!(config.reveal.selector, ".reveal");
        assert_eq!(config.reveal.delay_attribute, "data-delay");
        assert!((config.reveal.threshold - 0.15).abs() < f64::EPSILON);
        assert_eq!(config.parallax.selector, ".parallax-bg");
        assert!((config.parallax.ratio - 0.4).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_yields_defaults() -> Result<()> {
        assert_eq!(PageConfig::from_json("{}")?, PageConfig::default());
        Ok(())
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() -> Result<()> {
        let config = PageConfig::from_json(r#"{ "reveal": { "threshold": 0.5 } }"#)?;
        assert!((config.reveal.threshold - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.reveal.visible_class, "visible");
        assert_eq!(config.carousel, CarouselConfig::default());
        Ok(())
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            PageConfig::from_json("{ carousel: }"),
            Err(Error::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = PageConfig::from_json(r#"{ "carousel": { "interval_ms": 0 } }"#);
        assert!(matches!(
            result,
            Err(Error::InvalidConfig {
                field: "carousel.interval_ms",
                ..
            })
        ));
    }

    #[test]
    fn test_interval_beyond_browser_timer_range_rejected() {
        let result = PageConfig::from_json(r#"{ "carousel": { "interval_ms": 3000000000 } }"#);
        assert!(matches!(
            result,
            Err(Error::InvalidConfig {
                field: "carousel.interval_ms",
                ..
            })
        ));
    }

    #[test]
    fn test_longest_browser_interval_accepted() -> Result<()> {
        let config = PageConfig::from_json(r#"{ "carousel": { "interval_ms": 2147483647 } }"#)?;
        assert_eq!(u64::from(config.carousel.interval_ms), MAX_DELAY_MS);
        Ok(())
    }

    #[test]
    fn test_class_with_whitespace_rejected() {
        let result = PageConfig::from_json(r#"{ "carousel": { "active_class": "bg-gray-700 big" } }"#);
        assert!(matches!(
            result,
            Err(Error::InvalidConfig {
                field: "carousel.active_class",
                ..
            })
        ));
    }

    #[test]
    fn test_identical_dot_classes_rejected() {
        let mut config = PageConfig::default();
        config.carousel.inactive_class = config.carousel.active_class.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let mut config = PageConfig::default();
        config.reveal.threshold = 1.5;
        assert!(config.validate().is_err());

        config.reveal.threshold = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_ratio_rejected() {
        let mut config = PageConfig::default();
        config.parallax.ratio = f64::INFINITY;
        assert!(config.validate().is_err());

        // Negative ratios are allowed; they scroll the background the other way.
        config.parallax.ratio = -0.2;
        assert!(config.validate().is_ok());
    }
}
