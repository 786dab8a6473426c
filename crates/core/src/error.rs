//! Core error types for pagefx.
//!
//! Nothing here ever reaches the page as a failure: callers log these and
//! leave the affected effect dormant.

use thiserror::Error;

/// Core error type for pagefx operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Configuration errors
    #[error("invalid config field '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("config parse error: {reason}")]
    ConfigParse { reason: String },

    // Carousel construction errors
    #[error("carousel has no slides")]
    NoSlides,

    #[error("carousel has {slides} slides but {dots} indicator dots")]
    IndicatorMismatch { slides: usize, dots: usize },
}

impl Error {
    /// Create an invalid config error.
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }

    /// Create a config parse error.
    pub fn config_parse(reason: impl Into<String>) -> Self {
        Self::ConfigParse {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::config_parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_config("carousel.interval_ms", "must be positive");
        assert_eq!(
            err.to_string(),
            "invalid config field 'carousel.interval_ms': must be positive"
        );

        let err = Error::IndicatorMismatch { slides: 3, dots: 2 };
        assert_eq!(err.to_string(), "carousel has 3 slides but 2 indicator dots");
    }

    #[test]
    fn test_json_error_converts_to_config_parse() {
        let parsed: std::result::Result<serde_json::Value, _> = serde_json::from_str("{ nope");
        let err = parsed.map_err(Error::from);
        assert!(matches!(err, Err(Error::ConfigParse { .. })));
    }
}
