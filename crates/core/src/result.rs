//! Result type definition and extension traits.
//!
//! The page never surfaces a failure, so most call sites end in one of these
//! combinators: log the error, fall back, keep going.

use std::fmt::Display;

use crate::error::Error;

/// The standard Result type for pagefx operations.
///
/// # Examples
///
/// ```
/// use pagefx_core::{PageConfig, Result, ResultExt};
///
/// let parsed: Result<PageConfig> = PageConfig::from_json("{ broken");
/// let config = parsed.or_default_logged(PageConfig::default());
/// assert_eq!(config, PageConfig::default());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for degrading failures into logged fallbacks.
pub trait ResultExt<T> {
    /// Convert a Result to an Option, logging the error if present.
    fn into_option_logged(self) -> Option<T>;

    /// Get the value or a default, logging the error if present.
    fn or_default_logged(self, default: T) -> T;
}

impl<T, E: Display> ResultExt<T> for std::result::Result<T, E> {
    fn into_option_logged(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("discarding error: {}", e);
                None
            }
        }
    }

    fn or_default_logged(self, default: T) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("using default: {}", e);
                default
            }
        }
    }
}
