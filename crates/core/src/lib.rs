//! Target-independent core of the pagefx landing page effects
//!
//! Holds the state and math behind the three effects so they can be tested
//! on the host; `pagefx-ui` binds them to the browser.
//!
//! ## Module Structure
//! - `carousel`: testimonial carousel state machine and its view/timer seams
//! - `reveal`: reveal-on-enter bookkeeping and delay parsing
//! - `parallax`: background offset math
//! - `config`: page configuration with defaults and validation
//! - `testing`: recording view and manual clock for driving the carousel
//! - `error`, `result`: error type and logging combinators

#![forbid(unsafe_code)]

pub mod carousel;
pub mod config;
pub mod error;
pub mod parallax;
pub mod result;
pub mod reveal;
pub mod testing;

pub use carousel::{Carousel, CarouselHandles, CarouselView, IntervalScheduler, TrackOffset};
pub use config::{CarouselConfig, PageConfig, ParallaxConfig, RevealConfig};
pub use error::Error;
pub use result::{Result, ResultExt};
