//! Testimonial carousel state machine
//!
//! The carousel shows one slide of a fixed set at a time, advances on a
//! repeating timer, and reflects the current slide in a row of indicator
//! dots. It never touches the DOM itself: rendering goes through a
//! [`CarouselView`] and timers through an [`IntervalScheduler`], so the same
//! logic runs in the browser and in host tests.
//!
//! # Lifecycle
//!
//! ```text
//! Idle --start()--> Running <--pointer_left()-- Paused
//!                      \----pointer_entered()---->/
//! any --dispose()--> Disposed (terminal, every trigger is a no-op)
//! ```
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use pagefx_core::carousel::Carousel;
//! use pagefx_core::testing::{ManualScheduler, RecordingView};
//!
//! let view = RecordingView::with_dots(3);
//! let clock = ManualScheduler::default();
//! let mut carousel = Carousel::new(view.clone(), clock.clone(), 3, 3, Duration::from_secs(5))?;
//!
//! carousel.start();
//! assert_eq!(carousel.current_index(), 0);
//! assert_eq!(view.active_dots(), vec![0]);
//!
//! carousel.retreat();
//! assert_eq!(carousel.current_index(), 2);
//! # Ok::<(), pagefx_core::Error>(())
//! ```

use std::fmt;
use std::num::NonZeroUsize;
use std::time::Duration;

use crate::error::Error;
use crate::result::Result;

/// Horizontal translation that brings one slide fully into view.
///
/// Each slide is as wide as the track's viewport, so slide `i` sits at
/// `-i * 100%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackOffset {
    index: usize,
}

impl TrackOffset {
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        Self { index }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    /// Leftward shift as a percentage of the viewport width.
    #[must_use]
    pub fn percent(self) -> u64 {
        u64::try_from(self.index)
            .unwrap_or(u64::MAX)
            .saturating_mul(100)
    }

    /// CSS `transform` value for this offset.
    ///
    /// ```
    /// use pagefx_core::carousel::TrackOffset;
    ///
    /// assert_eq!(TrackOffset::for_index(2).to_css(), "translateX(-200%)");
    /// ```
    #[must_use]
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TrackOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translateX(-{}%)", self.percent())
    }
}

/// Wraps any step target into `[0, count)`.
///
/// Equivalent to `((target mod count) + count) mod count`, so targets far
/// outside the range in either direction still land on a valid slide.
///
/// ```
/// use std::num::NonZeroUsize;
/// use pagefx_core::carousel::normalize_index;
///
/// let three = NonZeroUsize::new(3).ok_or("zero")?;
/// assert_eq!(normalize_index(-1, three), 2);
/// assert_eq!(normalize_index(7, three), 1);
/// # Ok::<(), &str>(())
/// ```
#[must_use]
pub fn normalize_index(target: i64, count: NonZeroUsize) -> usize {
    match i64::try_from(count.get()) {
        // rem_euclid is in [0, n) for n > 0, so the conversion back cannot fail
        Ok(n) => usize::try_from(target.rem_euclid(n)).unwrap_or(0),
        // count exceeds i64::MAX, so every non-negative target is in range
        Err(_) => usize::try_from(target).unwrap_or_else(|_| {
            count
                .get()
                .saturating_sub(usize::try_from(target.unsigned_abs()).unwrap_or(usize::MAX))
        }),
    }
}

/// Rendering side of the carousel.
pub trait CarouselView {
    /// Positions the slide track so the slide at `offset.index()` is in view.
    fn render_offset(&self, offset: TrackOffset);

    /// Marks one indicator dot active or inactive.
    fn set_dot_active(&self, dot: usize, active: bool);
}

/// Source of repeating timers.
///
/// Dropping a handle cancels its timer. The scheduler decides what a tick
/// calls; in the browser that is [`Carousel::tick`] on the owning carousel.
pub trait IntervalScheduler {
    type Handle;

    /// Starts a timer firing every `period`.
    fn every(&self, period: Duration) -> Self::Handle;
}

/// The four element handles a carousel needs, as found in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselHandles<T> {
    pub slide_track: Option<T>,
    pub prev: Option<T>,
    pub next: Option<T>,
    pub dot_track: Option<T>,
}

/// All four handles present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHandles<T> {
    pub slide_track: T,
    pub prev: T,
    pub next: T,
    pub dot_track: T,
}

impl<T> CarouselHandles<T> {
    /// Returns `None` unless every handle is present; a carousel with any
    /// handle missing stays dormant.
    pub fn resolve(self) -> Option<ResolvedHandles<T>> {
        Some(ResolvedHandles {
            slide_track: self.slide_track?,
            prev: self.prev?,
            next: self.next?,
            dot_track: self.dot_track?,
        })
    }

    /// Roles of the handles that were not found.
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("slide_track", self.slide_track.is_none()),
            ("prev", self.prev.is_none()),
            ("next", self.next.is_none()),
            ("dot_track", self.dot_track.is_none()),
        ]
        .into_iter()
        .filter_map(|(role, absent)| absent.then_some(role))
        .collect()
    }
}

/// Auto-advance lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoAdvance {
    /// Constructed, not started.
    #[default]
    Idle,
    /// A timer is live.
    Running,
    /// Stopped, typically because the pointer is over the carousel.
    Paused,
    /// Torn down; nothing runs again.
    Disposed,
}

/// One carousel instance bound to its view and scheduler.
pub struct Carousel<V, S: IntervalScheduler> {
    view: V,
    scheduler: S,
    slides: NonZeroUsize,
    index: usize,
    interval: Duration,
    timer: Option<S::Handle>,
    state: AutoAdvance,
}

impl<V: CarouselView, S: IntervalScheduler> Carousel<V, S> {
    /// Binds a carousel to its view and scheduler.
    ///
    /// Nothing is rendered and no timer is started until [`Carousel::start`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSlides`] for an empty slide set and
    /// [`Error::IndicatorMismatch`] when the dot count differs from the
    /// slide count.
    pub fn new(
        view: V,
        scheduler: S,
        slide_count: usize,
        dot_count: usize,
        interval: Duration,
    ) -> Result<Self> {
        let slides = NonZeroUsize::new(slide_count).ok_or(Error::NoSlides)?;
        if dot_count != slide_count {
            return Err(Error::IndicatorMismatch {
                slides: slide_count,
                dots: dot_count,
            });
        }

        Ok(Self {
            view,
            scheduler,
            slides,
            index: 0,
            interval,
            timer: None,
            state: AutoAdvance::Idle,
        })
    }

    /// Startup sequence: show the first slide, then start auto-advance.
    pub fn start(&mut self) {
        self.show_slide(0);
        self.start_auto_advance();
    }

    /// Shows the slide at `target`, wrapped into range.
    pub fn show_slide(&mut self, target: i64) {
        self.display(normalize_index(target, self.slides));
    }

    pub fn advance(&mut self) {
        self.show_slide(self.index_i64().saturating_add(1));
    }

    pub fn retreat(&mut self) {
        self.show_slide(self.index_i64().saturating_sub(1));
    }

    /// Indicator `dot` was activated.
    pub fn jump_to(&mut self, dot: usize) {
        self.display(dot % self.slides);
    }

    /// Timer callback.
    pub fn tick(&mut self) {
        if self.timer.is_some() {
            self.advance();
        }
    }

    /// Replaces any live timer with a fresh one.
    pub fn start_auto_advance(&mut self) {
        if self.state == AutoAdvance::Disposed {
            return;
        }
        // drop first so two timers are never live at once
        self.timer = None;
        self.timer = Some(self.scheduler.every(self.interval));
        self.state = AutoAdvance::Running;
        tracing::debug!(interval_ms = ?self.interval.as_millis(), "carousel auto-advance started");
    }

    /// Cancels the live timer. Only a running carousel becomes paused.
    pub fn stop_auto_advance(&mut self) {
        if self.timer.take().is_some() {
            tracing::debug!("carousel auto-advance stopped");
        }
        if self.state == AutoAdvance::Running {
            self.state = AutoAdvance::Paused;
        }
    }

    pub fn pointer_entered(&mut self) {
        self.stop_auto_advance();
    }

    pub fn pointer_left(&mut self) {
        self.start_auto_advance();
    }

    /// Cancels the timer; every later trigger is ignored.
    pub fn dispose(&mut self) {
        self.timer = None;
        self.state = AutoAdvance::Disposed;
        tracing::debug!("carousel disposed");
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn slide_count(&self) -> usize {
        self.slides.get()
    }

    #[must_use]
    pub const fn offset(&self) -> TrackOffset {
        TrackOffset::for_index(self.index)
    }

    #[must_use]
    pub const fn state(&self) -> AutoAdvance {
        self.state
    }

    #[must_use]
    pub const fn is_auto_advancing(&self) -> bool {
        self.timer.is_some()
    }

    fn index_i64(&self) -> i64 {
        i64::try_from(self.index).unwrap_or(i64::MAX)
    }

    fn display(&mut self, index: usize) {
        if self.state == AutoAdvance::Disposed {
            return;
        }
        self.index = index;
        self.view.render_offset(self.offset());
        for dot in 0..self.slides.get() {
            self.view.set_dot_active(dot, dot == index);
        }
        tracing::trace!(index, "carousel showing slide");
    }
}

impl<V, S: IntervalScheduler> fmt::Debug for Carousel<V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("slides", &self.slides)
            .field("index", &self.index)
            .field("interval", &self.interval)
            .field("live_timer", &self.timer.is_some())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;
    use crate::testing::{ManualScheduler, RecordingView};

    const PERIOD: Duration = Duration::from_millis(5000);

    fn carousel(slides: usize) -> (Carousel<RecordingView, ManualScheduler>, RecordingView, ManualScheduler) {
        let view = RecordingView::with_dots(slides);
        let clock = ManualScheduler::default();
        let carousel = Carousel::new(view.clone(), clock.clone(), slides, slides, PERIOD).unwrap();
        (carousel, view, clock)
    }

    #[test]
    fn test_offset_css() {
        assert_eq!(TrackOffset::for_index(0).to_css(), "translateX(-0%)");
        assert_eq!(TrackOffset::for_index(3).to_css(), "translateX(-300%)");
    }

    #[test]
    fn test_normalize_index_wraps_both_directions() {
        let four = NonZeroUsize::new(4).unwrap();
        assert_eq!(normalize_index(0, four), 0);
        assert_eq!(normalize_index(4, four), 0);
        assert_eq!(normalize_index(-1, four), 3);
        assert_eq!(normalize_index(-4, four), 0);
        assert_eq!(normalize_index(-5, four), 3);
        assert_eq!(normalize_index(i64::MAX, four), 3);
        assert_eq!(normalize_index(i64::MIN, four), 0);
    }

    #[test]
    fn test_new_rejects_empty_slide_set() {
        let result = Carousel::new(
            RecordingView::with_dots(0),
            ManualScheduler::default(),
            0,
            0,
            PERIOD,
        );
        assert!(matches!(result, Err(Error::NoSlides)));
    }

    #[test]
    fn test_new_rejects_indicator_mismatch() {
        let result = Carousel::new(
            RecordingView::with_dots(2),
            ManualScheduler::default(),
            3,
            2,
            PERIOD,
        );
        assert!(matches!(
            result,
            Err(Error::IndicatorMismatch { slides: 3, dots: 2 })
        ));
    }

    #[test]
    fn test_new_renders_nothing_until_started() {
        let (carousel, view, clock) = carousel(3);
        assert_eq!(carousel.state(), AutoAdvance::Idle);
        assert_eq!(view.renders(), 0);
        assert_eq!(clock.created(), 0);
    }

    #[test]
    fn test_start_shows_first_slide_and_schedules_timer() {
        let (mut carousel, view, clock) = carousel(3);
        carousel.start();

        assert_eq!(view.offset(), Some(TrackOffset::for_index(0)));
        assert_eq!(view.active_dots(), vec![0]);
        assert_eq!(clock.live_timers(), 1);
        assert_eq!(carousel.state(), AutoAdvance::Running);
    }

    #[test]
    fn test_restart_keeps_single_timer() {
        let (mut carousel, _view, clock) = carousel(3);
        carousel.start_auto_advance();
        carousel.start_auto_advance();

        assert_eq!(clock.live_timers(), 1);
        assert_eq!(clock.created(), 2);
    }

    #[test]
    fn test_stop_without_timer_is_noop() {
        let (mut carousel, view, clock) = carousel(2);
        carousel.stop_auto_advance();
        assert_eq!(clock.live_timers(), 0);
        assert_eq!(view.renders(), 0);
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.state(), AutoAdvance::Idle);
    }

    #[test]
    fn test_stop_pauses_only_a_running_carousel() {
        let (mut carousel, _view, _clock) = carousel(2);
        carousel.start();
        carousel.stop_auto_advance();
        assert_eq!(carousel.state(), AutoAdvance::Paused);

        carousel.dispose();
        carousel.stop_auto_advance();
        assert_eq!(carousel.state(), AutoAdvance::Disposed);
    }

    #[test]
    fn test_tick_after_stop_is_ignored() {
        let (mut carousel, _view, _clock) = carousel(3);
        carousel.start();
        carousel.stop_auto_advance();
        carousel.tick();
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_dispose_cancels_timer_and_freezes_state() {
        let (mut carousel, view, clock) = carousel(3);
        carousel.start();
        carousel.dispose();

        assert_eq!(clock.live_timers(), 0);
        let renders = view.renders();

        carousel.advance();
        carousel.pointer_left();
        carousel.jump_to(2);

        assert_eq!(carousel.current_index(), 0);
        assert_eq!(clock.live_timers(), 0);
        assert_eq!(view.renders(), renders);
        assert_eq!(carousel.state(), AutoAdvance::Disposed);
    }

    #[test]
    fn test_jump_to_out_of_range_dot_wraps() {
        let (mut carousel, view, _clock) = carousel(3);
        carousel.jump_to(5);
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(view.active_dots(), vec![2]);
    }

    #[test]
    fn test_handles_resolve_requires_all_four() {
        let full = CarouselHandles {
            slide_track: Some("track"),
            prev: Some("prev"),
            next: Some("next"),
            dot_track: Some("dots"),
        };
        assert!(full.clone().resolve().is_some());
        assert!(full.missing().is_empty());

        let no_prev = CarouselHandles { prev: None, ..full };
        assert_eq!(no_prev.missing(), vec!["prev"]);
        assert!(no_prev.resolve().is_none());
    }
}
