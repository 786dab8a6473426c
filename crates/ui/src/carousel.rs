//! Testimonial carousel bound to the document
//!
//! Resolves the four carousel elements by id, renders through inline
//! `transform` and dot classes, and drives auto-advance with a `gloo-timers`
//! interval. Listeners and the interval callback reach the carousel through
//! `Weak` references; [`TestimonialCarousel`] holds the only strong one, so
//! dropping it tears everything down.

use std::cell::{OnceCell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use gloo_timers::callback::Interval;
use pagefx_core::carousel::{Carousel, CarouselHandles, CarouselView, IntervalScheduler, TrackOffset};
use pagefx_core::CarouselConfig;
use pagefx_core::reveal::MAX_DELAY_MS;
use web_sys::{Document, HtmlElement};

use crate::dom;
use crate::error::Result;
use crate::listener::EventListener;

type DomCarousel = Carousel<DomCarouselView, GlooIntervals>;

/// Renders carousel state onto the slide track and dots.
#[derive(Debug)]
pub struct DomCarouselView {
    track: HtmlElement,
    dots: Vec<HtmlElement>,
    active_class: String,
    inactive_class: String,
}

impl CarouselView for DomCarouselView {
    fn render_offset(&self, offset: TrackOffset) {
        dom::set_transform(&self.track, &offset.to_css());
    }

    fn set_dot_active(&self, dot: usize, active: bool) {
        if let Some(el) = self.dots.get(dot) {
            dom::toggle_class(el, &self.active_class, active);
            dom::toggle_class(el, &self.inactive_class, !active);
        }
    }
}

/// Browser intervals whose ticks call back into the bound carousel.
#[derive(Clone, Default)]
pub struct GlooIntervals {
    on_tick: Rc<OnceCell<Box<dyn Fn()>>>,
}

impl GlooIntervals {
    /// Sets the tick callback. Only the first binding takes effect.
    fn bind(&self, on_tick: impl Fn() + 'static) {
        if self.on_tick.set(Box::new(on_tick)).is_err() {
            tracing::warn!("carousel interval already bound");
        }
    }
}

impl IntervalScheduler for GlooIntervals {
    type Handle = Interval;

    fn every(&self, period: Duration) -> Interval {
        let millis = timer_millis(period);
        let on_tick = Rc::clone(&self.on_tick);
        Interval::new(millis, move || {
            if let Some(tick) = on_tick.get() {
                tick();
            }
        })
    }
}

/// Browser timers take an `i32` millisecond count; longer periods wrap
/// negative and fire immediately, so they are clamped.
pub(crate) fn timer_millis(period: Duration) -> u32 {
    let capped = period.as_millis().min(u128::from(MAX_DELAY_MS));
    u32::try_from(capped).unwrap_or(u32::MAX)
}

impl std::fmt::Debug for GlooIntervals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlooIntervals")
            .field("bound", &self.on_tick.get().is_some())
            .finish()
    }
}

/// A running carousel and the listeners that drive it.
#[derive(Debug)]
pub struct TestimonialCarousel {
    carousel: Rc<RefCell<DomCarousel>>,
    listeners: Vec<EventListener>,
}

impl TestimonialCarousel {
    /// Wires the carousel into `document` and starts it.
    ///
    /// Returns `Ok(None)` when any of the four elements is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the slide and dot counts disagree, there are no
    /// slides, or a listener cannot be registered.
    pub fn attach(document: &Document, config: &CarouselConfig) -> Result<Option<Self>> {
        let handles = CarouselHandles {
            slide_track: dom::html_element_by_id(document, &config.slider_id),
            prev: dom::html_element_by_id(document, &config.prev_id),
            next: dom::html_element_by_id(document, &config.next_id),
            dot_track: dom::html_element_by_id(document, &config.dots_id),
        };
        let missing = handles.missing();
        let Some(parts) = handles.resolve() else {
            tracing::debug!(?missing, "carousel elements missing, staying dormant");
            return Ok(None);
        };

        let slides = dom::children(&parts.slide_track);
        let dots = dom::children(&parts.dot_track);
        let (slide_count, dot_count) = (slides.len(), dots.len());

        let view = DomCarouselView {
            track: parts.slide_track.clone(),
            dots: dots.clone(),
            active_class: config.active_class.clone(),
            inactive_class: config.inactive_class.clone(),
        };
        let timers = GlooIntervals::default();
        let carousel = Carousel::new(view, timers.clone(), slide_count, dot_count, config.interval())?;
        let shared = Rc::new(RefCell::new(carousel));

        let weak = Rc::downgrade(&shared);
        timers.bind(move || with_carousel(&weak, DomCarousel::tick));

        let mut listeners = vec![
            listen(&parts.next, "click", &shared, DomCarousel::advance)?,
            listen(&parts.prev, "click", &shared, DomCarousel::retreat)?,
        ];
        for (i, dot) in dots.iter().enumerate() {
            listeners.push(listen(dot, "click", &shared, move |c| c.jump_to(i))?);
        }
        match parts.slide_track.parent_element() {
            Some(container) => {
                listeners.push(listen(&container, "mouseenter", &shared, DomCarousel::pointer_entered)?);
                listeners.push(listen(&container, "mouseleave", &shared, DomCarousel::pointer_left)?);
            }
            None => tracing::debug!("slide track has no parent, hover pause disabled"),
        }

        shared.borrow_mut().start();
        tracing::info!(slides = slide_count, "testimonial carousel started");

        Ok(Some(Self {
            carousel: shared,
            listeners,
        }))
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.carousel.borrow().current_index()
    }

    #[must_use]
    pub fn is_auto_advancing(&self) -> bool {
        self.carousel.borrow().is_auto_advancing()
    }

    /// Cancels the timer and unregisters every listener.
    pub fn dispose(self) {
        self.carousel.borrow_mut().dispose();
        drop(self.listeners);
    }
}

/// Runs `f` on the carousel if it is still alive and not already borrowed.
fn with_carousel(carousel: &Weak<RefCell<DomCarousel>>, f: impl FnOnce(&mut DomCarousel)) {
    let Some(carousel) = carousel.upgrade() else {
        return;
    };
    let Ok(mut carousel) = carousel.try_borrow_mut() else {
        tracing::trace!("carousel busy, dropping event");
        return;
    };
    f(&mut carousel);
}

fn listen<F>(
    target: &web_sys::EventTarget,
    event: &'static str,
    carousel: &Rc<RefCell<DomCarousel>>,
    f: F,
) -> Result<EventListener>
where
    F: Fn(&mut DomCarousel) + 'static,
{
    let weak = Rc::downgrade(carousel);
    EventListener::new(target, event, move |_| with_carousel(&weak, &f))
}
