//! Reveal-on-enter via IntersectionObserver
//!
//! Every element matching the reveal selector is observed once. When one
//! crosses the visibility threshold it is unobserved and, after its
//! `data-delay` milliseconds, gains the visible class.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use js_sys::Array;
use pagefx_core::RevealConfig;
use pagefx_core::reveal::{Intersection, RevealTracker, parse_delay};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::carousel::timer_millis;
use crate::dom;
use crate::error::{Result, UiError, describe};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct RevealState {
    tracker: RevealTracker<Element>,
    visible_class: String,
    pending: Vec<Timeout>,
}

/// Observer, its callback, and reveal timeouts not yet fired.
pub struct RevealOnEnter {
    observer: IntersectionObserver,
    state: Rc<RefCell<RevealState>>,
    _callback: ObserverCallback,
}

impl RevealOnEnter {
    /// Starts observing every element matching `config.selector`.
    ///
    /// Returns `Ok(None)` when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is rejected or the observer cannot
    /// be created.
    pub fn attach(document: &Document, config: &RevealConfig) -> Result<Option<Self>> {
        let targets = dom::query_all(document, &config.selector)?;
        if targets.is_empty() {
            tracing::debug!(selector = %config.selector, "no reveal targets");
            return Ok(None);
        }

        let state = Rc::new(RefCell::new(RevealState {
            tracker: RevealTracker::new(targets.iter().cloned()),
            visible_class: config.visible_class.clone(),
            pending: Vec::new(),
        }));

        let callback_state = Rc::clone(&state);
        let delay_attribute = config.delay_attribute.clone();
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                let reports = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| to_intersection(&entry, &delay_attribute))
                    .collect();
                on_entries(&callback_state, &observer, reports);
            },
        ) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| UiError::ObserverFailed(describe(&e)))?;

        for target in &targets {
            observer.observe(target);
        }
        tracing::info!(targets = targets.len(), "reveal observer started");

        Ok(Some(Self {
            observer,
            state,
            _callback: callback,
        }))
    }

    /// Elements still waiting to enter the viewport.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.state.borrow().tracker.pending()
    }

    /// Disconnects the observer and cancels reveals that have not fired.
    pub fn dispose(self) {
        drop(self);
    }
}

impl Drop for RevealOnEnter {
    fn drop(&mut self) {
        // the callback is freed with self; the observer must not call it again
        self.observer.disconnect();
        if let Ok(mut state) = self.state.try_borrow_mut() {
            state.tracker.clear();
            state.pending.clear();
        }
    }
}

impl std::fmt::Debug for RevealOnEnter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealOnEnter")
            .field("pending", &self.pending())
            .finish_non_exhaustive()
    }
}

/// Unobserves every newly intersecting target and schedules its reveal.
fn on_entries(state: &RefCell<RevealState>, observer: &IntersectionObserver, reports: Vec<Intersection<Element>>) {
    let Ok(mut state) = state.try_borrow_mut() else {
        return;
    };
    for action in state.tracker.on_intersections(reports) {
        observer.unobserve(&action.target);
        let timeout = schedule_reveal(action.target, state.visible_class.clone(), action.delay);
        state.pending.push(timeout);
    }
}

fn to_intersection(entry: &IntersectionObserverEntry, delay_attribute: &str) -> Intersection<Element> {
    let target = entry.target();
    let is_intersecting = entry.is_intersecting();
    let delay = if is_intersecting {
        parse_delay(target.get_attribute(delay_attribute).as_deref())
    } else {
        Duration::ZERO
    };
    Intersection {
        target,
        is_intersecting,
        delay,
    }
}

fn schedule_reveal(target: Element, visible_class: String, delay: Duration) -> Timeout {
    Timeout::new(timer_millis(delay), move || dom::toggle_class(&target, &visible_class, true))
}
