//! Owned DOM event listeners
//!
//! An [`EventListener`] keeps its closure alive for as long as it is
//! registered and removes itself from the target when dropped, so effects
//! can tear down by dropping their listeners.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

use crate::error::{Result, UiError, describe};

/// A registered listener; dropping it unregisters the callback.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Registers `callback` for `event` on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::ListenerFailed`] if `addEventListener` throws.
    pub fn new<F>(target: &EventTarget, event: &'static str, callback: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);

        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| UiError::ListenerFailed {
                event,
                reason: describe(&e),
            })?;

        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    #[must_use]
    pub const fn event(&self) -> &'static str {
        self.event
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
        {
            tracing::warn!("failed to remove '{}' listener: {}", self.event, describe(&e));
        }
    }
}

impl std::fmt::Debug for EventListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventListener")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}
