//! RAII DOM event subscriptions.

use crate::domain::error::Result;
use crate::infrastructure::browser::js_error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

/// A registered event listener. Dropping it removes the listener.
pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Subscribes `handler` to `event_type` on `target`.
    ///
    /// Passive listeners never call `preventDefault`, which keeps scrolling
    /// smooth for touch events.
    ///
    /// # Errors
    ///
    /// Returns [`LandingError::Platform`](crate::LandingError::Platform) if the
    /// browser rejects the subscription.
    pub fn new<F>(target: &EventTarget, event_type: &'static str, passive: bool, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);

        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event_type,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(js_error)?;

        tracing::trace!(event_type, "listener added");
        Ok(Self {
            target: target.clone(),
            event_type,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let removed = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.callback.as_ref().unchecked_ref());
        if removed.is_err() {
            tracing::debug!(event_type = self.event_type, "failed to remove listener");
        }
    }
}
