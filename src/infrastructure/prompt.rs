//! `beforeinstallprompt` bridge.
//!
//! The browser hands out a `BeforeInstallPromptEvent` whose `prompt()` may be
//! called once, from a user gesture. The application layer only ever sees a
//! [`PromptHandle`]; the event itself stays here.

use crate::app::{PromptHandle, PromptOutcome};
use crate::infrastructure::browser::js_error;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Event;

/// The most recent deferred install prompt.
#[derive(Default)]
pub struct DeferredPrompt {
    next_id: u64,
    retained: Option<(PromptHandle, Event)>,
}

impl DeferredPrompt {
    /// Suppresses the browser's own install UI and keeps the event.
    ///
    /// Replaces any previously kept event.
    pub fn retain(&mut self, event: Event) -> PromptHandle {
        event.prevent_default();
        self.next_id += 1;
        let handle = PromptHandle::new(self.next_id);
        self.retained = Some((handle, event));
        handle
    }

    /// Takes the event for `handle`, if it is still the one kept.
    pub fn take(&mut self, handle: PromptHandle) -> Option<Event> {
        match self.retained.take() {
            Some((kept, event)) if kept == handle => Some(event),
            other => {
                self.retained = other;
                None
            }
        }
    }

    pub fn clear(&mut self) {
        self.retained = None;
    }
}

/// Shows the native prompt and waits for the user's choice.
///
/// # Errors
///
/// Returns the stringified JS error if `prompt()` throws or `userChoice`
/// rejects.
pub async fn show(event: Event) -> Result<PromptOutcome, String> {
    let prompt: Function = Reflect::get(&event, &JsValue::from_str("prompt"))
        .and_then(|value| value.dyn_into::<Function>().map_err(JsValue::from))
        .map_err(|e| js_error(e).to_string())?;

    let shown = prompt.call0(&event).map_err(|e| js_error(e).to_string())?;
    if let Ok(promise) = shown.dyn_into::<Promise>() {
        JsFuture::from(promise).await.map_err(|e| js_error(e).to_string())?;
    }

    let choice = Reflect::get(&event, &JsValue::from_str("userChoice"))
        .and_then(|value| value.dyn_into::<Promise>().map_err(JsValue::from))
        .map_err(|e| js_error(e).to_string())?;
    let choice = JsFuture::from(choice).await.map_err(|e| js_error(e).to_string())?;

    let outcome = Reflect::get(&choice, &JsValue::from_str("outcome"))
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_default();
    tracing::debug!(outcome = %outcome, "install prompt answered");

    Ok(PromptOutcome::from_browser(&outcome))
}
