//! RAII `setTimeout` guard.

use crate::domain::error::Result;
use crate::infrastructure::browser::{js_error, window};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// A pending timeout. Dropping it clears the timer; a timer that already fired
/// is unaffected.
pub struct Timeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    /// Runs `callback` once after `delay`.
    ///
    /// # Errors
    ///
    /// Returns [`LandingError::Platform`](crate::LandingError::Platform) if the
    /// timer cannot be scheduled.
    pub fn new<F>(delay: Duration, callback: F) -> Result<Self>
    where
        F: FnOnce() + 'static,
    {
        let callback: Closure<dyn FnMut()> = Closure::once(callback);
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);

        let id = window()?
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.as_ref().unchecked_ref(), millis)
            .map_err(js_error)?;

        Ok(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Ok(window) = window() {
            window.clear_timeout_with_handle(self.id);
        }
    }
}
