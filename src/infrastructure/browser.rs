//! Window and document helpers.

use crate::domain::error::{LandingError, Result};
use crate::domain::{ClientInfo, SiteContent};
use crate::ui::renderer::CONTENT_SCRIPT_ID;
use crate::Config;
use std::collections::BTreeMap;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Window};

/// Converts a thrown JS value into a platform error.
pub fn js_error(value: JsValue) -> LandingError {
    LandingError::Platform(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// Returns the global `window`.
///
/// # Errors
///
/// Returns [`LandingError::Platform`] outside a window context (e.g. a worker).
pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| LandingError::Platform("no global window".to_string()))
}

/// Returns the window's document.
///
/// # Errors
///
/// Returns [`LandingError::Platform`] if the window has no document.
pub fn document(window: &Window) -> Result<Document> {
    window
        .document()
        .ok_or_else(|| LandingError::Platform("window has no document".to_string()))
}

/// Looks up the element the page mounts into.
///
/// # Errors
///
/// Returns [`LandingError::Platform`] if no element has this id.
pub fn root_element(document: &Document, root_id: &str) -> Result<Element> {
    document
        .get_element_by_id(root_id)
        .ok_or_else(|| LandingError::Platform(format!("mount element #{root_id} not found")))
}

/// Reads the configuration from the root element's `data-*` attributes.
pub fn read_config(root: &Element, root_id: &str) -> Config {
    let mut map: BTreeMap<String, String> = Config::MAP_KEYS
        .iter()
        .filter_map(|key| {
            root.get_attribute(&format!("data-{}", key.replace('_', "-")))
                .map(|value| ((*key).to_string(), value))
        })
        .collect();
    map.insert("root_id".to_string(), root_id.to_string());
    Config::from_map(&map)
}

/// Reads the content embedded in the document by the static site builder.
///
/// Falls back to the bundled content if the page carries none or it does not
/// parse.
pub fn read_content(document: &Document) -> SiteContent {
    let Some(json) = document
        .get_element_by_id(CONTENT_SCRIPT_ID)
        .and_then(|script| script.text_content())
    else {
        tracing::debug!("no embedded content, using bundled copy");
        return SiteContent::default();
    };
    SiteContent::from_json(&json).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid embedded content, using bundled copy");
        SiteContent::default()
    })
}

/// Whether the page runs as an installed app.
///
/// Checks the `display-mode: standalone` media query and the iOS-only
/// `navigator.standalone` flag.
pub fn is_standalone(window: &Window) -> bool {
    let display_mode = matches!(
        window.match_media("(display-mode: standalone)"),
        Ok(Some(query)) if query.matches()
    );
    if display_mode {
        return true;
    }
    js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("standalone"))
        .ok()
        .and_then(|value| value.as_bool())
        .unwrap_or(false)
}

/// Describes the current client for install fallback selection.
pub fn probe_client(window: &Window) -> ClientInfo {
    let navigator = window.navigator();
    let user_agent = navigator.user_agent().unwrap_or_default();
    let touch_points = u32::try_from(navigator.max_touch_points()).unwrap_or(0);

    ClientInfo::new(user_agent)
        .with_touch_points(touch_points)
        .with_standalone(is_standalone(window))
}

/// Current vertical scroll offset of the page.
pub fn scroll_top(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Shows a blocking message to the user.
pub fn alert(window: &Window, message: &str) {
    if let Err(e) = window.alert_with_message(message) {
        tracing::warn!(error = %js_error(e), "failed to show alert");
    }
}

/// Registers a service worker script in the background. Failures are logged.
pub fn register_service_worker(window: &Window, script: &str) {
    let promise = window.navigator().service_worker().register(script);
    let script = script.to_string();
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => tracing::debug!(script = %script, "service worker registered"),
            Err(e) => tracing::warn!(script = %script, error = %js_error(e), "service worker registration failed"),
        }
    });
}

/// Calls a JS refresh callback on a later microtask, never inside the
/// current event handler, awaiting it if it returns a promise.
pub fn invoke_refresh(callback: &js_sys::Function) {
    let callback = callback.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match callback.call0(&JsValue::NULL) {
            Ok(value) => {
                if let Ok(promise) = value.dyn_into::<js_sys::Promise>() {
                    if let Err(e) = JsFuture::from(promise).await {
                        tracing::warn!(error = %js_error(e), "refresh callback rejected");
                    }
                }
            }
            Err(e) => tracing::warn!(error = %js_error(e), "refresh callback threw"),
        }
    });
}
