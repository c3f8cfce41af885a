//! Mounted page: wires the browser to the application layer.
//!
//! ```text
//! DOM event ──► EventListener ──► Event ──► handle_event ──► (render, Vec<Action>)
//!                                                              │
//!                     slots re-rendered ◄──────────────────────┤
//!                     prompt / alert / refresh / timers ◄──────┘
//! ```
//!
//! Listener and timer closures hold a `Weak` reference to the page, so anything
//! still in flight after unmount (a pending `userChoice`, a timer racing the
//! teardown) finds nothing to update and does nothing.

use crate::app::{handle_event, Action, Event, PageState};
use crate::domain::error::{LandingError, Result};
use crate::infrastructure::browser::{self, js_error};
use crate::infrastructure::listener::EventListener;
use crate::infrastructure::prompt::{self, DeferredPrompt};
use crate::infrastructure::timer::Timeout;
use crate::ui::components::{INSTALL_ACTION, INSTALL_SLOT, PULL_SLOT};
use crate::ui::{render_body, render_install_slot, render_pull_slot};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use web_sys::{Element, TouchEvent, Window};

/// Event dispatched on the root when no refresh callback was supplied.
pub const REFRESH_EVENT: &str = "landing-refresh";

struct Page {
    state: PageState,
    window: Window,
    root: Element,
    prompt: DeferredPrompt,
    reset_timer: Option<Timeout>,
    on_refresh: Option<js_sys::Function>,
}

impl Page {
    fn render_slots(&self) {
        self.fill_slot(INSTALL_SLOT, &render_install_slot(&self.state));
        self.fill_slot(PULL_SLOT, &render_pull_slot(&self.state));
    }

    fn fill_slot(&self, slot: &str, html: &str) {
        match self.root.query_selector(&format!("[data-slot=\"{slot}\"]")) {
            Ok(Some(element)) => element.set_inner_html(html),
            Ok(None) => tracing::debug!(slot, "slot not found"),
            Err(e) => tracing::debug!(slot, error = %js_error(e), "invalid slot selector"),
        }
    }
}

/// Calls the refresh callback, or dispatches [`REFRESH_EVENT`] on the root.
///
/// Both happen on a later microtask, outside the `touchend` handler.
fn refresh(on_refresh: Option<&js_sys::Function>, root: &Element) {
    if let Some(callback) = on_refresh {
        browser::invoke_refresh(callback);
        return;
    }
    let root = root.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match web_sys::CustomEvent::new(REFRESH_EVENT) {
            Ok(event) => {
                if let Err(e) = root.dispatch_event(&event) {
                    tracing::warn!(error = %js_error(e), "failed to dispatch refresh event");
                }
            }
            Err(e) => tracing::warn!(error = %js_error(e), "failed to create refresh event"),
        }
    });
}

/// Feeds one event through the application layer and runs the resulting actions.
fn dispatch(page: &Rc<RefCell<Page>>, event: &Event) {
    let result = handle_event(&mut page.borrow_mut().state, event);

    match result {
        Ok((should_render, actions)) => {
            tracing::debug!(action_count = actions.len(), should_render, "event handled");
            if should_render {
                page.borrow().render_slots();
            }
            for action in actions {
                execute_action(page, action);
            }
        }
        Err(e) => tracing::debug!(error = %e, "error handling event"),
    }
}

fn dispatch_weak(page: &Weak<RefCell<Page>>, event: &Event) {
    if let Some(page) = page.upgrade() {
        dispatch(&page, event);
    }
}

fn execute_action(page: &Rc<RefCell<Page>>, action: Action) {
    match action {
        Action::ShowPrompt(handle) => {
            let deferred = page.borrow_mut().prompt.take(handle);
            let Some(deferred) = deferred else {
                tracing::debug!(handle = handle.id(), "prompt event no longer available");
                dispatch(
                    page,
                    &Event::PromptResolved {
                        handle,
                        outcome: Err("install prompt expired".to_string()),
                    },
                );
                return;
            };
            let weak = Rc::downgrade(page);
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = prompt::show(deferred).await;
                dispatch_weak(&weak, &Event::PromptResolved { handle, outcome });
            });
        }
        Action::Notify(notice) => {
            let window = page.borrow().window.clone();
            browser::alert(&window, notice.message());
        }
        Action::Refresh => {
            let (on_refresh, root) = {
                let page = page.borrow();
                (page.on_refresh.clone(), page.root.clone())
            };
            refresh(on_refresh.as_ref(), &root);
        }
        Action::ScheduleRefreshReset { ticket, delay } => {
            let weak = Rc::downgrade(page);
            match Timeout::new(delay, move || dispatch_weak(&weak, &Event::RefreshSettled(ticket))) {
                // Replacing an older timer clears it; a timer is never dropped
                // from inside its own callback.
                Ok(timer) => page.borrow_mut().reset_timer = Some(timer),
                Err(e) => {
                    tracing::warn!(error = %e, "failed to schedule refresh reset");
                    dispatch(page, &Event::RefreshSettled(ticket));
                }
            }
        }
        Action::CancelRefreshReset(ticket) => {
            tracing::debug!(ticket = ticket.id(), "cancelling refresh reset");
            page.borrow_mut().reset_timer = None;
        }
    }
}

fn first_touch_y(event: &web_sys::Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(f64::from(touch.client_y()))
}

/// A landing page mounted into a root element.
///
/// Dropping it (or calling [`MountedPage::unmount`]) removes every listener,
/// clears the pending refresh timer and releases the deferred prompt.
pub struct MountedPage {
    page: Rc<RefCell<Page>>,
    listeners: Vec<EventListener>,
}

impl MountedPage {
    /// Renders the page into `#root_id` and starts listening.
    ///
    /// Configuration comes from the root element's `data-*` attributes and the
    /// content from the document's embedded JSON. Markup pre-rendered into the
    /// root is kept; only the dynamic slots are re-rendered.
    /// `on_refresh` is called for each committed pull; without it a
    /// `landing-refresh` event is dispatched on the root instead.
    ///
    /// # Errors
    ///
    /// Returns [`LandingError::Platform`] if there is no window, the root
    /// element does not exist, or a listener cannot be registered.
    pub fn mount(root_id: &str, on_refresh: Option<js_sys::Function>) -> Result<Self> {
        let window = browser::window()?;
        let document = browser::document(&window)?;
        let root = browser::root_element(&document, root_id)?;

        let config = browser::read_config(&root, root_id);
        crate::observability::init_tracing(&config);
        let _span = tracing::debug_span!("mount", root_id).entered();

        let state = crate::initialize_with_content(&config, browser::read_content(&document));
        if root.child_element_count() == 0 {
            root.set_inner_html(&render_body(&state));
        } else {
            tracing::debug!("adopting pre-rendered markup");
        }

        if let Some(script) = &config.service_worker {
            browser::register_service_worker(&window, script);
        }

        let page = Rc::new(RefCell::new(Page {
            state,
            window: window.clone(),
            root: root.clone(),
            prompt: DeferredPrompt::default(),
            reset_timer: None,
            on_refresh,
        }));

        let listeners = Self::listen(&page, &window, &root)?;
        dispatch(&page, &Event::Mounted(browser::probe_client(&window)));

        tracing::debug!("page mounted");
        Ok(Self { page, listeners })
    }

    fn listen(page: &Rc<RefCell<Page>>, window: &Window, root: &Element) -> Result<Vec<EventListener>> {
        let mut listeners = Vec::with_capacity(6);

        let weak = Rc::downgrade(page);
        listeners.push(EventListener::new(window, "beforeinstallprompt", false, move |event| {
            if let Some(page) = weak.upgrade() {
                let handle = page.borrow_mut().prompt.retain(event);
                dispatch(&page, &Event::InstallAvailable(handle));
            }
        })?);

        let weak = Rc::downgrade(page);
        listeners.push(EventListener::new(window, "appinstalled", false, move |_| {
            if let Some(page) = weak.upgrade() {
                page.borrow_mut().prompt.clear();
                dispatch(&page, &Event::AppInstalled);
            }
        })?);

        let weak = Rc::downgrade(page);
        let selector = format!("[data-action=\"{INSTALL_ACTION}\"]");
        listeners.push(EventListener::new(root, "click", false, move |event| {
            let on_install = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|element| element.closest(&selector).ok().flatten())
                .is_some();
            if on_install {
                dispatch_weak(&weak, &Event::InstallRequested);
            }
        })?);

        let weak = Rc::downgrade(page);
        let scroll_window = window.clone();
        listeners.push(EventListener::new(window, "touchstart", true, move |event| {
            if let Some(y) = first_touch_y(&event) {
                let scroll_top = browser::scroll_top(&scroll_window);
                dispatch_weak(&weak, &Event::TouchStart { y, scroll_top });
            }
        })?);

        let weak = Rc::downgrade(page);
        let scroll_window = window.clone();
        listeners.push(EventListener::new(window, "touchmove", true, move |event| {
            if let Some(y) = first_touch_y(&event) {
                let scroll_top = browser::scroll_top(&scroll_window);
                dispatch_weak(&weak, &Event::TouchMove { y, scroll_top });
            }
        })?);

        for event_type in ["touchend", "touchcancel"] {
            let weak = Rc::downgrade(page);
            listeners.push(EventListener::new(window, event_type, true, move |_| {
                dispatch_weak(&weak, &Event::TouchEnd);
            })?);
        }

        Ok(listeners)
    }

    /// Tears the page down. Equivalent to dropping it.
    pub fn unmount(self) {}
}

impl Drop for MountedPage {
    fn drop(&mut self) {
        self.listeners.clear();
        dispatch(&self.page, &Event::Unmounted);

        let mut page = self.page.borrow_mut();
        page.reset_timer = None;
        page.prompt.clear();
        tracing::debug!("page unmounted");
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<MountedPage>> = const { RefCell::new(None) };
}

/// Module entry point, run when the wasm bundle is initialized.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Mounts the landing page into `#root_id`, replacing any page mounted before.
///
/// # Errors
///
/// Rejects with the error message if mounting fails.
#[wasm_bindgen(js_name = mountLanding)]
pub fn mount_landing(root_id: &str, on_refresh: Option<js_sys::Function>) -> std::result::Result<(), JsValue> {
    unmount_landing();
    let page = MountedPage::mount(root_id, on_refresh).map_err(|e: LandingError| JsValue::from_str(&e.to_string()))?;
    MOUNTED.with(|mounted| *mounted.borrow_mut() = Some(page));
    Ok(())
}

/// Unmounts the current page, if any.
#[wasm_bindgen(js_name = unmountLanding)]
pub fn unmount_landing() {
    let page = MOUNTED.with(|mounted| mounted.borrow_mut().take());
    if let Some(page) = page {
        page.unmount();
    }
}
