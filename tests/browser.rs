//! Browser shim tests. Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use leavedesk_landing::infrastructure::browser;
use leavedesk_landing::infrastructure::listener::EventListener;
use leavedesk_landing::infrastructure::mount::MountedPage;
use leavedesk_landing::infrastructure::timer::Timeout;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::Element;

wasm_bindgen_test_configure!(run_in_browser);

async fn sleep(millis: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        let window = web_sys::window().unwrap();
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn create_root(id: &str) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    root.set_id(id);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn counter() -> (Rc<Cell<u32>>, impl Fn() -> u32) {
    let count = Rc::new(Cell::new(0));
    let read = Rc::clone(&count);
    (count, move || read.get())
}

#[wasm_bindgen_test]
async fn timeout_fires_once() {
    let (count, calls) = counter();
    let _timer = Timeout::new(Duration::from_millis(5), move || count.set(count.get() + 1)).unwrap();

    sleep(40).await;
    assert_eq!(calls(), 1);
}

#[wasm_bindgen_test]
async fn dropped_timeout_never_fires() {
    let (count, calls) = counter();
    let timer = Timeout::new(Duration::from_millis(5), move || count.set(count.get() + 1)).unwrap();
    drop(timer);

    sleep(40).await;
    assert_eq!(calls(), 0);
}

#[wasm_bindgen_test]
fn dropped_listener_is_removed() {
    let target = create_root("listener-target");
    let (count, calls) = counter();
    let listener = EventListener::new(&target, "ping", false, move |_| count.set(count.get() + 1)).unwrap();

    target.dispatch_event(&web_sys::Event::new("ping").unwrap()).unwrap();
    assert_eq!(calls(), 1);

    drop(listener);
    target.dispatch_event(&web_sys::Event::new("ping").unwrap()).unwrap();
    assert_eq!(calls(), 1);
}

#[wasm_bindgen_test]
async fn refresh_callback_runs_after_the_handler() {
    let global = js_sys::global();
    let key = JsValue::from_str("__leavedeskRefreshCalls");
    js_sys::Reflect::set(&global, &key, &JsValue::from_f64(0.0)).unwrap();
    let callback = js_sys::Function::new_no_args("globalThis.__leavedeskRefreshCalls += 1;");

    browser::invoke_refresh(&callback);
    assert_eq!(js_sys::Reflect::get(&global, &key).unwrap().as_f64(), Some(0.0));

    sleep(10).await;
    assert_eq!(js_sys::Reflect::get(&global, &key).unwrap().as_f64(), Some(1.0));
}

#[wasm_bindgen_test]
fn mounted_page_tracks_install_signals_until_unmounted() {
    let root = create_root("mount-root");
    let window = web_sys::window().unwrap();

    let page = MountedPage::mount("mount-root", None).unwrap();
    assert!(root.inner_html().contains("data-slot=\"install\""));
    assert!(root.inner_html().contains("How to install"));

    window
        .dispatch_event(&web_sys::Event::new("beforeinstallprompt").unwrap())
        .unwrap();
    assert!(root.inner_html().contains("Install LeaveDesk"));

    window.dispatch_event(&web_sys::Event::new("appinstalled").unwrap()).unwrap();
    assert!(!root.inner_html().contains("Install LeaveDesk"));
    assert!(!root.inner_html().contains("How to install"));

    page.unmount();
    root.set_inner_html("");
    window
        .dispatch_event(&web_sys::Event::new("beforeinstallprompt").unwrap())
        .unwrap();
    assert_eq!(root.inner_html(), "");
}

#[wasm_bindgen_test]
fn mount_keeps_pre_rendered_markup() {
    let root = create_root("prerendered-root");
    root.set_inner_html("<h1 class=\"marker\">Built copy</h1><div data-slot=\"install\"></div>");

    let _page = MountedPage::mount("prerendered-root", None).unwrap();
    assert!(root.inner_html().contains("Built copy"));
    assert!(root.inner_html().contains("How to install"));
}

#[wasm_bindgen_test]
fn mount_without_root_fails() {
    assert!(MountedPage::mount("no-such-root", None).is_err());
}
