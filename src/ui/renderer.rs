//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `PageState` into `PageViewModel`
//! 2. **Component Rendering**: Delegate to the section components
//!
//! The browser shim renders the body once at mount and afterwards only swaps the
//! contents of the two dynamic slots. The static site builder renders a whole
//! document.
//!
//! # Example
//!
//! ```rust
//! use leavedesk_landing::app::PageState;
//! use leavedesk_landing::ui::render_body;
//!
//! let state = PageState::default();
//! let html = render_body(&state);
//! assert!(html.contains("id=\"team\""));
//! ```

use crate::app::PageState;
use crate::domain::SiteContent;
use crate::manifest::MANIFEST_FILE;
use crate::ui::components;
use crate::ui::helpers::{attr, escape, js_string};
use crate::Config;

const STYLESHEET: &str = include_str!("../../assets/landing.css");

/// `id` of the `<script type="application/json">` element carrying the page
/// content, so the browser mounts the same copy the document was built with.
pub const CONTENT_SCRIPT_ID: &str = "landing-content";

/// Renders the page content as an inert JSON script element.
///
/// Empty if the content cannot be serialized; the browser then falls back to
/// the bundled copy.
#[must_use]
pub fn render_content_script(content: &SiteContent) -> String {
    match content.to_json() {
        Ok(json) => format!(
            "<script type=\"application/json\" id=\"{CONTENT_SCRIPT_ID}\">{}</script>",
            json.replace('<', "\\u003c")
        ),
        Err(e) => {
            tracing::warn!(error = %e, "failed to embed page content");
            String::new()
        }
    }
}

/// Renders everything that goes inside the mount root.
#[must_use]
pub fn render_body(state: &PageState) -> String {
    let vm = state.compute_viewmodel();
    components::render_page(&vm, &state.content.product.name)
}

/// Renders the inner HTML of the install slot.
#[must_use]
pub fn render_install_slot(state: &PageState) -> String {
    components::render_install_button(&state.install_view())
}

/// Renders the inner HTML of the pull-to-refresh slot.
#[must_use]
pub fn render_pull_slot(state: &PageState) -> String {
    components::render_pull_indicator(&state.pull_indicator())
}

/// Renders a complete HTML document for static hosting.
///
/// The document links the web app manifest, inlines the theme variables and
/// stylesheet, pre-renders the body into the mount root (carrying the
/// configuration as `data-*` attributes) and loads the wasm bundle.
#[must_use]
pub fn render_document(state: &PageState, config: &Config) -> String {
    let vm = state.compute_viewmodel();
    let body = components::render_page(&vm, &state.content.product.name);

    let data_attrs: String = config
        .to_map()
        .iter()
        .map(|(key, value)| attr(&format!("data-{}", key.replace('_', "-")), value))
        .collect();

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1, viewport-fit=cover\">\n\
         <title>{title}</title>\n\
         <meta name=\"description\"{description}>\n\
         <meta name=\"theme-color\"{theme_color}>\n\
         <meta name=\"apple-mobile-web-app-capable\" content=\"yes\">\n\
         <link rel=\"manifest\"{manifest}>\n\
         <style>\n{variables}\n{STYLESHEET}</style>\n\
         </head>\n\
         <body>\n\
         {content_script}\n\
         <div{root_id}{data_attrs}>{body}</div>\n\
         <script type=\"module\">import init, {{ mountLanding }} from {bundle}; \
         await init(); mountLanding({root_literal}, () => window.location.reload());</script>\n\
         </body>\n\
         </html>\n",
        title = escape(&vm.title),
        description = attr("content", &vm.description),
        theme_color = attr("content", state.theme.theme_color()),
        content_script = render_content_script(&state.content),
        manifest = attr("href", MANIFEST_FILE),
        variables = state.theme.css_variables(),
        root_id = attr("id", &config.root_id),
        bundle = js_string(&format!("./{}", config.wasm_bundle)),
        root_literal = js_string(&config.root_id),
    )
}
