//! Composable page section renderers.
//!
//! Each component turns one part of the view model into an HTML fragment.
//!
//! # Components
//!
//! - [`header`]: Brand, in-page navigation and the install slot
//! - [`hero`]: Headline, sub-headline, call-to-action and image
//! - [`panels`]: Informational cards
//! - [`team`]: Team roster
//! - [`footer`]: About text, links, contact and copyright
//! - [`install`]: Install call-to-action (dynamic slot)
//! - [`pull`]: Pull-to-refresh indicator (dynamic slot)
//!
//! # Layout
//!
//! ```text
//! [Pull indicator slot]
//! [Header: brand | nav | install slot]
//! <main>
//!   [Hero]
//!   [Panels]
//!   [Team]
//! </main>
//! [Footer]
//! ```

mod footer;
mod header;
mod hero;
mod install;
mod panels;
mod pull;
mod team;

pub use install::{render_install_button, INSTALL_ACTION, INSTALL_SLOT};
pub use pull::{render_pull_indicator, PULL_SLOT};

use crate::ui::viewmodel::PageViewModel;

use footer::render_footer;
use header::render_header;
use hero::render_hero;
use panels::render_panels;
use pull::render_pull_slot;
use team::render_team;

/// Renders the full page body markup (everything inside `<body>`'s mount root).
pub fn render_page(vm: &PageViewModel, brand: &str) -> String {
    let mut html = String::new();
    html.push_str(&render_pull_slot(&vm.pull));
    html.push_str(&render_header(vm, brand));
    html.push_str("<main>");
    html.push_str(&render_hero(&vm.hero));
    html.push_str(&render_panels(&vm.panels));
    html.push_str(&render_team(&vm.team));
    html.push_str("</main>");
    html.push_str(&render_footer(&vm.footer));
    html
}
