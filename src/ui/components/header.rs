//! Site header renderer.
//!
//! A sticky bar with the product name, in-page navigation built from the panel
//! anchors, and the install slot on the right.

use crate::ui::components::install::render_install_slot;
use crate::ui::helpers::{attr, escape};
use crate::ui::viewmodel::PageViewModel;

/// Renders the `<header>` element.
///
/// Navigation links point at each panel id plus the team section.
pub fn render_header(vm: &PageViewModel, brand: &str) -> String {
    let mut nav = String::new();
    for panel in &vm.panels {
        nav.push_str(&format!(
            "<a{}>{}</a>",
            attr("href", &format!("#{}", panel.id)),
            escape(&panel.title)
        ));
    }
    nav.push_str(&format!("<a href=\"#team\">{}</a>", escape(&vm.team.heading)));

    format!(
        "<header class=\"site-header\">\
         <a class=\"brand\" href=\"#top\">{}</a>\
         <nav class=\"site-nav\">{nav}</nav>\
         {}\
         </header>",
        escape(brand),
        render_install_slot(&vm.install),
    )
}
