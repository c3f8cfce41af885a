//! Footer renderer.

use crate::ui::helpers::{attr, escape, safe_href};
use crate::ui::viewmodel::FooterView;

/// Renders the page `<footer>` with about text, links, contact and copyright.
pub fn render_footer(footer: &FooterView) -> String {
    let links: String = footer
        .links
        .iter()
        .map(|link| {
            format!(
                "<li><a{}>{}</a></li>",
                attr("href", safe_href(&link.href)),
                escape(&link.label)
            )
        })
        .collect();

    let contact = footer.contact_email.as_ref().map_or_else(String::new, |email| {
        format!(
            "<p class=\"contact\"><a{}>{}</a></p>",
            attr("href", &format!("mailto:{email}")),
            escape(email)
        )
    });

    format!(
        "<footer class=\"site-footer\">\
         <p class=\"about\">{}</p>\
         <ul class=\"footer-links\">{links}</ul>\
         {contact}\
         <p class=\"copyright\">{}</p>\
         </footer>",
        escape(&footer.about),
        escape(&footer.copyright),
    )
}
