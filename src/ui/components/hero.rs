//! Hero section renderer.

use crate::ui::helpers::{attr, escape, safe_href};
use crate::ui::viewmodel::HeroView;

/// Renders the hero `<section id="top">`.
///
/// The image column is omitted when no hero image is configured.
pub fn render_hero(hero: &HeroView) -> String {
    let image = hero.image.as_ref().map_or_else(String::new, |image| {
        format!(
            "<img class=\"hero-image\"{}{} loading=\"eager\">",
            attr("src", safe_href(&image.src)),
            attr("alt", &image.alt)
        )
    });

    format!(
        "<section id=\"top\" class=\"hero\">\
         <div class=\"hero-copy\">\
         <h1>{}</h1>\
         <p class=\"hero-sub\">{}</p>\
         <a class=\"button button-primary\"{}>{}</a>\
         </div>\
         {image}\
         </section>",
        escape(&hero.headline),
        escape(&hero.subheadline),
        attr("href", safe_href(&hero.cta_target)),
        escape(&hero.cta_label),
    )
}
