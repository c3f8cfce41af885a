//! Informational panels renderer.

use crate::ui::helpers::{attr, escape, safe_href};
use crate::ui::viewmodel::PanelView;

/// Renders all panels as a grid of cards.
///
/// Each card carries its panel id so header links can scroll to it.
pub fn render_panels(panels: &[PanelView]) -> String {
    if panels.is_empty() {
        return String::new();
    }

    let cards: String = panels.iter().map(render_panel).collect();
    format!("<section class=\"panels\">{cards}</section>")
}

fn render_panel(panel: &PanelView) -> String {
    let icon = panel.icon.as_ref().map_or_else(String::new, |icon| {
        format!(
            "<img class=\"panel-icon\"{} alt=\"\" aria-hidden=\"true\">",
            attr("src", safe_href(icon))
        )
    });

    format!(
        "<article class=\"panel\"{}>{icon}<h2>{}</h2><p>{}</p></article>",
        attr("id", &panel.id),
        escape(&panel.title),
        escape(&panel.body),
    )
}
