//! Pull-to-refresh indicator renderer.

use crate::ui::helpers::px;
use crate::ui::viewmodel::PullIndicator;

/// `data-slot` value of the indicator container.
pub const PULL_SLOT: &str = "pull";

/// Renders the indicator slot including its container.
pub fn render_pull_slot(pull: &PullIndicator) -> String {
    format!(
        "<div class=\"pull-slot\" data-slot=\"{PULL_SLOT}\" aria-live=\"polite\">{}</div>",
        render_pull_indicator(pull)
    )
}

/// Renders the contents of the indicator slot.
///
/// Nothing is drawn while the indicator is at rest.
pub fn render_pull_indicator(pull: &PullIndicator) -> String {
    if !pull.visible {
        return String::new();
    }

    let (state, label) = if pull.refreshing {
        ("refreshing", "Refreshing…")
    } else if pull.ready {
        ("ready", "Release to refresh")
    } else {
        ("pulling", "Pull to refresh")
    };

    format!(
        "<div class=\"pull-indicator pull-{state}\" style=\"transform: translateY({})\">\
         <span class=\"spinner\" aria-hidden=\"true\"></span>\
         <span class=\"pull-label\">{label}</span>\
         </div>",
        px(pull.offset)
    )
}
