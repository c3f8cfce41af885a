//! Install call-to-action renderer.
//!
//! The slot element stays in the DOM even when the button is hidden so the
//! shim can re-render it in place.

use crate::ui::helpers::escape;
use crate::ui::viewmodel::InstallView;

/// `data-slot` value of the install container.
pub const INSTALL_SLOT: &str = "install";

/// `data-action` value the shim listens for on clicks.
pub const INSTALL_ACTION: &str = "install";

/// Renders the install slot including its container.
pub fn render_install_slot(install: &InstallView) -> String {
    format!(
        "<div class=\"install-slot\" data-slot=\"{INSTALL_SLOT}\">{}</div>",
        render_install_button(install)
    )
}

/// Renders the contents of the install slot.
pub fn render_install_button(install: &InstallView) -> String {
    if !install.visible {
        return String::new();
    }

    let class = if install.native {
        "button button-accent install-button"
    } else {
        "button button-ghost install-button"
    };
    let disabled = if install.busy { " disabled aria-busy=\"true\"" } else { "" };

    format!(
        "<button type=\"button\" class=\"{class}\" data-action=\"{INSTALL_ACTION}\"{disabled}>{}</button>",
        escape(&install.label)
    )
}
