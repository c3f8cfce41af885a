//! Theme management and CSS custom property generation.
//!
//! This module defines the color scheme system for the page, supporting both
//! built-in themes and custom themes loaded from TOML files. Themes are applied
//! by emitting CSS custom properties on `:root`; the bundled stylesheet only
//! refers to those variables.
//!
//! # Built-in Themes
//!
//! - `campus-light`: Light theme with a blue primary (default)
//! - `campus-dark`: Dark theme for OLED phones
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! primary = "#2563eb"
//! primary_contrast = "#ffffff"
//! accent = "#f59e0b"
//! background = "#f8fafc"
//! surface = "#ffffff"
//! text = "#0f172a"
//! text_muted = "#475569"
//! border = "#e2e8f0"
//! footer_bg = "#0f172a"
//! footer_fg = "#cbd5e1"
//! # hero_bg = "#1e3a8a"   (optional, defaults to primary)
//! ```
//!
//! # Example
//!
//! ```rust
//! use leavedesk_landing::ui::Theme;
//!
//! let theme = Theme::from_name("campus-dark").unwrap();
//! assert!(theme.css_variables().contains("--color-primary: #60a5fa;"));
//! ```

use crate::domain::error::{LandingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Color scheme configuration for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all page elements.
    pub colors: ThemeColors,
}

/// Color definitions for all page elements.
///
/// All colors are hex strings (e.g. `"#2563eb"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Buttons, links and the pull indicator.
    pub primary: String,
    /// Text drawn on top of `primary`.
    pub primary_contrast: String,
    /// Highlights (install banner, badges).
    pub accent: String,

    pub background: String,
    /// Cards and panels.
    pub surface: String,

    pub text: String,
    pub text_muted: String,

    pub border: String,

    pub footer_bg: String,
    pub footer_fg: String,

    /// Optional hero background; falls back to `primary`.
    #[serde(default)]
    pub hero_bg: Option<String>,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `campus-light`, `campus-dark`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "campus-light" => include_str!("../../themes/campus-light.toml"),
            "campus-dark" => include_str!("../../themes/campus-dark.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`LandingError::Io`] if the file cannot be read and
    /// [`LandingError::Theme`] if it does not parse or contains a color that is
    /// not a `#rrggbb` / `#rgb` hex string.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        let theme: Self = toml::from_str(&contents)
            .map_err(|e| LandingError::Theme(format!("failed to parse theme TOML: {e}")))?;
        theme.validate()?;
        Ok(theme)
    }

    fn validate(&self) -> Result<()> {
        for (key, value) in self.color_pairs() {
            if !is_hex_color(value) {
                return Err(LandingError::Theme(format!(
                    "color '{key}' is not a hex color: {value}"
                )));
            }
        }
        Ok(())
    }

    fn color_pairs(&self) -> Vec<(&'static str, &str)> {
        let c = &self.colors;
        vec![
            ("primary", c.primary.as_str()),
            ("primary-contrast", c.primary_contrast.as_str()),
            ("accent", c.accent.as_str()),
            ("background", c.background.as_str()),
            ("surface", c.surface.as_str()),
            ("text", c.text.as_str()),
            ("text-muted", c.text_muted.as_str()),
            ("border", c.border.as_str()),
            ("footer-bg", c.footer_bg.as_str()),
            ("footer-fg", c.footer_fg.as_str()),
            ("hero-bg", c.hero_bg.as_deref().unwrap_or(c.primary.as_str())),
        ]
    }

    /// Renders the `:root { --color-*: ...; }` rule for this theme.
    #[must_use]
    pub fn css_variables(&self) -> String {
        let mut css = String::from(":root {\n");
        for (key, value) in self.color_pairs() {
            let _ = writeln!(css, "  --color-{key}: {value};");
        }
        css.push('}');
        css
    }

    /// Color used for the browser toolbar and the manifest `theme_color`.
    #[must_use]
    pub fn theme_color(&self) -> &str {
        &self.colors.primary
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

impl Default for Theme {
    /// Returns the default theme (`campus-light`).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("campus-light").expect("Built-in campus-light theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse_and_validate() {
        for name in ["campus-light", "campus-dark"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
            assert!(theme.validate().is_ok());
        }
        assert!(Theme::from_name("catppuccin").is_none());
    }

    #[test]
    fn hero_background_defaults_to_primary() {
        let theme = Theme::default();
        assert!(theme.colors.hero_bg.is_none());
        assert!(theme.css_variables().contains("--color-hero-bg: #2563eb;"));
    }

    #[test]
    fn rejects_non_hex_colors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let source = include_str!("../../themes/campus-light.toml").replace("#f59e0b", "orange");
        file.write_all(source.as_bytes()).unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("'accent'"));
    }

    #[test]
    fn loads_custom_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let source = include_str!("../../themes/campus-dark.toml").replace("campus-dark", "night");
        file.write_all(source.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "night");
        assert_eq!(theme.theme_color(), "#60a5fa");
    }

    #[test]
    fn hex_color_check() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#A1b2C3"));
        assert!(!is_hex_color("fff"));
        assert!(!is_hex_color("#ffff"));
        assert!(!is_hex_color("#gggggg"));
    }
}
