//! Web app manifest generation.
//!
//! Browsers only fire `beforeinstallprompt` for pages that link a manifest with
//! a name, icons, a start URL and a standalone display mode. The manifest is
//! derived from the same content and theme as the page so the two never drift.

use crate::domain::error::Result;
use crate::domain::SiteContent;
use crate::ui::Theme;
use crate::Config;
use serde::Serialize;

/// File name the manifest is published under, relative to the page.
pub const MANIFEST_FILE: &str = "manifest.webmanifest";

/// A W3C web app manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub scope: String,
    pub display: String,
    pub orientation: String,
    pub background_color: String,
    pub theme_color: String,
    pub icons: Vec<ManifestIcon>,
}

/// One manifest icon entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

impl ManifestIcon {
    fn png(size: u32, purpose: Option<&str>) -> Self {
        Self {
            src: format!("assets/icons/icon-{size}.png"),
            sizes: format!("{size}x{size}"),
            mime_type: "image/png".to_string(),
            purpose: purpose.map(String::from),
        }
    }
}

impl WebManifest {
    /// Builds the manifest for a page.
    #[must_use]
    pub fn new(content: &SiteContent, theme: &Theme, config: &Config) -> Self {
        Self {
            name: content.product.name.clone(),
            short_name: content.product.short_name.clone(),
            description: if content.product.description.is_empty() {
                content.product.tagline.clone()
            } else {
                content.product.description.clone()
            },
            start_url: config.start_url.clone(),
            scope: config.start_url.clone(),
            display: "standalone".to_string(),
            orientation: "portrait".to_string(),
            background_color: theme.colors.background.clone(),
            theme_color: theme.theme_color().to_string(),
            icons: vec![
                ManifestIcon::png(192, None),
                ManifestIcon::png(512, None),
                ManifestIcon::png(512, Some("maskable")),
            ],
        }
    }

    /// Serializes the manifest as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`LandingError::Manifest`](crate::LandingError::Manifest) if
    /// serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
