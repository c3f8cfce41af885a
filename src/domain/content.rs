//! Static page content model.
//!
//! Everything the page says lives in a [`SiteContent`] value: product identity,
//! hero, informational panels, the team roster and the footer. A default copy is
//! compiled into the crate from `content/default.toml`; deployments can swap it for
//! their own TOML file with the same layout.
//!
//! # TOML Format
//!
//! ```toml
//! [product]
//! name = "LeaveDesk"
//! short_name = "LeaveDesk"
//! tagline = "Leave requests for colleges, without the paperwork."
//! description = "..."
//!
//! [hero]
//! headline = "..."
//! subheadline = "..."
//! cta_label = "Get started"
//! cta_target = "#features"
//!
//! [[panels]]
//! id = "features"
//! title = "..."
//! body = "..."
//!
//! [team]
//! heading = "Meet the team"
//!
//! [[team.members]]
//! name = "..."
//! role = "..."
//!
//! [footer]
//! about = "..."
//! ```

use crate::domain::error::{LandingError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const DEFAULT_CONTENT: &str = include_str!("../../content/default.toml");

/// All copy shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SiteContent {
    /// Product identity, also used for the web app manifest.
    pub product: Product,
    /// Top-of-page hero section.
    pub hero: Hero,
    /// Informational panels, rendered in order.
    #[serde(default)]
    pub panels: Vec<Panel>,
    /// Team roster section.
    pub team: TeamSection,
    /// Page footer.
    pub footer: Footer,
}

/// Product identity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Product {
    /// Full product name.
    pub name: String,
    /// Short name used under the home screen icon.
    pub short_name: String,
    /// One-line tagline.
    pub tagline: String,
    /// Longer description for the manifest and `<meta name="description">`.
    #[serde(default)]
    pub description: String,
}

/// Hero section copy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Hero {
    pub headline: String,
    pub subheadline: String,
    pub cta_label: String,
    /// Anchor or URL the call-to-action points at.
    pub cta_target: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_alt: String,
}

/// One informational panel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Panel {
    /// Element id, used as the anchor target for navigation links.
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Team roster section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TeamSection {
    pub heading: String,
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

/// One person on the team roster.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub profile_url: Option<String>,
}

impl TeamMember {
    /// Returns up to two uppercase initials, used when no avatar is configured.
    ///
    /// ```
    /// use leavedesk_landing::domain::TeamMember;
    ///
    /// let member = TeamMember {
    ///     name: "Aditi Rao".to_string(),
    ///     role: "Design".to_string(),
    ///     avatar: None,
    ///     profile_url: None,
    /// };
    /// assert_eq!(member.initials(), "AR");
    /// ```
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

/// Page footer copy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Footer {
    pub about: String,
    #[serde(default)]
    pub links: Vec<FooterLink>,
    #[serde(default)]
    pub contact_email: Option<String>,
}

/// A footer navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

impl SiteContent {
    /// Parses content from a TOML string and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`LandingError::Content`] if the TOML is malformed, a required
    /// field is missing, or [`validate`](Self::validate) rejects the result.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let content: Self = toml::from_str(source)
            .map_err(|e| LandingError::Content(format!("failed to parse content TOML: {e}")))?;
        content.validate()?;
        Ok(content)
    }

    /// Loads content from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`LandingError::Io`] if the file cannot be read, or any error from
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading site content");
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Parses content from JSON, as embedded in a rendered page.
    ///
    /// # Errors
    ///
    /// Returns [`LandingError::Content`] if the JSON does not describe valid
    /// content.
    pub fn from_json(source: &str) -> Result<Self> {
        let content: Self = serde_json::from_str(source)
            .map_err(|e| LandingError::Content(format!("failed to parse content JSON: {e}")))?;
        content.validate()?;
        Ok(content)
    }

    /// Serializes the content as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`LandingError::Content`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| LandingError::Content(format!("failed to serialize content: {e}")))
    }

    /// Checks the invariants the renderer relies on.
    ///
    /// # Errors
    ///
    /// Returns [`LandingError::Content`] when the product name is empty, a panel
    /// id is empty or repeated, or a team member has no name.
    pub fn validate(&self) -> Result<()> {
        if self.product.name.trim().is_empty() {
            return Err(LandingError::Content("product name is empty".to_string()));
        }

        let mut seen = HashSet::new();
        for panel in &self.panels {
            if panel.id.trim().is_empty() {
                return Err(LandingError::Content(format!(
                    "panel '{}' has an empty id",
                    panel.title
                )));
            }
            if !seen.insert(panel.id.as_str()) {
                return Err(LandingError::Content(format!(
                    "duplicate panel id '{}'",
                    panel.id
                )));
            }
        }

        if let Some(index) = self
            .team
            .members
            .iter()
            .position(|m| m.name.trim().is_empty())
        {
            return Err(LandingError::Content(format!(
                "team member #{} has no name",
                index + 1
            )));
        }

        Ok(())
    }
}

impl Default for SiteContent {
    /// Returns the copy bundled with the crate.
    ///
    /// # Panics
    ///
    /// Panics if the bundled `content/default.toml` fails to parse, which the
    /// test suite rules out.
    fn default() -> Self {
        toml::from_str(DEFAULT_CONTENT).expect("bundled content/default.toml should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r##"
[product]
name = "LeaveDesk"
short_name = "LD"
tagline = "Leave, simplified."

[hero]
headline = "Headline"
subheadline = "Sub"
cta_label = "Go"
cta_target = "#a"

[[panels]]
id = "a"
title = "A"
body = "Body A"

[team]
heading = "Team"

[[team.members]]
name = "Jo Park"
role = "Dev"

[footer]
about = "About"
"##;

    #[test]
    fn bundled_content_is_valid() {
        let content = SiteContent::default();
        assert!(content.validate().is_ok());
        assert_eq!(content.product.name, "LeaveDesk");
        assert!(!content.panels.is_empty());
        assert!(!content.team.members.is_empty());
    }

    #[test]
    fn parses_minimal_content_with_defaults() {
        let content = SiteContent::from_toml_str(MINIMAL).unwrap();
        assert_eq!(content.panels.len(), 1);
        assert_eq!(content.hero.image, None);
        assert!(content.footer.links.is_empty());
        assert_eq!(content.footer.contact_email, None);
    }

    #[test]
    fn rejects_duplicate_panel_ids() {
        let source = MINIMAL.replace(
            "[team]",
            "[[panels]]\nid = \"a\"\ntitle = \"Again\"\nbody = \"B\"\n\n[team]",
        );
        let err = SiteContent::from_toml_str(&source).unwrap_err();
        assert!(err.to_string().contains("duplicate panel id 'a'"));
    }

    #[test]
    fn rejects_nameless_team_member() {
        let source = MINIMAL.replace("name = \"Jo Park\"", "name = \"  \"");
        let err = SiteContent::from_toml_str(&source).unwrap_err();
        assert!(matches!(err, LandingError::Content(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = SiteContent::from_toml_str("[product").unwrap_err();
        assert!(err.to_string().starts_with("Content error"));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();

        let content = SiteContent::from_file(file.path()).unwrap();
        assert_eq!(content.product.short_name, "LD");
    }

    #[test]
    fn json_carries_custom_copy() {
        let mut content = SiteContent::from_toml_str(MINIMAL).unwrap();
        content.hero.headline = "Apply for leave from your phone".to_string();

        let parsed = SiteContent::from_json(&content.to_json().unwrap()).unwrap();
        assert_eq!(parsed, content);
    }

    #[test]
    fn invalid_json_is_content_error() {
        assert!(matches!(SiteContent::from_json("{\"product\":"), Err(LandingError::Content(_))));

        let mut content = SiteContent::default();
        content.product.name = String::new();
        let json = serde_json::to_string(&content).unwrap();
        assert!(matches!(SiteContent::from_json(&json), Err(LandingError::Content(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SiteContent::from_file(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, LandingError::Io(_)));
    }

    #[test]
    fn initials_take_first_two_words() {
        let member = TeamMember {
            name: "karthik s kumar".to_string(),
            role: String::new(),
            avatar: None,
            profile_url: None,
        };
        assert_eq!(member.initials(), "KS");
    }
}
