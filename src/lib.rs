//! LeaveDesk landing page: marketing site for a college leave-management app.
//!
//! The page itself is static copy (hero, informational panels, team roster,
//! footer). Two small event-driven behaviors make it feel like an app:
//! - A PWA install prompt that captures the browser's deferred
//!   `beforeinstallprompt` event and falls back to written instructions
//! - A pull-to-refresh gesture that calls a host-supplied refresh callback
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Browser Shim (infrastructure/, wasm32)             │  ← DOM listeners, timers
//! │  Static Site Builder (main.rs, infrastructure/site) │  ← index.html + manifest
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machines
//! │  - Install-prompt controller                        │
//! │  - Pull-to-refresh detector                         │
//! │  - Event handling / action dispatching              │
//! └─────────────────────────────────────────────────────┘
//!         │                                    │
//! ┌───────────────────────┐   ┌─────────────────────────┐
//! │ UI Layer (ui/)        │   │ Domain (domain/)        │
//! │ - View models         │   │ - Site content          │
//! │ - HTML components     │   │ - UA classification     │
//! │ - Themes              │   │ - Errors                │
//! └───────────────────────┘   └─────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing-wasm in the browser, fmt natively        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Page state, controllers and the event/action model
//! - [`domain`]: Content model, client classification, errors
//! - [`ui`]: HTML rendering with theme support
//! - [`manifest`]: Web app manifest generation
//! - [`infrastructure`]: Browser shim and static site writer
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! In the browser the configuration is read from `data-*` attributes on the
//! mount element:
//!
//! ```html
//! <div id="app" data-theme="campus-dark" data-trace-level="debug"
//!      data-service-worker="sw.js"></div>
//! ```
//!
//! The static site builder reads the same keys from a TOML file:
//!
//! ```toml
//! theme = "campus-dark"
//! content_file = "content/my-college.toml"
//! start_url = "/leavedesk/"
//!
//! [user_agent]
//! other_ios_browser_markers = ["crios", "fxios"]
//! ```
//!
//! # Example
//!
//! ```rust
//! use leavedesk_landing::{handle_event, initialize, Config, Event};
//! use leavedesk_landing::domain::ClientInfo;
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::Mounted(ClientInfo::default()))?;
//! let (_, actions) = handle_event(&mut state, &Event::InstallRequested)?;
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), leavedesk_landing::LandingError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod manifest;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, Event, PageState};
pub use domain::{LandingError, Result, SiteContent, UserAgentRules};
pub use ui::Theme;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Page configuration.
///
/// Parsed from the mount element's `data-*` attributes in the browser
/// ([`Config::from_map`]) or from a TOML file by the static site builder
/// ([`Config::from_file`]).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Built-in theme name (`campus-light`, `campus-dark`).
    ///
    /// Ignored if `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Only readable natively.
    pub theme_file: Option<String>,

    /// Tracing level: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Path to a TOML content file replacing the bundled copy. Only readable
    /// natively.
    pub content_file: Option<String>,

    /// Manifest `start_url` and `scope`. Default: `"./"`
    pub start_url: String,

    /// Service worker script to register on mount, if any.
    pub service_worker: Option<String>,

    /// Id of the element the page mounts into. Default: `"app"`
    pub root_id: String,

    /// Path of the wasm-bindgen JS bundle, relative to `index.html`.
    pub wasm_bundle: String,

    /// Markers used to pick the install fallback instructions.
    pub user_agent: UserAgentRules,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: None,
            content_file: None,
            start_url: "./".to_string(),
            service_worker: None,
            root_id: "app".to_string(),
            wasm_bundle: "pkg/leavedesk_landing.js".to_string(),
            user_agent: UserAgentRules::default(),
        }
    }
}

impl Config {
    /// Keys understood by [`Config::from_map`].
    pub const MAP_KEYS: [&'static str; 8] = [
        "theme",
        "theme_file",
        "trace_level",
        "content_file",
        "start_url",
        "service_worker",
        "root_id",
        "user_agent",
    ];

    /// Parses configuration from a key/value map.
    ///
    /// In the browser the map is built from the mount element's `data-*`
    /// attributes (`data-trace-level` → `trace_level`).
    ///
    /// # Parsing Rules
    ///
    /// - Empty values are treated as absent
    /// - `user_agent`: JSON object with [`UserAgentRules`] fields; falls back to
    ///   the defaults if it does not parse
    /// - Unknown keys are ignored
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use leavedesk_landing::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "campus-dark".to_string());
    /// map.insert("trace_level".to_string(), "debug".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("campus-dark"));
    /// assert_eq!(config.root_id, "app");
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            map.get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let user_agent = get("user_agent").map_or_else(UserAgentRules::default, |json| {
            serde_json::from_str(&json).unwrap_or_else(|e| {
                tracing::debug!(error = %e, "invalid user_agent rules, using defaults");
                UserAgentRules::default()
            })
        });

        Self {
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
            content_file: get("content_file"),
            start_url: get("start_url").unwrap_or(defaults.start_url),
            service_worker: get("service_worker"),
            root_id: get("root_id").unwrap_or(defaults.root_id),
            wasm_bundle: defaults.wasm_bundle,
            user_agent,
        }
    }

    /// Returns the browser-relevant settings as a key/value map.
    ///
    /// This is the inverse of [`Config::from_map`] for the keys the browser
    /// shim reads; the static site builder writes them onto the mount element.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        if let Some(theme) = &self.theme_name {
            map.insert("theme".to_string(), theme.clone());
        }
        if let Some(level) = &self.trace_level {
            map.insert("trace_level".to_string(), level.clone());
        }
        if let Some(worker) = &self.service_worker {
            map.insert("service_worker".to_string(), worker.clone());
        }
        if self.user_agent != UserAgentRules::default() {
            match serde_json::to_string(&self.user_agent) {
                Ok(json) => {
                    map.insert("user_agent".to_string(), json);
                }
                Err(e) => tracing::debug!(error = %e, "failed to serialize user_agent rules"),
            }
        }
        map
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`LandingError::Io`] if the file cannot be read and
    /// [`LandingError::Config`] if it does not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        toml::from_str(&source).map_err(|e| LandingError::Config(e.to_string()))
    }

    /// Resolves the configured theme, falling back to the default.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme_file.as_ref().map_or_else(
            || {
                self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                })
            },
            |theme_file| {
                Theme::from_file(theme_file).unwrap_or_else(|e| {
                    tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                    Theme::default()
                })
            },
        )
    }
}

/// Creates the page state for a configuration.
///
/// Uses the bundled content and the configured theme (falling back to the
/// default theme). The state still has to receive `Event::Mounted`.
#[must_use]
pub fn initialize(config: &Config) -> PageState {
    initialize_with_content(config, SiteContent::default())
}

/// Creates the page state for a configuration and explicit content.
///
/// The static site builder passes the content it loaded from `content_file`;
/// the browser passes the copy embedded in the rendered document.
#[must_use]
pub fn initialize_with_content(config: &Config, content: SiteContent) -> PageState {
    tracing::debug!(product = %content.product.name, "initializing landing page");
    PageState::new(content, config.theme(), config.user_agent.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn from_map_applies_defaults_and_trims() {
        let mut map = BTreeMap::new();
        map.insert("theme".to_string(), "  ".to_string());
        map.insert("service_worker".to_string(), " sw.js ".to_string());
        map.insert("bogus".to_string(), "x".to_string());

        let config = Config::from_map(&map);
        assert_eq!(config.theme_name, None);
        assert_eq!(config.service_worker.as_deref(), Some("sw.js"));
        assert_eq!(config.start_url, "./");
    }

    #[test]
    fn user_agent_rules_travel_as_json() {
        let config = Config {
            user_agent: UserAgentRules {
                touch_mac_is_ios: false,
                ..UserAgentRules::default()
            },
            trace_level: Some("debug".to_string()),
            ..Config::default()
        };

        let map = config.to_map();
        assert!(map.contains_key("user_agent"));

        let parsed = Config::from_map(&map);
        assert!(!parsed.user_agent.touch_mac_is_ios);
        assert_eq!(parsed.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn invalid_user_agent_json_falls_back() {
        let mut map = BTreeMap::new();
        map.insert("user_agent".to_string(), "{not json".to_string());
        assert_eq!(Config::from_map(&map).user_agent, UserAgentRules::default());
    }

    #[test]
    fn default_config_has_empty_map() {
        assert!(Config::default().to_map().is_empty());
    }

    #[test]
    fn loads_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"
theme = "campus-dark"
start_url = "/leave/"

[user_agent]
ios_markers = ["iphone"]
"#,
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.theme_name.as_deref(), Some("campus-dark"));
        assert_eq!(config.start_url, "/leave/");
        assert_eq!(config.root_id, "app");
        assert_eq!(config.user_agent.ios_markers, vec!["iphone"]);
        assert_eq!(config.user_agent.safari_marker, "safari");
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"theme = [").unwrap();
        assert!(matches!(Config::from_file(file.path()), Err(LandingError::Config(_))));
    }

    #[test]
    fn theme_resolution_falls_back() {
        let unknown = Config {
            theme_name: Some("neon".to_string()),
            ..Config::default()
        };
        assert_eq!(unknown.theme().name, "campus-light");

        let missing_file = Config {
            theme_name: Some("campus-dark".to_string()),
            theme_file: Some("/definitely/not/here.toml".to_string()),
            ..Config::default()
        };
        assert_eq!(missing_file.theme().name, "campus-light");

        let dark = Config {
            theme_name: Some("campus-dark".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&dark).theme.name, "campus-dark");
    }
}
