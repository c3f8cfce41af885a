//! Client description and user-agent classification.
//!
//! When the browser never offers an install prompt (iOS, Firefox desktop, ...)
//! the install action falls back to written instructions. Which instructions is
//! decided here by classifying the user agent into one of three
//! [`FallbackKind`]s. The substrings used for matching come from configuration
//! ([`UserAgentRules`]) so they can be tuned without touching the controller.
//!
//! # TOML Format
//!
//! ```toml
//! [user_agent]
//! ios_markers = ["iphone", "ipad", "ipod"]
//! safari_marker = "safari"
//! other_ios_browser_markers = ["crios", "fxios", "edgios"]
//! touch_mac_is_ios = true
//! ```

use serde::{Deserialize, Serialize};

/// What the page knows about the client it runs in.
///
/// Probed once at mount by the browser shim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientInfo {
    /// Raw `navigator.userAgent`.
    pub user_agent: String,
    /// `navigator.maxTouchPoints`; distinguishes iPadOS from desktop Safari.
    pub max_touch_points: u32,
    /// Whether the page already runs as an installed app.
    pub standalone: bool,
}

impl ClientInfo {
    /// Creates a client description for a browser tab.
    #[must_use]
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_touch_points(mut self, max_touch_points: u32) -> Self {
        self.max_touch_points = max_touch_points;
        self
    }

    #[must_use]
    pub const fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }
}

/// Instruction set shown when no native install prompt is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackKind {
    /// iOS Safari: walk the user through "Add to Home Screen".
    IosSafari,
    /// iOS in a browser that cannot install web apps: ask for Safari.
    IosOtherBrowser,
    /// Everything else: suggest a browser with install support.
    Unsupported,
}

impl FallbackKind {
    /// User-facing instruction text.
    #[must_use]
    pub const fn instructions(self) -> &'static str {
        match self {
            Self::IosSafari => {
                "To install LeaveDesk on your iPhone or iPad:\n\
                 1. Tap the Share button in Safari's toolbar.\n\
                 2. Scroll down and tap \"Add to Home Screen\".\n\
                 3. Tap \"Add\" in the top-right corner."
            }
            Self::IosOtherBrowser => {
                "To install LeaveDesk, open this page in Safari, then tap Share \
                 and choose \"Add to Home Screen\"."
            }
            Self::Unsupported => {
                "Installing isn't supported in this browser. Open this page in \
                 Chrome, Edge or Samsung Internet to install LeaveDesk."
            }
        }
    }
}

/// Substring markers used to classify user agents.
///
/// All markers are matched case-insensitively against the user agent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct UserAgentRules {
    /// Markers identifying an iOS/iPadOS device.
    pub ios_markers: Vec<String>,
    /// Marker every Safari-engine browser reports.
    pub safari_marker: String,
    /// Markers of iOS browsers that also report `safari_marker` but cannot
    /// add web apps to the home screen.
    pub other_ios_browser_markers: Vec<String>,
    /// Treat a touch-capable "Macintosh" user agent as iPadOS.
    pub touch_mac_is_ios: bool,
}

impl Default for UserAgentRules {
    fn default() -> Self {
        Self {
            ios_markers: ["iphone", "ipad", "ipod"].map(String::from).to_vec(),
            safari_marker: "safari".to_string(),
            other_ios_browser_markers: ["crios", "fxios", "edgios", "opios", "gsa/", "fban", "fbav", "instagram"]
                .map(String::from)
                .to_vec(),
            touch_mac_is_ios: true,
        }
    }
}

impl UserAgentRules {
    /// Classifies a client into exactly one fallback category.
    ///
    /// ```
    /// use leavedesk_landing::domain::{ClientInfo, FallbackKind, UserAgentRules};
    ///
    /// let rules = UserAgentRules::default();
    /// let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) \
    ///           AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 \
    ///           Mobile/15E148 Safari/604.1";
    /// assert_eq!(rules.classify(&ClientInfo::new(ua)), FallbackKind::IosSafari);
    /// ```
    #[must_use]
    pub fn classify(&self, client: &ClientInfo) -> FallbackKind {
        let ua = client.user_agent.to_lowercase();

        if !self.is_ios(&ua, client.max_touch_points) {
            return FallbackKind::Unsupported;
        }

        let other_browser = self
            .other_ios_browser_markers
            .iter()
            .any(|marker| contains_marker(&ua, marker));

        if contains_marker(&ua, &self.safari_marker) && !other_browser {
            FallbackKind::IosSafari
        } else {
            FallbackKind::IosOtherBrowser
        }
    }

    fn is_ios(&self, ua: &str, max_touch_points: u32) -> bool {
        self.ios_markers.iter().any(|marker| contains_marker(ua, marker))
            || (self.touch_mac_is_ios && ua.contains("macintosh") && max_touch_points > 1)
    }
}

fn contains_marker(ua: &str, marker: &str) -> bool {
    let marker = marker.trim();
    !marker.is_empty() && ua.contains(&marker.to_lowercase())
}
