//! PWA install-prompt controller.
//!
//! Tracks whether the browser has offered to install the page as an app and
//! drives that offer when the user presses the install button.
//!
//! # State Machine
//!
//! ```text
//!                 standalone
//!  NotChecked ─────────────────────────────► Installed (terminal)
//!      │ not standalone                          ▲
//!      ▼                                         │ appinstalled
//!    Idle ◄──────────────────────────────────────┤
//!      │ beforeinstallprompt                     │
//!      ▼                                         │
//!  PromptAvailable ──────────────────────────────┤
//!      │ install requested                       │
//!      ▼                                         │
//!  Prompting ── accepted ───────────────────────┘
//!      │ dismissed / error
//!      ▼
//!    Idle
//! ```
//!
//! Requesting an install without a retained handle never prompts; it reports
//! one of the three [`FallbackKind`] instruction sets instead.

use crate::domain::{ClientInfo, FallbackKind, UserAgentRules};

/// Opaque token for a deferred `beforeinstallprompt` event.
///
/// The browser shim keeps the actual JS event and hands the controller this
/// token, so the controller can be driven without a browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PromptHandle(u64);

impl PromptHandle {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Lifecycle phase of the install controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallPhase {
    /// Not mounted yet; the display mode has not been checked.
    NotChecked,
    /// Already running as an installed app, or installed during this session.
    Installed,
    /// Mounted, no prompt available.
    Idle,
    /// The browser offered an install prompt and its handle is retained.
    PromptAvailable,
    /// The native prompt is showing; waiting for the user's decision.
    Prompting,
}

/// The user's answer to the native install prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    Accepted,
    Dismissed,
}

impl PromptOutcome {
    /// Parses the `userChoice.outcome` string reported by the browser.
    ///
    /// Anything other than `"accepted"` counts as a dismissal.
    #[must_use]
    pub fn from_browser(outcome: &str) -> Self {
        if outcome.eq_ignore_ascii_case("accepted") {
            Self::Accepted
        } else {
            Self::Dismissed
        }
    }
}

/// What to do in response to an install request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallRequest {
    /// Show the native prompt for this handle and report back its outcome.
    Prompt(PromptHandle),
    /// No prompt available; show these instructions.
    Fallback(FallbackKind),
    /// A prompt is already showing.
    Busy,
}

/// User-visible message produced by the install flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The user accepted the native prompt.
    InstallAccepted,
    /// The native prompt could not be shown or its result could not be read.
    InstallFailed {
        /// Error reported by the browser, kept for logging.
        reason: String,
    },
    /// Manual installation instructions.
    Instructions(FallbackKind),
}

impl Notice {
    /// Text shown to the user.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::InstallAccepted => "LeaveDesk was added to your home screen.",
            Self::InstallFailed { .. } => {
                "Something went wrong while installing LeaveDesk. Please try again later."
            }
            Self::Instructions(kind) => kind.instructions(),
        }
    }
}

/// Install-prompt controller state.
#[derive(Debug, Clone)]
pub struct InstallPrompt {
    phase: InstallPhase,
    /// Handle retained from the last installable signal.
    retained: Option<PromptHandle>,
    /// Handle whose prompt is currently showing.
    in_flight: Option<PromptHandle>,
    rules: UserAgentRules,
}

impl InstallPrompt {
    #[must_use]
    pub const fn new(rules: UserAgentRules) -> Self {
        Self {
            phase: InstallPhase::NotChecked,
            retained: None,
            in_flight: None,
            rules,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> InstallPhase {
        self.phase
    }

    /// Whether the install button should offer the native prompt.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self.phase, InstallPhase::PromptAvailable)
    }

    /// Handle currently retained, if any.
    #[must_use]
    pub const fn retained_handle(&self) -> Option<PromptHandle> {
        self.retained
    }

    /// Checks the display mode once the page is mounted.
    ///
    /// Returns `true` if the phase changed. Mounting twice is a no-op.
    pub fn mount(&mut self, standalone: bool) -> bool {
        if self.phase != InstallPhase::NotChecked {
            tracing::debug!(phase = ?self.phase, "install controller already mounted");
            return false;
        }

        self.phase = if standalone {
            tracing::debug!("running standalone, install prompt disabled");
            InstallPhase::Installed
        } else {
            InstallPhase::Idle
        };
        true
    }

    /// Handles the browser's installable signal.
    ///
    /// Returns `true` if the handle was retained. A newer signal replaces an
    /// older retained handle.
    pub fn on_installable(&mut self, handle: PromptHandle) -> bool {
        match self.phase {
            InstallPhase::Idle | InstallPhase::PromptAvailable => {
                if let Some(previous) = self.retained.replace(handle) {
                    tracing::debug!(previous = previous.id(), handle = handle.id(), "replacing retained prompt handle");
                }
                self.phase = InstallPhase::PromptAvailable;
                true
            }
            phase => {
                tracing::debug!(?phase, handle = handle.id(), "ignoring installable signal");
                false
            }
        }
    }

    /// Handles the browser's installed signal.
    ///
    /// Clears the retained handle; availability stays false for the rest of the
    /// session. Returns `true` if the phase changed.
    pub fn on_installed(&mut self) -> bool {
        self.retained = None;
        if self.phase == InstallPhase::Installed {
            return false;
        }
        tracing::debug!(from = ?self.phase, "app installed");
        self.phase = InstallPhase::Installed;
        true
    }

    /// Handles the user pressing the install button.
    pub fn request_install(&mut self, client: &ClientInfo) -> InstallRequest {
        if self.phase == InstallPhase::Prompting {
            tracing::debug!("install prompt already showing");
            return InstallRequest::Busy;
        }

        if let Some(handle) = self.retained.take() {
            self.in_flight = Some(handle);
            self.phase = InstallPhase::Prompting;
            return InstallRequest::Prompt(handle);
        }

        let kind = self.rules.classify(client);
        tracing::debug!(?kind, phase = ?self.phase, "no prompt handle, falling back to instructions");
        InstallRequest::Fallback(kind)
    }

    /// Records the result of a native prompt.
    ///
    /// Returns the notice to show, if any. Results for a handle that is not in
    /// flight are stale and ignored.
    pub fn resolve_prompt(
        &mut self,
        handle: PromptHandle,
        outcome: Result<PromptOutcome, String>,
    ) -> Option<Notice> {
        if self.in_flight != Some(handle) {
            tracing::debug!(handle = handle.id(), "ignoring stale prompt result");
            return None;
        }
        self.in_flight = None;
        if self.phase == InstallPhase::Prompting {
            self.phase = InstallPhase::Idle;
        }

        match outcome {
            Ok(PromptOutcome::Accepted) => {
                tracing::info!("user accepted install prompt");
                self.phase = InstallPhase::Installed;
                self.retained = None;
                Some(Notice::InstallAccepted)
            }
            Ok(PromptOutcome::Dismissed) => {
                tracing::info!("user dismissed install prompt");
                None
            }
            Err(reason) => {
                tracing::warn!(%reason, "install prompt failed");
                Some(Notice::InstallFailed { reason })
            }
        }
    }
}

impl Default for InstallPrompt {
    fn default() -> Self {
        Self::new(UserAgentRules::default())
    }
}
