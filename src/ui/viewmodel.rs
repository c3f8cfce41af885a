//! View model types representing renderable page state.
//!
//! View models are computed by `PageState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.

/// Complete page view model.
#[derive(Debug, Clone, PartialEq)]
pub struct PageViewModel {
    /// Document title.
    pub title: String,
    /// `<meta name="description">` text.
    pub description: String,
    pub hero: HeroView,
    pub panels: Vec<PanelView>,
    pub team: TeamView,
    pub footer: FooterView,
    pub install: InstallView,
    pub pull: PullIndicator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroView {
    pub headline: String,
    pub subheadline: String,
    pub cta_label: String,
    pub cta_target: String,
    pub image: Option<ImageView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub id: String,
    pub title: String,
    pub body: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamView {
    pub heading: String,
    pub members: Vec<MemberView>,
}

/// One team card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberView {
    pub name: String,
    pub role: String,
    /// Shown in place of the avatar when none is configured.
    pub initials: String,
    pub avatar: Option<String>,
    pub profile_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterView {
    pub about: String,
    pub links: Vec<LinkView>,
    pub contact_email: Option<String>,
    /// Pre-formatted copyright line.
    pub copyright: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub label: String,
    pub href: String,
}

/// Install call-to-action state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallView {
    /// Hidden once the app is installed.
    pub visible: bool,
    /// Pressing the button opens the native prompt rather than instructions.
    pub native: bool,
    /// The native prompt is showing; the button is disabled.
    pub busy: bool,
    pub label: String,
}

/// Pull-to-refresh indicator state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PullIndicator {
    /// Vertical offset in CSS pixels.
    pub offset: f64,
    pub refreshing: bool,
    pub visible: bool,
    /// Releasing now would refresh.
    pub ready: bool,
}
