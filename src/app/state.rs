//! Central page state container and view model computation.
//!
//! [`PageState`] owns the two controllers for the lifetime of one mounted page,
//! together with the static content and theme the renderer needs. It never
//! touches the browser; the shim feeds it events and reads view models back.

use crate::app::install::{InstallPhase, InstallPrompt};
use crate::app::refresh::{PullToRefresh, COMMIT_DISTANCE};
use crate::domain::{ClientInfo, SiteContent, UserAgentRules};
use crate::ui::viewmodel::{
    FooterView, HeroView, ImageView, InstallView, LinkView, MemberView, PageViewModel, PanelView,
    PullIndicator, TeamView,
};
use crate::ui::Theme;
use chrono::Datelike;

/// Mount lifecycle of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Created, waiting for `Event::Mounted`.
    Pending,
    Mounted,
    /// Torn down; further events are rejected.
    Unmounted,
}

/// State of one mounted landing page.
#[derive(Debug, Clone)]
pub struct PageState {
    pub lifecycle: Lifecycle,
    pub content: SiteContent,
    pub theme: Theme,
    /// Client description captured at mount.
    pub client: ClientInfo,
    pub install: InstallPrompt,
    pub pull: PullToRefresh,
    /// Year shown in the footer copyright line.
    pub copyright_year: i32,
}

impl PageState {
    #[must_use]
    pub fn new(content: SiteContent, theme: Theme, rules: UserAgentRules) -> Self {
        Self {
            lifecycle: Lifecycle::Pending,
            content,
            theme,
            client: ClientInfo::default(),
            install: InstallPrompt::new(rules),
            pull: PullToRefresh::new(),
            copyright_year: chrono::Utc::now().year(),
        }
    }

    /// Builds the display model for the whole page.
    #[must_use]
    pub fn compute_viewmodel(&self) -> PageViewModel {
        let content = &self.content;

        PageViewModel {
            title: format!("{} | {}", content.product.name, content.product.tagline),
            description: content.product.description.clone(),
            hero: HeroView {
                headline: content.hero.headline.clone(),
                subheadline: content.hero.subheadline.clone(),
                cta_label: content.hero.cta_label.clone(),
                cta_target: content.hero.cta_target.clone(),
                image: content.hero.image.as_ref().map(|src| ImageView {
                    src: src.clone(),
                    alt: content.hero.image_alt.clone(),
                }),
            },
            panels: content
                .panels
                .iter()
                .map(|panel| PanelView {
                    id: panel.id.clone(),
                    title: panel.title.clone(),
                    body: panel.body.clone(),
                    icon: panel.icon.clone(),
                })
                .collect(),
            team: TeamView {
                heading: content.team.heading.clone(),
                members: content
                    .team
                    .members
                    .iter()
                    .map(|member| MemberView {
                        name: member.name.clone(),
                        role: member.role.clone(),
                        initials: member.initials(),
                        avatar: member.avatar.clone(),
                        profile_url: member.profile_url.clone(),
                    })
                    .collect(),
            },
            footer: FooterView {
                about: content.footer.about.clone(),
                links: content
                    .footer
                    .links
                    .iter()
                    .map(|link| LinkView {
                        label: link.label.clone(),
                        href: link.href.clone(),
                    })
                    .collect(),
                contact_email: content.footer.contact_email.clone(),
                copyright: format!("© {} {}", self.copyright_year, content.product.name),
            },
            install: self.install_view(),
            pull: self.pull_indicator(),
        }
    }

    /// Display model of the install call-to-action.
    #[must_use]
    pub fn install_view(&self) -> InstallView {
        match self.install.phase() {
            InstallPhase::Installed => InstallView {
                visible: false,
                native: false,
                busy: false,
                label: String::new(),
            },
            InstallPhase::Prompting => InstallView {
                visible: true,
                native: true,
                busy: true,
                label: "Installing…".to_string(),
            },
            InstallPhase::PromptAvailable => InstallView {
                visible: true,
                native: true,
                busy: false,
                label: format!("Install {}", self.content.product.short_name),
            },
            InstallPhase::NotChecked | InstallPhase::Idle => InstallView {
                visible: true,
                native: false,
                busy: false,
                label: "How to install".to_string(),
            },
        }
    }

    /// Display model of the pull-to-refresh indicator.
    #[must_use]
    pub fn pull_indicator(&self) -> PullIndicator {
        let offset = self.pull.pull_distance();
        PullIndicator {
            offset,
            refreshing: self.pull.is_refreshing(),
            visible: offset > 0.0,
            ready: offset > COMMIT_DISTANCE || self.pull.is_refreshing(),
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(SiteContent::default(), Theme::default(), UserAgentRules::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::install::PromptHandle;

    #[test]
    fn viewmodel_mirrors_content() {
        let mut state = PageState::default();
        state.copyright_year = 2024;
        let vm = state.compute_viewmodel();

        assert_eq!(vm.panels.len(), state.content.panels.len());
        assert_eq!(vm.team.members.len(), state.content.team.members.len());
        assert_eq!(vm.footer.copyright, "© 2024 LeaveDesk");
        assert!(vm.title.starts_with("LeaveDesk | "));
        assert!(!vm.pull.visible);
    }

    #[test]
    fn install_view_tracks_phase() {
        let mut state = PageState::default();
        state.install.mount(false);
        let idle = state.install_view();
        assert!(idle.visible);
        assert!(!idle.native);

        state.install.on_installable(PromptHandle::new(1));
        let available = state.install_view();
        assert!(available.native);
        assert_eq!(available.label, "Install LeaveDesk");

        state.install.on_installed();
        assert!(!state.install_view().visible);
    }

    #[test]
    fn pull_indicator_marks_ready_past_commit() {
        let mut state = PageState::default();
        state.pull.touch_start(0.0, 0.0);
        state.pull.touch_move(45.0, 0.0);
        let indicator = state.pull_indicator();
        assert!(indicator.visible);
        assert!(!indicator.ready);

        state.pull.touch_move(75.0, 0.0);
        assert!(state.pull_indicator().ready);
    }
}
