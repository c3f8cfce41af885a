//! Event handling and state transition logic.
//!
//! The browser shim translates DOM events into [`Event`]s and feeds them to
//! [`handle_event`], which updates the [`PageState`] and returns whether the
//! dynamic parts of the page need re-rendering together with the [`Action`]s to
//! execute.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Mounted`, `Unmounted`
//! - **Install**: `InstallAvailable`, `AppInstalled`, `InstallRequested`, `PromptResolved`
//! - **Gesture**: `TouchStart`, `TouchMove`, `TouchEnd`, `RefreshSettled`
//!
//! # Example
//!
//! ```rust
//! use leavedesk_landing::app::{handle_event, Event, PageState};
//! use leavedesk_landing::domain::ClientInfo;
//!
//! let mut state = PageState::default();
//! handle_event(&mut state, &Event::Mounted(ClientInfo::default()))?;
//! let (render, actions) = handle_event(&mut state, &Event::InstallRequested)?;
//! assert!(!render);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), leavedesk_landing::LandingError>(())
//! ```

use crate::app::install::{InstallRequest, Notice, PromptHandle, PromptOutcome};
use crate::app::refresh::{GestureEnd, RefreshTicket, REFRESH_HOLD};
use crate::app::state::Lifecycle;
use crate::app::{Action, PageState};
use crate::domain::error::{LandingError, Result};
use crate::domain::ClientInfo;

/// Events triggered by the browser or the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The page was mounted; carries the probed client description.
    Mounted(ClientInfo),

    /// `beforeinstallprompt` fired; its default UI has been suppressed.
    InstallAvailable(PromptHandle),

    /// `appinstalled` fired.
    AppInstalled,

    /// The user pressed the install button.
    InstallRequested,

    /// The native prompt for `handle` finished.
    PromptResolved {
        handle: PromptHandle,
        /// User decision, or the stringified JS error if prompting failed.
        outcome: std::result::Result<PromptOutcome, String>,
    },

    /// `touchstart`, with the first touch's Y coordinate and the page scroll offset.
    TouchStart { y: f64, scroll_top: f64 },

    /// `touchmove`, with the first touch's Y coordinate and the page scroll offset.
    TouchMove { y: f64, scroll_top: f64 },

    /// `touchend`.
    TouchEnd,

    /// The reset timer scheduled for `ticket` fired.
    RefreshSettled(RefreshTicket),

    /// The page is being torn down.
    Unmounted,
}

/// Processes an event, mutates page state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the install and pull-to-refresh slots
/// need re-rendering, and the side effects to run in order.
///
/// # Errors
///
/// Returns [`LandingError::Platform`] for any event other than `Unmounted`
/// received after the page was unmounted. Events arriving before `Mounted`
/// are ignored.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut PageState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match (state.lifecycle, event) {
        (Lifecycle::Unmounted, Event::Unmounted) => return Ok((false, vec![])),
        (Lifecycle::Unmounted, _) => {
            return Err(LandingError::Platform(
                "event received after unmount".to_string(),
            ))
        }
        (Lifecycle::Pending, Event::Mounted(_) | Event::Unmounted) | (Lifecycle::Mounted, _) => {}
        (Lifecycle::Pending, _) => {
            tracing::debug!("page not mounted yet, ignoring event");
            return Ok((false, vec![]));
        }
    }

    match event {
        Event::Mounted(client) => {
            if state.lifecycle == Lifecycle::Mounted {
                tracing::debug!("page already mounted");
                return Ok((false, vec![]));
            }
            tracing::debug!(
                standalone = client.standalone,
                max_touch_points = client.max_touch_points,
                "page mounted"
            );
            state.lifecycle = Lifecycle::Mounted;
            state.client = client.clone();
            state.install.mount(client.standalone);
            Ok((true, vec![]))
        }
        Event::InstallAvailable(handle) => {
            let retained = state.install.on_installable(*handle);
            Ok((retained, vec![]))
        }
        Event::AppInstalled => {
            let changed = state.install.on_installed();
            Ok((changed, vec![]))
        }
        Event::InstallRequested => match state.install.request_install(&state.client) {
            InstallRequest::Prompt(handle) => {
                tracing::debug!(handle = handle.id(), "showing native install prompt");
                Ok((true, vec![Action::ShowPrompt(handle)]))
            }
            InstallRequest::Fallback(kind) => {
                Ok((false, vec![Action::Notify(Notice::Instructions(kind))]))
            }
            InstallRequest::Busy => Ok((false, vec![])),
        },
        Event::PromptResolved { handle, outcome } => {
            let notice = state.install.resolve_prompt(*handle, outcome.clone());
            let actions = notice.map(Action::Notify).into_iter().collect();
            Ok((true, actions))
        }
        Event::TouchStart { y, scroll_top } => {
            let changed = state.pull.touch_start(*y, *scroll_top);
            Ok((changed, vec![]))
        }
        Event::TouchMove { y, scroll_top } => {
            let changed = state.pull.touch_move(*y, *scroll_top);
            Ok((changed, vec![]))
        }
        Event::TouchEnd => {
            let had_pull = state.pull.pull_distance() > 0.0;
            match state.pull.touch_end() {
                GestureEnd::Committed(ticket) => Ok((
                    true,
                    vec![
                        Action::Refresh,
                        Action::ScheduleRefreshReset {
                            ticket,
                            delay: REFRESH_HOLD,
                        },
                    ],
                )),
                GestureEnd::Released => Ok((had_pull, vec![])),
                GestureEnd::Ignored => Ok((false, vec![])),
            }
        }
        Event::RefreshSettled(ticket) => {
            let settled = state.pull.settle(*ticket);
            if settled {
                tracing::debug!(ticket = ticket.id(), "refresh settled");
            }
            Ok((settled, vec![]))
        }
        Event::Unmounted => {
            tracing::debug!("page unmounted");
            state.lifecycle = Lifecycle::Unmounted;
            let actions = state
                .pull
                .cancel_pending()
                .map(Action::CancelRefreshReset)
                .into_iter()
                .collect();
            Ok((false, actions))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::install::InstallPhase;
    use crate::domain::FallbackKind;

    const IPHONE_CHROME: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) CriOS/119.0.6045.109 Mobile/15E148 Safari/604.1";

    fn mounted(client: ClientInfo) -> PageState {
        let mut state = PageState::default();
        handle_event(&mut state, &Event::Mounted(client)).unwrap();
        state
    }

    fn refresh_actions(actions: &[Action]) -> usize {
        actions.iter().filter(|a| **a == Action::Refresh).count()
    }

    #[test]
    fn events_before_mount_are_ignored() {
        let mut state = PageState::default();
        let (render, actions) = handle_event(&mut state, &Event::InstallRequested).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn standalone_mount_never_offers_prompt() {
        let mut state = mounted(ClientInfo::default().with_standalone(true));
        assert_eq!(state.install.phase(), InstallPhase::Installed);

        handle_event(&mut state, &Event::InstallAvailable(PromptHandle::new(1))).unwrap();
        assert!(!state.install.is_available());
    }

    #[test]
    fn install_without_handle_notifies_fallback() {
        let mut state = mounted(ClientInfo::new(IPHONE_CHROME));
        let (_, actions) = handle_event(&mut state, &Event::InstallRequested).unwrap();
        assert_eq!(
            actions,
            vec![Action::Notify(Notice::Instructions(FallbackKind::IosOtherBrowser))]
        );
    }

    #[test]
    fn install_with_handle_prompts_and_reports_success() {
        let mut state = mounted(ClientInfo::default());
        let handle = PromptHandle::new(4);

        let (render, _) = handle_event(&mut state, &Event::InstallAvailable(handle)).unwrap();
        assert!(render);

        let (_, actions) = handle_event(&mut state, &Event::InstallRequested).unwrap();
        assert_eq!(actions, vec![Action::ShowPrompt(handle)]);

        let (_, actions) = handle_event(
            &mut state,
            &Event::PromptResolved {
                handle,
                outcome: Ok(PromptOutcome::Accepted),
            },
        )
        .unwrap();
        assert_eq!(actions, vec![Action::Notify(Notice::InstallAccepted)]);
        assert!(!state.install.is_available());

        let (render, _) = handle_event(&mut state, &Event::InstallAvailable(PromptHandle::new(99))).unwrap();
        assert!(!render);
        assert!(!state.install.is_available());
        assert_eq!(state.install.phase(), InstallPhase::Installed);
    }

    #[test]
    fn dismissed_prompt_emits_nothing() {
        let mut state = mounted(ClientInfo::default());
        let handle = PromptHandle::new(4);
        handle_event(&mut state, &Event::InstallAvailable(handle)).unwrap();
        handle_event(&mut state, &Event::InstallRequested).unwrap();

        let (_, actions) = handle_event(
            &mut state,
            &Event::PromptResolved {
                handle,
                outcome: Ok(PromptOutcome::Dismissed),
            },
        )
        .unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.install.retained_handle(), None);
    }

    #[test]
    fn app_installed_disables_install() {
        let mut state = mounted(ClientInfo::default());
        handle_event(&mut state, &Event::InstallAvailable(PromptHandle::new(1))).unwrap();
        let (render, _) = handle_event(&mut state, &Event::AppInstalled).unwrap();
        assert!(render);
        assert!(!state.install.is_available());
    }

    #[test]
    fn committed_gesture_refreshes_exactly_once() {
        let mut state = mounted(ClientInfo::default());
        handle_event(&mut state, &Event::TouchStart { y: 300.0, scroll_top: 0.0 }).unwrap();
        let (render, _) =
            handle_event(&mut state, &Event::TouchMove { y: 360.0, scroll_top: 0.0 }).unwrap();
        assert!(render);
        assert!((state.pull.pull_distance() - 60.0).abs() < f64::EPSILON);

        let (render, actions) = handle_event(&mut state, &Event::TouchEnd).unwrap();
        assert!(render);
        assert_eq!(refresh_actions(&actions), 1);
        let Some(Action::ScheduleRefreshReset { ticket, delay }) = actions.last().cloned() else {
            panic!("expected a scheduled reset");
        };
        assert_eq!(delay, REFRESH_HOLD);
        assert!((state.pull.pull_distance() - 50.0).abs() < f64::EPSILON);

        // Another touch-end during the hold does not refresh again.
        let (_, actions) = handle_event(&mut state, &Event::TouchEnd).unwrap();
        assert_eq!(refresh_actions(&actions), 0);

        let (render, _) = handle_event(&mut state, &Event::RefreshSettled(ticket)).unwrap();
        assert!(render);
        assert!(state.pull.pull_distance().abs() < f64::EPSILON);
    }

    #[test]
    fn short_gesture_resets_immediately() {
        let mut state = mounted(ClientInfo::default());
        handle_event(&mut state, &Event::TouchStart { y: 300.0, scroll_top: 0.0 }).unwrap();
        handle_event(&mut state, &Event::TouchMove { y: 345.0, scroll_top: 0.0 }).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::TouchEnd).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert!(state.pull.pull_distance().abs() < f64::EPSILON);
    }

    #[test]
    fn unmount_cancels_pending_reset() {
        let mut state = mounted(ClientInfo::default());
        handle_event(&mut state, &Event::TouchStart { y: 0.0, scroll_top: 0.0 }).unwrap();
        handle_event(&mut state, &Event::TouchMove { y: 80.0, scroll_top: 0.0 }).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::TouchEnd).unwrap();
        let Some(Action::ScheduleRefreshReset { ticket, .. }) = actions.last().cloned() else {
            panic!("expected a scheduled reset");
        };

        let (_, actions) = handle_event(&mut state, &Event::Unmounted).unwrap();
        assert_eq!(actions, vec![Action::CancelRefreshReset(ticket)]);

        let err = handle_event(&mut state, &Event::RefreshSettled(ticket)).unwrap_err();
        assert!(matches!(err, LandingError::Platform(_)));
        assert!(handle_event(&mut state, &Event::Unmounted).is_ok());
    }
}
