//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the browser shim (`infrastructure`) and the
//! domain/UI layers. It holds the two small state machines the page needs and
//! the event handler that drives them.
//!
//! # Architecture
//!
//! ```text
//! DOM events → Event → handle_event → PageState mutations → Actions → Side effects
//!                  ↑                                               ↓
//!                  └──── prompt results, timer expiry ─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transition coordinator
//! - [`install`]: PWA install-prompt controller
//! - [`refresh`]: Pull-to-refresh gesture detector
//! - [`state`]: Page state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use leavedesk_landing::app::{handle_event, Event, PageState};
//! use leavedesk_landing::domain::ClientInfo;
//!
//! let mut state = PageState::default();
//! handle_event(&mut state, &Event::Mounted(ClientInfo::default()))?;
//! handle_event(&mut state, &Event::TouchStart { y: 0.0, scroll_top: 0.0 })?;
//! let (render, _) = handle_event(&mut state, &Event::TouchMove { y: 70.0, scroll_top: 0.0 })?;
//! assert!(render);
//! # Ok::<(), leavedesk_landing::LandingError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod install;
pub mod refresh;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use install::{InstallPhase, InstallPrompt, InstallRequest, Notice, PromptHandle, PromptOutcome};
pub use refresh::{GestureEnd, PullToRefresh, RefreshTicket};
pub use state::{Lifecycle, PageState};
