//! Actions representing side effects to be executed by the browser shim.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! shim executes them in order: it owns the real `beforeinstallprompt` events,
//! timers and the refresh callback, while the application layer stays free of
//! browser types.
//!
//! # Example
//!
//! ```rust
//! use leavedesk_landing::app::{Action, Notice};
//! use leavedesk_landing::domain::FallbackKind;
//!
//! let actions = vec![Action::Notify(Notice::Instructions(FallbackKind::IosSafari))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::app::install::{Notice, PromptHandle};
use crate::app::refresh::RefreshTicket;
use std::time::Duration;

/// Commands representing side effects to be executed by the browser shim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Calls `prompt()` on the deferred event for this handle, awaits
    /// `userChoice` and reports back with `Event::PromptResolved`.
    ShowPrompt(PromptHandle),

    /// Shows a message to the user.
    Notify(Notice),

    /// Invokes the caller-supplied refresh callback.
    ///
    /// The callback runs asynchronously; its result is not interpreted.
    Refresh,

    /// Starts the timer that ends a refresh.
    ///
    /// When it fires the shim sends `Event::RefreshSettled(ticket)`.
    ScheduleRefreshReset {
        ticket: RefreshTicket,
        delay: Duration,
    },

    /// Clears a pending refresh timer.
    CancelRefreshReset(RefreshTicket),
}
