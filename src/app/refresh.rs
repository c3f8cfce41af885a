//! Pull-to-refresh gesture detector.
//!
//! Recognises a downward drag that starts while the page is scrolled to the
//! very top and, once the drag is long enough, asks the host to refresh.
//!
//! # Gesture
//!
//! 1. `touchstart` at scroll offset 0 records the origin. Anywhere else the
//!    whole gesture is ignored.
//! 2. `touchmove` computes `distance = y - origin`. Past
//!    [`ACTIVATION_DISTANCE`] the indicator follows the finger, capped at
//!    [`MAX_PULL_DISTANCE`].
//! 3. `touchend` past [`COMMIT_DISTANCE`] starts a refresh: the indicator is
//!    pinned at [`REFRESHING_DISTANCE`] until the host reports the reset timer
//!    elapsed ([`REFRESH_HOLD`] later). Short pulls snap back immediately.
//!
//! Touch input is ignored while a refresh is in progress, and every refresh
//! carries a [`RefreshTicket`] so a timer from an earlier refresh or an earlier
//! mount cannot reset a newer one.

use std::time::Duration;

/// Drag distance the finger must exceed before the indicator moves.
pub const ACTIVATION_DISTANCE: f64 = 40.0;

/// Pull distance that must be exceeded at touch-end to refresh.
pub const COMMIT_DISTANCE: f64 = 50.0;

/// Upper bound of the visible pull distance.
pub const MAX_PULL_DISTANCE: f64 = 100.0;

/// Where the indicator rests while refreshing.
pub const REFRESHING_DISTANCE: f64 = 50.0;

/// How long the indicator stays pinned after a committed pull.
pub const REFRESH_HOLD: Duration = Duration::from_millis(1500);

/// Identifies one committed refresh and its reset timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Result of lifting the finger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEnd {
    /// Pull was long enough; refresh now and settle `ticket` after [`REFRESH_HOLD`].
    Committed(RefreshTicket),
    /// Pull was too short (or never started); the indicator snapped back.
    Released,
    /// A refresh is already in progress; nothing changed.
    Ignored,
}

/// Pull-to-refresh detector state.
#[derive(Debug, Clone, Default)]
pub struct PullToRefresh {
    /// Y coordinate where the current gesture started, if it started at the top.
    origin: Option<f64>,
    pull_distance: f64,
    refreshing: Option<RefreshTicket>,
    next_ticket: u64,
}

#[allow(clippy::float_cmp)]
fn at_top(scroll_top: f64) -> bool {
    scroll_top == 0.0
}

impl PullToRefresh {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Visible pull distance, always within `0..=MAX_PULL_DISTANCE`.
    #[must_use]
    pub const fn pull_distance(&self) -> f64 {
        self.pull_distance
    }

    #[must_use]
    pub const fn is_refreshing(&self) -> bool {
        self.refreshing.is_some()
    }

    /// Whether a gesture is being tracked or a refresh is running.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.origin.is_some() || self.refreshing.is_some()
    }

    /// Handles `touchstart`. Returns `true` if the visible state changed.
    pub fn touch_start(&mut self, y: f64, scroll_top: f64) -> bool {
        if self.refreshing.is_some() {
            tracing::trace!("refresh in progress, ignoring touch start");
            return false;
        }

        if at_top(scroll_top) {
            self.origin = Some(y);
        } else {
            tracing::trace!(scroll_top, "page not at top, ignoring gesture");
            self.origin = None;
        }
        false
    }

    /// Handles `touchmove`. Returns `true` if the visible pull distance changed.
    pub fn touch_move(&mut self, y: f64, scroll_top: f64) -> bool {
        if self.refreshing.is_some() || !at_top(scroll_top) {
            return false;
        }
        let Some(origin) = self.origin else {
            return false;
        };

        let distance = y - origin;
        if distance <= ACTIVATION_DISTANCE {
            return false;
        }

        let pull = distance.clamp(0.0, MAX_PULL_DISTANCE);
        let changed = (pull - self.pull_distance).abs() > f64::EPSILON;
        self.pull_distance = pull;
        changed
    }

    /// Handles `touchend`.
    pub fn touch_end(&mut self) -> GestureEnd {
        self.origin = None;

        if self.refreshing.is_some() {
            return GestureEnd::Ignored;
        }

        if self.pull_distance > COMMIT_DISTANCE {
            let ticket = RefreshTicket(self.next_ticket);
            self.next_ticket += 1;
            self.refreshing = Some(ticket);
            self.pull_distance = REFRESHING_DISTANCE;
            tracing::debug!(ticket = ticket.id(), "pull committed, refreshing");
            GestureEnd::Committed(ticket)
        } else {
            self.pull_distance = 0.0;
            GestureEnd::Released
        }
    }

    /// Ends the refresh identified by `ticket`.
    ///
    /// Returns `true` if the indicator was reset; stale tickets are ignored.
    pub fn settle(&mut self, ticket: RefreshTicket) -> bool {
        if self.refreshing != Some(ticket) {
            tracing::debug!(ticket = ticket.id(), "ignoring stale refresh timer");
            return false;
        }
        self.refreshing = None;
        self.pull_distance = 0.0;
        true
    }

    /// Drops any gesture or refresh in progress.
    ///
    /// Returns the ticket whose reset timer the caller must cancel.
    pub fn cancel_pending(&mut self) -> Option<RefreshTicket> {
        self.origin = None;
        self.pull_distance = 0.0;
        self.refreshing.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(detector: &mut PullToRefresh, from: f64, to: f64) {
        detector.touch_start(from, 0.0);
        detector.touch_move(to, 0.0);
    }

    #[test]
    fn visible_pull_follows_drag_past_activation() {
        for (d, expected) in [
            (0.0, 0.0),
            (10.0, 0.0),
            (40.0, 0.0),
            (41.0, 41.0),
            (60.0, 60.0),
            (100.0, 100.0),
            (250.0, 100.0),
            (-80.0, 0.0),
        ] {
            let mut detector = PullToRefresh::new();
            drag(&mut detector, 200.0, 200.0 + d);
            assert!(
                (detector.pull_distance() - expected).abs() < f64::EPSILON,
                "drag {d} gave {}",
                detector.pull_distance()
            );
        }
    }

    #[test]
    fn small_moves_do_not_reset_pull() {
        let mut detector = PullToRefresh::new();
        detector.touch_start(100.0, 0.0);
        assert!(detector.touch_move(170.0, 0.0));
        assert!(!detector.touch_move(120.0, 0.0));
        assert!((detector.pull_distance() - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn committed_pull_refreshes_then_settles() {
        let mut detector = PullToRefresh::new();
        detector.touch_start(300.0, 0.0);
        assert!(detector.touch_move(360.0, 0.0));
        assert!((detector.pull_distance() - 60.0).abs() < f64::EPSILON);

        let GestureEnd::Committed(ticket) = detector.touch_end() else {
            panic!("expected committed refresh");
        };
        assert!(detector.is_refreshing());
        assert!((detector.pull_distance() - REFRESHING_DISTANCE).abs() < f64::EPSILON);

        assert!(detector.settle(ticket));
        assert!(!detector.is_refreshing());
        assert!(detector.pull_distance().abs() < f64::EPSILON);
    }

    #[test]
    fn pull_at_commit_distance_is_released() {
        let mut detector = PullToRefresh::new();
        drag(&mut detector, 0.0, 50.0);
        assert!((detector.pull_distance() - 50.0).abs() < f64::EPSILON);

        assert_eq!(detector.touch_end(), GestureEnd::Released);
        assert!(detector.pull_distance().abs() < f64::EPSILON);
        assert!(!detector.is_refreshing());
    }

    #[test]
    fn gesture_starting_below_top_is_ignored() {
        let mut detector = PullToRefresh::new();
        detector.touch_start(300.0, 12.0);
        assert!(!detector.touch_move(400.0, 0.0));
        assert!(detector.pull_distance().abs() < f64::EPSILON);
        assert_eq!(detector.touch_end(), GestureEnd::Released);
    }

    #[test]
    fn stale_origin_is_not_reused() {
        let mut detector = PullToRefresh::new();
        detector.touch_start(0.0, 0.0);
        detector.touch_end();

        // Second gesture starts scrolled down: the earlier origin must not leak.
        detector.touch_start(500.0, 80.0);
        assert!(!detector.touch_move(90.0, 0.0));
        assert!(detector.pull_distance().abs() < f64::EPSILON);
    }

    #[test]
    fn moves_while_scrolled_are_ignored() {
        let mut detector = PullToRefresh::new();
        detector.touch_start(100.0, 0.0);
        assert!(!detector.touch_move(200.0, 5.0));
        assert!(detector.pull_distance().abs() < f64::EPSILON);
    }

    #[test]
    fn touch_end_without_start_is_noop_reset() {
        let mut detector = PullToRefresh::new();
        assert_eq!(detector.touch_end(), GestureEnd::Released);
        assert!(!detector.is_active());
    }

    #[test]
    fn gestures_during_refresh_are_ignored() {
        let mut detector = PullToRefresh::new();
        drag(&mut detector, 0.0, 90.0);
        let GestureEnd::Committed(ticket) = detector.touch_end() else {
            panic!("expected committed refresh");
        };

        assert!(!detector.touch_start(0.0, 0.0));
        assert!(!detector.touch_move(95.0, 0.0));
        assert_eq!(detector.touch_end(), GestureEnd::Ignored);
        assert!((detector.pull_distance() - REFRESHING_DISTANCE).abs() < f64::EPSILON);

        assert!(detector.settle(ticket));
    }

    #[test]
    fn stale_ticket_does_not_reset_newer_refresh() {
        let mut detector = PullToRefresh::new();
        drag(&mut detector, 0.0, 90.0);
        let GestureEnd::Committed(first) = detector.touch_end() else {
            panic!("expected committed refresh");
        };
        assert!(detector.settle(first));

        drag(&mut detector, 0.0, 90.0);
        let GestureEnd::Committed(second) = detector.touch_end() else {
            panic!("expected committed refresh");
        };
        assert_ne!(first, second);

        assert!(!detector.settle(first));
        assert!(detector.is_refreshing());
        assert!(detector.settle(second));
    }

    #[test]
    fn cancel_pending_returns_ticket_and_resets() {
        let mut detector = PullToRefresh::new();
        drag(&mut detector, 0.0, 90.0);
        let GestureEnd::Committed(ticket) = detector.touch_end() else {
            panic!("expected committed refresh");
        };

        assert_eq!(detector.cancel_pending(), Some(ticket));
        assert!(!detector.is_refreshing());
        assert!(detector.pull_distance().abs() < f64::EPSILON);
        assert!(!detector.settle(ticket));
        assert_eq!(detector.cancel_pending(), None);
    }
}
