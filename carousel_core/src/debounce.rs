// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge debounce for viewport resize notifications.
//!
//! The host owns the actual timer (`setTimeout` on the web). [`Debouncer`]
//! only keeps the deadline: every [`reset`](Debouncer::reset) pushes it out
//! by the configured delay, and the timer callback asks
//! [`poll`](Debouncer::poll) whether the quiet period has elapsed. A timer
//! that fires slightly early gets [`DebouncePoll::Wait`] with the remainder
//! instead of triggering a premature refresh.

use crate::time::{Duration, HostTime};

/// Quiet period after the last resize before the carousel refreshes.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(120);

/// Result of [`Debouncer::poll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebouncePoll {
    /// Nothing is pending.
    Idle,
    /// A deadline is pending but has not been reached; re-arm the timer for
    /// the contained remainder.
    Wait(Duration),
    /// The quiet period elapsed. The pending deadline has been consumed.
    Ready,
}

/// Single pending deadline, reset on every triggering event.
#[derive(Clone, Copy, Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<HostTime>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(RESIZE_DEBOUNCE)
    }
}

impl Debouncer {
    /// Creates an idle debouncer with the given quiet period.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Records a triggering event at `now`, replacing any pending deadline.
    ///
    /// Returns the delay the host should arm its (freshly cancelled) timer
    /// with.
    pub fn reset(&mut self, now: HostTime) -> Duration {
        self.deadline = Some(now + self.delay);
        self.delay
    }

    /// Checks the pending deadline against `now`.
    pub fn poll(&mut self, now: HostTime) -> DebouncePoll {
        match self.deadline {
            None => DebouncePoll::Idle,
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                DebouncePoll::Ready
            }
            Some(deadline) => DebouncePoll::Wait(deadline - now),
        }
    }

    /// Drops the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` if a deadline is pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_until_reset() {
        let mut d = Debouncer::default();
        assert_eq!(d.poll(HostTime(0)), DebouncePoll::Idle);
        assert!(!d.is_pending());
    }

    #[test]
    fn fires_once_after_quiet_period() {
        let mut d = Debouncer::default();
        assert_eq!(d.reset(HostTime(0)), RESIZE_DEBOUNCE);
        assert_eq!(
            d.poll(HostTime(119_000)),
            DebouncePoll::Wait(Duration(1_000))
        );
        assert_eq!(d.poll(HostTime(120_000)), DebouncePoll::Ready);
        assert_eq!(d.poll(HostTime(500_000)), DebouncePoll::Idle);
    }

    #[test]
    fn repeated_resets_push_the_deadline() {
        let mut d = Debouncer::new(Duration::from_millis(120));
        d.reset(HostTime(0));
        d.reset(HostTime(100_000));
        d.reset(HostTime(200_000));

        // The first deadline (120ms) has long passed but was superseded.
        assert_eq!(
            d.poll(HostTime(250_000)),
            DebouncePoll::Wait(Duration(70_000))
        );
        assert_eq!(d.poll(HostTime(320_000)), DebouncePoll::Ready);
    }

    #[test]
    fn cancel_clears_pending() {
        let mut d = Debouncer::default();
        d.reset(HostTime(0));
        d.cancel();
        assert_eq!(d.poll(HostTime(1_000_000)), DebouncePoll::Idle);
    }
}
