// SPDX-License-Identifier: MPL-2.0
//! Transition fence
//!
//! Serializes browser changes: the first request starts a fixed delay and is
//! applied when it elapses; requests arriving in between are dropped.

use super::timer::{TimerSlot, TimerToken};

/// Holds at most one deferred change of type `C`.
#[derive(Debug, Clone)]
pub struct TransitionFence<C> {
    slot: TimerSlot,
    pending: Option<C>,
}

impl<C> Default for TransitionFence<C> {
    fn default() -> Self {
        Self {
            slot: TimerSlot::default(),
            pending: None,
        }
    }
}

impl<C> TransitionFence<C> {
    /// True between an accepted request and its completion.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// Accepts `change` when idle and returns the token the caller must
    /// schedule. Returns `None` (dropping `change`) while busy.
    pub fn request(&mut self, change: C) -> Option<TimerToken> {
        if self.pending.is_some() {
            return None;
        }
        self.pending = Some(change);
        Some(self.slot.schedule())
    }

    /// Releases the pending change if `token` is the live one.
    pub fn complete(&mut self, token: TimerToken) -> Option<C> {
        if self.slot.fire(token) {
            self.pending.take()
        } else {
            None
        }
    }

    /// Drops the pending change without applying it.
    pub fn cancel(&mut self) {
        self.slot.cancel();
        self.pending = None;
    }

    #[must_use]
    pub fn pending(&self) -> Option<&C> {
        self.pending.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_fence_accepts_request() {
        let mut fence = TransitionFence::default();
        assert!(!fence.is_transitioning());
        let token = fence.request("a");
        assert!(token.is_some());
        assert!(fence.is_transitioning());
        assert_eq!(fence.pending(), Some(&"a"));
    }

    #[test]
    fn busy_fence_drops_requests() {
        let mut fence = TransitionFence::default();
        let token = fence.request(1).expect("idle fence accepts");
        assert!(fence.request(2).is_none());
        assert_eq!(fence.complete(token), Some(1));
        assert!(!fence.is_transitioning());
    }

    #[test]
    fn stale_tokens_are_ignored() {
        let mut fence = TransitionFence::default();
        let first = fence.request(1).expect("idle fence accepts");
        assert_eq!(fence.complete(first), Some(1));

        let second = fence.request(2).expect("idle fence accepts");
        assert_eq!(fence.complete(first), None);
        assert!(fence.is_transitioning());
        assert_eq!(fence.complete(second), Some(2));
    }

    #[test]
    fn cancel_discards_pending_change() {
        let mut fence = TransitionFence::default();
        let token = fence.request(1).expect("idle fence accepts");
        fence.cancel();
        assert!(!fence.is_transitioning());
        assert_eq!(fence.complete(token), None);
    }
}
