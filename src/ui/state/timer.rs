// SPDX-License-Identifier: MPL-2.0
//! One-shot timers driven by the Iced runtime.
//!
//! A [`TimerSlot`] is one logical timer. Every schedule mints a fresh
//! [`TimerToken`]; only the most recent token is live, so a sleep that
//! completes after being superseded or cancelled is recognised as stale and
//! ignored by its owner.

use iced::Task;
use std::time::Duration;

/// Identifies one scheduled firing of a [`TimerSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// A logical timer with at most one live token.
#[derive(Debug, Clone, Default)]
pub struct TimerSlot {
    generation: u64,
    live: Option<TimerToken>,
}

impl TimerSlot {
    /// Arms the slot, superseding any pending token.
    pub fn schedule(&mut self) -> TimerToken {
        self.generation = self.generation.wrapping_add(1);
        let token = TimerToken(self.generation);
        self.live = Some(token);
        token
    }

    /// Disarms the slot; a pending token becomes stale.
    pub fn cancel(&mut self) {
        self.live = None;
    }

    /// Consumes `token` if it is the live one.
    ///
    /// Returns `false` for stale or foreign tokens.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.live == Some(token) {
            self.live = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.live.is_some()
    }
}

/// Emits `message` once `delay` has elapsed.
pub fn after<M>(delay: Duration, message: M) -> Task<M>
where
    M: Send + 'static,
{
    Task::perform(async move { tokio::time::sleep(delay).await }, move |()| message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_slot_is_idle() {
        let slot = TimerSlot::default();
        assert!(!slot.is_pending());
    }

    #[test]
    fn live_token_fires_once() {
        let mut slot = TimerSlot::default();
        let token = slot.schedule();
        assert!(slot.is_pending());
        assert!(slot.fire(token));
        assert!(!slot.is_pending());
        assert!(!slot.fire(token));
    }

    #[test]
    fn rescheduling_supersedes_previous_token() {
        let mut slot = TimerSlot::default();
        let first = slot.schedule();
        let second = slot.schedule();
        assert_ne!(first, second);
        assert!(!slot.fire(first));
        assert!(slot.is_pending());
        assert!(slot.fire(second));
    }

    #[test]
    fn cancelled_token_is_stale() {
        let mut slot = TimerSlot::default();
        let token = slot.schedule();
        slot.cancel();
        assert!(!slot.fire(token));
    }
}
