// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Timer, transition and gesture state kept apart from the components that
//! drive them.

pub mod swipe;
pub mod timer;
pub mod transition;

pub use swipe::{SwipeDirection, SwipeState};
pub use timer::{TimerSlot, TimerToken};
pub use transition::TransitionFence;
