// SPDX-License-Identifier: MPL-2.0
//! Swipe state management
//!
//! Tracks a single horizontal touch gesture for the lightbox.

use crate::app::config::SWIPE_THRESHOLD;

/// Direction of a recognised swipe, expressed as gallery navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: show the next image.
    Next,
    /// Finger moved right: show the previous image.
    Previous,
}

/// Horizontal positions of the current touch gesture.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwipeState {
    pub start_x: Option<f32>,
    pub end_x: Option<f32>,
}

impl SwipeState {
    /// Records where the finger went down.
    pub fn touch_start(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Records the latest finger position.
    pub fn touch_move(&mut self, x: f32) {
        self.end_x = Some(x);
    }

    /// Ends the gesture and clears both records.
    ///
    /// A gesture without a start or without any movement is not a swipe.
    pub fn touch_end(&mut self) -> Option<SwipeDirection> {
        let start = self.start_x.take();
        let end = self.end_x.take();
        let distance = start? - end?;

        if distance > SWIPE_THRESHOLD {
            Some(SwipeDirection::Next)
        } else if distance < -SWIPE_THRESHOLD {
            Some(SwipeDirection::Previous)
        } else {
            None
        }
    }

    /// Forgets the current gesture.
    pub fn cancel(&mut self) {
        self.start_x = None;
        self.end_x = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(from: f32, to: f32) -> Option<SwipeDirection> {
        let mut state = SwipeState::default();
        state.touch_start(from);
        state.touch_move(to);
        state.touch_end()
    }

    #[test]
    fn sixty_pixels_left_is_next() {
        assert_eq!(swipe(200.0, 140.0), Some(SwipeDirection::Next));
    }

    #[test]
    fn sixty_pixels_right_is_previous() {
        assert_eq!(swipe(140.0, 200.0), Some(SwipeDirection::Previous));
    }

    #[test]
    fn short_moves_are_ignored() {
        assert_eq!(swipe(200.0, 170.0), None);
        assert_eq!(swipe(200.0, 150.0), None);
    }

    #[test]
    fn tap_without_move_is_ignored() {
        let mut state = SwipeState::default();
        state.touch_start(100.0);
        assert_eq!(state.touch_end(), None);
    }

    #[test]
    fn end_clears_records() {
        let mut state = SwipeState::default();
        state.touch_start(200.0);
        state.touch_move(100.0);
        let _ = state.touch_end();
        assert_eq!(state, SwipeState::default());

        // A later move alone does not reuse the old start.
        state.touch_move(10.0);
        assert_eq!(state.touch_end(), None);
    }

    #[test]
    fn cancel_forgets_gesture() {
        let mut state = SwipeState::default();
        state.touch_start(200.0);
        state.touch_move(100.0);
        state.cancel();
        assert_eq!(state.touch_end(), None);
    }
}
