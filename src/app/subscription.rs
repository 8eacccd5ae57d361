// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native events (window resize, keyboard, touch) and the spinner
//! animation tick to top-level messages.

use super::Message;
use crate::ui::lightbox;
use crate::ui::product_detail;
use iced::{event, keyboard, time, touch, window, Subscription};
use std::time::Duration;

/// Interval of the busy spinner animation.
const SPINNER_TICK: Duration = Duration::from_millis(50);

/// Window resizes and keyboard presses not captured by a widget.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => Some(Message::KeyPressed(key)),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Touch gestures for the lightbox swipe, only while it is open.
pub fn create_touch_subscription(lightbox_open: bool) -> Subscription<Message> {
    if !lightbox_open {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window_id| {
        let event::Event::Touch(touch_event) = event else {
            return None;
        };
        let message = match touch_event {
            touch::Event::FingerPressed { position, .. } => lightbox::Message::TouchStart(position.x),
            touch::Event::FingerMoved { position, .. } => lightbox::Message::TouchMove(position.x),
            touch::Event::FingerLifted { .. } => lightbox::Message::TouchEnd,
            touch::Event::FingerLost { .. } => lightbox::Message::TouchLost,
        };
        Some(Message::Detail(product_detail::Message::Lightbox(message)))
    })
}

/// Periodic tick driving the spinner while a browser transition runs.
pub fn create_tick_subscription(transitioning: bool) -> Subscription<Message> {
    if transitioning {
        time::every(SPINNER_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
