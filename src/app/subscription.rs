// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard and window events become app messages here. Timers only
//! run while something needs them.

use super::{Direction, Message, Section};
use crate::config::TAGLINE_ROTATION_SECS;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Routes Escape, the arrow keys, and window resizes.
///
/// Arrow keys are dropped when a widget (the contact form inputs) already
/// captured them.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(named),
            ..
        }) => match (named, status) {
            (Named::Escape, _) => Some(Message::Dismiss),
            (Named::ArrowLeft, event::Status::Ignored) => {
                Some(Message::Navigate(Direction::Previous))
            }
            (Named::ArrowRight, event::Status::Ignored) => {
                Some(Message::Navigate(Direction::Next))
            }
            _ => None,
        },
        event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size.width))
        }
        _ => None,
    })
}

/// Creates a periodic tick for the spinner, toast auto-dismiss, and the
/// contact success banner.
pub fn create_tick_subscription(
    is_loading: bool,
    has_notifications: bool,
    awaiting_reset: bool,
) -> Subscription<Message> {
    if is_loading || has_notifications || awaiting_reset {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Rotates the hero tagline while the landing section is shown.
pub fn create_tagline_subscription(section: Section) -> Subscription<Message> {
    if section == Section::Home {
        time::every(Duration::from_secs(TAGLINE_ROTATION_SECS)).map(|_| Message::RotateTagline)
    } else {
        Subscription::none()
    }
}
