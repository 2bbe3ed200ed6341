// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only native window events the widgets cannot see themselves are routed
//! here. Keyboard and mouse input is handled by the form widgets directly.

use super::Message;
use iced::{event, Subscription};

/// Creates the window event subscription.
///
/// File drop events are only routed while the form accepts attachments; the
/// form drops the rest itself.
pub fn create_event_subscription(accepts_file_drop: bool) -> Subscription<Message> {
    if accepts_file_drop {
        event::listen_with(|event, _status, _window_id| {
            if let event::Event::Window(iced::window::Event::FileDropped(path)) = event {
                return Some(Message::FileDropped(path));
            }
            None
        })
    } else {
        Subscription::none()
    }
}
