// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard presses become page-wide [`Key`]s, the way a page-level key
//! listener sees them. Dropped files request a page load.

use super::Message;
use crate::gallery::Key;
use iced::keyboard::{self, key::Named};
use iced::{event, Event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            Some(Message::KeyPressed(map_key(&key)))
        }
        Event::Window(iced::window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    })
}

/// Maps a keyboard key to the keys the lightbox understands.
pub fn map_key(key: &keyboard::Key) -> Key {
    match key {
        keyboard::Key::Named(Named::Escape) => Key::Escape,
        keyboard::Key::Named(Named::ArrowLeft) => Key::ArrowLeft,
        keyboard::Key::Named(Named::ArrowRight) => Key::ArrowRight,
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_keys_are_mapped() {
        assert_eq!(map_key(&keyboard::Key::Named(Named::Escape)), Key::Escape);
        assert_eq!(
            map_key(&keyboard::Key::Named(Named::ArrowLeft)),
            Key::ArrowLeft
        );
        assert_eq!(
            map_key(&keyboard::Key::Named(Named::ArrowRight)),
            Key::ArrowRight
        );
    }

    #[test]
    fn other_keys_are_passed_as_other() {
        assert_eq!(map_key(&keyboard::Key::Named(Named::Enter)), Key::Other);
        assert_eq!(
            map_key(&keyboard::Key::Character("a".into())),
            Key::Other
        );
    }
}
