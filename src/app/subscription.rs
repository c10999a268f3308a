// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.

use super::Message;
use crate::ui::showcase;
use iced::{event, keyboard, time, window, Subscription};

/// Maps a raw runtime event to an application message.
///
/// The space bar starts (or restarts) the demo, but only when no widget
/// captured the event; a focused widget keeps its normal space behavior.
fn handle_event(
    event: event::Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }

    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Space),
            repeat: false,
            ..
        }) => Some(Message::Showcase(showcase::Message::RunDemo)),
        _ => None,
    }
}

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(handle_event)
}

/// Phase timer for the morphing chart, active once its section has been
/// revealed. The loop then runs for the rest of the session.
pub fn create_morph_subscription(state: &showcase::State) -> Subscription<Message> {
    if state.morph_running() {
        time::every(showcase::morph_chart::PHASE_PERIOD)
            .map(|instant| Message::Showcase(showcase::Message::MorphTick(instant)))
    } else {
        Subscription::none()
    }
}

/// Frame timer driving the hero particle field.
pub fn create_effects_subscription(state: &showcase::State) -> Subscription<Message> {
    if state.particles_active() {
        time::every(showcase::EFFECTS_FRAME)
            .map(|instant| Message::Showcase(showcase::Message::EffectsTick(instant)))
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::event::Status;

    fn key_pressed(named: keyboard::key::Named, code: keyboard::key::Code) -> event::Event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            modified_key: keyboard::Key::Named(named),
            physical_key: keyboard::key::Physical::Code(code),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        })
    }

    fn space_pressed() -> event::Event {
        key_pressed(keyboard::key::Named::Space, keyboard::key::Code::Space)
    }

    #[test]
    fn space_starts_demo_when_nothing_captured_it() {
        let message = handle_event(space_pressed(), Status::Ignored, window::Id::unique());
        assert!(matches!(
            message,
            Some(Message::Showcase(showcase::Message::RunDemo))
        ));
    }

    #[test]
    fn space_is_ignored_when_a_widget_captured_it() {
        let message = handle_event(space_pressed(), Status::Captured, window::Id::unique());
        assert!(message.is_none());
    }

    #[test]
    fn held_space_does_not_restart_the_demo() {
        let event = event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Space),
            modified_key: keyboard::Key::Named(keyboard::key::Named::Space),
            physical_key: keyboard::key::Physical::Code(keyboard::key::Code::Space),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: true,
        });
        let message = handle_event(event, Status::Ignored, window::Id::unique());
        assert!(message.is_none());
    }

    #[test]
    fn other_keys_are_ignored() {
        let event = key_pressed(keyboard::key::Named::Enter, keyboard::key::Code::Enter);
        let message = handle_event(event, Status::Ignored, window::Id::unique());
        assert!(message.is_none());
    }

    #[test]
    fn morph_subscription_is_off_until_revealed() {
        let state = showcase::State::default();
        assert!(!state.morph_running());
        // A stopped morph loop must not tick; the gate is the started flag.
        let _subscription = create_morph_subscription(&state);
    }
}
