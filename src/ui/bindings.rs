//! Keyboard bindings.
//!
//! Centralizes the transport and app shortcuts in one key map.

use nannou::prelude::*;

/// Actions that can be triggered by key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // App-level
    Quit,
    ToggleHud,

    // Transport
    TogglePlayPause,
    NextTrack,
    PreviousTrack,
    SeekForward,
    SeekBackward,
    VolumeUp,
    VolumeDown,
}

/// Parse a key into an action.
pub fn parse_key(key: Key) -> Option<Action> {
    match key {
        Key::Q => Some(Action::Quit),
        Key::H => Some(Action::ToggleHud),
        Key::Space => Some(Action::TogglePlayPause),
        Key::N => Some(Action::NextTrack),
        Key::P => Some(Action::PreviousTrack),
        Key::Right => Some(Action::SeekForward),
        Key::Left => Some(Action::SeekBackward),
        Key::Up => Some(Action::VolumeUp),
        Key::Down => Some(Action::VolumeDown),
        _ => None,
    }
}
