//! Keyboard input events.
//!
//! Only the keys the drawer reacts to get their own code; everything else is
//! reported as [`KeyCode::Other`].

use std::fmt;

/// Type of keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventType {
    KeyDown,
    KeyUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Escape,
    Enter,
    Tab,
    Other,
}

impl KeyCode {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => KeyCode::Escape,
            "Enter" => KeyCode::Enter,
            "Tab" => KeyCode::Tab,
            _ => KeyCode::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key_code: KeyCode,
    pub event_type: KeyEventType,
}

impl KeyEvent {
    pub fn key_down(key_code: KeyCode) -> Self {
        Self {
            key_code,
            event_type: KeyEventType::KeyDown,
        }
    }

    pub fn key_up(key_code: KeyCode) -> Self {
        Self {
            key_code,
            event_type: KeyEventType::KeyUp,
        }
    }

    pub fn is_key_down(&self) -> bool {
        self.event_type == KeyEventType::KeyDown
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyEvent({:?}, {:?})", self.key_code, self.event_type)
    }
}
