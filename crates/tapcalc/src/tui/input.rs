//! Keyboard and mouse input mapping
//!
//! Error prevention: keys are mapped to typed actions; anything the keypad
//! has no button for becomes [`KeyAction::None`].

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::core::Input;
use crate::keypad::Keypad;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Activate the button emitting this input
    Press(Input),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps terminal events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        // Terminals with key-release reporting send every key twice
        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q' | 'Q') => KeyAction::Quit,
            KeyCode::Char(c) => Keypad::input_for_char(c).map_or(KeyAction::None, KeyAction::Press),
            KeyCode::Enter => KeyAction::Press(Input::Equals),
            KeyCode::Esc => KeyAction::Press(Input::Clear),
            KeyCode::Backspace | KeyCode::Delete => KeyAction::Press(Input::Delete),
            _ => KeyAction::None,
        }
    }

    /// Returns the position of a left-button press, if `event` is one
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent) -> Option<(u16, u16)> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some((event.column, event.row)),
            _ => None,
        }
    }
}
