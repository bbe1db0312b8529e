//! TUI Application State
//!
//! Error prevention: all calculator state lives in [`CalculatorState`];
//! the app only adds the keypad highlight and the quit flag.

use ratatui::layout::Rect;
use tracing::debug;

use super::input::KeyAction;
use super::keypad::hit_test;
use crate::core::{CalculatorState, Input};
use crate::keypad::Keypad;

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    /// Display, operands and pending operator
    state: CalculatorState,
    /// Button grid with highlight state
    keypad: Keypad,
    /// Whether the app should quit
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app showing `0`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the calculator state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Returns the keypad with its highlight state
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Activates the button emitting `input` and highlights it
    pub fn press(&mut self, input: Input) {
        self.state.dispatch(input);
        self.keypad.highlight(input);
    }

    /// Activates the button at `index`; out-of-range indices are ignored
    pub fn press_button(&mut self, index: usize) {
        if let Some(input) = self.keypad.get_button(index).map(|b| b.input) {
            self.press(input);
        }
    }

    /// Clears the keypad highlight
    pub fn release(&mut self) {
        self.keypad.release_all();
    }

    /// Applies a mapped key action
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(input) => self.press(input),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Handles a left click at (`x`, `y`) inside the keypad drawn at `keypad_area`
    ///
    /// Returns `true` when the click landed on a button.
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) -> bool {
        match hit_test(&self.keypad, keypad_area, x, y) {
            Some(index) => {
                debug!(index, x, y, "keypad click");
                self.press_button(index);
                true
            }
            None => false,
        }
    }
}
