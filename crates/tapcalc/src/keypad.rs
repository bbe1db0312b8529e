//! Calculator keypad model
//!
//! Visual feedback: every button carries its label, the one input it emits
//! and a visual variant, so any frontend can draw and hit-test the same grid.
//! Nothing here depends on a rendering library.

use crate::core::{Input, Operator};

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Visual family of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    /// Digits and the decimal point
    Number,
    /// Clear, delete, percent and sign toggle
    Function,
    /// The four binary operators
    Operation,
    /// The equals button
    Equals,
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text drawn on the button
    pub label: &'static str,
    /// Input emitted when the button is activated
    pub input: Input,
    /// Visual family
    pub variant: ButtonVariant,
    /// Relative width inside its row
    pub width: u16,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a button with unit width
    #[must_use]
    pub const fn new(label: &'static str, input: Input, variant: ButtonVariant) -> Self {
        Self {
            label,
            input,
            variant,
            width: 1,
            pressed: false,
        }
    }

    /// Creates a digit button; digits above 9 are clamped to 9
    #[must_use]
    pub const fn digit(d: u8) -> Self {
        let d = if d > 9 { 9 } else { d };
        Self::new(DIGIT_LABELS[d as usize], Input::Digit(d), ButtonVariant::Number)
    }

    /// Creates a binary operator button
    #[must_use]
    pub const fn operator(op: Operator) -> Self {
        Self::new(op.symbol(), Input::Operator(op), ButtonVariant::Operation)
    }

    /// Creates the decimal point button
    #[must_use]
    pub const fn decimal() -> Self {
        Self::new(".", Input::Decimal, ButtonVariant::Number)
    }

    /// Creates the equals button
    #[must_use]
    pub const fn equals() -> Self {
        Self::new("=", Input::Equals, ButtonVariant::Equals)
    }

    /// Creates a function-row button
    #[must_use]
    pub const fn function(label: &'static str, input: Input) -> Self {
        Self::new(label, input, ButtonVariant::Function)
    }

    /// Sets the relative width
    #[must_use]
    pub const fn with_width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad layout - a 5x4 grid of buttons
/// ```text
/// [ C ] [ ⌫ ] [ % ] [ ÷ ]
/// [ 7 ] [ 8 ] [ 9 ] [ × ]
/// [ 4 ] [ 5 ] [ 6 ] [ - ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [ ± ] [   0   ] [ . ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 1: C ⌫ % ÷
            KeypadButton::function("C", Input::Clear),
            KeypadButton::function("⌫", Input::Delete),
            KeypadButton::function("%", Input::Operator(Operator::Percent)),
            KeypadButton::operator(Operator::Divide),
            // Row 2: 7 8 9 ×
            KeypadButton::digit(7),
            KeypadButton::digit(8),
            KeypadButton::digit(9),
            KeypadButton::operator(Operator::Multiply),
            // Row 3: 4 5 6 -
            KeypadButton::digit(4),
            KeypadButton::digit(5),
            KeypadButton::digit(6),
            KeypadButton::operator(Operator::Subtract),
            // Row 4: 1 2 3 +
            KeypadButton::digit(1),
            KeypadButton::digit(2),
            KeypadButton::digit(3),
            KeypadButton::operator(Operator::Add),
            // Row 5: ± 0 . =
            KeypadButton::function("±", Input::ToggleSign),
            KeypadButton::digit(0).with_width(2),
            KeypadButton::decimal(),
            KeypadButton::equals(),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds a button by its label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.label == label)
    }

    /// Finds the button emitting `input`
    #[must_use]
    pub fn find_button_by_input(&self, input: Input) -> Option<usize> {
        self.buttons.iter().position(|b| b.input == input)
    }

    /// Sets a button as pressed by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights only the button emitting `input`
    pub fn highlight(&mut self, input: Input) {
        self.release_all();
        if let Some(idx) = self.find_button_by_input(input) {
            self.press_button(idx);
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns the buttons grouped by row
    pub fn rows(&self) -> impl Iterator<Item = &[KeypadButton]> {
        self.buttons.chunks(self.cols)
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Maps a typed character to the input of its button
    ///
    /// Accepts every button label plus keyboard-friendly aliases:
    /// `*`/`x` multiply, `/` divide, `,` decimal, `c` clear,
    /// `<` delete, `n`/`_` sign toggle.
    #[must_use]
    pub fn input_for_char(ch: char) -> Option<Input> {
        if let Some(d) = ch.to_digit(10) {
            return Some(Input::Digit(d as u8));
        }
        if let Some(op) = Operator::from_symbol(ch) {
            return Some(Input::Operator(op));
        }
        match ch {
            '.' | ',' => Some(Input::Decimal),
            '=' => Some(Input::Equals),
            'C' | 'c' => Some(Input::Clear),
            '⌫' | '<' => Some(Input::Delete),
            '±' | 'n' | '_' => Some(Input::ToggleSign),
            _ => None,
        }
    }
}
