//! Keypad widget for the TUI calculator
//!
//! Visual feedback: buttons are drawn as coloured faces and the pressed
//! button is inverted. Rendering and mouse hit-testing share
//! [`button_areas`], so a click always lands on the button it was drawn on.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::keypad::{ButtonVariant, Keypad};

/// Button face colours per variant
const NUMBER_BG: Color = Color::Rgb(0x3d, 0x3d, 0x3d);
const FUNCTION_BG: Color = Color::Rgb(0x40, 0x40, 0x40);
const OPERATION_BG: Color = Color::Rgb(0xff, 0x95, 0x00);
const EQUALS_BG: Color = Color::Rgb(0x34, 0xc7, 0x59);

/// Style of a button face
#[must_use]
pub fn button_style(variant: ButtonVariant, pressed: bool) -> Style {
    if pressed {
        return Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD);
    }

    let bg = match variant {
        ButtonVariant::Number => NUMBER_BG,
        ButtonVariant::Function => FUNCTION_BG,
        ButtonVariant::Operation => OPERATION_BG,
        ButtonVariant::Equals => EQUALS_BG,
    };
    Style::default()
        .fg(Color::White)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn keypad_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

/// Computes one cell per button, in button order
///
/// Rows share the height equally; inside a row each button gets a share
/// proportional to its width. Returns an empty list when the area cannot
/// fit one cell per button.
#[must_use]
pub fn button_areas(keypad: &Keypad, area: Rect) -> Vec<Rect> {
    let inner = keypad_block().inner(area);
    let (rows, cols) = keypad.dimensions();

    if usize::from(inner.width) < cols || usize::from(inner.height) < rows {
        return Vec::new();
    }

    let row_areas = Layout::vertical(vec![Constraint::Fill(1); rows]).split(inner);

    keypad
        .rows()
        .zip(row_areas.iter())
        .flat_map(|(row, row_area)| {
            Layout::horizontal(row.iter().map(|btn| Constraint::Fill(btn.width)))
                .split(*row_area)
                .to_vec()
        })
        .collect()
}

/// Converts a click position to a button index
#[must_use]
pub fn hit_test(keypad: &Keypad, area: Rect, x: u16, y: u16) -> Option<usize> {
    button_areas(keypad, area)
        .iter()
        .position(|cell| cell.x <= x && x < cell.right() && cell.y <= y && y < cell.bottom())
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        keypad_block().render(area, buf);

        for (btn, cell) in self.keypad.buttons().zip(button_areas(self.keypad, area)) {
            // Leave a one-cell gutter right and below when there is room
            let face = Rect {
                width: if cell.width > 2 { cell.width - 1 } else { cell.width },
                height: if cell.height > 2 { cell.height - 1 } else { cell.height },
                ..cell
            };
            let style = button_style(btn.variant, btn.pressed);
            buf.set_style(face, style);

            let label_width = btn.label.chars().count() as u16;
            let label_x = face.x + face.width.saturating_sub(label_width) / 2;
            let label_y = face.y + face.height / 2;
            buf.set_stringn(label_x, label_y, btn.label, usize::from(face.width), style);
        }
    }
}
