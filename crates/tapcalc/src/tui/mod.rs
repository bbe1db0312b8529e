//! TUI Frontend for Calculator
//!
//! Visual feedback through a terminal keypad: keyboard keys and mouse
//! clicks both press the on-screen buttons.

mod app;
mod input;
mod keypad;
mod runner;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{button_areas, button_style, hit_test, KeypadWidget};
pub use runner::{run, TuiOptions};
pub use ui::{keypad_area, render, CalculatorUI, HELP_LINE, TITLE};
