//! Calculator core: operators, display formatting and the state machine
//!
//! Nothing in here touches a terminal; the TUI and headless drivers both sit
//! on top of [`CalculatorState::dispatch`].

pub mod format;
mod operations;
pub mod state;

pub use format::{format_number, parse_float};
pub use operations::{apply, Operator};
pub use state::{CalculatorState, Input, INITIAL_DISPLAY};
