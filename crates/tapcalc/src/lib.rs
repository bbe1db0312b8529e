//! tapcalc - a keypad calculator
//!
//! A single-screen arithmetic calculator: a display above a grid of digit,
//! operator and function buttons. Presses chain binary operations with
//! immediate execution (`2 × 5 + 1 =` is `(2 × 5) + 1`).
//!
//! # Principles
//!
//! - **Error prevention**: closed enums for inputs and operators; every
//!   transition is total
//! - **Visual feedback**: the keypad highlights the last pressed button
//! - **Balanced testing**: one scenario suite runs against every frontend
//!   through [`driver::CalculatorDriver`]
//!
//! # Example
//!
//! ```rust
//! use tapcalc::prelude::*;
//!
//! let mut calc = CalculatorState::new();
//! calc.dispatch(Input::Digit(7));
//! calc.dispatch(Input::Operator(Operator::Add));
//! calc.dispatch(Input::Digit(3));
//! calc.dispatch(Input::Equals);
//! assert_eq!(calc.display(), "10");
//!
//! // Division by zero is plain IEEE-754
//! calc.press_keys("5÷0=").unwrap();
//! assert_eq!(calc.display(), "Infinity");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod keypad;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        apply, format_number, parse_float, CalculatorState, Input, Operator, INITIAL_DISPLAY,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::error::{CalcError, CalcResult};
    pub use crate::keypad::{ButtonVariant, Keypad, KeypadButton};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
    #[cfg(feature = "tui")]
    pub use crate::tui::CalculatorApp;
}
