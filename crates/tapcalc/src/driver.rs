//! Unified Calculator Driver
//!
//! Write the scenario once, run it against every frontend: the bare state
//! machine and the TUI app both implement [`CalculatorDriver`].
//!
//! Balanced testing: the same scenario functions below are run for
//! each driver.

use tracing::warn;

use crate::core::{CalculatorState, Input};
use crate::error::{CalcError, CalcResult};
use crate::keypad::Keypad;

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use tapcalc::prelude::*;
///
/// let mut driver = CalculatorState::new();
/// driver.press_keys("7 + 3 =").unwrap();
/// assert_eq!(driver.display(), "10");
/// ```
pub trait CalculatorDriver {
    /// Activates the button emitting `input`
    fn press(&mut self, input: Input);

    /// Gets the current display text
    fn display(&self) -> String;

    /// Presses the clear button
    fn clear(&mut self) {
        self.press(Input::Clear);
    }

    /// Presses the button for each non-whitespace character of `keys`
    ///
    /// Characters are mapped with [`Keypad::input_for_char`]. The sequence
    /// stops at the first unknown character; earlier presses stay applied.
    fn press_keys(&mut self, keys: &str) -> CalcResult<()> {
        for ch in keys.chars().filter(|c| !c.is_whitespace()) {
            let Some(input) = Keypad::input_for_char(ch) else {
                warn!(key = %ch, "no button for key");
                return Err(CalcError::UnknownKey(ch));
            };
            self.press(input);
        }
        Ok(())
    }
}

impl CalculatorDriver for CalculatorState {
    fn press(&mut self, input: Input) {
        self.dispatch(input);
    }

    fn display(&self) -> String {
        CalculatorState::display(self).to_string()
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::core::Input;
    use crate::tui::CalculatorApp;

    /// TUI-specific driver wrapping the calculator app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, input: Input) {
            self.app.press(input);
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified Scenarios =====
// These work with ANY CalculatorDriver implementation

/// Verifies digit entry rules
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.press_keys("123")?;
    assert_eq!(driver.display(), "123");
    driver.clear();

    // Leading zero collapses
    driver.press_keys("05")?;
    assert_eq!(driver.display(), "5");
    driver.clear();

    // One decimal point per operand
    driver.press_keys("1..5")?;
    assert_eq!(driver.display(), "1.5");
    driver.clear();
    Ok(())
}

/// Verifies the four binary operators and percent
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();

    driver.press_keys("7+3=")?;
    assert_eq!(driver.display(), "10");
    driver.clear();

    driver.press_keys("10-4=")?;
    assert_eq!(driver.display(), "6");
    driver.clear();

    driver.press_keys("6×7=")?;
    assert_eq!(driver.display(), "42");
    driver.clear();

    driver.press_keys("20÷4=")?;
    assert_eq!(driver.display(), "5");
    driver.clear();

    driver.press_keys("200%15=")?;
    assert_eq!(driver.display(), "30");
    driver.clear();
    Ok(())
}

/// Verifies immediate-execution chaining
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();

    driver.press_keys("2×5+1=")?;
    assert_eq!(driver.display(), "11");
    driver.clear();

    // No precedence: (2 + 3) × 4
    driver.press_keys("2+3×4=")?;
    assert_eq!(driver.display(), "20");
    driver.clear();
    Ok(())
}

/// Verifies the editing buttons
pub fn verify_editing<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();

    driver.press_keys("123⌫")?;
    assert_eq!(driver.display(), "12");
    driver.press_keys("⌫⌫")?;
    assert_eq!(driver.display(), "0");

    driver.press_keys("5±")?;
    assert_eq!(driver.display(), "-5");
    driver.press_keys("±")?;
    assert_eq!(driver.display(), "5");

    driver.press_keys("9+8C")?;
    assert_eq!(driver.display(), "0");
    Ok(())
}

/// Verifies IEEE-754 behavior is surfaced, not handled
pub fn verify_float_semantics<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();

    driver.press_keys("5÷0=")?;
    assert_eq!(driver.display(), "Infinity");
    driver.clear();

    driver.press_keys(".1+.2=")?;
    assert_eq!(driver.display(), "0.30000000000000004");
    driver.clear();
    Ok(())
}

/// Complete verification suite - runs every scenario above
pub fn run_full_suite<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    verify_digit_entry(driver)?;
    verify_basic_arithmetic(driver)?;
    verify_chaining(driver)?;
    verify_editing(driver)?;
    verify_float_semantics(driver)
}
