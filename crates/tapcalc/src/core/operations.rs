//! Binary operators of the keypad
//!
//! Error prevention: a closed operator enum makes the "unknown operator"
//! branch unrepresentable.

use serde::{Deserialize, Serialize};

/// Binary operator selected on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
    /// Percent of the left operand (%)
    Percent,
}

impl Operator {
    /// Every operator, in keypad order
    pub const ALL: [Self; 5] = [
        Self::Percent,
        Self::Divide,
        Self::Multiply,
        Self::Subtract,
        Self::Add,
    ];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Percent => "%",
        }
    }

    /// Looks up an operator by symbol, accepting ASCII and Unicode aliases
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '×' | '*' | 'x' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            '%' => Some(Self::Percent),
            _ => None,
        }
    }

    /// Applies the operator to `a` (left) and `b` (right)
    ///
    /// Plain IEEE-754 arithmetic: dividing by zero yields an infinity
    /// (or NaN for `0 ÷ 0`) instead of an error.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
            Self::Percent => (a * b) / 100.0,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Applies `op` to the operands; free-function form of [`Operator::apply`]
#[must_use]
pub fn apply(op: Operator, a: f64, b: f64) -> f64 {
    op.apply(a, b)
}
