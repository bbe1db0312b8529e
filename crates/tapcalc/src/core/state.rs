//! Immediate-execution calculator state machine
//!
//! Error prevention: every button maps to one [`Input`] and every input is a
//! total transition on [`CalculatorState`]; there is no invalid state to
//! recover from.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::format::{format_number, parse_float};
use super::operations::Operator;

/// Display text of a freshly created or cleared calculator
pub const INITIAL_DISPLAY: &str = "0";

/// A discrete event produced by the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    /// A digit 0-9
    Digit(u8),
    /// The decimal point
    Decimal,
    /// A binary operator
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Reset everything
    Clear,
    /// Drop the last display character
    Delete,
    /// Negate the displayed value
    ToggleSign,
}

/// The four fields behind the calculator screen
///
/// Serialized operands that are not finite are written as their display
/// text (`"Infinity"`, `"NaN"`), since JSON numbers cannot hold them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StateSnapshot")]
pub struct CalculatorState {
    display: String,
    #[serde(with = "operand")]
    previous_value: Option<f64>,
    operation: Option<Operator>,
    waiting_for_operand: bool,
}

/// Unchecked deserialization target for [`CalculatorState`]
#[derive(Deserialize)]
struct StateSnapshot {
    display: String,
    #[serde(with = "operand")]
    previous_value: Option<f64>,
    operation: Option<Operator>,
    waiting_for_operand: bool,
}

impl TryFrom<StateSnapshot> for CalculatorState {
    type Error = String;

    fn try_from(snapshot: StateSnapshot) -> Result<Self, Self::Error> {
        if snapshot.operation.is_some() && snapshot.previous_value.is_none() {
            return Err("pending operation without a previous value".to_string());
        }
        Ok(Self {
            display: snapshot.display,
            previous_value: snapshot.previous_value,
            operation: snapshot.operation,
            waiting_for_operand: snapshot.waiting_for_operand,
        })
    }
}

/// Operand encoding: finite values as JSON numbers, the rest as display text
mod operand {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::core::format::{format_number, parse_float};

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        value
            .map(|v| {
                if v.is_finite() {
                    Repr::Number(v)
                } else {
                    Repr::Text(format_number(v))
                }
            })
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        Ok(Option::<Repr>::deserialize(deserializer)?.map(|repr| match repr {
            Repr::Number(v) => v,
            Repr::Text(text) => parse_float(&text),
        }))
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Creates a calculator showing `0` with nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            previous_value: None,
            operation: None,
            waiting_for_operand: false,
        }
    }

    /// Text currently on the display
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Left operand of the pending operation
    #[must_use]
    pub fn previous_value(&self) -> Option<f64> {
        self.previous_value
    }

    /// Pending operator
    #[must_use]
    pub fn operation(&self) -> Option<Operator> {
        self.operation
    }

    /// Whether the next digit starts a new operand
    #[must_use]
    pub fn waiting_for_operand(&self) -> bool {
        self.waiting_for_operand
    }

    /// Routes an input to its transition
    pub fn dispatch(&mut self, input: Input) {
        match input {
            Input::Digit(d) => self.digit(d),
            Input::Decimal => self.decimal_point(),
            Input::Operator(op) => self.operator(op),
            Input::Equals => self.equals(),
            Input::Clear => self.clear(),
            Input::Delete => self.delete(),
            Input::ToggleSign => self.toggle_sign(),
        }
        debug!(?input, display = %self.display, "calculator transition");
    }

    /// Enters a digit; values above 9 are ignored
    pub fn digit(&mut self, d: u8) {
        let Some(ch) = char::from_digit(u32::from(d), 10) else {
            return;
        };

        if self.waiting_for_operand {
            self.display = ch.to_string();
            self.waiting_for_operand = false;
        } else if self.display == INITIAL_DISPLAY {
            self.display = ch.to_string();
        } else {
            self.display.push(ch);
        }
    }

    /// Enters the decimal point, at most once per operand
    pub fn decimal_point(&mut self) {
        if self.waiting_for_operand {
            self.display = "0.".to_string();
            self.waiting_for_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Selects an operator, first applying any pending one
    pub fn operator(&mut self, op: Operator) {
        let input_value = parse_float(&self.display);

        match (self.previous_value, self.operation) {
            (None, _) => self.previous_value = Some(input_value),
            (Some(previous), Some(pending)) => {
                let result = pending.apply(previous, input_value);
                self.display = format_number(result);
                self.previous_value = Some(result);
            }
            (Some(_), None) => {}
        }

        self.operation = Some(op);
        self.waiting_for_operand = true;
    }

    /// Completes the pending operation; no-op when nothing is pending
    pub fn equals(&mut self) {
        let (Some(previous), Some(pending)) = (self.previous_value, self.operation) else {
            return;
        };

        let result = pending.apply(previous, parse_float(&self.display));
        self.display = format_number(result);
        self.previous_value = None;
        self.operation = None;
        self.waiting_for_operand = true;
    }

    /// Resets to the initial state
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Drops the last character, falling back to `0`
    pub fn delete(&mut self) {
        if self.display.chars().count() > 1 {
            self.display.pop();
        } else {
            self.display = INITIAL_DISPLAY.to_string();
        }
    }

    /// Negates the displayed value
    pub fn toggle_sign(&mut self) {
        self.display = format_number(-parse_float(&self.display));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_digits(state: &mut CalculatorState, digits: &[u8]) {
        for &d in digits {
            state.digit(d);
        }
    }

    // ===== Construction =====

    #[test]
    fn test_new_state() {
        let state = CalculatorState::new();
        assert_eq!(state.display(), "0");
        assert_eq!(state.previous_value(), None);
        assert_eq!(state.operation(), None);
        assert!(!state.waiting_for_operand());
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(CalculatorState::default(), CalculatorState::new());
    }

    // ===== digit =====

    #[test]
    fn test_digits_concatenate() {
        let mut state = CalculatorState::new();
        press_digits(&mut state, &[1, 2, 3]);
        assert_eq!(state.display(), "123");
    }

    #[test]
    fn test_leading_zero_collapses() {
        let mut state = CalculatorState::new();
        press_digits(&mut state, &[0, 5]);
        assert_eq!(state.display(), "5");
    }

    #[test]
    fn test_repeated_zero_stays_single() {
        let mut state = CalculatorState::new();
        press_digits(&mut state, &[0, 0, 0]);
        assert_eq!(state.display(), "0");
    }

    #[test]
    fn test_digit_out_of_range_ignored() {
        let mut state = CalculatorState::new();
        state.digit(4);
        state.digit(10);
        assert_eq!(state.display(), "4");
    }

    #[test]
    fn test_digit_after_operator_starts_new_operand() {
        let mut state = CalculatorState::new();
        state.digit(7);
        state.operator(Operator::Add);
        state.digit(3);
        assert_eq!(state.display(), "3");
        assert!(!state.waiting_for_operand());
    }

    // ===== decimal_point =====

    #[test]
    fn test_decimal_appends_once() {
        let mut state = CalculatorState::new();
        state.digit(1);
        state.decimal_point();
        state.decimal_point();
        state.digit(5);
        assert_eq!(state.display(), "1.5");
    }

    #[test]
    fn test_decimal_on_initial_zero() {
        let mut state = CalculatorState::new();
        state.decimal_point();
        assert_eq!(state.display(), "0.");
        state.digit(0);
        assert_eq!(state.display(), "0.0");
    }

    #[test]
    fn test_decimal_while_waiting() {
        let mut state = CalculatorState::new();
        state.digit(2);
        state.operator(Operator::Multiply);
        state.decimal_point();
        assert_eq!(state.display(), "0.");
        assert!(!state.waiting_for_operand());
    }

    // ===== operator / equals =====

    #[test]
    fn test_first_operator_stores_operand() {
        let mut state = CalculatorState::new();
        state.digit(9);
        state.operator(Operator::Subtract);
        assert_eq!(state.previous_value(), Some(9.0));
        assert_eq!(state.operation(), Some(Operator::Subtract));
        assert!(state.waiting_for_operand());
        assert_eq!(state.display(), "9");
    }

    #[test]
    fn test_seven_plus_three() {
        let mut state = CalculatorState::new();
        state.digit(7);
        state.operator(Operator::Add);
        state.digit(3);
        state.equals();
        assert_eq!(state.display(), "10");
        assert_eq!(state.previous_value(), None);
        assert_eq!(state.operation(), None);
        assert!(state.waiting_for_operand());
    }

    #[test]
    fn test_divide_by_zero_shows_infinity() {
        let mut state = CalculatorState::new();
        state.digit(5);
        state.operator(Operator::Divide);
        state.digit(0);
        state.equals();
        assert_eq!(state.display(), "Infinity");
    }

    #[test]
    fn test_chain_evaluates_left_to_right() {
        let mut state = CalculatorState::new();
        state.digit(2);
        state.operator(Operator::Multiply);
        state.digit(5);
        state.operator(Operator::Add);
        assert_eq!(state.display(), "10");
        assert_eq!(state.previous_value(), Some(10.0));
        state.digit(1);
        state.equals();
        assert_eq!(state.display(), "11");
    }

    #[test]
    fn test_repeated_operator_recomputes_with_display() {
        let mut state = CalculatorState::new();
        state.digit(7);
        state.operator(Operator::Add);
        state.operator(Operator::Multiply);
        // The pending "+" is applied to 7 and the unchanged display 7
        assert_eq!(state.display(), "14");
        assert_eq!(state.operation(), Some(Operator::Multiply));
    }

    #[test]
    fn test_percent_operator() {
        let mut state = CalculatorState::new();
        press_digits(&mut state, &[2, 0, 0]);
        state.operator(Operator::Percent);
        press_digits(&mut state, &[1, 5]);
        state.equals();
        assert_eq!(state.display(), "30");
    }

    #[test]
    fn test_float_artifacts_surface() {
        let mut state = CalculatorState::new();
        state.decimal_point();
        state.digit(1);
        state.operator(Operator::Add);
        state.decimal_point();
        state.digit(2);
        state.equals();
        assert_eq!(state.display(), "0.30000000000000004");
    }

    #[test]
    fn test_equals_without_pending_is_noop() {
        let mut state = CalculatorState::new();
        state.digit(4);
        let before = state.clone();
        state.equals();
        assert_eq!(state, before);
    }

    #[test]
    fn test_equals_twice_is_noop() {
        let mut state = CalculatorState::new();
        state.digit(6);
        state.operator(Operator::Add);
        state.digit(1);
        state.equals();
        let before = state.clone();
        state.equals();
        assert_eq!(state, before);
    }

    #[test]
    fn test_result_feeds_next_operation() {
        let mut state = CalculatorState::new();
        state.digit(6);
        state.operator(Operator::Add);
        state.digit(4);
        state.equals();
        state.operator(Operator::Divide);
        state.digit(4);
        state.equals();
        assert_eq!(state.display(), "2.5");
    }

    #[test]
    fn test_infinity_propagates() {
        let mut state = CalculatorState::new();
        state.digit(1);
        state.operator(Operator::Divide);
        state.digit(0);
        state.operator(Operator::Subtract);
        assert_eq!(state.display(), "Infinity");
        state.digit(1);
        state.equals();
        assert_eq!(state.display(), "Infinity");
    }

    #[test]
    fn test_zero_over_zero_is_nan() {
        let mut state = CalculatorState::new();
        state.digit(0);
        state.operator(Operator::Divide);
        state.digit(0);
        state.equals();
        assert_eq!(state.display(), "NaN");
    }

    // ===== clear =====

    #[test]
    fn test_clear_resets_everything() {
        let mut state = CalculatorState::new();
        state.digit(8);
        state.operator(Operator::Multiply);
        state.digit(2);
        state.clear();
        assert_eq!(state, CalculatorState::new());
    }

    // ===== delete =====

    #[test]
    fn test_delete_drops_last_char() {
        let mut state = CalculatorState::new();
        press_digits(&mut state, &[1, 2, 3]);
        state.delete();
        assert_eq!(state.display(), "12");
    }

    #[test]
    fn test_delete_single_char_yields_zero() {
        let mut state = CalculatorState::new();
        state.digit(7);
        state.delete();
        assert_eq!(state.display(), "0");
        state.delete();
        assert_eq!(state.display(), "0");
    }

    #[test]
    fn test_delete_leaves_pending_operation() {
        let mut state = CalculatorState::new();
        state.digit(5);
        state.operator(Operator::Add);
        state.delete();
        assert_eq!(state.display(), "0");
        assert_eq!(state.previous_value(), Some(5.0));
        assert_eq!(state.operation(), Some(Operator::Add));
        assert!(state.waiting_for_operand());
    }

    #[test]
    fn test_delete_negative_sign_leaves_nan_operand() {
        let mut state = CalculatorState::new();
        state.digit(5);
        state.toggle_sign();
        state.delete();
        assert_eq!(state.display(), "-");
        state.operator(Operator::Add);
        state.digit(1);
        state.equals();
        assert_eq!(state.display(), "NaN");
    }

    #[test]
    fn test_delete_result_text() {
        let mut state = CalculatorState::new();
        state.digit(1);
        state.operator(Operator::Divide);
        state.digit(0);
        state.equals();
        state.delete();
        assert_eq!(state.display(), "Infinit");
    }

    // ===== toggle_sign =====

    #[test]
    fn test_toggle_sign_negates() {
        let mut state = CalculatorState::new();
        state.digit(5);
        state.toggle_sign();
        assert_eq!(state.display(), "-5");
        state.toggle_sign();
        assert_eq!(state.display(), "5");
    }

    #[test]
    fn test_toggle_sign_on_zero_stays_zero() {
        let mut state = CalculatorState::new();
        state.toggle_sign();
        assert_eq!(state.display(), "0");
    }

    #[test]
    fn test_toggle_sign_normalizes_trailing_point() {
        let mut state = CalculatorState::new();
        state.digit(3);
        state.decimal_point();
        state.toggle_sign();
        assert_eq!(state.display(), "-3");
    }

    #[test]
    fn test_toggle_sign_keeps_waiting_flag() {
        let mut state = CalculatorState::new();
        state.digit(4);
        state.operator(Operator::Add);
        state.toggle_sign();
        assert_eq!(state.display(), "-4");
        assert!(state.waiting_for_operand());
    }

    // ===== dispatch =====

    #[test]
    fn test_dispatch_routes_every_input() {
        let mut state = CalculatorState::new();
        for input in [
            Input::Digit(1),
            Input::Decimal,
            Input::Digit(5),
            Input::ToggleSign,
            Input::Operator(Operator::Multiply),
            Input::Digit(2),
            Input::Equals,
        ] {
            state.dispatch(input);
        }
        assert_eq!(state.display(), "-3");

        state.dispatch(Input::Delete);
        assert_eq!(state.display(), "-");
        state.dispatch(Input::Clear);
        assert_eq!(state, CalculatorState::new());
    }

    #[test]
    fn test_state_serializes() {
        let mut state = CalculatorState::new();
        state.digit(3);
        state.operator(Operator::Add);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["display"], "3");
        assert_eq!(json["previous_value"], 3.0);
        assert_eq!(json["operation"], "Add");
        assert_eq!(json["waiting_for_operand"], true);
    }

    #[test]
    fn test_infinite_operand_serializes_as_text() {
        let mut state = CalculatorState::new();
        for input in [
            Input::Digit(5),
            Input::Operator(Operator::Divide),
            Input::Digit(0),
            Input::Operator(Operator::Add),
        ] {
            state.dispatch(input);
        }
        assert_eq!(state.previous_value(), Some(f64::INFINITY));

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["previous_value"], "Infinity");
        assert_eq!(json["operation"], "Add");

        let restored: CalculatorState = serde_json::from_value(json).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_nan_operand_round_trips() {
        let mut state = CalculatorState::new();
        for input in [
            Input::Digit(0),
            Input::Operator(Operator::Divide),
            Input::Digit(0),
            Input::Operator(Operator::Add),
        ] {
            state.dispatch(input);
        }

        let text = serde_json::to_string(&state).unwrap();
        assert!(text.contains(r#""previous_value":"NaN""#), "{text}");

        let restored: CalculatorState = serde_json::from_str(&text).unwrap();
        assert!(restored.previous_value().unwrap().is_nan());
        assert_eq!(restored.operation(), Some(Operator::Add));
    }

    #[test]
    fn test_finite_state_round_trips() {
        let mut state = CalculatorState::new();
        state.digit(3);
        state.operator(Operator::Multiply);
        state.digit(4);
        let text = serde_json::to_string(&state).unwrap();
        let restored: CalculatorState = serde_json::from_str(&text).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_pending_operation_without_operand_rejected() {
        let text = r#"{"display":"0","previous_value":null,"operation":"Add","waiting_for_operand":true}"#;
        assert!(serde_json::from_str::<CalculatorState>(text).is_err());
    }
}
