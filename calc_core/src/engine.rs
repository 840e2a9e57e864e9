//! # Calculator Engine
//!
//! A single-instance state machine over four fields: the display text, the
//! left operand of a pending operation, the pending operator, and whether the
//! next digit starts a new operand.
//!
//! The engine never fails. Division by zero and other degenerate inputs
//! surface as `Infinity`, `-Infinity` or `NaN` on the display.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::engine::Calculator;
//! use calc_core::keypad::Key;
//!
//! let mut calc = Calculator::new();
//! for key in Key::parse_sequence("5 + 3 =").unwrap() {
//!     calc.press(key);
//! }
//! assert_eq!(calc.display(), "8");
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::format::{format_number, normalize, parse_display};
use crate::keypad::{Digit, Key};
use crate::operator::{evaluate, Operator};

/// Where the engine is in an entry cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No operator pending
    Idle,
    /// Operator chosen, next digit starts the second operand
    AwaitingOperand,
    /// Operator chosen, second operand being typed
    EnteringOperand,
}

/// Keypad calculator state
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    display_value: String,
    first_operand: Option<f64>,
    operator: Option<Operator>,
    waiting_for_second_operand: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator showing `0` with nothing pending
    pub fn new() -> Self {
        Self {
            display_value: "0".to_string(),
            first_operand: None,
            operator: None,
            waiting_for_second_operand: false,
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Text currently shown on the display
    pub fn display(&self) -> &str {
        &self.display_value
    }

    /// Left operand of the pending operation
    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    /// Pending operator
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn is_waiting_for_second_operand(&self) -> bool {
        self.waiting_for_second_operand
    }

    pub fn phase(&self) -> Phase {
        match (self.operator, self.waiting_for_second_operand) {
            (None, _) => Phase::Idle,
            (Some(_), true) => Phase::AwaitingOperand,
            (Some(_), false) => Phase::EnteringOperand,
        }
    }

    /// Summary of the pending operation, e.g. `"5 +"`
    pub fn pending(&self) -> Option<String> {
        match (self.first_operand, self.operator) {
            (Some(first), Some(op)) => Some(format!("{} {}", normalize(first), op)),
            _ => None,
        }
    }

    /// Serializable snapshot of the current state
    pub fn state(&self) -> CalculatorState {
        CalculatorState {
            display_value: self.display_value.clone(),
            first_operand: self.first_operand,
            operator: self.operator,
            waiting_for_second_operand: self.waiting_for_second_operand,
            phase: self.phase(),
            pending: self.pending(),
        }
    }

    // ------------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------------

    /// Dispatch a keypad press to its operation
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(d) => self.input_digit(d),
            Key::Decimal => self.input_decimal(),
            Key::Operator(op) => self.handle_operator(op),
            Key::Equals => self.handle_equals(),
            Key::Clear => self.clear_all(),
            Key::ToggleSign => self.toggle_sign(),
            Key::Percent => self.input_percent(),
        }
    }

    /// Type a digit. Replaces a lone `0` or the previous operand, else appends.
    pub fn input_digit(&mut self, digit: Digit) {
        if self.waiting_for_second_operand {
            self.display_value = digit.to_string();
            self.waiting_for_second_operand = false;
        } else if self.display_value == "0" {
            self.display_value = digit.to_string();
        } else {
            self.display_value.push(digit.as_char());
        }
        trace!(display = %self.display_value, "digit entered");
    }

    /// Type a decimal point. No-op if the display already has one.
    pub fn input_decimal(&mut self) {
        if self.waiting_for_second_operand {
            self.display_value = "0.".to_string();
            self.waiting_for_second_operand = false;
            return;
        }
        if !self.display_value.contains('.') {
            self.display_value.push('.');
        }
    }

    /// Choose the next operator, evaluating any operation already pending.
    ///
    /// Pressing a second operator before typing a digit only swaps the
    /// pending operator.
    pub fn handle_operator(&mut self, next: Operator) {
        let input_value = parse_display(&self.display_value);

        if self.operator.is_some() && self.waiting_for_second_operand {
            debug!(from = ?self.operator, to = ?next, "operator replaced");
            self.operator = Some(next);
            return;
        }

        match (self.first_operand, self.operator) {
            (None, _) => {
                self.first_operand = Some(input_value);
            }
            (Some(first), Some(op)) => {
                let result = evaluate(first, input_value, op);
                self.display_value = normalize(result);
                self.first_operand = Some(result);
                debug!(first, second = input_value, ?op, result, "chained evaluation");
            }
            (Some(_), None) => {}
        }

        self.waiting_for_second_operand = true;
        self.operator = Some(next);
    }

    /// Complete the pending operation. No-op when nothing is pending.
    pub fn handle_equals(&mut self) {
        let (Some(first), Some(op)) = (self.first_operand, self.operator) else {
            return;
        };

        let second = parse_display(&self.display_value);
        let result = evaluate(first, second, op);
        self.display_value = normalize(result);
        self.first_operand = None;
        self.operator = None;
        self.waiting_for_second_operand = false;
        debug!(first, second, ?op, result, "equals");
    }

    /// Reset to the initial state
    pub fn clear_all(&mut self) {
        *self = Self::new();
        debug!("cleared");
    }

    /// Negate the displayed value
    pub fn toggle_sign(&mut self) {
        let value = parse_display(&self.display_value);
        self.display_value = format_number(value * -1.0);
    }

    /// Divide the displayed value by 100. No-op on zero.
    pub fn input_percent(&mut self) {
        let value = parse_display(&self.display_value);
        if value == 0.0 {
            return;
        }
        self.display_value = format_number(value / 100.0);
    }
}

/// Snapshot of a [`Calculator`] for JSON output
///
/// Non-finite operands serialize as `null`, matching serde_json's handling
/// of `f64`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub display_value: String,
    pub first_operand: Option<f64>,
    pub operator: Option<Operator>,
    pub waiting_for_second_operand: bool,
    pub phase: Phase,
    pub pending: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(keys: &str) -> Calculator {
        let mut calc = Calculator::new();
        for key in Key::parse_sequence(keys).unwrap() {
            calc.press(key);
        }
        calc
    }

    fn digit(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.first_operand(), None);
        assert_eq!(calc.operator(), None);
        assert!(!calc.is_waiting_for_second_operand());
        assert_eq!(calc.phase(), Phase::Idle);
    }

    #[test]
    fn test_digits_concatenate() {
        assert_eq!(run("1 2 3 4 5").display(), "12345");
        assert_eq!(run("0 0 7").display(), "7");
        assert_eq!(run("9876543210987654321").display(), "9876543210987654321");
    }

    #[test]
    fn test_leading_zero_replaced() {
        let mut calc = Calculator::new();
        calc.input_digit(digit(0));
        assert_eq!(calc.display(), "0");
        calc.input_digit(digit(4));
        assert_eq!(calc.display(), "4");
    }

    #[test]
    fn test_decimal_idempotent() {
        let mut calc = run("3");
        calc.input_decimal();
        let once = calc.display().to_string();
        calc.input_decimal();
        assert_eq!(calc.display(), once);
        assert_eq!(calc.display(), "3.");

        assert_eq!(run("1 . 5 .").display(), "1.5");
        assert_eq!(run(". 5").display(), "0.5");
    }

    #[test]
    fn test_decimal_starts_second_operand() {
        let calc = run("4 + .");
        assert_eq!(calc.display(), "0.");
        assert!(!calc.is_waiting_for_second_operand());
        assert_eq!(run("4 + . 5 =").display(), "4.5");
    }

    #[test]
    fn test_addition() {
        let calc = run("5 + 3 =");
        assert_eq!(calc.display(), "8");
        assert_eq!(calc.first_operand(), None);
        assert_eq!(calc.operator(), None);
        assert!(!calc.is_waiting_for_second_operand());
    }

    #[test]
    fn test_divide_by_zero_shows_infinity() {
        assert_eq!(run("6 ÷ 0 =").display(), "Infinity");
        assert_eq!(run("6 neg ÷ 0 =").display(), "-Infinity");
        assert_eq!(run("0 ÷ 0 =").display(), "NaN");
    }

    #[test]
    fn test_percent() {
        assert_eq!(run("50 %").display(), "0.5");
        assert_eq!(run("5 %").display(), "0.05");
        assert_eq!(run("0 %").display(), "0");
        assert_eq!(run("0 . %").display(), "0.");
    }

    #[test]
    fn test_toggle_sign() {
        let mut calc = run("7");
        calc.toggle_sign();
        assert_eq!(calc.display(), "-7");
        calc.toggle_sign();
        assert_eq!(calc.display(), "7");

        assert_eq!(run("0 ±").display(), "0");
        assert_eq!(run("2.50 ±").display(), "-2.5");
    }

    #[test]
    fn test_equals_without_pending_is_noop() {
        let calc = run("=");
        assert_eq!(calc.display(), "0");
        assert_eq!(calc, Calculator::new());

        let calc = run("4 2 =");
        assert_eq!(calc.display(), "42");
    }

    #[test]
    fn test_repeated_equals_does_nothing_further() {
        let mut calc = run("2 × 3 =");
        assert_eq!(calc.display(), "6");
        let before = calc.clone();
        calc.handle_equals();
        calc.handle_equals();
        assert_eq!(calc, before);
    }

    #[test]
    fn test_operator_override() {
        let plus_then_times = run("4 + × 5 =");
        let times_only = run("4 × 5 =");
        assert_eq!(plus_then_times.display(), "20");
        assert_eq!(plus_then_times, times_only);

        let calc = run("4 + ×");
        assert_eq!(calc.display(), "4");
        assert_eq!(calc.first_operand(), Some(4.0));
        assert_eq!(calc.operator(), Some(Operator::Multiply));
        assert!(calc.is_waiting_for_second_operand());
    }

    #[test]
    fn test_operator_chaining_evaluates_left_to_right() {
        let calc = run("2 + 3 ×");
        assert_eq!(calc.display(), "5");
        assert_eq!(calc.first_operand(), Some(5.0));
        assert_eq!(calc.phase(), Phase::AwaitingOperand);

        assert_eq!(run("2 + 3 × 4 =").display(), "20");
        assert_eq!(run("10 - 4 - 3 =").display(), "3");
    }

    #[test]
    fn test_chained_result_is_normalized() {
        let calc = run(". 1 + . 2 +");
        assert_eq!(calc.display(), "0.3");
        // The stored operand keeps the unrounded value
        assert_eq!(calc.first_operand(), Some(0.1 + 0.2));
    }

    #[test]
    fn test_equals_normalizes() {
        assert_eq!(run(". 1 + . 2 =").display(), "0.3");
        assert_eq!(run("1 ÷ 3 =").display(), "0.333333333333333");
    }

    #[test]
    fn test_equals_rounds_exact_tie_up() {
        // 1234567890123445 sits exactly halfway at the 15th digit
        assert_eq!(run("1234567890123440 + 5 =").display(), "1234567890123450");
        assert_eq!(run("1234567890123440 + 5 +").display(), "1234567890123450");
    }

    #[test]
    fn test_toggle_sign_midpoint_prints_even_digit() {
        assert_eq!(run("8.9527130126953125 ±").display(), "-8.952713012695312");
        assert_eq!(run("8.9527130126953125 ± ±").display(), "8.952713012695312");
    }

    #[test]
    fn test_operator_after_equals_reuses_result() {
        assert_eq!(run("5 + 3 = × 2 =").display(), "16");
    }

    #[test]
    fn test_digit_after_equals_appends() {
        // Equals clears the waiting flag, so digits extend the result
        assert_eq!(run("5 + 3 = 1").display(), "81");
    }

    #[test]
    fn test_clear_all_resets_from_any_state() {
        for keys in ["", "5", "5 +", "5 + 3", "5 + 3 =", "6 ÷ 0 =", "1 . 5 ± %"] {
            let mut calc = run(keys);
            calc.clear_all();
            assert_eq!(calc, Calculator::new(), "after {:?}", keys);
        }
    }

    #[test]
    fn test_waiting_implies_operator() {
        for keys in ["5 +", "5 + ×", "5 + 3", "5 + 3 =", "5 + 3 = AC", "5 + . 2"] {
            let calc = run(keys);
            if calc.is_waiting_for_second_operand() {
                assert!(calc.operator().is_some(), "after {:?}", keys);
            }
        }
    }

    #[test]
    fn test_phases() {
        assert_eq!(run("5").phase(), Phase::Idle);
        assert_eq!(run("5 +").phase(), Phase::AwaitingOperand);
        assert_eq!(run("5 + 2").phase(), Phase::EnteringOperand);
        assert_eq!(run("5 + 2 =").phase(), Phase::Idle);
    }

    #[test]
    fn test_pending_summary() {
        assert_eq!(run("5").pending(), None);
        assert_eq!(run("5 +").pending(), Some("5 +".to_string()));
        assert_eq!(run("12 ÷ 4").pending(), Some("12 ÷".to_string()));
    }

    #[test]
    fn test_infinity_carries_through() {
        let calc = run("6 ÷ 0 = + 1 =");
        assert_eq!(calc.display(), "Infinity");
        let calc = run("6 ÷ 0 = ±");
        assert_eq!(calc.display(), "-Infinity");
    }

    #[test]
    fn test_state_serialization() {
        let state = run("5 +").state();
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"operator\":\"add\""));
        assert!(json.contains("\"phase\":\"awaiting_operand\""));
        let roundtrip: CalculatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, roundtrip);
    }

    #[test]
    fn test_independent_instances() {
        let mut a = Calculator::new();
        let mut b = Calculator::new();
        a.input_digit(digit(1));
        b.input_digit(digit(2));
        assert_eq!(a.display(), "1");
        assert_eq!(b.display(), "2");
    }
}
