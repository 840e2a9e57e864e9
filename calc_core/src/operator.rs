//! # Binary Operators
//!
//! The closed set of arithmetic operations the keypad offers, and the pure
//! [`evaluate`] function that applies them with IEEE-754 double semantics.
//!
//! ```rust
//! use calc_core::operator::{evaluate, Operator};
//!
//! assert_eq!(evaluate(6.0, 3.0, Operator::Divide), 2.0);
//! assert!(evaluate(6.0, 0.0, Operator::Divide).is_infinite());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// A pending binary operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, in keypad column order (top to bottom)
    pub const ALL: [Operator; 4] = [
        Operator::Divide,
        Operator::Multiply,
        Operator::Subtract,
        Operator::Add,
    ];

    /// Symbol printed on the keypad face
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Apply the operator to two operands
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
            Operator::Divide => a / b,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    /// Accepts keypad symbols plus their ASCII stand-ins (`*`, `x`, `/`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operator::Add),
            "-" | "−" => Ok(Operator::Subtract),
            "*" | "x" | "X" | "×" => Ok(Operator::Multiply),
            "/" | "÷" => Ok(Operator::Divide),
            other => Err(CalcError::invalid_input(
                "operator",
                other,
                "Expected one of + - × ÷ (or * x /)",
            )),
        }
    }
}

/// Apply `op` to `a` and `b`.
///
/// Division by zero is not an error: it yields ±Infinity, or NaN for `0 / 0`.
pub fn evaluate(a: f64, b: f64, op: Operator) -> f64 {
    op.apply(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_basic() {
        assert_eq!(evaluate(5.0, 3.0, Operator::Add), 8.0);
        assert_eq!(evaluate(5.0, 3.0, Operator::Subtract), 2.0);
        assert_eq!(evaluate(5.0, 3.0, Operator::Multiply), 15.0);
        assert_eq!(evaluate(6.0, 4.0, Operator::Divide), 1.5);
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(evaluate(6.0, 0.0, Operator::Divide), f64::INFINITY);
        assert_eq!(evaluate(-6.0, 0.0, Operator::Divide), f64::NEG_INFINITY);
        assert!(evaluate(0.0, 0.0, Operator::Divide).is_nan());
    }

    #[test]
    fn test_parse_symbols() {
        assert_eq!("+".parse::<Operator>().unwrap(), Operator::Add);
        assert_eq!("−".parse::<Operator>().unwrap(), Operator::Subtract);
        assert_eq!("x".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!("×".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!("/".parse::<Operator>().unwrap(), Operator::Divide);

        let err = "^".parse::<Operator>().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_symbols_round_trip_through_parse() {
        for op in Operator::ALL {
            assert_eq!(op.symbol().parse::<Operator>().unwrap(), op);
        }
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Operator::Multiply).unwrap();
        assert_eq!(json, "\"multiply\"");
    }
}
