//! # Keypad
//!
//! The buttons a presentation layer offers and how they are laid out.
//! Every [`Key`] maps to exactly one engine operation via
//! [`Calculator::press`](crate::engine::Calculator::press).
//!
//! ## Layout
//!
//! ```text
//! AC  ±  %  ÷
//!  7  8  9  ×
//!  4  5  6  -
//!  1  2  3  +
//!  0 (wide) .  =
//! ```
//!
//! ## Parsing
//!
//! Text tokens parse into keys using their face labels or ASCII stand-ins,
//! which is how the CLI drives the engine:
//!
//! ```rust
//! use calc_core::keypad::Key;
//!
//! let keys = Key::parse_sequence("12 + 3.5 =").unwrap();
//! assert_eq!(keys.len(), 7);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::operator::Operator;

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

// ============================================================================
// Digit
// ============================================================================

/// A single decimal digit, 0 through 9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Create a digit from its numeric value
    pub fn new(value: u8) -> CalcResult<Self> {
        if value <= 9 {
            Ok(Digit(value))
        } else {
            Err(CalcError::invalid_input("digit", value.to_string(), "Expected 0-9"))
        }
    }

    /// Numeric value
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Character appended to the display
    pub fn as_char(&self) -> char {
        char::from(b'0' + self.0)
    }

    /// Face label
    pub fn label(&self) -> &'static str {
        DIGIT_LABELS[self.0 as usize]
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Digit(d as u8))
            .ok_or_else(|| CalcError::invalid_input("digit", c.to_string(), "Expected 0-9"))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Key
// ============================================================================

/// A keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "key", content = "value", rename_all = "snake_case")]
pub enum Key {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    ToggleSign,
    Percent,
}

/// Visual grouping of keys, used by presentation layers for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    /// AC, ±, %
    Function,
    /// 0-9 and the decimal point
    Entry,
    /// + - × ÷
    Operator,
    /// =
    Equals,
}

impl Key {
    /// Label printed on the button face
    pub fn label(&self) -> &'static str {
        match self {
            Key::Digit(d) => d.label(),
            Key::Decimal => ".",
            Key::Operator(op) => op.symbol(),
            Key::Equals => "=",
            Key::Clear => "AC",
            Key::ToggleSign => "±",
            Key::Percent => "%",
        }
    }

    pub fn role(&self) -> KeyRole {
        match self {
            Key::Clear | Key::ToggleSign | Key::Percent => KeyRole::Function,
            Key::Digit(_) | Key::Decimal => KeyRole::Entry,
            Key::Operator(_) => KeyRole::Operator,
            Key::Equals => KeyRole::Equals,
        }
    }

    /// Parse whitespace-separated tokens into key presses.
    ///
    /// Each token is either a single key label (`AC`, `±`, `%`, `+`, `=`, ...)
    /// or a run of digits and decimal points such as `12.5`, which expands
    /// into one key per character.
    pub fn parse_sequence(input: &str) -> CalcResult<Vec<Key>> {
        let mut keys = Vec::new();
        for token in input.split_whitespace() {
            keys.extend(Key::parse_token(token)?);
        }
        Ok(keys)
    }

    /// Parse a single token, see [`Key::parse_sequence`]
    pub fn parse_token(token: &str) -> CalcResult<Vec<Key>> {
        if let Ok(key) = token.parse::<Key>() {
            return Ok(vec![key]);
        }
        if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return token
                .chars()
                .map(|c| if c == '.' { Ok(Key::Decimal) } else { Digit::try_from(c).map(Key::Digit) })
                .collect();
        }
        Err(CalcError::invalid_input("key", token, "Unknown key label"))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Key {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let key = match token.to_ascii_lowercase().as_str() {
            "ac" | "c" | "clear" => Key::Clear,
            "±" | "+/-" | "neg" | "negate" => Key::ToggleSign,
            "%" | "percent" => Key::Percent,
            "=" | "equals" => Key::Equals,
            "." => Key::Decimal,
            _ => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Key::Digit(Digit::try_from(c)?),
                    _ => Key::Operator(token.parse().map_err(|_| {
                        CalcError::invalid_input("key", token, "Unknown key label")
                    })?),
                }
            }
        };
        Ok(key)
    }
}

// ============================================================================
// Layout
// ============================================================================

/// A key and the number of grid columns it spans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySlot {
    pub key: Key,
    pub span: u16,
}

const fn slot(key: Key) -> KeySlot {
    KeySlot { key, span: 1 }
}

const fn digit(value: u8) -> KeySlot {
    slot(Key::Digit(Digit(value)))
}

/// Number of grid columns on the keypad
pub const KEYPAD_COLUMNS: u16 = 4;

/// Keypad rows, top to bottom
pub const KEYPAD_LAYOUT: [&[KeySlot]; 5] = [
    &[
        slot(Key::Clear),
        slot(Key::ToggleSign),
        slot(Key::Percent),
        slot(Key::Operator(Operator::Divide)),
    ],
    &[digit(7), digit(8), digit(9), slot(Key::Operator(Operator::Multiply))],
    &[digit(4), digit(5), digit(6), slot(Key::Operator(Operator::Subtract))],
    &[digit(1), digit(2), digit(3), slot(Key::Operator(Operator::Add))],
    &[
        KeySlot { key: Key::Digit(Digit(0)), span: 2 },
        slot(Key::Decimal),
        slot(Key::Equals),
    ],
];
