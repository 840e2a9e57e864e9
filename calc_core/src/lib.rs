//! # calc_core - Keypad Calculator Engine
//!
//! `calc_core` is the computational heart of Petal: a basic four-function
//! calculator driven one keypress at a time. Presentation layers (the Iced
//! GUI, the CLI) own a [`Calculator`], forward presses to it, and render
//! [`Calculator::display`] afterwards.
//!
//! ## Design Philosophy
//!
//! - **Reducer**: Each operation mutates four fields and returns; no I/O
//! - **Infallible**: Degenerate math shows up as `Infinity`/`NaN`, not errors
//! - **Closed Inputs**: Digits and operators are enums, not strings
//! - **JSON-Friendly**: State snapshots and keys serialize with serde
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{Calculator, Key};
//!
//! let mut calc = Calculator::new();
//! for key in Key::parse_sequence("6 ÷ 0 =").unwrap() {
//!     calc.press(key);
//! }
//! assert_eq!(calc.display(), "Infinity");
//!
//! let json = serde_json::to_string_pretty(&calc.state()).unwrap();
//! assert!(json.contains("Infinity"));
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - The calculator state machine
//! - [`operator`] - Binary operators and `evaluate`
//! - [`keypad`] - Keys, digits, and the button layout
//! - [`format`] - Display text formatting and parsing
//! - [`config`] - TOML configuration shared by the front ends
//! - [`logging`] - tracing-subscriber setup
//! - [`errors`] - Structured error types

pub mod config;
pub mod engine;
pub mod errors;
pub mod format;
pub mod keypad;
pub mod logging;
pub mod operator;

// Re-export commonly used types at crate root for convenience
pub use config::AppConfig;
pub use engine::{Calculator, CalculatorState, Phase};
pub use errors::{CalcError, CalcResult};
pub use keypad::{Digit, Key, KeyRole, KeySlot, KEYPAD_COLUMNS, KEYPAD_LAYOUT};
pub use operator::{evaluate, Operator};
