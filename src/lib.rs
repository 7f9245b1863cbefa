//! Tenkey: a keypad calculator engine built as a pure state machine
//!
//! Tenkey models a single-screen calculator as a tiny state machine:
//! a closed alphabet of key presses drives a pure reducer over one owned
//! state value, and the only observable output is the display string the
//! presentation layer renders after each press. The core transition logic
//! is composed of pure functions with no side effects; mutation lives in
//! a thin imperative shell.
//!
//! # Core Concepts
//!
//! - **Key**: the closed input alphabet - digits, decimal point, the four
//!   binary operators, equals, clear, sign flip, and percent
//! - **CalculatorState**: the owned session state with a pure
//!   `press(key)` reducer
//! - **CalculatorEngine**: the mutable shell that applies presses and
//!   records them in an immutable session history
//!
//! # Example
//!
//! ```rust
//! use tenkey::{CalculatorEngine, Key, Operator};
//!
//! let mut engine = CalculatorEngine::new();
//!
//! engine.press(Key::Digit(1));
//! engine.press(Key::Operator(Operator::Add));
//! engine.press(Key::Digit(2));
//! engine.press(Key::Equals);
//!
//! assert_eq!(engine.display(), "3.0");
//! ```
//!
//! The presentation layer can also speak face labels instead of enum
//! variants:
//!
//! ```rust
//! use tenkey::{CalculatorEngine, Key};
//!
//! let mut engine = CalculatorEngine::new();
//! for label in ["4", "%"] {
//!     engine.press(label.parse::<Key>().unwrap());
//! }
//!
//! assert_eq!(engine.display(), "0.04");
//! ```

pub mod core;

// Re-export commonly used types
pub use self::core::{CalculatorEngine, CalculatorState, Key, KeyPress, Operator, SessionHistory};
