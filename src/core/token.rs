//! Keypad input alphabet.
//!
//! A calculator session is a sequence of discrete key presses. `Key` is the
//! closed set of recognized keys; each key carries a face label (the text
//! printed on the button), which is how the presentation layer addresses
//! keys without knowing the enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four binary arithmetic operators.
///
/// `apply` uses plain IEEE-754 semantics: division by zero is not guarded
/// and yields an infinity or NaN rather than an error.
///
/// # Example
///
/// ```rust
/// use tenkey::core::Operator;
///
/// assert_eq!(Operator::Add.apply(1.0, 2.0), 3.0);
/// assert!(Operator::Divide.apply(9.0, 0.0).is_infinite());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Apply the operator to two operands.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

/// A single key on the calculator keypad.
///
/// The `Digit` payload is only meaningful in `0..=9`; out-of-range values
/// are absorbed as no-ops by the state reducer, matching the engine's
/// "malformed input is absorbed silently" contract.
///
/// # Example
///
/// ```rust
/// use tenkey::core::{Key, Operator};
///
/// let key: Key = "÷".parse().unwrap();
/// assert_eq!(key, Key::Operator(Operator::Divide));
/// assert_eq!(key.to_string(), "÷");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Key {
    /// A digit key, `0` through `9`.
    Digit(u8),
    /// The decimal point key.
    Decimal,
    /// One of the four binary operator keys.
    Operator(Operator),
    /// The equals key.
    Equals,
    /// The all-clear key.
    Clear,
    /// The sign-flip key (`+/-`).
    SignFlip,
    /// The percent key.
    Percent,
}

impl fmt::Display for Key {
    /// Render the key's face label, exactly as printed on the button grid.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Decimal => write!(f, "."),
            Self::Operator(Operator::Add) => write!(f, "+"),
            Self::Operator(Operator::Subtract) => write!(f, "-"),
            Self::Operator(Operator::Multiply) => write!(f, "x"),
            Self::Operator(Operator::Divide) => write!(f, "÷"),
            Self::Equals => write!(f, "="),
            Self::Clear => write!(f, "AC"),
            Self::SignFlip => write!(f, "+/-"),
            Self::Percent => write!(f, "%"),
        }
    }
}

/// Error returned when a face label does not name any key.
///
/// This is the only error surfaced by the crate: everything past the input
/// boundary degrades to silent no-ops instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized key label '{0}'")]
pub struct UnknownKeyError(pub String);

impl FromStr for Key {
    type Err = UnknownKeyError;

    /// Parse a face label back into a key.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tenkey::core::Key;
    ///
    /// assert_eq!("7".parse::<Key>(), Ok(Key::Digit(7)));
    /// assert!("sin".parse::<Key>().is_err());
    /// ```
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "." => Ok(Self::Decimal),
            "+" => Ok(Self::Operator(Operator::Add)),
            "-" => Ok(Self::Operator(Operator::Subtract)),
            "x" => Ok(Self::Operator(Operator::Multiply)),
            "÷" => Ok(Self::Operator(Operator::Divide)),
            "=" => Ok(Self::Equals),
            "AC" => Ok(Self::Clear),
            "+/-" => Ok(Self::SignFlip),
            "%" => Ok(Self::Percent),
            _ => match label.parse::<u8>() {
                // Single-character labels only, so "+7" stays rejected.
                Ok(d) if d <= 9 && label.len() == 1 => Ok(Self::Digit(d)),
                _ => Err(UnknownKeyError(label.to_string())),
            },
        }
    }
}
