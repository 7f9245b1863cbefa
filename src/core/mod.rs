//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - The keypad input alphabet (`Key`, `Operator`)
//! - The owned state and its pure reducer (`CalculatorState`)
//! - Immutable session history tracking
//! - The thin imperative shell (`CalculatorEngine`)
//!
//! All transition logic is pure (no side effects); mutation is confined
//! to the engine wrapper, following the "pure core, imperative shell"
//! philosophy.

mod engine;
mod history;
mod state;
mod token;

pub use engine::CalculatorEngine;
pub use history::{KeyPress, SessionHistory};
pub use state::CalculatorState;
pub use token::{Key, Operator, UnknownKeyError};
