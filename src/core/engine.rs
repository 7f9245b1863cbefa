//! The imperative shell around the pure calculator state.

use super::history::{KeyPress, SessionHistory};
use super::state::CalculatorState;
use super::token::Key;
use chrono::Utc;

/// Calculator engine: owns the session state and its history.
///
/// The engine is the one mutable object in the crate. Each `press`
/// delegates to the pure reducer on [`CalculatorState`] and records the
/// press; the presentation layer reads `display` back after every call.
/// Input events are handled to completion, one at a time - nothing here
/// suspends, blocks, or retries.
///
/// # Example
///
/// ```rust
/// use tenkey::core::{CalculatorEngine, Key, Operator};
///
/// let mut engine = CalculatorEngine::new();
/// engine.press(Key::Digit(5));
/// engine.press(Key::Operator(Operator::Subtract));
/// engine.press(Key::Digit(5));
/// engine.press(Key::Equals);
///
/// assert_eq!(engine.display(), "0.0");
/// assert_eq!(engine.history().presses().len(), 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CalculatorEngine {
    state: CalculatorState,
    history: SessionHistory,
}

impl CalculatorEngine {
    /// Create an engine in the initial state with an empty history.
    pub fn new() -> Self {
        Self {
            state: CalculatorState::new(),
            history: SessionHistory::new(),
        }
    }

    /// Handle one key press.
    ///
    /// Never fails: invalid or incomplete sequences leave the state
    /// unchanged, though the press is still recorded in the history.
    pub fn press(&mut self, key: Key) {
        self.state = self.state.press(key);
        self.history = self.history.record(KeyPress {
            key,
            display: self.state.display().to_string(),
            timestamp: Utc::now(),
        });
    }

    /// The current display string, rendered verbatim by the UI (pure).
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// The current calculator state (pure).
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// The session history (pure).
    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    /// Whether the engine is collecting the second operand, i.e. an
    /// operator has been pressed and equals has not (pure).
    pub fn entering_second_operand(&self) -> bool {
        self.state.pending_operator().is_some()
    }
}
