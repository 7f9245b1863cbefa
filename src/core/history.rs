//! Session history tracking.
//!
//! Records the key presses of a calculator session immutably, following
//! functional programming principles. The history is in-memory only and
//! ends with the session; nothing is persisted.

use super::token::Key;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single key press.
///
/// Presses are immutable values capturing which key was pressed, the
/// display text the engine showed afterwards, and when it happened.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyPress {
    /// The key that was pressed
    pub key: Key,
    /// The display string after the press was handled
    pub display: String,
    /// When the press occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of a session's key presses.
///
/// History is immutable - `record` returns a new history with the press
/// added, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use tenkey::core::{Key, KeyPress, SessionHistory};
/// use chrono::Utc;
///
/// let history = SessionHistory::new();
///
/// let history = history.record(KeyPress {
///     key: Key::Digit(4),
///     display: "4".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// let history = history.record(KeyPress {
///     key: Key::Percent,
///     display: "0.04".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.presses().len(), 2);
/// assert_eq!(history.display_path(), vec!["4", "0.04"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionHistory {
    presses: Vec<KeyPress>,
}

impl SessionHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            presses: Vec::new(),
        }
    }

    /// Record a key press, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the press appended.
    pub fn record(&self, press: KeyPress) -> Self {
        let mut presses = self.presses.clone();
        presses.push(press);
        Self { presses }
    }

    /// Get all recorded presses in order.
    pub fn presses(&self) -> &[KeyPress] {
        &self.presses
    }

    /// Get the sequence of display strings the session has shown,
    /// one per press.
    pub fn display_path(&self) -> Vec<&str> {
        self.presses.iter().map(|p| p.display.as_str()).collect()
    }

    /// Calculate the elapsed time from first to last press.
    ///
    /// Returns `None` if no press has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.presses.first(), self.presses.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
