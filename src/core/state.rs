//! Calculator state and the pure transition function.
//!
//! `CalculatorState` is an immutable value describing the whole session:
//! the live display text and the parsed operands. `press` is a pure
//! reducer - it never mutates the receiver and returns the successor
//! state, so every key press is a deterministic value-to-value step.

use super::token::{Key, Operator};
use serde::{Deserialize, Serialize};

/// The calculator's entire persistent state.
///
/// Two logical phases exist: entering the first operand
/// (`pending_operator` is `None`) and entering the second
/// (`pending_operator` is `Some`). Equals and clear transition back
/// toward the initial state; there is no terminal state.
///
/// The display is the source of text, the operands are the source of
/// numbers: each digit press re-parses the display into whichever operand
/// is being entered, so the two stay in sync while typing.
///
/// Equality compares operands by their bit pattern (`f64::total_cmp`), so
/// a state holding a NaN operand - reachable through an unguarded
/// `0 ÷ 0 =` - still equals itself and the no-op contracts stay
/// well-defined on non-finite states.
///
/// # Example
///
/// ```rust
/// use tenkey::core::{CalculatorState, Key, Operator};
///
/// let state = CalculatorState::new()
///     .press(Key::Digit(1))
///     .press(Key::Operator(Operator::Add))
///     .press(Key::Digit(2))
///     .press(Key::Equals);
///
/// assert_eq!(state.display(), "3.0");
/// assert_eq!(state.first_operand(), Some(3.0));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CalculatorState {
    display: String,
    first_operand: Option<f64>,
    second_operand: Option<f64>,
    pending_operator: Option<Operator>,
}

impl PartialEq for CalculatorState {
    fn eq(&self, other: &Self) -> bool {
        fn operand_eq(a: Option<f64>, b: Option<f64>) -> bool {
            match (a, b) {
                (Some(x), Some(y)) => x.total_cmp(&y).is_eq(),
                (None, None) => true,
                _ => false,
            }
        }

        self.display == other.display
            && operand_eq(self.first_operand, other.first_operand)
            && operand_eq(self.second_operand, other.second_operand)
            && self.pending_operator == other.pending_operator
    }
}

impl CalculatorState {
    /// Create the initial state: empty display, no operands, no pending
    /// operator.
    pub fn new() -> Self {
        Self::default()
    }

    /// The text currently shown; also the in-progress textual form of
    /// whichever operand is being typed.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The first operand, if one has been entered or computed.
    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    /// The second operand, if one has been entered since the last operator.
    pub fn second_operand(&self) -> Option<f64> {
        self.second_operand
    }

    /// The operator awaiting its second operand, if any.
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Apply one key press, returning the successor state.
    ///
    /// This is a pure function: the receiver is left unchanged. Invalid
    /// or incomplete input sequences (a second decimal point, equals with
    /// no pending operator, sign flip on an empty display) return a state
    /// equal to the current one rather than signaling an error.
    pub fn press(&self, key: Key) -> Self {
        let mut next = self.clone();
        match key {
            Key::Digit(d) => {
                // Payloads outside 0..=9 are absorbed silently.
                if let Some(c) = char::from_digit(u32::from(d), 10) {
                    next.display.push(c);
                    let entered = next.display.parse::<f64>().ok();
                    if next.pending_operator.is_some() {
                        next.second_operand = entered;
                    } else {
                        next.first_operand = entered;
                    }
                }
            }
            Key::Decimal => {
                if !next.display.contains('.') {
                    next.display.push('.');
                }
            }
            Key::Operator(op) => {
                // Pressing another operator before typing a digit simply
                // replaces the pending one - no stacking or chaining.
                next.pending_operator = Some(op);
                next.display.clear();
            }
            Key::Equals => {
                if let (Some(a), Some(b), Some(op)) = (
                    next.first_operand,
                    next.second_operand,
                    next.pending_operator,
                ) {
                    let result = op.apply(a, b);
                    next.display = render_value(result);
                    next.first_operand = Some(result);
                    next.second_operand = None;
                    next.pending_operator = None;
                }
            }
            Key::Clear => {
                next = Self::new();
            }
            Key::SignFlip => {
                if let Ok(value) = next.display.parse::<f64>() {
                    next.display = render_value(-value);
                }
            }
            Key::Percent => {
                if let Ok(value) = next.display.parse::<f64>() {
                    next.display = render_value(value / 100.0);
                }
            }
        }
        next
    }
}

/// Render a computed value as display text.
///
/// Finite whole values carry one forced decimal place (`3.0`, `-7.0`,
/// `0.0`); everything else uses the shortest `f64` rendering (`0.04`,
/// `inf`, `NaN`). Division by zero flows through here as a non-finite
/// value rather than an error.
fn render_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(keys: &[Key]) -> CalculatorState {
        keys.iter()
            .fold(CalculatorState::new(), |state, &key| state.press(key))
    }

    #[test]
    fn initial_state_is_empty() {
        let state = CalculatorState::new();
        assert_eq!(state.display(), "");
        assert_eq!(state.first_operand(), None);
        assert_eq!(state.second_operand(), None);
        assert_eq!(state.pending_operator(), None);
    }

    #[test]
    fn digits_build_first_operand() {
        let state = press_all(&[Key::Digit(1), Key::Digit(2), Key::Digit(3)]);
        assert_eq!(state.display(), "123");
        assert_eq!(state.first_operand(), Some(123.0));
        assert_eq!(state.second_operand(), None);
    }

    #[test]
    fn digits_after_operator_build_second_operand() {
        let state = press_all(&[
            Key::Digit(8),
            Key::Operator(Operator::Add),
            Key::Digit(4),
            Key::Digit(2),
        ]);
        assert_eq!(state.display(), "42");
        assert_eq!(state.first_operand(), Some(8.0));
        assert_eq!(state.second_operand(), Some(42.0));
        assert_eq!(state.pending_operator(), Some(Operator::Add));
    }

    #[test]
    fn decimal_point_appends_once() {
        let state = press_all(&[Key::Digit(3), Key::Decimal, Key::Digit(1), Key::Digit(4)]);
        assert_eq!(state.display(), "3.14");
        assert_eq!(state.first_operand(), Some(3.14));
    }

    #[test]
    fn second_decimal_point_is_a_no_op() {
        let before = press_all(&[Key::Digit(3), Key::Decimal, Key::Digit(1)]);
        let after = before.press(Key::Decimal);
        assert_eq!(before, after);
    }

    #[test]
    fn leading_decimal_point_builds_a_fraction() {
        let state = press_all(&[Key::Decimal, Key::Digit(5)]);
        assert_eq!(state.display(), ".5");
        assert_eq!(state.first_operand(), Some(0.5));
    }

    #[test]
    fn operator_clears_display_for_second_operand() {
        let state = press_all(&[Key::Digit(7), Key::Operator(Operator::Multiply)]);
        assert_eq!(state.display(), "");
        assert_eq!(state.first_operand(), Some(7.0));
        assert_eq!(state.pending_operator(), Some(Operator::Multiply));
    }

    #[test]
    fn repressed_operator_overwrites_without_stacking() {
        let state = press_all(&[
            Key::Digit(7),
            Key::Operator(Operator::Add),
            Key::Operator(Operator::Divide),
        ]);
        assert_eq!(state.pending_operator(), Some(Operator::Divide));
        assert_eq!(state.first_operand(), Some(7.0));
        assert_eq!(state.second_operand(), None);
    }

    #[test]
    fn equals_computes_and_resets_for_chaining() {
        let state = press_all(&[
            Key::Digit(1),
            Key::Operator(Operator::Add),
            Key::Digit(2),
            Key::Equals,
        ]);
        assert_eq!(state.display(), "3.0");
        assert_eq!(state.first_operand(), Some(3.0));
        assert_eq!(state.second_operand(), None);
        assert_eq!(state.pending_operator(), None);
    }

    #[test]
    fn subtraction_to_zero_renders_with_decimal() {
        let state = press_all(&[
            Key::Digit(5),
            Key::Operator(Operator::Subtract),
            Key::Digit(5),
            Key::Equals,
        ]);
        assert_eq!(state.display(), "0.0");
    }

    #[test]
    fn result_feeds_the_next_operation() {
        let state = press_all(&[
            Key::Digit(1),
            Key::Operator(Operator::Add),
            Key::Digit(2),
            Key::Equals,
            Key::Operator(Operator::Multiply),
            Key::Digit(4),
            Key::Equals,
        ]);
        assert_eq!(state.display(), "12.0");
        assert_eq!(state.first_operand(), Some(12.0));
    }

    #[test]
    fn equals_without_pending_operator_is_a_no_op() {
        let before = press_all(&[Key::Digit(4), Key::Digit(2)]);
        let after = before.press(Key::Equals);
        assert_eq!(before, after);
    }

    #[test]
    fn equals_without_second_operand_is_a_no_op() {
        let before = press_all(&[Key::Digit(4), Key::Operator(Operator::Add)]);
        let after = before.press(Key::Equals);
        assert_eq!(before, after);
    }

    #[test]
    fn repeated_equals_is_a_no_op() {
        let evaluated = press_all(&[
            Key::Digit(6),
            Key::Operator(Operator::Divide),
            Key::Digit(2),
            Key::Equals,
        ]);
        let again = evaluated.press(Key::Equals);
        assert_eq!(evaluated, again);
    }

    #[test]
    fn division_by_zero_renders_non_finite() {
        let state = press_all(&[
            Key::Digit(9),
            Key::Operator(Operator::Divide),
            Key::Digit(0),
            Key::Equals,
        ]);
        assert_eq!(state.display(), "inf");
        assert_eq!(state.first_operand(), Some(f64::INFINITY));
    }

    #[test]
    fn zero_over_zero_renders_nan() {
        let state = press_all(&[
            Key::Digit(0),
            Key::Operator(Operator::Divide),
            Key::Digit(0),
            Key::Equals,
        ]);
        assert_eq!(state.display(), "NaN");
    }

    #[test]
    fn nan_state_equals_itself() {
        let state = press_all(&[
            Key::Digit(0),
            Key::Operator(Operator::Divide),
            Key::Digit(0),
            Key::Equals,
        ]);
        assert!(state.first_operand().is_some_and(f64::is_nan));

        assert_eq!(state, state.clone());
        // Equals with nothing pending is still a no-op on a NaN state.
        assert_eq!(state, state.press(Key::Equals));
    }

    #[test]
    fn clear_resets_everything() {
        let state = press_all(&[
            Key::Digit(9),
            Key::Operator(Operator::Divide),
            Key::Digit(3),
            Key::Equals,
            Key::Clear,
        ]);
        assert_eq!(state, CalculatorState::new());
    }

    #[test]
    fn sign_flip_negates_the_display() {
        let state = press_all(&[Key::Digit(7), Key::SignFlip]);
        assert_eq!(state.display(), "-7.0");
    }

    #[test]
    fn sign_flip_leaves_operand_until_next_digit() {
        let flipped = press_all(&[Key::Digit(7), Key::SignFlip]);
        assert_eq!(flipped.first_operand(), Some(7.0));

        let typed = flipped.press(Key::Digit(5));
        assert_eq!(typed.display(), "-7.05");
        assert_eq!(typed.first_operand(), Some(-7.05));
    }

    #[test]
    fn sign_flip_on_empty_display_is_a_no_op() {
        let before = CalculatorState::new();
        let after = before.press(Key::SignFlip);
        assert_eq!(before, after);
    }

    #[test]
    fn percent_scales_the_display_down() {
        let state = press_all(&[Key::Digit(4), Key::Percent]);
        assert_eq!(state.display(), "0.04");
    }

    #[test]
    fn percent_on_empty_display_is_a_no_op() {
        let before = press_all(&[Key::Digit(4), Key::Operator(Operator::Add)]);
        let after = before.press(Key::Percent);
        assert_eq!(before, after);
    }

    #[test]
    fn out_of_range_digit_payload_is_absorbed() {
        let before = press_all(&[Key::Digit(1)]);
        let after = before.press(Key::Digit(12));
        assert_eq!(before, after);
    }

    #[test]
    fn press_does_not_mutate_the_receiver() {
        let state = press_all(&[Key::Digit(5)]);
        let snapshot = state.clone();
        let _ = state.press(Key::Digit(9));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn render_value_forces_decimal_on_whole_numbers() {
        assert_eq!(render_value(3.0), "3.0");
        assert_eq!(render_value(-7.0), "-7.0");
        assert_eq!(render_value(0.0), "0.0");
        assert_eq!(render_value(0.04), "0.04");
        assert_eq!(render_value(f64::INFINITY), "inf");
        assert_eq!(render_value(f64::NEG_INFINITY), "-inf");
        assert_eq!(render_value(f64::NAN), "NaN");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = press_all(&[Key::Digit(3), Key::Operator(Operator::Add), Key::Digit(4)]);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CalculatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn long_fraction_operand_survives_json_roundtrip() {
        // An operand whose shortest rendering needs 17 significant digits;
        // JSON float parsing must be bit-exact for the state to round-trip.
        let mut state = press_all(&[Key::Decimal]);
        for c in "010499999999999999".chars() {
            state = state.press(Key::Digit(c as u8 - b'0'));
        }
        assert!(state.first_operand().is_some());

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CalculatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
