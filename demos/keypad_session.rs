//! Keypad Session
//!
//! This example stands in for the presentation layer: it feeds button
//! labels into the engine exactly as a button grid would and prints the
//! display string after every press.
//!
//! Key concepts:
//! - The engine speaks face labels via `Key::from_str`
//! - Every press is a synchronous, total state transition
//! - Malformed sequences are absorbed silently, never errors
//!
//! Run with: cargo run --example keypad_session

use tenkey::{CalculatorEngine, Key};

fn run_sequence(title: &str, labels: &[&str]) {
    println!("--- {title} ---");
    let mut engine = CalculatorEngine::new();
    for label in labels {
        let key: Key = label.parse().expect("label printed on the keypad");
        engine.press(key);
        println!("  [{label:>3}] display = {:?}", engine.display());
    }
    if let Some(duration) = engine.history().duration() {
        let presses = engine.history().presses().len();
        println!("  {presses} presses in {duration:?}\n");
    }
}

fn main() {
    println!("=== Keypad Session Example ===\n");

    run_sequence("addition", &["1", "+", "2", "="]);
    run_sequence("chained result", &["5", "-", "5", "=", "+", "8", "="]);
    run_sequence("percent", &["4", "%"]);
    run_sequence("sign flip", &["7", "+/-"]);
    run_sequence("division by zero", &["9", "÷", "0", "="]);
    run_sequence("all clear", &["3", "x", "3", "=", "AC"]);

    println!("=== Example Complete ===");
}
