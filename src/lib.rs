//! Keypad-driven arithmetic calculator.
//!
//! [`calculator::CalculatorEngine`] is the input state machine. The
//! [`input`] and [`ui`] modules adapt it to key names and text output, and
//! [`session::Session`] wires the three together.

pub mod calculator;
pub mod config;
pub mod input;
pub mod session;
pub mod ui;
