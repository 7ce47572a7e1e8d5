//! Calculator core.
//!
//! This module provides:
//! - Arithmetic over finite operands with typed errors
//! - Display formatting with overflow handling
//! - The keypress state machine that drives the displays
//! - Copying results to the clipboard

mod arithmetic;
mod clipboard;
mod engine;
mod equation;
mod format;

pub use arithmetic::{CalcError, Operator, apply_symbol, parse_number};
pub use clipboard::copy_to_clipboard;
pub use engine::{Action, CalculatorEngine, DisplaySnapshot, InputOutcome, Mode};
pub use equation::Equation;
pub use format::{MAX_DISPLAY_LEN, format_number, format_result};
