//! Binary arithmetic over finite floating point operands.
//!
//! Every failure is reported as a [`CalcError`] value. Nothing here panics,
//! so the engine can show the error text in place of a result.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while applying an operator.
///
/// The `Display` text is what ends up on the calculator display.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    /// The right operand of a division was zero.
    #[error("Error: Cannot divide by zero")]
    DivisionByZero,
    /// An operand was not a finite number, or the operator symbol is unknown.
    #[error("Error: Invalid input")]
    InvalidInput,
}

/// One of the four arithmetic operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Canonical ASCII symbol (`+`, `-`, `*`, `/`).
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Glyph used in the equation display (`×` and `÷` for multiply/divide).
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Parse an operator from its ASCII symbol or display glyph.
    pub fn from_symbol(symbol: &str) -> Result<Self, CalcError> {
        match symbol.trim() {
            "+" => Ok(Self::Add),
            "-" | "−" => Ok(Self::Subtract),
            "*" | "×" => Ok(Self::Multiply),
            "/" | "÷" => Ok(Self::Divide),
            _ => Err(CalcError::InvalidInput),
        }
    }

    /// Whether percent means "percentage of the first operand" for this operator.
    pub fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Subtract)
    }

    /// Apply the operator to two operands.
    ///
    /// Division by zero yields [`CalcError::DivisionByZero`]. Non-finite
    /// operands and results that overflow to infinity yield
    /// [`CalcError::InvalidInput`].
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        if !a.is_finite() || !b.is_finite() {
            return Err(CalcError::InvalidInput);
        }

        let value = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(CalcError::InvalidInput)
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Parse display text into a finite number.
pub fn parse_number(text: &str) -> Result<f64, CalcError> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::InvalidInput),
    }
}

/// Apply an operator given as a symbol to two textual operands.
pub fn apply_symbol(op: &str, a: &str, b: &str) -> Result<f64, CalcError> {
    let op = Operator::from_symbol(op)?;
    op.apply(parse_number(a)?, parse_number(b)?)
}
