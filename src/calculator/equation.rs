//! Structured model of the equation line.

use super::arithmetic::Operator;
use std::fmt;

/// The expression built so far, e.g. `12 + 5 = 17`.
///
/// Each segment is stored separately and the printable line is derived via
/// `Display`, so the engine never has to split rendered text apart again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Equation {
    left: String,
    operator: Option<Operator>,
    right: Option<String>,
    outcome: Option<String>,
}

impl Equation {
    /// An equation holding only a left operand.
    pub fn operand(text: impl Into<String>) -> Self {
        Self {
            left: text.into(),
            ..Default::default()
        }
    }

    /// `<left> <op> ` waiting for its right operand.
    pub fn pending(left: impl Into<String>, operator: Operator) -> Self {
        Self {
            left: left.into(),
            operator: Some(operator),
            ..Default::default()
        }
    }

    /// Swap the operator without touching the operands.
    pub fn substitute(&mut self, operator: Operator) {
        self.operator = Some(operator);
    }

    /// Replace the right operand text.
    pub fn set_right(&mut self, text: impl Into<String>) {
        self.right = Some(text.into());
    }

    /// Append `= <outcome>` to the equation.
    pub fn conclude(&mut self, outcome: impl Into<String>) {
        self.outcome = Some(outcome.into());
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn right(&self) -> Option<&str> {
        self.right.as_deref()
    }

    /// Whether the second operand segment exists yet.
    pub fn has_right_operand(&self) -> bool {
        self.right.is_some()
    }

    pub fn outcome(&self) -> Option<&str> {
        self.outcome.as_deref()
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.left)?;

        let Some(operator) = self.operator else {
            return Ok(());
        };
        write!(f, " {} ", operator.glyph())?;

        if let Some(right) = &self.right {
            f.write_str(right)?;
            if let Some(outcome) = &self.outcome {
                write!(f, " = {outcome}")?;
            }
        }

        Ok(())
    }
}
