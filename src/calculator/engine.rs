//! The calculator input state machine.
//!
//! [`CalculatorEngine`] turns individual keypresses into operands, an
//! operator and a result, and keeps the value and equation displays in sync.

use super::arithmetic::{CalcError, Operator, parse_number};
use super::equation::Equation;
use super::format::{MAX_DISPLAY_LEN, format_number};
use serde::Serialize;
use tracing::{debug, trace};

/// How the next digit or decimal is treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Entry {
    /// Digits extend the current display value.
    Typing,
    /// An operator was just pressed; the next digit replaces the display.
    AwaitingOperand,
    /// A result (or error) is shown; the next digit starts over.
    ShowingResult,
}

/// Observable state of the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// No operator entered yet.
    Idle,
    /// Operator pressed, second operand not started.
    OperatorPending,
    /// Typing the second operand.
    Accumulating,
    /// Showing the outcome of `equals` or an error.
    ResultShown,
}

/// What happened to a digit or decimal keypress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum InputOutcome {
    /// The input changed the state.
    Accepted,
    /// The input was invalid here (not a digit, second decimal point).
    Rejected,
    /// The display is at capacity; the adapter should flash.
    DisplayFull,
}

/// A single calculator operation, as produced by an input adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Digit(char),
    Decimal,
    Operator(Operator),
    Equals,
    Percent,
    Backspace,
    Clear,
}

/// Read-only projection handed to a renderer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DisplaySnapshot {
    /// The value display.
    pub value: String,
    /// The equation line.
    pub equation: String,
}

/// Calculator state and the operations that mutate it.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorEngine {
    display_value: String,
    first_operand: Option<f64>,
    current_operator: Option<Operator>,
    entry: Entry,
    equation: Equation,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self {
            display_value: "0".to_string(),
            first_operand: None,
            current_operator: None,
            entry: Entry::Typing,
            equation: Equation::default(),
        }
    }

    /// Dispatch an [`Action`] to the matching operation.
    ///
    /// Operations other than digit and decimal always report `Accepted`.
    pub fn handle(&mut self, action: Action) -> InputOutcome {
        match action {
            Action::Digit(d) => return self.digit(d),
            Action::Decimal => return self.decimal(),
            Action::Operator(op) => self.operator(op),
            Action::Equals => self.equals(),
            Action::Percent => self.percent(),
            Action::Backspace => self.backspace(),
            Action::Clear => self.clear(),
        }
        InputOutcome::Accepted
    }

    /// Enter a digit.
    pub fn digit(&mut self, d: char) -> InputOutcome {
        if !d.is_ascii_digit() {
            debug!(input = %d, "Ignoring non-digit input");
            return InputOutcome::Rejected;
        }

        match self.entry {
            Entry::ShowingResult => self.start_fresh(d.to_string()),
            Entry::AwaitingOperand => self.begin_second_operand(d.to_string()),
            Entry::Typing if self.shows_exponent() => self.replace_operand(d.to_string()),
            Entry::Typing => {
                if self.is_display_full() {
                    return InputOutcome::DisplayFull;
                }
                if self.display_value == "0" {
                    self.display_value.clear();
                }
                self.display_value.push(d);
                self.sync_active_segment();
            }
        }

        trace!(display = %self.display_value, "digit");
        InputOutcome::Accepted
    }

    /// Enter a decimal point.
    pub fn decimal(&mut self) -> InputOutcome {
        match self.entry {
            Entry::ShowingResult => self.start_fresh("0.".to_string()),
            Entry::AwaitingOperand => self.begin_second_operand("0.".to_string()),
            Entry::Typing if self.shows_exponent() => self.replace_operand("0.".to_string()),
            Entry::Typing => {
                if self.display_value.contains('.') {
                    return InputOutcome::Rejected;
                }
                if self.is_display_full() {
                    return InputOutcome::DisplayFull;
                }
                self.display_value.push('.');
                self.sync_active_segment();
            }
        }

        trace!(display = %self.display_value, "decimal");
        InputOutcome::Accepted
    }

    /// Press an operator key, computing any pending operation first.
    pub fn operator(&mut self, next: Operator) {
        match (self.entry, self.current_operator, self.first_operand) {
            (Entry::AwaitingOperand, Some(_), Some(_)) => {
                self.equation.substitute(next);
            }
            (Entry::Typing, Some(op), Some(first)) => {
                let result = parse_number(&self.display_value).and_then(|b| op.apply(first, b));
                match result {
                    Ok(value) => {
                        let (value, text) = settle(value);
                        self.first_operand = Some(value);
                        self.equation = Equation::pending(text.clone(), next);
                        self.display_value = text;
                    }
                    Err(err) => {
                        self.show_error(err);
                        return;
                    }
                }
            }
            _ => {
                let Ok(value) = parse_number(&self.display_value) else {
                    debug!(display = %self.display_value, "Ignoring operator on non-numeric display");
                    return;
                };
                self.first_operand = Some(value);
                self.equation = Equation::pending(self.display_value.clone(), next);
            }
        }

        self.current_operator = Some(next);
        self.entry = Entry::AwaitingOperand;
        trace!(operator = %next.symbol(), equation = %self.equation, "operator");
    }

    /// Complete the pending operation.
    pub fn equals(&mut self) {
        let (Entry::Typing, Some(op), Some(first)) =
            (self.entry, self.current_operator, self.first_operand)
        else {
            return;
        };

        match parse_number(&self.display_value).and_then(|b| op.apply(first, b)) {
            Ok(value) => {
                let (value, text) = settle(value);
                self.first_operand = Some(value);
                self.equation.conclude(text.clone());
                self.display_value = text;
            }
            Err(err) => {
                self.equation.conclude(err.to_string());
                self.show_error(err);
            }
        }

        self.current_operator = None;
        self.entry = Entry::ShowingResult;
        trace!(equation = %self.equation, "equals");
    }

    /// Remove the last typed character.
    pub fn backspace(&mut self) {
        if self.entry != Entry::Typing {
            return;
        }

        // trimming an exponent would change the magnitude, not the last digit
        if self.shows_exponent() {
            self.display_value.clear();
        } else {
            self.display_value.pop();
        }
        if self.display_value.is_empty() || self.display_value == "-" {
            self.display_value = "0".to_string();
        }
        self.sync_active_segment();
    }

    /// Convert the current value to a percentage.
    ///
    /// With a pending `+` or `-` the value becomes that percentage of the
    /// first operand (`200 + 10%` gives `20`); otherwise it is divided by 100.
    pub fn percent(&mut self) {
        if self.display_value.is_empty() || self.display_value == "0" {
            return;
        }
        let Ok(current) = parse_number(&self.display_value) else {
            return;
        };

        let value = match (self.current_operator, self.first_operand) {
            (Some(op), Some(first)) if op.is_additive() => first * current / 100.0,
            _ => current / 100.0,
        };
        if !value.is_finite() {
            self.show_error(CalcError::InvalidInput);
            return;
        }

        let (_, text) = settle(value);
        self.display_value = text;
        if self.entry == Entry::AwaitingOperand {
            self.entry = Entry::Typing;
        }
        self.sync_active_segment();
        trace!(display = %self.display_value, "percent");
    }

    /// Reset to the initial state.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Snapshot of the value and equation displays.
    pub fn current_display(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            value: self.display_value.clone(),
            equation: self.equation.to_string(),
        }
    }

    /// Whether another digit would overflow the display.
    pub fn is_display_full(&self) -> bool {
        self.entry == Entry::Typing && self.display_value.chars().count() >= MAX_DISPLAY_LEN
    }

    pub fn mode(&self) -> Mode {
        match self.entry {
            Entry::AwaitingOperand => Mode::OperatorPending,
            Entry::ShowingResult => Mode::ResultShown,
            Entry::Typing if self.current_operator.is_some() => Mode::Accumulating,
            Entry::Typing => Mode::Idle,
        }
    }

    pub fn display_value(&self) -> &str {
        &self.display_value
    }

    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    pub fn current_operator(&self) -> Option<Operator> {
        self.current_operator
    }

    pub fn equation(&self) -> &Equation {
        &self.equation
    }

    fn start_fresh(&mut self, text: String) {
        self.equation = Equation::operand(text.clone());
        self.display_value = text;
        self.first_operand = None;
        self.current_operator = None;
        self.entry = Entry::Typing;
    }

    fn begin_second_operand(&mut self, text: String) {
        self.equation.set_right(text.clone());
        self.display_value = text;
        self.entry = Entry::Typing;
    }

    /// Whether the display holds a value in scientific notation.
    fn shows_exponent(&self) -> bool {
        self.display_value.contains('e')
    }

    /// Start the operand being typed over with `text`.
    fn replace_operand(&mut self, text: String) {
        if self.current_operator.is_some() {
            self.begin_second_operand(text);
        } else {
            self.start_fresh(text);
        }
    }

    /// Mirror the display into the segment being typed.
    fn sync_active_segment(&mut self) {
        if self.current_operator.is_some() {
            self.equation.set_right(self.display_value.clone());
        } else {
            self.equation = Equation::operand(self.display_value.clone());
        }
    }

    fn show_error(&mut self, err: CalcError) {
        debug!(error = %err, "Calculation failed");
        self.display_value = err.to_string();
        self.first_operand = None;
        self.current_operator = None;
        self.entry = Entry::ShowingResult;
    }
}

/// Format a result and return the value as displayed alongside its text.
fn settle(value: f64) -> (f64, String) {
    let text = format_number(value);
    let shown = parse_number(&text).unwrap_or(value);
    (shown, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(engine: &mut CalculatorEngine, keys: &[Action]) {
        for &key in keys {
            let _ = engine.handle(key);
        }
    }

    fn digits(engine: &mut CalculatorEngine, text: &str) {
        for c in text.chars() {
            let _ = engine.digit(c);
        }
    }

    #[test]
    fn test_initial_state() {
        let engine = CalculatorEngine::new();
        assert_eq!(engine.display_value(), "0");
        assert_eq!(engine.mode(), Mode::Idle);
        assert_eq!(engine.first_operand(), None);
        assert_eq!(engine.current_operator(), None);
        assert_eq!(engine.current_display(), DisplaySnapshot {
            value: "0".to_string(),
            equation: String::new(),
        });
    }

    #[test]
    fn test_digits_concatenate() {
        let mut engine = CalculatorEngine::new();
        digits(&mut engine, "50");
        assert_eq!(engine.display_value(), "50");
        assert_eq!(engine.current_display().equation, "50");

        let mut engine = CalculatorEngine::new();
        digits(&mut engine, "0007");
        assert_eq!(engine.display_value(), "7");
    }

    #[test]
    fn test_non_digit_rejected() {
        let mut engine = CalculatorEngine::new();
        assert_eq!(engine.digit('a'), InputOutcome::Rejected);
        assert_eq!(engine, CalculatorEngine::new());
    }

    #[test]
    fn test_simple_addition() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, &[
            Action::Digit('1'),
            Action::Operator(Operator::Add),
            Action::Digit('2'),
            Action::Equals,
        ]);
        assert_eq!(engine.display_value(), "3");
        assert_eq!(engine.current_display().equation, "1 + 2 = 3");
        assert_eq!(engine.mode(), Mode::ResultShown);
        assert_eq!(engine.first_operand(), Some(3.0));
        assert_eq!(engine.current_operator(), None);
    }

    #[test]
    fn test_operator_substitution() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, &[
            Action::Digit('5'),
            Action::Operator(Operator::Add),
            Action::Operator(Operator::Multiply),
        ]);
        assert_eq!(engine.current_operator(), Some(Operator::Multiply));
        assert_eq!(engine.current_display().equation, "5 × ");
        assert_eq!(engine.first_operand(), Some(5.0));
        assert_eq!(engine.display_value(), "5");
        assert_eq!(engine.mode(), Mode::OperatorPending);
    }

    #[test]
    fn test_chained_operators_compute() {
        let mut engine = CalculatorEngine::new();
        digits(&mut engine, "12");
        engine.operator(Operator::Add);
        digits(&mut engine, "5");
        assert_eq!(engine.mode(), Mode::Accumulating);
        assert_eq!(engine.current_display().equation, "12 + 5");

        engine.operator(Operator::Divide);
        assert_eq!(engine.display_value(), "17");
        assert_eq!(engine.current_display().equation, "17 ÷ ");
        assert_eq!(engine.first_operand(), Some(17.0));

        digits(&mut engine, "2");
        engine.equals();
        assert_eq!(engine.display_value(), "8.5");
        assert_eq!(engine.current_display().equation, "17 ÷ 2 = 8.5");
    }

    #[test]
    fn test_float_cleanup() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, &[
            Action::Digit('0'),
            Action::Decimal,
            Action::Digit('1'),
            Action::Operator(Operator::Add),
            Action::Digit('0'),
            Action::Decimal,
            Action::Digit('2'),
            Action::Equals,
        ]);
        assert_eq!(engine.display_value(), "0.3");
        assert_eq!(engine.current_display().equation, "0.1 + 0.2 = 0.3");
    }

    #[test]
    fn test_division_by_zero() {
        let mut engine = CalculatorEngine::new();
        digits(&mut engine, "8");
        engine.operator(Operator::Divide);
        digits(&mut engine, "0");
        engine.equals();

        assert_eq!(engine.display_value(), "Error: Cannot divide by zero");
        assert_eq!(
            engine.current_display().equation,
            "8 ÷ 0 = Error: Cannot divide by zero"
        );
        assert_eq!(engine.mode(), Mode::ResultShown);
        assert_eq!(engine.current_operator(), None);

        // next digit starts fresh
        assert_eq!(engine.digit('4'), InputOutcome::Accepted);
        assert_eq!(engine.display_value(), "4");
        assert_eq!(engine.current_display().equation, "4");
        assert_eq!(engine.mode(), Mode::Idle);
    }

    #[test]
    fn test_division_by_zero_while_chaining() {
        let mut engine = CalculatorEngine::new();
        digits(&mut engine, "8");
        engine.operator(Operator::Divide);
        digits(&mut engine, "0");
        engine.operator(Operator::Add);

        assert_eq!(engine.display_value(), "Error: Cannot divide by zero");
        assert_eq!(engine.mode(), Mode::ResultShown);
        assert_eq!(engine.current_operator(), None);
    }

    #[test]
    fn test_operator_after_error_is_ignored() {
        let mut engine = CalculatorEngine::new();
        digits(&mut engine, "1");
        engine.operator(Operator::Divide);
        digits(&mut engine, "0");
        engine.equals();
        let before = engine.clone();

        engine.operator(Operator::Add);
        assert_eq!(engine, before);
    }

    #[test]
    fn test_equals_noop_cases() {
        let mut engine = CalculatorEngine::new();
        digits(&mut engine, "7");
        let before = engine.clone();
        engine.equals();
        assert_eq!(engine, before);

        engine.operator(Operator::Multiply);
        let before = engine.clone();
        engine.equals();
        assert_eq!(engine, before);
    }

    #[test]
    fn test_result_then_operator_continues() {
        let mut engine = CalculatorEngine::new();
        digits(&mut engine, "2");
        engine.operator(Operator::Multiply);
        digits(&mut engine, "3");
        engine.equals();

        engine.operator(Operator::Subtract);
        assert_eq!(engine.current_display().equation, "6 - ");
        assert_eq!(engine.first_operand(), Some(6.0));
        digits(&mut engine, "1");
        engine.equals();
        assert_eq!(engine.display_value(), "5");
        assert_eq!(engine.current_display().equation, "6 - 1 = 5");
    }

    #[test]
    fn test_result_then_digit_starts_fresh() {
        let mut engine = CalculatorEngine::new();
        digits(&mut engine, "2");
        engine.operator(Operator::Add);
        digits(&mut engine, "2");
        engine.equals();

        let _ = engine.digit('9');
        assert_eq!(engine.display_value(), "9");
        assert_eq!(engine.first_operand(), None);
        assert_eq!(engine.mode(), Mode::Idle);

        engine.equals();
        assert_eq!(engine.display_value(), "9");
    }

    #[test]
    fn test_decimal_handling() {
        let mut engine = CalculatorEngine::new();
        assert_eq!(engine.decimal(), InputOutcome::Accepted);
        assert_eq!(engine.display_value(), "0.");
        assert_eq!(engine.decimal(), InputOutcome::Rejected);
        digits(&mut engine, "5");
        assert_eq!(engine.display_value(), "0.5");

        engine.operator(Operator::Add);
        assert_eq!(engine.decimal(), InputOutcome::Accepted);
        assert_eq!(engine.display_value(), "0.");
        assert_eq!(engine.current_display().equation, "0.5 + 0.");
    }

    #[test]
    fn test_decimal_after_result() {
        let mut engine = CalculatorEngine::new();
        digits(&mut engine, "1");
        engine.operator(Operator::Add);
        digits(&mut engine, "1");
        engine.equals();

        let _ = engine.decimal();
        assert_eq!(engine.display_value(), "0.");
        assert_eq!(engine.current_display().equation, "0.");
        assert_eq!(engine.mode(), Mode::Idle);
    }

    #[test]
    fn test_display_full() {
        let mut engine = CalculatorEngine::new();
        digits(&mut engine, "123456789012345");
        assert!(engine.is_display_full());

        let before = engine.clone();
        assert_eq!(engine.digit('6'), InputOutcome::DisplayFull);
        assert_eq!(engine.decimal(), InputOutcome::DisplayFull);
        assert_eq!(engine, before);

        // an operator frees the display for the next operand
        engine.operator(Operator::Add);
        assert!(!engine.is_display_full());
        assert_eq!(engine.digit('1'), InputOutcome::Accepted);
    }

    #[test]
    fn test_overflowing_result_fits_display() {
        let mut engine = CalculatorEngine::new();
        digits(&mut engine, "999999999999999");
        engine.operator(Operator::Multiply);
        digits(&mut engine, "999999999999999");
        engine.equals();

        let value = engine.display_value();
        assert!(value.chars().count() <= MAX_DISPLAY_LEN, "{value}");
        assert!(value.contains("e+"), "{value}");
    }

    #[test]
    fn test_backspace() {
        let mut engine = CalculatorEngine::new();
        digits(&mut engine, "123");
        engine.backspace();
        assert_eq!(engine.display_value(), "12");
        assert_eq!(engine.current_display().equation, "12");

        engine.operator(Operator::Add);
        engine.backspace();
        assert_eq!(engine.display_value(), "12");

        digits(&mut engine, "4");
        engine.backspace();
        assert_eq!(engine.display_value(), "0");
        assert_eq!(engine.current_display().equation, "12 + 0");
    }

    #[test]
    fn test_backspace_single_char_resets_to_zero() {
        let mut engine = CalculatorEngine::new();
        digits(&mut engine, "7");
        engine.backspace();
        assert_eq!(engine.display_value(), "0");
        engine.backspace();
        assert_eq!(engine.display_value(), "0");
    }

    #[test]
    fn test_backspace_noop_after_result() {
        let mut engine = CalculatorEngine::new();
        digits(&mut engine, "12");
        engine.operator(Operator::Add);
        digits(&mut engine, "30");
        engine.equals();
        engine.backspace();
        assert_eq!(engine.display_value(), "42");
    }

    #[test]
    fn test_percent_noop_on_zero() {
        let mut engine = CalculatorEngine::new();
        engine.percent();
        assert_eq!(engine, CalculatorEngine::new());
    }

    #[test]
    fn test_percent_without_operator() {
        let mut engine = CalculatorEngine::new();
        digits(&mut engine, "50");
        engine.percent();
        assert_eq!(engine.display_value(), "0.5");
        assert_eq!(engine.current_display().equation, "0.5");
        assert_eq!(engine.mode(), Mode::Idle);
    }

    #[test]
    fn test_percent_of_first_operand() {
        let mut engine = CalculatorEngine::new();
        digits(&mut engine, "200");
        engine.operator(Operator::Add);
        digits(&mut engine, "10");
        engine.percent();
        assert_eq!(engine.display_value(), "20");
        assert_eq!(engine.current_display().equation, "200 + 20");
        assert_eq!(engine.current_operator(), Some(Operator::Add));

        engine.equals();
        assert_eq!(engine.display_value(), "220");
    }

    #[test]
    fn test_percent_with_multiply() {
        let mut engine = CalculatorEngine::new();
        digits(&mut engine, "200");
        engine.operator(Operator::Multiply);
        digits(&mut engine, "10");
        engine.percent();
        assert_eq!(engine.display_value(), "0.1");
        engine.equals();
        assert_eq!(engine.display_value(), "20");
    }

    #[test]
    fn test_percent_while_operator_pending() {
        let mut engine = CalculatorEngine::new();
        digits(&mut engine, "50");
        engine.operator(Operator::Subtract);
        engine.percent();
        assert_eq!(engine.display_value(), "25");
        assert_eq!(engine.mode(), Mode::Accumulating);
        assert_eq!(engine.current_display().equation, "50 - 25");

        engine.equals();
        assert_eq!(engine.display_value(), "25");
    }

    #[test]
    fn test_percent_overflow_shows_error() {
        let mut engine = CalculatorEngine::new();
        digits(&mut engine, "999999999999999");
        for _ in 0..19 {
            engine.operator(Operator::Multiply);
            digits(&mut engine, "999999999999999");
        }
        engine.operator(Operator::Add);
        assert!(engine.first_operand().is_some_and(|v| v > 1e299));

        digits(&mut engine, "999999999999999");
        engine.percent();
        assert_eq!(engine.display_value(), "Error: Invalid input");
        assert_eq!(engine.mode(), Mode::ResultShown);
        assert_eq!(engine.current_operator(), None);
        assert_eq!(engine.first_operand(), None);

        let _ = engine.digit('2');
        assert_eq!(engine.display_value(), "2");
        assert_eq!(engine.mode(), Mode::Idle);
    }

    #[test]
    fn test_digit_after_exponent_starts_new_operand() {
        let mut engine = CalculatorEngine::new();
        digits(&mut engine, "999999999999999");
        engine.operator(Operator::Add);
        digits(&mut engine, "999999999999999");
        engine.percent();
        assert!(engine.display_value().contains("e+"), "{}", engine.display_value());

        digits(&mut engine, "55");
        assert_eq!(engine.display_value(), "55");
        assert_eq!(engine.current_display().equation, "999999999999999 + 55");
        assert_eq!(engine.mode(), Mode::Accumulating);
        assert_eq!(engine.first_operand(), Some(999_999_999_999_999.0));
    }

    #[test]
    fn test_decimal_and_backspace_after_exponent() {
        let mut engine = CalculatorEngine::new();
        digits(&mut engine, "999999999999999");
        engine.percent();
        assert!(engine.display_value().contains("e+"), "{}", engine.display_value());
        assert_eq!(engine.decimal(), InputOutcome::Accepted);
        assert_eq!(engine.display_value(), "0.");
        assert_eq!(engine.current_display().equation, "0.");

        let mut engine = CalculatorEngine::new();
        digits(&mut engine, "999999999999999");
        engine.percent();
        engine.backspace();
        assert_eq!(engine.display_value(), "0");
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut engine = CalculatorEngine::new();
        digits(&mut engine, "9");
        engine.operator(Operator::Divide);
        digits(&mut engine, "3");

        engine.clear();
        let once = engine.clone();
        engine.clear();
        assert_eq!(engine, once);
        assert_eq!(engine, CalculatorEngine::new());
    }

    #[test]
    fn test_independent_instances() {
        let mut a = CalculatorEngine::new();
        let b = CalculatorEngine::new();
        digits(&mut a, "42");
        assert_eq!(a.display_value(), "42");
        assert_eq!(b.display_value(), "0");
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut engine = CalculatorEngine::new();
        digits(&mut engine, "3");
        engine.operator(Operator::Add);
        let json = serde_json::to_string(&engine.current_display()).unwrap();
        assert_eq!(json, r#"{"value":"3","equation":"3 + "}"#);
    }
}
