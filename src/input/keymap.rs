//! Key name to action mapping.
//!
//! Key names follow `KeyboardEvent.key` conventions: printable keys are
//! their character, named keys are `Enter`, `Escape`, `Backspace`, `Delete`.

use crate::calculator::{Action, Operator};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    /// Matches a braced named key (`{Enter}`) or any single character.
    static ref KEY_TOKEN: Regex = Regex::new(r"\{([A-Za-z]+)\}|(?s:.)").unwrap();
}

/// Map a single key name to the action it triggers.
///
/// Returns `None` for keys the calculator does not use.
pub fn action_for_key(key: &str) -> Option<Action> {
    let action = match key {
        "Enter" | "=" => Action::Equals,
        "Escape" | "Delete" => Action::Clear,
        "Backspace" => Action::Backspace,
        "%" | "p" | "P" => Action::Percent,
        "." | "," => Action::Decimal,
        "+" => Action::Operator(Operator::Add),
        "-" | "−" => Action::Operator(Operator::Subtract),
        "*" | "x" | "X" | "×" => Action::Operator(Operator::Multiply),
        "/" | "÷" => Action::Operator(Operator::Divide),
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(d), None) if d.is_ascii_digit() => Action::Digit(d),
                _ => return None,
            }
        }
    };

    Some(action)
}

/// Split a typed line into key names.
///
/// Every character is its own key and `{Name}` spells a named key.
/// Whitespace is dropped.
pub fn tokenize_keys(line: &str) -> Vec<&str> {
    KEY_TOKEN
        .captures_iter(line)
        .filter_map(|caps| {
            let token = caps.get(1).or_else(|| caps.get(0))?.as_str();
            (!token.trim().is_empty()).then_some(token)
        })
        .collect()
}

/// Translate a typed line into actions, skipping unknown keys.
pub fn actions_for_line(line: &str) -> Vec<Action> {
    tokenize_keys(line)
        .into_iter()
        .filter_map(|key| {
            let action = action_for_key(key);
            if action.is_none() {
                debug!(key, "Ignoring unmapped key");
            }
            action
        })
        .collect()
}
