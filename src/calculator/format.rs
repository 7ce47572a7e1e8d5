//! Display formatting for computed values.

use super::arithmetic::CalcError;

/// Maximum number of characters the value display holds.
pub const MAX_DISPLAY_LEN: usize = 15;

/// Decimal places kept when cleaning up floating point noise.
const ROUND_DECIMALS: usize = 12;

/// Format a computation result for the display.
///
/// Errors render as their message. Numbers go through [`format_number`].
pub fn format_result(result: Result<f64, CalcError>) -> String {
    match result {
        Ok(value) => format_number(value),
        Err(err) => err.to_string(),
    }
}

/// Format a number so it fits the display.
///
/// The value is rounded to 12 decimal places first, so `0.1 + 0.2` shows as
/// `0.3`. Text longer than [`MAX_DISPLAY_LEN`] switches to scientific
/// notation with as many mantissa digits as still fit. Non-finite values
/// render as the invalid input error.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return CalcError::InvalidInput.to_string();
    }

    let rounded = round_decimals(value);
    let plain = rounded.to_string();

    if plain.chars().count() <= MAX_DISPLAY_LEN {
        return plain;
    }

    (0..MAX_DISPLAY_LEN)
        .rev()
        .map(|precision| to_scientific(rounded, precision))
        .find(|text| text.chars().count() <= MAX_DISPLAY_LEN)
        .unwrap_or_else(|| to_scientific(rounded, 0))
}

/// Round to [`ROUND_DECIMALS`] places, going through decimal text so large
/// magnitudes cannot overflow the scaling.
fn round_decimals(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let rounded = format!("{value:.prec$}", prec = ROUND_DECIMALS)
        .parse::<f64>()
        .unwrap_or(value);

    // -0 would otherwise print as "-0"
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Render `value` as `<mantissa>e<sign><exponent>` with trailing mantissa
/// zeros trimmed.
fn to_scientific(value: f64, precision: usize) -> String {
    let raw = format!("{value:.precision$e}");
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));

    let mantissa = if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantissa
    };

    match exponent.strip_prefix('-') {
        Some(digits) => format!("{mantissa}e-{digits}"),
        None => format!("{mantissa}e+{exponent}"),
    }
}
