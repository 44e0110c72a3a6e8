//! Numeric parsing and formatting for entries and the display surface.
//!
//! Entries are kept as literals (`"0."`, `"-12"`) so the user sees exactly
//! what was typed. They are parsed only when a value is needed, and computed
//! results are formatted back into literals with [`format_number`].
//! [`display_text`] decides what fits on the 12-character display.

use super::error::EvalError;

/// Maximum number of characters shown on the display surface.
pub const DISPLAY_WIDTH: usize = 12;

/// Decimal places kept when formatting a fractional result.
pub const MAX_DECIMAL_PLACES: i32 = 10;

/// Digits after the mantissa's decimal point in scientific notation.
const SCIENTIFIC_PRECISION: usize = 6;

/// Parses an entry literal into a finite `f64`.
///
/// # Errors
///
/// Returns [`EvalError::InvalidOperation`] if the literal is not a number or
/// is too large to be represented.
pub fn parse_operand(literal: &str) -> Result<f64, EvalError> {
    match literal.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(EvalError::InvalidOperation(format!(
            "operand {literal:?} is out of range"
        ))),
        Err(e) => Err(EvalError::InvalidOperation(format!(
            "operand {literal:?} is not a number: {e}"
        ))),
    }
}

/// Formats a computed value as an entry literal.
///
/// Integral values render without a decimal point. Fractional values are
/// rounded to [`MAX_DECIMAL_PLACES`] and rendered without trailing zeros.
/// Exponent notation is never used, and negative zero renders as `"0"`.
///
/// # Errors
///
/// Returns [`EvalError::InvalidOperation`] for NaN and infinities.
///
/// # Examples
///
/// ```
/// use zcalc::domain::number::format_number;
///
/// assert_eq!(format_number(2.0).unwrap(), "2");
/// assert_eq!(format_number(1.0 / 3.0).unwrap(), "0.3333333333");
/// assert_eq!(format_number(0.1 + 0.2).unwrap(), "0.3");
/// ```
pub fn format_number(value: f64) -> Result<String, EvalError> {
    if !value.is_finite() {
        return Err(EvalError::InvalidOperation(format!(
            "{value} cannot be displayed"
        )));
    }

    let rounded = if value.fract() == 0.0 {
        value
    } else {
        round_decimals(value)
    };

    if rounded == 0.0 {
        return Ok("0".to_string());
    }

    // f64's Display is the shortest round-tripping decimal and never uses an
    // exponent, so integral values come out without ".0".
    Ok(format!("{rounded}"))
}

fn round_decimals(value: f64) -> f64 {
    let scale = 10f64.powi(MAX_DECIMAL_PLACES);
    let scaled = value * scale;
    if scaled.is_finite() {
        scaled.round() / scale
    } else {
        value
    }
}

/// Renders an entry for the display surface.
///
/// Entries of up to [`DISPLAY_WIDTH`] characters are shown verbatim. Longer
/// entries are re-rendered in scientific notation with six mantissa decimals
/// (`1.234568e+20`); entries that do not parse as a finite number are cut to
/// their first [`DISPLAY_WIDTH`] characters. The entry itself is untouched.
///
/// # Examples
///
/// ```
/// use zcalc::domain::number::display_text;
///
/// assert_eq!(display_text("42"), "42");
/// assert_eq!(display_text("123456789012345"), "1.234568e+14");
/// ```
#[must_use]
pub fn display_text(entry: &str) -> String {
    if entry.chars().count() <= DISPLAY_WIDTH {
        return entry.to_string();
    }

    match entry.parse::<f64>() {
        Ok(value) if value.is_finite() => scientific(value),
        _ => entry.chars().take(DISPLAY_WIDTH).collect(),
    }
}

/// Scientific notation with a signed, at-least-two-digit exponent.
fn scientific(value: f64) -> String {
    let raw = format!("{:.*e}", SCIENTIFIC_PRECISION, value);
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return raw;
    };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_have_no_fraction() {
        assert_eq!(format_number(14.0).unwrap(), "14");
        assert_eq!(format_number(-3.0).unwrap(), "-3");
        assert_eq!(format_number(1e21).unwrap(), "1000000000000000000000");
    }

    #[test]
    fn negative_zero_is_plain_zero() {
        assert_eq!(format_number(-0.0).unwrap(), "0");
        assert_eq!(format_number(-1e-12).unwrap(), "0");
    }

    #[test]
    fn fractions_round_to_ten_places() {
        assert_eq!(format_number(2.0 / 3.0).unwrap(), "0.6666666667");
        assert_eq!(format_number(0.5).unwrap(), "0.5");
        assert_eq!(format_number(-0.07).unwrap(), "-0.07");
    }

    #[test]
    fn rounding_can_produce_an_integer() {
        assert_eq!(format_number(1.999_999_999_999_9).unwrap(), "2");
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(format_number(f64::INFINITY).is_err());
        assert!(format_number(f64::NAN).is_err());
    }

    #[test]
    fn parse_accepts_trailing_decimal_point() {
        assert_eq!(parse_operand("0.").unwrap(), 0.0);
        assert_eq!(parse_operand("-7").unwrap(), -7.0);
    }

    #[test]
    fn parse_rejects_garbage_and_overflow() {
        assert!(matches!(parse_operand("1.2.3"), Err(EvalError::InvalidOperation(_))));
        assert!(matches!(parse_operand("-"), Err(EvalError::InvalidOperation(_))));
        let huge = "9".repeat(400);
        assert!(matches!(parse_operand(&huge), Err(EvalError::InvalidOperation(_))));
    }

    #[test]
    fn display_keeps_short_entries() {
        assert_eq!(display_text("0."), "0.");
        assert_eq!(display_text("123456789012"), "123456789012");
    }

    #[test]
    fn display_uses_scientific_notation_for_long_entries() {
        assert_eq!(display_text("1000000000000000000000"), "1.000000e+21");
        assert_eq!(display_text("0.0000012345678"), "1.234568e-06");
        assert_eq!(display_text("-1234567890123"), "-1.234568e+12");
    }

    #[test]
    fn display_truncates_unparsable_entries() {
        let huge = "9".repeat(400);
        assert_eq!(display_text(&huge), "999999999999");
        assert_eq!(display_text("1.2.3.4.5.6.7.8"), "1.2.3.4.5.6.");
    }
}
