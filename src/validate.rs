//! Input validation for manually entered workout data.
//!
//! Dates must be real calendar days in `YYYY-MM-DD` form. Numeric fields are
//! lenient: they read the leading number of whatever was typed, the way a
//! form field does, and fall back to "nothing entered".

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Canonical date format for sessions.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a session date, rejecting anything that is not zero-padded
/// `YYYY-MM-DD` or not a real day.
///
/// # Errors
///
/// Returns `InvalidDate` with the original input.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let invalid = || Error::InvalidDate {
        value: input.to_string(),
    };

    let date = NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| invalid())?;
    if date.format(DATE_FORMAT).to_string() != input {
        return Err(invalid());
    }
    Ok(date)
}

/// Format a date the way sessions store it.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Rep count from free text: floored, never negative, 0 when unparseable.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn reps_from_input(input: &str) -> u32 {
    let value = parse_float_prefix(input).unwrap_or(0.0);
    // `as` saturates at the u32 bounds and maps NaN to 0
    value.floor().max(0.0) as u32
}

/// Weight from free text: `None` unless a positive number was entered.
#[must_use]
pub fn weight_from_input(input: &str) -> Option<f64> {
    parse_float_prefix(input).filter(|w| *w > 0.0 && w.is_finite())
}

/// Parse the longest numeric prefix of `input`.
///
/// Accepts an optional sign, digits with at most one decimal point, and an
/// optional exponent. Trailing text is ignored, so `"1.2.3"` reads as `1.2`
/// and `"12kg"` as `12`. Returns `None` when no digit leads the input.
#[must_use]
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let mut seen_digit = false;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut i = end + 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let digits_start = i;
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        if i > digits_start {
            end = i;
        }
    }

    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_accepts_calendar_days() {
        let date = parse_date("2024-01-15").unwrap();
        assert_eq!(format_date(date), "2024-01-15");
        assert!(parse_date("2024-02-29").is_ok());
    }

    #[test]
    fn test_parse_date_rejects_malformed() {
        for bad in ["2024-1-5", "2023-02-29", "15/01/2024", "", "2024-01-15 "] {
            let err = parse_date(bad).unwrap_err();
            assert!(matches!(err, Error::InvalidDate { .. }), "{bad}");
        }
    }

    #[test]
    fn test_reps_from_input() {
        assert_eq!(reps_from_input("12"), 12);
        assert_eq!(reps_from_input("12.9"), 12);
        assert_eq!(reps_from_input("-4"), 0);
        assert_eq!(reps_from_input("abc"), 0);
        assert_eq!(reps_from_input("8 reps"), 8);
        assert_eq!(reps_from_input("1e12"), u32::MAX);
    }

    #[test]
    fn test_weight_from_input() {
        assert_eq!(weight_from_input("12.5"), Some(12.5));
        assert_eq!(weight_from_input("0"), None);
        assert_eq!(weight_from_input("-5"), None);
        assert_eq!(weight_from_input(""), None);
        assert_eq!(weight_from_input("20kg"), Some(20.0));
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("1.2.3"), Some(1.2));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("7."), Some(7.0));
        assert_eq!(parse_float_prefix("2e3x"), Some(2000.0));
        assert_eq!(parse_float_prefix("2e"), Some(2.0));
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("-"), None);
        assert_eq!(parse_float_prefix("kg"), None);
    }
}
