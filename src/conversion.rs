//! Value conversion utilities for IGC parsing
//!
//! Contains the fixed-width field normalizer used for altitudes and extension
//! values, and the coordinate conversions for B-record latitude/longitude.

use crate::types::FieldValue;

/// Normalize a raw fixed-width slice into a classified value.
///
/// Blank or all-dash slices are absent. A trailing run of dashes is dropped
/// first, since some sensors pad missing low-order digits with `-`.
pub fn normalize_field(raw: &str) -> FieldValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.chars().all(|c| c == '-') {
        return FieldValue::Absent;
    }

    let value = trimmed.trim_end_matches(|c: char| c == '-' || c.is_whitespace());
    if value.is_empty() {
        return FieldValue::Absent;
    }

    if let Ok(integer) = value.parse::<i64>() {
        return FieldValue::Integer(integer);
    }
    if looks_numeric(value) {
        if let Ok(real) = value.parse::<f64>() {
            if real.is_finite() {
                return FieldValue::Real(real);
            }
        }
    }

    FieldValue::Literal(value.to_string())
}

/// Reject words such as `inf` or `NaN` that `f64::from_str` would accept
fn looks_numeric(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
}

/// Parse a slice made only of ASCII digits. Signs and blanks are rejected.
pub fn parse_digits(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Convert degrees, minutes and thousandths of a minute to decimal degrees
pub fn convert_dms_to_degrees(degrees: u32, minutes: u32, thousandths: u32) -> f64 {
    degrees as f64 + (minutes as f64 + thousandths as f64 / 1000.0) / 60.0
}

/// Decode a `DDMMmmm` latitude field plus hemisphere letter.
///
/// Only `S` flips the sign; any other hemisphere character reads as north.
pub fn convert_latitude(digits: &str, hemisphere: &str) -> Option<f64> {
    let degrees = parse_digits(digits.get(0..2)?)?;
    let minutes = parse_digits(digits.get(2..4)?)?;
    let thousandths = parse_digits(digits.get(4..7)?)?;
    let value = convert_dms_to_degrees(degrees, minutes, thousandths);
    Some(if hemisphere == "S" { -value } else { value })
}

/// Decode a `DDDMMmmm` longitude field plus hemisphere letter.
///
/// Only `W` flips the sign; any other hemisphere character reads as east.
pub fn convert_longitude(digits: &str, hemisphere: &str) -> Option<f64> {
    let degrees = parse_digits(digits.get(0..3)?)?;
    let minutes = parse_digits(digits.get(3..5)?)?;
    let thousandths = parse_digits(digits.get(5..8)?)?;
    let value = convert_dms_to_degrees(degrees, minutes, thousandths);
    Some(if hemisphere == "W" { -value } else { value })
}

/// Map a two-digit year onto the IGC century window (00-79 => 20xx, 80-99 => 19xx)
pub fn expand_two_digit_year(year: u32) -> i32 {
    if year < 80 {
        2000 + year as i32
    } else {
        1900 + year as i32
    }
}
