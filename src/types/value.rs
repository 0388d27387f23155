use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classified value of a fixed-width field after normalization
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldValue {
    Absent,
    Integer(i64),
    Real(f64),
    Literal(String),
}

impl FieldValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// Numeric view of the value; reals are rounded to the nearest whole number.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(value) => Some(*value),
            FieldValue::Real(value) if value.is_finite() => Some(value.round() as i64),
            _ => None,
        }
    }

    /// Canonical text form used in CSV output. Absent renders as an empty string.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Absent => Ok(()),
            FieldValue::Integer(value) => write!(f, "{value}"),
            FieldValue::Real(value) => {
                // Keep a decimal point so the text never re-reads as an integer
                let text = value.to_string();
                if text.contains(['.', 'e', 'E']) {
                    f.write_str(&text)
                } else {
                    write!(f, "{text}.0")
                }
            }
            FieldValue::Literal(text) => f.write_str(text),
        }
    }
}
