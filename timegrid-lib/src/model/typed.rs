//! Parsed cell values

use std::fmt;

use chrono::DateTime;
use chrono::SecondsFormat;
use chrono::Utc;

/// A cell value after the column's parser ran.
///
/// Malformed input never fails: numbers degrade to `NaN` and dates to
/// `Date(None)`, the invalid-date marker.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    /// Truthiness of the raw value.
    Bool(bool),
    /// Stringified raw value.
    Text(String),
    /// Floating point, `NaN` for non-numeric input.
    Number(f64),
    /// A point in time, `None` when the raw value is not a date.
    Date(Option<DateTime<Utc>>),
}

impl TypedValue {
    /// Returns the boolean, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the text, if this is a `Text`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TypedValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the number, if this is a `Number`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            TypedValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the date slot, if this is a `Date`.
    pub fn as_date(&self) -> Option<Option<DateTime<Utc>>> {
        match self {
            TypedValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns `true` for the `NaN` and invalid-date sentinels.
    pub fn is_sentinel(&self) -> bool {
        match self {
            TypedValue::Number(n) => n.is_nan(),
            TypedValue::Date(d) => d.is_none(),
            _ => false,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Bool(b) => write!(f, "{b}"),
            TypedValue::Text(s) => f.write_str(s),
            TypedValue::Number(n) => f.write_str(&number_to_string(*n)),
            TypedValue::Date(Some(d)) => {
                f.write_str(&d.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            TypedValue::Date(None) => f.write_str("Invalid Date"),
        }
    }
}

/// Plain (ungrouped) textual form of a number.
pub(crate) fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(TypedValue::Bool(false).to_string(), "false");
        assert_eq!(TypedValue::Number(3.0).to_string(), "3");
        assert_eq!(TypedValue::Number(-0.0).to_string(), "0");
        assert_eq!(TypedValue::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(TypedValue::Date(None).to_string(), "Invalid Date");
    }

    #[test]
    fn test_sentinels() {
        assert!(TypedValue::Number(f64::NAN).is_sentinel());
        assert!(TypedValue::Date(None).is_sentinel());
        assert!(!TypedValue::Text(String::new()).is_sentinel());
    }
}
