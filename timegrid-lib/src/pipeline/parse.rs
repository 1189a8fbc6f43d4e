//! Default parsers

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::Utc;

use crate::model::RawValue;
use crate::model::number_to_string;

/// Naive timestamp layouts accepted besides RFC 3339 / RFC 2822, read as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Truthiness: `null`, `false`, `0`, `NaN` and `""` are false.
pub fn parse_bool(raw: &RawValue) -> bool {
    match raw {
        RawValue::Null => false,
        RawValue::Bool(b) => *b,
        RawValue::Number(n) => *n != 0.0 && !n.is_nan(),
        RawValue::String(s) => !s.is_empty(),
        RawValue::DateTime(_) | RawValue::Json(_) => true,
    }
}

/// Stringification. `null` becomes the empty string.
pub fn parse_string(raw: &RawValue) -> String {
    match raw {
        RawValue::Null => String::new(),
        RawValue::Bool(b) => b.to_string(),
        RawValue::Number(n) => number_to_string(*n),
        RawValue::String(s) => s.clone(),
        RawValue::DateTime(d) => d.to_rfc3339(),
        RawValue::Json(v) => v.to_string(),
    }
}

/// Floating point parse of the longest numeric prefix; `NaN` otherwise.
pub fn parse_number(raw: &RawValue) -> f64 {
    match raw {
        RawValue::Number(n) => *n,
        RawValue::String(s) => parse_float(s),
        _ => f64::NAN,
    }
}

/// Date construction. Numbers are epoch milliseconds; strings are RFC 3339,
/// RFC 2822, a naive timestamp or a bare `YYYY-MM-DD`. Anything else yields
/// `None`, the invalid-date marker.
pub fn parse_date(raw: &RawValue) -> Option<DateTime<Utc>> {
    match raw {
        RawValue::Null => DateTime::from_timestamp_millis(0),
        RawValue::Bool(b) => DateTime::from_timestamp_millis(i64::from(*b)),
        RawValue::Number(n) => from_epoch_millis(*n),
        RawValue::String(s) => parse_date_str(s),
        RawValue::DateTime(d) => Some(*d),
        RawValue::Json(_) => None,
    }
}

fn from_epoch_millis(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(millis.trunc() as i64)
}

fn parse_date_str(input: &str) -> Option<DateTime<Utc>> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(d) = DateTime::parse_from_rfc3339(s) {
        return Some(d.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(d) = NaiveDateTime::parse_from_str(s, format) {
            return Some(d.and_utc());
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0).map(|d| d.and_utc());
    }
    DateTime::parse_from_rfc2822(s)
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

/// Parses the longest prefix of `input` that forms a decimal number.
///
/// Leading whitespace is skipped, trailing garbage ignored: `"12.5h"` is
/// `12.5`, `"h12"` is `NaN`.
pub(crate) fn parse_float(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_parse_float_prefixes() {
        assert_eq!(parse_float("42"), 42.0);
        assert_eq!(parse_float("  -3.25kg"), -3.25);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("7."), 7.0);
        assert_eq!(parse_float("1e3x"), 1000.0);
        assert_eq!(parse_float("2e"), 2.0);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_float("abc").is_nan());
        assert!(parse_float("").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float(".").is_nan());
    }

    #[test]
    fn test_parse_number_non_numeric() {
        assert!(parse_number(&RawValue::Null).is_nan());
        assert!(parse_number(&RawValue::Bool(true)).is_nan());
        assert_eq!(parse_number(&RawValue::from("8h")), 8.0);
    }

    #[test]
    fn test_parse_bool_truthiness() {
        assert!(!parse_bool(&RawValue::Null));
        assert!(!parse_bool(&RawValue::from(0)));
        assert!(!parse_bool(&RawValue::Number(f64::NAN)));
        assert!(!parse_bool(&RawValue::from("")));
        assert!(parse_bool(&RawValue::from("false")));
        assert!(parse_bool(&RawValue::from(-1)));
    }

    #[test]
    fn test_parse_string() {
        assert_eq!(parse_string(&RawValue::Null), "");
        assert_eq!(parse_string(&RawValue::from(2.5)), "2.5");
        assert_eq!(parse_string(&RawValue::from(true)), "true");
    }

    #[test]
    fn test_parse_date() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(parse_date(&RawValue::from("2024-03-01T09:30:00Z")), Some(expected));
        assert_eq!(parse_date(&RawValue::from("2024-03-01T10:30:00+01:00")), Some(expected));
        assert_eq!(parse_date(&RawValue::from("2024-03-01 09:30:00")), Some(expected));
        assert_eq!(
            parse_date(&RawValue::from("2024-03-01")),
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(
            parse_date(&RawValue::from(expected.timestamp_millis())),
            Some(expected)
        );
        assert_eq!(parse_date(&RawValue::from("yesterday")), None);
        assert_eq!(parse_date(&RawValue::Number(f64::NAN)), None);
    }
}
