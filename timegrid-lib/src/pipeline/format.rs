//! Default formatters

use chrono::SecondsFormat;

use crate::model::TypedValue;

/// Maximum fraction digits shown by the number formatter.
const MAX_FRACTION_DIGITS: usize = 3;

/// `"yes"` / `"no"`.
pub fn format_bool(value: &TypedValue, _row: usize) -> String {
    match value {
        TypedValue::Bool(true) => "yes".to_string(),
        TypedValue::Bool(false) => "no".to_string(),
        other => other.to_string(),
    }
}

/// Identity.
pub fn format_string(value: &TypedValue, _row: usize) -> String {
    value.to_string()
}

/// Thousands-grouped, at most three fraction digits: `1234.5` is `"1,234.5"`.
pub fn format_number(value: &TypedValue, _row: usize) -> String {
    match value {
        TypedValue::Number(n) => group_thousands(*n),
        other => other.to_string(),
    }
}

/// ISO 8601 in UTC with milliseconds, or `"Invalid Date"`.
pub fn format_date(value: &TypedValue, _row: usize) -> String {
    match value {
        TypedValue::Date(Some(d)) => d.to_rfc3339_opts(SecondsFormat::Millis, true),
        other => other.to_string(),
    }
}

fn group_thousands(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, n.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 1);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    let sign = if n < 0.0 && !is_zero { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_format_bool() {
        assert_eq!(format_bool(&TypedValue::Bool(true), 0), "yes");
        assert_eq!(format_bool(&TypedValue::Bool(false), 0), "no");
    }

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(1234567.891), "1,234,567.891");
        assert_eq!(group_thousands(-1234.5), "-1,234.5");
        assert_eq!(group_thousands(0.12345), "0.123");
        assert_eq!(group_thousands(-0.0001), "0");
        assert_eq!(group_thousands(f64::NAN), "NaN");
        assert_eq!(group_thousands(f64::INFINITY), "∞");
    }

    #[test]
    fn test_format_date() {
        let d = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_date(&TypedValue::Date(Some(d)), 0), "2024-01-02T03:04:05.000Z");
        assert_eq!(format_date(&TypedValue::Date(None), 0), "Invalid Date");
    }

    #[test]
    fn test_format_mismatched_variant_falls_back_to_display() {
        assert_eq!(format_number(&TypedValue::Text("n/a".to_string()), 0), "n/a");
    }
}
