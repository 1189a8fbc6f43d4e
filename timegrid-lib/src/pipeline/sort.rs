//! Default sorters
//!
//! Each `compare_*` returns the baseline order for `invert = false` and the
//! reverse for `invert = true`. The baseline compares the *second* operand
//! against the first, so strings, numbers and dates come out descending.

use std::borrow::Cow;
use std::cmp::Ordering;

use super::SortKey;
use crate::model::TypedValue;

/// `true` before `false`; equal booleans are always `Equal`.
pub fn compare_bool(a: &TypedValue, b: &TypedValue, invert: bool) -> Ordering {
    let (a, b) = (a.as_bool().unwrap_or(false), b.as_bool().unwrap_or(false));
    let baseline = match (a, b) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    };
    directed(baseline, invert)
}

/// Descending lexicographic order.
pub fn compare_string(a: &TypedValue, b: &TypedValue, invert: bool) -> Ordering {
    directed(text_of(b).cmp(&text_of(a)), invert)
}

/// Descending numeric order. `NaN` uses IEEE total ordering so the sort
/// stays well defined.
pub fn compare_number(a: &TypedValue, b: &TypedValue, invert: bool) -> Ordering {
    let (a, b) = (
        a.as_number().unwrap_or(f64::NAN),
        b.as_number().unwrap_or(f64::NAN),
    );
    directed(b.total_cmp(&a), invert)
}

/// Descending chronological order; invalid dates rank below every valid one.
pub fn compare_date(a: &TypedValue, b: &TypedValue, invert: bool) -> Ordering {
    let (a, b) = (a.as_date().flatten(), b.as_date().flatten());
    directed(b.cmp(&a), invert)
}

pub(crate) fn sort_bool(a: SortKey<'_>, b: SortKey<'_>, invert: bool, _column: &str) -> Ordering {
    compare_bool(a.parsed(), b.parsed(), invert)
}

pub(crate) fn sort_string(a: SortKey<'_>, b: SortKey<'_>, invert: bool, _column: &str) -> Ordering {
    compare_string(a.parsed(), b.parsed(), invert)
}

pub(crate) fn sort_number(a: SortKey<'_>, b: SortKey<'_>, invert: bool, _column: &str) -> Ordering {
    compare_number(a.parsed(), b.parsed(), invert)
}

pub(crate) fn sort_date(a: SortKey<'_>, b: SortKey<'_>, invert: bool, _column: &str) -> Ordering {
    compare_date(a.parsed(), b.parsed(), invert)
}

fn directed(baseline: Ordering, invert: bool) -> Ordering {
    if invert { baseline.reverse() } else { baseline }
}

fn text_of(value: &TypedValue) -> Cow<'_, str> {
    match value.as_text() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> TypedValue {
        TypedValue::Text(s.to_string())
    }

    #[test]
    fn test_string_baseline_is_descending() {
        assert_eq!(compare_string(&text("a"), &text("b"), false), Ordering::Greater);
        assert_eq!(compare_string(&text("a"), &text("b"), true), Ordering::Less);
        assert_eq!(compare_string(&text("a"), &text("a"), true), Ordering::Equal);
    }

    #[test]
    fn test_number_baseline_is_descending() {
        let (one, two) = (TypedValue::Number(1.0), TypedValue::Number(2.0));
        assert_eq!(compare_number(&one, &two, false), Ordering::Greater);
        assert_eq!(compare_number(&one, &two, true), Ordering::Less);
    }

    #[test]
    fn test_number_nan_is_total() {
        let nan = TypedValue::Number(f64::NAN);
        let one = TypedValue::Number(1.0);
        assert_eq!(compare_number(&nan, &nan, false), Ordering::Equal);
        assert_ne!(compare_number(&nan, &one, false), Ordering::Equal);
    }

    #[test]
    fn test_bool_true_first() {
        let (t, f) = (TypedValue::Bool(true), TypedValue::Bool(false));
        assert_eq!(compare_bool(&t, &f, false), Ordering::Less);
        assert_eq!(compare_bool(&t, &f, true), Ordering::Greater);
        assert_eq!(compare_bool(&t, &t, false), Ordering::Equal);
        assert_eq!(compare_bool(&f, &f, true), Ordering::Equal);
    }

    #[test]
    fn test_invalid_dates_sort_last_in_baseline() {
        let valid = TypedValue::Date(chrono::DateTime::from_timestamp_millis(0));
        let invalid = TypedValue::Date(None);
        assert_eq!(compare_date(&valid, &invalid, false), Ordering::Less);
    }
}
