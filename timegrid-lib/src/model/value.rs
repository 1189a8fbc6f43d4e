//! Raw cell values as delivered by time-entry adapters

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// An unstructured cell value, before the column's parser has seen it.
///
/// Rows arrive as flat key/value records; each value is whatever the adapter
/// produced. The column type decides how it is interpreted later, so nothing
/// here is validated.
///
/// # Example
///
/// ```
/// use timegrid_lib::model::RawValue;
///
/// let hours = RawValue::from(1.5);
/// let name = RawValue::from("Standup");
/// let empty = RawValue::Null;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Any JSON number.
    Number(f64),
    /// String value.
    String(String),
    /// Date and time, only produced programmatically.
    DateTime(DateTime<Utc>),
    /// Arrays and objects.
    Json(serde_json::Value),
}

impl RawValue {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Bool(_) => "bool",
            RawValue::Number(_) => "number",
            RawValue::String(_) => "string",
            RawValue::DateTime(_) => "datetime",
            RawValue::Json(_) => "json",
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for RawValue {
    fn from(v: bool) -> Self {
        RawValue::Bool(v)
    }
}

impl From<i32> for RawValue {
    fn from(v: i32) -> Self {
        RawValue::Number(f64::from(v))
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        RawValue::Number(v as f64)
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        RawValue::Number(v)
    }
}

impl From<String> for RawValue {
    fn from(v: String) -> Self {
        RawValue::String(v)
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        RawValue::String(v.to_string())
    }
}

impl From<DateTime<Utc>> for RawValue {
    fn from(v: DateTime<Utc>) -> Self {
        RawValue::DateTime(v)
    }
}

impl From<serde_json::Value> for RawValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => RawValue::Null,
            serde_json::Value::Bool(b) => RawValue::Bool(b),
            serde_json::Value::Number(n) => RawValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => RawValue::String(s),
            other => RawValue::Json(other),
        }
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => RawValue::Null,
        }
    }
}

impl Default for RawValue {
    fn default() -> Self {
        RawValue::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_untagged() {
        let values: Vec<RawValue> =
            serde_json::from_str(r#"[null, true, 3, 2.5, "x", [1], {"a": 1}]"#).unwrap();
        assert_eq!(values[0], RawValue::Null);
        assert_eq!(values[1], RawValue::Bool(true));
        assert_eq!(values[2], RawValue::Number(3.0));
        assert_eq!(values[3], RawValue::Number(2.5));
        assert_eq!(values[4], RawValue::String("x".to_string()));
        assert_eq!(values[5].type_name(), "json");
        assert_eq!(values[6].type_name(), "json");
    }

    #[test]
    fn test_from_json_value() {
        assert_eq!(RawValue::from(serde_json::json!(null)), RawValue::Null);
        assert_eq!(RawValue::from(serde_json::json!(7)), RawValue::Number(7.0));
        assert_eq!(RawValue::from(None::<bool>), RawValue::Null);
    }
}
