//! Raw table rows

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use super::RawValue;

static NULL: RawValue = RawValue::Null;

/// One raw row: a flat map from column key to unstructured value.
///
/// # Example
///
/// ```
/// use timegrid_lib::model::Record;
///
/// let record = Record::new()
///     .set("description", "Code review")
///     .set("duration", 0.75);
///
/// assert!(record.contains("duration"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, RawValue>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<RawValue>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&RawValue> {
        self.fields.get(field)
    }

    /// Returns the field value, or `Null` when the record lacks the field.
    pub fn value(&self, field: &str) -> &RawValue {
        self.fields.get(field).unwrap_or(&NULL)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, RawValue> {
        &self.fields
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_reads_as_null() {
        let record = Record::new().set("a", 1);
        assert_eq!(record.value("a"), &RawValue::Number(1.0));
        assert_eq!(record.value("b"), &RawValue::Null);
        assert!(record.get("b").is_none());
    }

    #[test]
    fn test_deserialize_flat_object() {
        let record: Record = serde_json::from_str(r#"{"name": "x", "hours": 2}"#).unwrap();
        assert_eq!(record.len(), 2);
        assert_eq!(record.value("name"), &RawValue::from("x"));
    }
}
