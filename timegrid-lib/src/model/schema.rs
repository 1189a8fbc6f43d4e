//! Column schema

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use super::RawValue;
use super::TypedValue;
use crate::pipeline::Formatter;
use crate::pipeline::Parser;
use crate::pipeline::SortKey;
use crate::pipeline::Sorter;

/// Declared type of a column, selecting its default pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Bool,
    String,
    Number,
    Date,
}

impl ColumnType {
    /// Returns the schema name of this type.
    pub fn name(&self) -> &'static str {
        match self {
            ColumnType::Bool => "bool",
            ColumnType::String => "string",
            ColumnType::Number => "number",
            ColumnType::Date => "date",
        }
    }
}

/// Horizontal alignment hint for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Definition of one column: identity, label, type and optional overrides.
///
/// The serialisable part (everything except the function overrides) can be
/// loaded from a config file.
///
/// # Example
///
/// ```
/// use timegrid_lib::model::{ColumnType, SchemaEntry, TypedValue};
///
/// let entry = SchemaEntry::new("duration", "Hours", ColumnType::Number)
///     .with_sortable(true)
///     .with_formatter(|value: &TypedValue, _row| format!("{value}h"));
/// ```
#[derive(Clone, Serialize, Deserialize)]
pub struct SchemaEntry {
    /// Unique column key, matched against record fields.
    pub column: String,
    /// Header text.
    pub label: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Whether the presentation layer offers sorting on this column.
    #[serde(default)]
    pub sortable: bool,
    /// Alignment hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    /// Whether cells may wrap.
    #[serde(default)]
    pub multiline: bool,
    /// Overrides the type's default formatter.
    #[serde(skip)]
    pub formatter: Option<Formatter>,
    /// Overrides the type's default parser.
    #[serde(skip)]
    pub parser: Option<Parser>,
    /// Overrides the type's default sorter.
    #[serde(skip)]
    pub sorter: Option<Sorter>,
}

impl SchemaEntry {
    /// Creates an entry with no overrides.
    pub fn new(column: impl Into<String>, label: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            column: column.into(),
            label: label.into(),
            column_type,
            sortable: false,
            align: None,
            multiline: false,
            formatter: None,
            parser: None,
            sorter: None,
        }
    }

    /// Sets whether the column is sortable.
    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Sets the alignment hint.
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// Sets whether cells may wrap.
    pub fn with_multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    /// Overrides the parser.
    pub fn with_parser<F>(mut self, parser: F) -> Self
    where
        F: Fn(&RawValue) -> TypedValue + Send + Sync + 'static,
    {
        self.parser = Some(Arc::new(parser));
        self
    }

    /// Overrides the formatter.
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&TypedValue, usize) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Overrides the sorter.
    pub fn with_sorter<F>(mut self, sorter: F) -> Self
    where
        F: for<'a> Fn(SortKey<'a>, SortKey<'a>, bool, &str) -> Ordering + Send + Sync + 'static,
    {
        self.sorter = Some(Arc::new(sorter));
        self
    }
}

impl fmt::Debug for SchemaEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaEntry")
            .field("column", &self.column)
            .field("label", &self.label)
            .field("column_type", &self.column_type)
            .field("sortable", &self.sortable)
            .field("align", &self.align)
            .field("multiline", &self.multiline)
            .field("formatter", &self.formatter.is_some())
            .field("parser", &self.parser.is_some())
            .field("sorter", &self.sorter.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_entry() {
        let entry: SchemaEntry = serde_json::from_str(
            r#"{"column": "billable", "label": "Billable", "type": "bool", "align": "center"}"#,
        )
        .unwrap();
        assert_eq!(entry.column, "billable");
        assert_eq!(entry.column_type, ColumnType::Bool);
        assert_eq!(entry.align, Some(Align::Center));
        assert!(!entry.sortable);
        assert!(entry.formatter.is_none());
    }

    #[test]
    fn test_unknown_type_rejected() {
        let result = serde_json::from_str::<SchemaEntry>(
            r#"{"column": "x", "label": "X", "type": "money"}"#,
        );
        assert!(result.is_err());
    }
}
