//! Typed value pipeline
//!
//! Default parser, formatter and sorter for every [`ColumnType`]. A column
//! uses these unless its [`SchemaEntry`](crate::model::SchemaEntry) carries
//! an override.
//!
//! # Sort direction
//!
//! The baseline (`invert = false`) order is *descending* for strings, numbers
//! and dates, and `true` before `false` for booleans. `invert` flips it.

mod format;
mod parse;
mod sort;

use std::cmp::Ordering;
use std::sync::Arc;

pub use format::*;
pub use parse::*;
pub use sort::*;

use crate::model::ColumnType;
use crate::model::RawValue;
use crate::model::TypedValue;
use crate::table::Cell;
use crate::table::Row;

/// Converts a raw cell value into the column's typed value.
pub type Parser = Arc<dyn Fn(&RawValue) -> TypedValue + Send + Sync>;

/// Renders a typed value for display. The second argument is the row index.
pub type Formatter = Arc<dyn Fn(&TypedValue, usize) -> String + Send + Sync>;

/// Three-way comparator over two rows: `(a, b, invert, column)`.
pub type Sorter = Arc<dyn for<'a> Fn(SortKey<'a>, SortKey<'a>, bool, &str) -> Ordering + Send + Sync>;

/// One side of a sort comparison: the cell of the sorted column and its row.
#[derive(Debug, Clone, Copy)]
pub struct SortKey<'a> {
    pub cell: &'a Cell,
    pub row: &'a Row,
}

impl<'a> SortKey<'a> {
    /// Creates a sort key.
    pub fn new(cell: &'a Cell, row: &'a Row) -> Self {
        Self { cell, row }
    }

    /// The parsed value of the sorted cell.
    pub fn parsed(&self) -> &'a TypedValue {
        self.cell.value().parsed()
    }
}

/// Default parser for a column type.
pub fn parser(column_type: ColumnType) -> Parser {
    match column_type {
        ColumnType::Bool => Arc::new(|raw: &RawValue| TypedValue::Bool(parse_bool(raw))),
        ColumnType::String => Arc::new(|raw: &RawValue| TypedValue::Text(parse_string(raw))),
        ColumnType::Number => Arc::new(|raw: &RawValue| TypedValue::Number(parse_number(raw))),
        ColumnType::Date => Arc::new(|raw: &RawValue| TypedValue::Date(parse_date(raw))),
    }
}

/// Default formatter for a column type.
pub fn formatter(column_type: ColumnType) -> Formatter {
    match column_type {
        ColumnType::Bool => Arc::new(format_bool),
        ColumnType::String => Arc::new(format_string),
        ColumnType::Number => Arc::new(format_number),
        ColumnType::Date => Arc::new(format_date),
    }
}

/// Default sorter for a column type.
pub fn sorter(column_type: ColumnType) -> Sorter {
    match column_type {
        ColumnType::Bool => Arc::new(sort_bool),
        ColumnType::String => Arc::new(sort_string),
        ColumnType::Number => Arc::new(sort_number),
        ColumnType::Date => Arc::new(sort_date),
    }
}
