//! Resolved column definitions

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use super::Cell;
use crate::model::Align;
use crate::model::ColumnType;
use crate::model::RawValue;
use crate::model::SchemaEntry;
use crate::model::TypedValue;
use crate::pipeline;
use crate::pipeline::Formatter;
use crate::pipeline::Parser;
use crate::pipeline::SortKey;
use crate::pipeline::Sorter;

/// A schema entry with every behaviour resolved to a concrete function.
pub struct Header {
    column: String,
    label: String,
    column_type: ColumnType,
    sortable: bool,
    align: Option<Align>,
    multiline: bool,
    parser: Parser,
    formatter: Formatter,
    sorter: Sorter,
}

impl Header {
    /// Resolves an entry, filling missing overrides from the type's defaults.
    pub(crate) fn resolve(entry: &SchemaEntry) -> Self {
        let column_type = entry.column_type;
        Self {
            column: entry.column.clone(),
            label: entry.label.clone(),
            column_type,
            sortable: entry.sortable,
            align: entry.align,
            multiline: entry.multiline,
            parser: entry
                .parser
                .clone()
                .unwrap_or_else(|| pipeline::parser(column_type)),
            formatter: entry
                .formatter
                .clone()
                .unwrap_or_else(|| pipeline::formatter(column_type)),
            sorter: entry
                .sorter
                .clone()
                .unwrap_or_else(|| pipeline::sorter(column_type)),
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn align(&self) -> Option<Align> {
        self.align
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// Runs the column's parser.
    pub fn parse(&self, raw: &RawValue) -> TypedValue {
        (self.parser)(raw)
    }

    /// Runs the column's formatter.
    pub fn format(&self, value: &TypedValue, row_index: usize) -> String {
        (self.formatter)(value, row_index)
    }

    /// Runs the column's sorter.
    pub fn compare(&self, a: SortKey<'_>, b: SortKey<'_>, invert: bool) -> Ordering {
        (self.sorter)(a, b, invert, &self.column)
    }
}

impl fmt::Debug for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Header")
            .field("column", &self.column)
            .field("label", &self.label)
            .field("column_type", &self.column_type)
            .field("sortable", &self.sortable)
            .field("align", &self.align)
            .field("multiline", &self.multiline)
            .finish_non_exhaustive()
    }
}

/// One column of the derived view, in schema order.
#[derive(Debug, Clone)]
pub struct Column {
    header: Arc<Header>,
    cells: Vec<Arc<Cell>>,
}

impl Column {
    pub(crate) fn new(header: Arc<Header>, cells: Vec<Arc<Cell>>) -> Self {
        Self { header, cells }
    }

    pub fn header(&self) -> &Arc<Header> {
        &self.header
    }

    /// Shorthand for `header().column()`.
    pub fn column(&self) -> &str {
        self.header.column()
    }

    /// Cells of this column, in row order.
    pub fn cells(&self) -> &[Arc<Cell>] {
        &self.cells
    }
}
