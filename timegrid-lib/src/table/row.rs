//! Cells and rows

use std::collections::HashMap;
use std::sync::Arc;

use super::Header;
use crate::model::RawValue;
use crate::model::TypedValue;

/// Raw, parsed and formatted forms of one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    raw: RawValue,
    parsed: TypedValue,
    formatted: String,
}

impl Value {
    pub(crate) fn new(raw: RawValue, parsed: TypedValue, formatted: String) -> Self {
        Self {
            raw,
            parsed,
            formatted,
        }
    }

    pub fn raw(&self) -> &RawValue {
        &self.raw
    }

    pub fn parsed(&self) -> &TypedValue {
        &self.parsed
    }

    pub fn formatted(&self) -> &str {
        &self.formatted
    }
}

/// The intersection of a row and a column.
#[derive(Debug, Clone)]
pub struct Cell {
    header: Arc<Header>,
    value: Value,
}

impl Cell {
    pub(crate) fn new(header: Arc<Header>, value: Value) -> Self {
        Self { header, value }
    }

    pub fn header(&self) -> &Arc<Header> {
        &self.header
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Column key this cell belongs to.
    pub fn column(&self) -> &str {
        self.header.column()
    }
}

/// One row of the derived view.
///
/// Rows are positional: `index` is the row's place in the current data order
/// and changes whenever rows are sorted or moved.
#[derive(Debug, Clone)]
pub struct Row {
    index: usize,
    cells: Vec<Arc<Cell>>,
    lookup: HashMap<String, usize>,
}

impl Row {
    pub(crate) fn new(index: usize, cells: Vec<Arc<Cell>>) -> Self {
        let lookup = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (cell.column().to_string(), i))
            .collect();
        Self {
            index,
            cells,
            lookup,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Cells in column order.
    pub fn cells(&self) -> &[Arc<Cell>] {
        &self.cells
    }

    /// Cell of the given column.
    pub fn cell(&self, column: &str) -> Option<&Arc<Cell>> {
        self.lookup.get(column).and_then(|&i| self.cells.get(i))
    }
}
