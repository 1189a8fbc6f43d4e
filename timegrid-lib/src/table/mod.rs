//! Headless table engine
//!
//! A [`Table`] is an immutable snapshot of schema, raw rows, view options and
//! everything derived from them (headers, cells, columns, rows and the visible
//! page). Operations never modify a snapshot; they return a new one.
//! Unchanged parts are shared between snapshots, so cloning a `Table` or
//! turning a page is cheap.
//!
//! # Example
//!
//! ```
//! use timegrid_lib::Table;
//! use timegrid_lib::model::{ColumnType, Record, SchemaEntry};
//! use timegrid_lib::table::{Pagination, TableOptions};
//!
//! let schema = vec![SchemaEntry::new("task", "Task", ColumnType::String).with_sortable(true)];
//! let data = vec![
//!     Record::new().set("task", "b"),
//!     Record::new().set("task", "a"),
//! ];
//!
//! let table = Table::new(data, schema, TableOptions::new().with_pagination(Pagination::new(1)));
//! let sorted = table.sort_by("task", Some(true)).unwrap();
//!
//! assert_eq!(sorted.visible_rows()[0].cell("task").unwrap().value().formatted(), "a");
//! assert_eq!(sorted.page_count(), Some(2));
//! ```

mod header;
mod options;
mod page;
mod reorder;
mod row;
mod sort;

use std::collections::HashMap;
use std::ops::Range;
use std::sync::Arc;

pub use header::*;
pub use options::*;
pub use row::*;

use crate::model::Record;
use crate::model::SchemaEntry;

/// Structures derived from schema and data; independent of view options.
#[derive(Debug)]
struct Derived {
    headers: Vec<Arc<Header>>,
    header_lookup: HashMap<String, usize>,
    cells: Vec<Arc<Cell>>,
    columns: Vec<Column>,
    rows: Vec<Arc<Row>>,
}

impl Derived {
    fn build(data: &[Record], schema: &[SchemaEntry]) -> Self {
        let headers: Vec<Arc<Header>> = schema
            .iter()
            .map(|entry| Arc::new(Header::resolve(entry)))
            .collect();
        let header_lookup = headers
            .iter()
            .enumerate()
            .map(|(i, header)| (header.column().to_string(), i))
            .collect();

        let mut row_cells: Vec<Vec<Arc<Cell>>> = (0..data.len())
            .map(|_| Vec::with_capacity(headers.len()))
            .collect();
        let mut cells = Vec::with_capacity(headers.len() * data.len());
        let mut columns = Vec::with_capacity(headers.len());

        for header in &headers {
            let mut column_cells = Vec::with_capacity(data.len());
            for (index, record) in data.iter().enumerate() {
                if !record.contains(header.column()) {
                    log::trace!(
                        "[Table::derive] row {} has no field '{}', reading null",
                        index,
                        header.column()
                    );
                }
                let raw = record.value(header.column()).clone();
                let parsed = header.parse(&raw);
                let formatted = header.format(&parsed, index);
                let cell = Arc::new(Cell::new(
                    Arc::clone(header),
                    Value::new(raw, parsed, formatted),
                ));
                row_cells[index].push(Arc::clone(&cell));
                column_cells.push(Arc::clone(&cell));
                cells.push(cell);
            }
            columns.push(Column::new(Arc::clone(header), column_cells));
        }

        let rows = row_cells
            .into_iter()
            .enumerate()
            .map(|(index, cells)| Arc::new(Row::new(index, cells)))
            .collect();

        Self {
            headers,
            header_lookup,
            cells,
            columns,
            rows,
        }
    }
}

#[derive(Debug)]
struct TableInner {
    data: Arc<[Record]>,
    schema: Arc<[SchemaEntry]>,
    options: TableOptions,
    derived: Arc<Derived>,
    visible: Range<usize>,
}

/// An immutable table snapshot.
///
/// Cloning shares the snapshot. Use [`Table::same_snapshot`] to detect whether
/// an operation produced a new snapshot (and the view must re-render).
#[derive(Debug, Clone)]
pub struct Table {
    inner: Arc<TableInner>,
}

impl Table {
    /// Builds a snapshot from raw rows, a column schema and view options.
    ///
    /// Every (row, column) pair is parsed and formatted once here. When
    /// pagination is requested, `page_count` is computed from the row count.
    /// A sort option is recorded as-is; it does not reorder `data`.
    pub fn new(data: Vec<Record>, schema: Vec<SchemaEntry>, options: TableOptions) -> Self {
        Self::assemble(Arc::from(data), Arc::from(schema), options)
    }

    /// Re-derives everything from data and schema.
    fn assemble(data: Arc<[Record]>, schema: Arc<[SchemaEntry]>, options: TableOptions) -> Self {
        let derived = Arc::new(Derived::build(&data, &schema));
        log::debug!(
            "[Table::assemble] {} rows x {} columns",
            derived.rows.len(),
            derived.headers.len()
        );
        Self::finish(data, schema, options, derived)
    }

    /// New snapshot with different options over the same data and schema.
    fn with_options(&self, options: TableOptions) -> Self {
        Self::finish(
            Arc::clone(&self.inner.data),
            Arc::clone(&self.inner.schema),
            options,
            Arc::clone(&self.inner.derived),
        )
    }

    fn finish(
        data: Arc<[Record]>,
        schema: Arc<[SchemaEntry]>,
        mut options: TableOptions,
        derived: Arc<Derived>,
    ) -> Self {
        let row_count = derived.rows.len();
        let visible = match options.pagination.as_mut() {
            Some(pagination) => {
                pagination.page_count = page_count(row_count, pagination.per_page);
                page_range(row_count, pagination.current, pagination.per_page)
            }
            None => 0..row_count,
        };
        Self {
            inner: Arc::new(TableInner {
                data,
                schema,
                options,
                derived,
                visible,
            }),
        }
    }

    // -------------------------------------------------------------------------
    // Source
    // -------------------------------------------------------------------------

    /// Raw rows, in current order.
    pub fn data(&self) -> &[Record] {
        &self.inner.data
    }

    /// Column schema, in current order.
    pub fn schema(&self) -> &[SchemaEntry] {
        &self.inner.schema
    }

    pub fn options(&self) -> &TableOptions {
        &self.inner.options
    }

    // -------------------------------------------------------------------------
    // Derived structures
    // -------------------------------------------------------------------------

    /// Headers in schema order.
    pub fn headers(&self) -> &[Arc<Header>] {
        &self.inner.derived.headers
    }

    /// Header of the given column.
    pub fn header(&self, column: &str) -> Option<&Arc<Header>> {
        let derived = &self.inner.derived;
        derived
            .header_lookup
            .get(column)
            .and_then(|&i| derived.headers.get(i))
    }

    /// Every cell, column by column.
    pub fn cells(&self) -> &[Arc<Cell>] {
        &self.inner.derived.cells
    }

    pub fn columns(&self) -> &[Column] {
        &self.inner.derived.columns
    }

    pub fn rows(&self) -> &[Arc<Row>] {
        &self.inner.derived.rows
    }

    /// Rows on the current page, or all rows without pagination.
    pub fn visible_rows(&self) -> &[Arc<Row>] {
        &self.inner.derived.rows[self.inner.visible.clone()]
    }

    pub fn total_row_count(&self) -> usize {
        self.inner.derived.rows.len()
    }

    pub fn visible_row_count(&self) -> usize {
        self.inner.visible.len()
    }

    // -------------------------------------------------------------------------
    // Pagination / sort state
    // -------------------------------------------------------------------------

    pub fn current_page(&self) -> Option<i64> {
        self.inner.options.pagination.as_ref().map(|p| p.current)
    }

    pub fn page_count(&self) -> Option<usize> {
        self.inner.options.pagination.as_ref().map(|p| p.page_count)
    }

    pub fn per_page(&self) -> Option<usize> {
        self.inner.options.pagination.as_ref().map(|p| p.per_page)
    }

    pub fn current_sort_column(&self) -> Option<&str> {
        self.inner.options.sort.as_ref().map(|s| s.column.as_str())
    }

    /// `false` when no sort is active.
    pub fn is_current_sort_inverted(&self) -> bool {
        self.inner.options.sort.as_ref().is_some_and(|s| s.invert)
    }

    // -------------------------------------------------------------------------
    // Identity
    // -------------------------------------------------------------------------

    /// Returns `true` if both handles refer to the same snapshot.
    pub fn same_snapshot(&self, other: &Table) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Filtering is not implemented; this returns the same snapshot.
    pub fn filter_by(&self) -> Table {
        self.clone()
    }
}

fn page_count(row_count: usize, per_page: usize) -> usize {
    if per_page == 0 {
        0
    } else {
        row_count.div_ceil(per_page)
    }
}

/// Slice bounds of a 1-based page, with negative offsets counted from the end
/// and everything clamped into `0..len`. A page past the end is empty.
fn page_range(len: usize, current: i64, per_page: usize) -> Range<usize> {
    let per_page = i64::try_from(per_page).unwrap_or(i64::MAX);
    let start = current.saturating_sub(1).saturating_mul(per_page);
    let end = current.saturating_mul(per_page);

    let len = i64::try_from(len).unwrap_or(i64::MAX);
    let resolve = |i: i64| {
        if i < 0 {
            len.saturating_add(i).max(0)
        } else {
            i.min(len)
        }
    };
    let (start, end) = (resolve(start), resolve(end));
    let end = end.max(start);
    start as usize..end as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(25, 10), 3);
        assert_eq!(page_count(20, 10), 2);
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn test_page_range() {
        assert_eq!(page_range(25, 1, 10), 0..10);
        assert_eq!(page_range(25, 3, 10), 20..25);
        assert_eq!(page_range(25, 4, 10), 25..25);
        assert_eq!(page_range(25, 0, 10), 15..15);
        assert_eq!(page_range(25, -1, 10), 5..15);
        assert_eq!(page_range(0, 1, 10), 0..0);
    }
}
