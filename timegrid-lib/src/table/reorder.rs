//! Row and column reordering

use std::sync::Arc;

use super::Row;
use super::Table;
use crate::drag::DropTarget;
use crate::error::TableError;

impl Table {
    // -------------------------------------------------------------------------
    // Columns
    // -------------------------------------------------------------------------

    /// Moves the schema entry at `from` to position `to`.
    ///
    /// Sort and pagination options are kept.
    pub fn move_column_by_index(&self, from: usize, to: usize) -> Result<Table, TableError> {
        let schema = move_item(self.schema(), from, to, "columns")?;
        log::debug!("[Table::move_column_by_index] {} -> {}", from, to);
        Ok(Table::assemble(
            Arc::clone(&self.inner.data),
            Arc::from(schema),
            self.inner.options.clone(),
        ))
    }

    /// Moves `column` to directly after `after`.
    pub fn move_column_after(&self, column: &str, after: &str) -> Result<Table, TableError> {
        let from = self.column_position(column)?;
        let anchor = self.column_position(after)?;
        self.move_column_by_index(from, relative_index(from, anchor, true))
    }

    /// Moves `column` to directly before `before`.
    pub fn move_column_before(&self, column: &str, before: &str) -> Result<Table, TableError> {
        let from = self.column_position(column)?;
        let anchor = self.column_position(before)?;
        self.move_column_by_index(from, relative_index(from, anchor, false))
    }

    /// Applies a column drop target: after its `before` neighbour if there is
    /// one, else before its `after` neighbour, else unchanged.
    pub fn drop_column(
        &self,
        column: &str,
        target: &DropTarget<String>,
    ) -> Result<Table, TableError> {
        match (&target.before, &target.after) {
            (Some(before), _) => self.move_column_after(column, before),
            (None, Some(after)) => self.move_column_before(column, after),
            (None, None) => Ok(self.clone()),
        }
    }

    fn column_position(&self, column: &str) -> Result<usize, TableError> {
        self.inner
            .derived
            .header_lookup
            .get(column)
            .copied()
            .ok_or_else(|| TableError::unknown_column(column))
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Moves the raw row at `from` to position `to`.
    ///
    /// The result has no active sort: a hand-placed row would otherwise be
    /// out of sort order.
    pub fn move_row_by_index(&self, from: usize, to: usize) -> Result<Table, TableError> {
        let data = move_item(self.data(), from, to, "rows")?;
        log::debug!("[Table::move_row_by_index] {} -> {}", from, to);

        let mut options = self.inner.options.clone();
        options.sort = None;
        Ok(Table::assemble(
            Arc::from(data),
            Arc::clone(&self.inner.schema),
            options,
        ))
    }

    /// Moves `row` to directly after `after`. Both must be rows of this
    /// snapshot.
    pub fn move_row_after(&self, row: &Row, after: &Row) -> Result<Table, TableError> {
        let from = self.row_position(row)?;
        let anchor = self.row_position(after)?;
        self.move_row_by_index(from, relative_index(from, anchor, true))
    }

    /// Moves `row` to directly before `before`. Both must be rows of this
    /// snapshot.
    pub fn move_row_before(&self, row: &Row, before: &Row) -> Result<Table, TableError> {
        let from = self.row_position(row)?;
        let anchor = self.row_position(before)?;
        self.move_row_by_index(from, relative_index(from, anchor, false))
    }

    /// Applies a row drop target whose keys are row indices of this snapshot.
    pub fn drop_row(&self, index: usize, target: &DropTarget<usize>) -> Result<Table, TableError> {
        let len = self.total_row_count();
        let check = |i: usize| {
            if i < len {
                Ok(i)
            } else {
                Err(TableError::index_out_of_range("rows", i, len))
            }
        };
        let from = check(index)?;
        match (target.before, target.after) {
            (Some(before), _) => {
                let anchor = check(before)?;
                self.move_row_by_index(from, relative_index(from, anchor, true))
            }
            (None, Some(after)) => {
                let anchor = check(after)?;
                self.move_row_by_index(from, relative_index(from, anchor, false))
            }
            (None, None) => Ok(self.clone()),
        }
    }

    /// Position of a row by identity; rows of other snapshots are rejected.
    fn row_position(&self, row: &Row) -> Result<usize, TableError> {
        self.rows()
            .iter()
            .position(|candidate| std::ptr::eq(candidate.as_ref(), row))
            .ok_or(TableError::UnknownRow)
    }
}

/// Destination index for placing `from` next to `anchor`. Removing the moved
/// item first shifts everything after it left by one.
fn relative_index(from: usize, anchor: usize, after: bool) -> usize {
    let to = if after { anchor + 1 } else { anchor };
    if from < to { to - 1 } else { to }
}

fn move_item<T: Clone>(
    items: &[T],
    from: usize,
    to: usize,
    kind: &'static str,
) -> Result<Vec<T>, TableError> {
    let len = items.len();
    if from >= len {
        return Err(TableError::index_out_of_range(kind, from, len));
    }
    if to >= len {
        return Err(TableError::index_out_of_range(kind, to, len));
    }
    let mut moved = items.to_vec();
    let item = moved.remove(from);
    moved.insert(to, item);
    Ok(moved)
}
