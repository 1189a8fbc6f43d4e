//! Pagination

use super::DEFAULT_PER_PAGE;
use super::Pagination;
use super::Table;

impl Table {
    /// Shows `page` (1-based) and returns the new snapshot.
    ///
    /// The page size carries over, or is [`DEFAULT_PER_PAGE`] if the table was
    /// not paginated. Pages are not clamped: past the last page the visible
    /// rows are empty, and pages at or below zero count back from the end.
    /// Rows and cells are shared with `self`.
    pub fn turn_page(&self, page: i64) -> Table {
        let per_page = self.per_page().unwrap_or(DEFAULT_PER_PAGE);
        log::debug!("[Table::turn_page] page={} per_page={}", page, per_page);

        let mut options = self.inner.options.clone();
        options.pagination = Some(Pagination::new(per_page).with_current(page));
        self.with_options(options)
    }

    /// Changes the page size, keeping the current page number.
    pub fn with_per_page(&self, per_page: usize) -> Table {
        let current = self.current_page().unwrap_or(1);
        let mut options = self.inner.options.clone();
        options.pagination = Some(Pagination::new(per_page).with_current(current));
        self.with_options(options)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::model::ColumnType;
    use crate::model::Record;
    use crate::model::SchemaEntry;
    use crate::table::Table;
    use crate::table::TableOptions;

    fn table(rows: usize) -> Table {
        let schema = vec![SchemaEntry::new("n", "N", ColumnType::Number)];
        let data = (0..rows).map(|i| Record::new().set("n", i as i64)).collect();
        Table::new(data, schema, TableOptions::new())
    }

    #[test]
    fn test_turn_page_defaults_per_page() {
        let paged = table(25).turn_page(2);
        assert_eq!(paged.per_page(), Some(10));
        assert_eq!(paged.page_count(), Some(3));
        assert_eq!(paged.visible_row_count(), 10);
        assert_eq!(paged.visible_rows()[0].index(), 10);
    }

    #[test]
    fn test_turn_page_shares_rows() {
        let table = table(5);
        let paged = table.turn_page(1);
        assert!(!paged.same_snapshot(&table));
        assert!(Arc::ptr_eq(&table.rows()[0], &paged.rows()[0]));
    }

    #[test]
    fn test_with_per_page() {
        let paged = table(25).turn_page(2).with_per_page(20);
        assert_eq!(paged.current_page(), Some(2));
        assert_eq!(paged.page_count(), Some(2));
        assert_eq!(paged.visible_row_count(), 5);
    }
}
