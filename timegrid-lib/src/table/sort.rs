//! Sorting

use std::sync::Arc;

use super::SortOption;
use super::Table;
use crate::error::TableError;
use crate::model::Record;
use crate::pipeline::SortKey;

impl Table {
    /// Sorts the rows by `column` and returns the new snapshot.
    ///
    /// Without an explicit `invert`, sorting the column that is already active
    /// flips its direction; any other column starts at `invert = false`, the
    /// baseline order of its sorter. The raw data itself is reordered, so row
    /// indices change. Equal rows keep their relative order.
    pub fn sort_by(&self, column: &str, invert: Option<bool>) -> Result<Table, TableError> {
        let header = self
            .header(column)
            .ok_or_else(|| TableError::unknown_column(column))?;

        let invert = invert.unwrap_or_else(|| match &self.inner.options.sort {
            Some(current) if current.column == column => !current.invert,
            _ => false,
        });

        let mut keys = self
            .rows()
            .iter()
            .map(|row| row.cell(column).map(|cell| SortKey::new(cell, row)))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| TableError::unknown_column(column))?;
        keys.sort_by(|a, b| header.compare(*a, *b, invert));

        let data: Vec<Record> = keys
            .iter()
            .map(|key| self.inner.data[key.row.index()].clone())
            .collect();

        log::debug!("[Table::sort_by] column={} invert={}", column, invert);

        let mut options = self.inner.options.clone();
        options.sort = Some(SortOption::new(column, invert));
        Ok(Table::assemble(
            Arc::from(data),
            Arc::clone(&self.inner.schema),
            options,
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::model::ColumnType;
    use crate::model::RawValue;
    use crate::model::Record;
    use crate::model::SchemaEntry;
    use crate::table::Table;
    use crate::table::TableOptions;

    fn names(table: &Table) -> Vec<String> {
        table
            .rows()
            .iter()
            .map(|row| row.cell("name").unwrap().value().formatted().to_string())
            .collect()
    }

    fn table() -> Table {
        let schema = vec![SchemaEntry::new("name", "Name", ColumnType::String).with_sortable(true)];
        let data = ["b", "a", "c"]
            .into_iter()
            .map(|name| Record::new().set("name", name))
            .collect();
        Table::new(data, schema, TableOptions::new())
    }

    #[test]
    fn test_sort_toggles_direction() {
        let first = table().sort_by("name", None).unwrap();
        assert_eq!(names(&first), ["c", "b", "a"]);
        assert!(!first.is_current_sort_inverted());

        let second = first.sort_by("name", None).unwrap();
        assert_eq!(names(&second), ["a", "b", "c"]);
        assert!(second.is_current_sort_inverted());
        assert_eq!(second.current_sort_column(), Some("name"));
    }

    #[test]
    fn test_sort_reindexes_rows() {
        let sorted = table().sort_by("name", Some(true)).unwrap();
        for (i, row) in sorted.rows().iter().enumerate() {
            assert_eq!(row.index(), i);
        }
        assert_eq!(sorted.data()[0].value("name"), &RawValue::from("a"));
    }

    #[test]
    fn test_sort_unknown_column() {
        assert!(table().sort_by("missing", None).is_err());
    }
}
