//! View options

use serde::Deserialize;
use serde::Serialize;

/// Page size used when a page is turned on an unpaginated table.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Active sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOption {
    pub column: String,
    #[serde(default)]
    pub invert: bool,
}

impl SortOption {
    pub fn new(column: impl Into<String>, invert: bool) -> Self {
        Self {
            column: column.into(),
            invert,
        }
    }
}

/// Pagination state.
///
/// `current` is 1-based and deliberately signed: it is never clamped, so
/// pages past the end or at or below zero are representable.
/// `page_count` is always recomputed by the table; supplied values are
/// overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub per_page: usize,
    #[serde(default = "first_page")]
    pub current: i64,
    #[serde(default)]
    pub page_count: usize,
}

fn first_page() -> i64 {
    1
}

impl Pagination {
    /// Pagination starting at page 1.
    pub fn new(per_page: usize) -> Self {
        Self {
            per_page,
            current: first_page(),
            page_count: 0,
        }
    }

    /// Sets the current page.
    pub fn with_current(mut self, current: i64) -> Self {
        self.current = current;
        self
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE)
    }
}

/// Options a table snapshot is constructed with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOptions {
    #[serde(default)]
    pub sort: Option<SortOption>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Sets the pagination option.
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults_to_first_page() {
        let options: TableOptions =
            serde_json::from_str(r#"{"pagination": {"per_page": 5}}"#).unwrap();
        let pagination = options.pagination.unwrap();
        assert_eq!(pagination.current, 1);
        assert_eq!(pagination.per_page, 5);
        assert!(options.sort.is_none());
    }
}
