//! Table configuration

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;
use crate::model::SchemaEntry;
use crate::table::Pagination;
use crate::table::SortOption;
use crate::table::TableOptions;

/// Persistent table settings.
///
/// # Example
///
/// ```
/// use timegrid_lib::config::TableConfig;
/// use timegrid_lib::table::SortOption;
///
/// let config = TableConfig::default()
///     .with_per_page(25)
///     .with_sort(SortOption::new("start", false));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableConfig {
    /// Page size. `None` shows all rows.
    #[serde(default)]
    pub per_page: Option<usize>,

    /// Sort applied after loading.
    #[serde(default)]
    pub sort: Option<SortOption>,

    /// Column schema. `None` uses the caller's default schema.
    #[serde(default)]
    pub schema: Option<Vec<SchemaEntry>>,
}

impl TableConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("[TableConfig::load] loaded {}", path.display());
        Ok(config)
    }

    /// Loads a config, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Sets the page size.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Sets the sort.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Sets the schema.
    pub fn with_schema(mut self, schema: Vec<SchemaEntry>) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Construction options for a table. The sort is left out: it has to be
    /// applied with [`Table::sort_by`](crate::Table::sort_by) to reorder rows.
    pub fn options(&self) -> TableOptions {
        TableOptions {
            sort: None,
            pagination: self.per_page.map(Pagination::new),
        }
    }
}
