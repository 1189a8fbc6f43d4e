//! JSON file adapter

use std::path::Path;
use std::path::PathBuf;

use async_trait::async_trait;

use super::DateRange;
use super::TimeEntry;
use super::TimeEntrySource;
use crate::error::AdapterError;

/// Reads entries from a JSON array on disk, e.g. an export from a tracking
/// service.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    name: String,
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TimeEntrySource for JsonFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self, range: &DateRange) -> Result<Vec<TimeEntry>, AdapterError> {
        let contents = tokio::fs::read_to_string(&self.path).await?;
        let entries: Vec<TimeEntry> = serde_json::from_str(&contents)?;
        log::debug!(
            "[JsonFileSource::fetch] {} entries in {}",
            entries.len(),
            self.path.display()
        );

        Ok(entries
            .into_iter()
            .filter(|entry| range.contains(entry.start))
            .map(|mut entry| {
                if entry.source.is_empty() {
                    entry.source = self.name.clone();
                }
                entry
            })
            .collect())
    }
}
