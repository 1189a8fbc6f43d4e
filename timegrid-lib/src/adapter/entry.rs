//! Time entries and their table representation

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::model::Align;
use crate::model::ColumnType;
use crate::model::Record;
use crate::model::SchemaEntry;
use crate::model::TypedValue;

/// One tracked block of time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub project: Option<String>,
    pub start: DateTime<Utc>,
    /// `None` while the timer is still running.
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub billable: bool,
    /// Service the entry came from.
    #[serde(default)]
    pub source: String,
}

impl TimeEntry {
    /// Creates a running, non-billable entry.
    pub fn new(id: impl Into<String>, description: impl Into<String>, start: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            project: None,
            start,
            end: None,
            billable: false,
            source: String::new(),
        }
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn with_end(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    pub fn with_billable(mut self, billable: bool) -> Self {
        self.billable = billable;
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Tracked hours, `None` while running.
    pub fn duration_hours(&self) -> Option<f64> {
        self.end
            .map(|end| (end - self.start).num_seconds() as f64 / 3600.0)
    }

    /// The raw table row for this entry, keyed like [`time_entry_schema`].
    pub fn to_record(&self) -> Record {
        Record::new()
            .set("id", self.id.as_str())
            .set("description", self.description.as_str())
            .set("project", self.project.clone())
            .set("start", self.start)
            .set("duration", self.duration_hours())
            .set("billable", self.billable)
            .set("source", self.source.as_str())
    }
}

/// Column schema for tables of [`TimeEntry`] records.
pub fn time_entry_schema() -> Vec<SchemaEntry> {
    vec![
        SchemaEntry::new("id", "ID", ColumnType::String),
        SchemaEntry::new("description", "Description", ColumnType::String)
            .with_sortable(true)
            .with_multiline(true),
        SchemaEntry::new("project", "Project", ColumnType::String).with_sortable(true),
        SchemaEntry::new("start", "Start", ColumnType::Date).with_sortable(true),
        SchemaEntry::new("duration", "Hours", ColumnType::Number)
            .with_sortable(true)
            .with_align(Align::Right)
            .with_formatter(format_hours),
        SchemaEntry::new("billable", "Billable", ColumnType::Bool)
            .with_sortable(true)
            .with_align(Align::Center),
        SchemaEntry::new("source", "Source", ColumnType::String).with_sortable(true),
    ]
}

fn format_hours(value: &TypedValue, _row: usize) -> String {
    match value.as_number() {
        Some(hours) if hours.is_finite() => format!("{hours:.2}"),
        _ => "running".to_string(),
    }
}
