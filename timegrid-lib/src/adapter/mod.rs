//! Time-entry adapters
//!
//! Each time-tracking service is reached through a [`TimeEntrySource`]. The
//! table only ever sees the records produced by [`TimeEntry::to_record`].

mod entry;
mod json;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

pub use entry::*;
pub use json::*;

use crate::error::AdapterError;

/// Half-open range of entry start times. Missing bounds are unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl DateRange {
    /// The unbounded range.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn with_from(mut self, from: DateTime<Utc>) -> Self {
        self.from = Some(from);
        self
    }

    pub fn with_to(mut self, to: DateTime<Utc>) -> Self {
        self.to = Some(to);
        self
    }

    /// Returns `true` if `start` is within `[from, to)`.
    pub fn contains(&self, start: DateTime<Utc>) -> bool {
        self.from.is_none_or(|from| start >= from) && self.to.is_none_or(|to| start < to)
    }
}

/// A time-tracking service.
#[async_trait]
pub trait TimeEntrySource: Send + Sync {
    /// Name shown in the `source` column.
    fn name(&self) -> &str;

    /// Fetches the entries starting within `range`.
    async fn fetch(&self, range: &DateRange) -> Result<Vec<TimeEntry>, AdapterError>;
}

/// Fetches from every source in order and concatenates the results.
pub async fn collect_entries(
    sources: &[Arc<dyn TimeEntrySource>],
    range: &DateRange,
) -> Result<Vec<TimeEntry>, AdapterError> {
    let mut entries = Vec::new();
    for source in sources {
        let fetched = source.fetch(range).await?;
        log::debug!(
            "[collect_entries] {} entries from '{}'",
            fetched.len(),
            source.name()
        );
        entries.extend(fetched);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    struct Fixed(&'static str, Vec<TimeEntry>);

    #[async_trait]
    impl TimeEntrySource for Fixed {
        fn name(&self) -> &str {
            self.0
        }

        async fn fetch(&self, range: &DateRange) -> Result<Vec<TimeEntry>, AdapterError> {
            Ok(self
                .1
                .iter()
                .filter(|e| range.contains(e.start))
                .cloned()
                .collect())
        }
    }

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, day, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_date_range_is_half_open() {
        let range = DateRange::between(at(1), at(3));
        assert!(range.contains(at(1)));
        assert!(range.contains(at(2)));
        assert!(!range.contains(at(3)));
        assert!(DateRange::all().contains(at(30)));
    }

    #[tokio::test]
    async fn test_collect_entries_concatenates_sources() {
        let sources: Vec<Arc<dyn TimeEntrySource>> = vec![
            Arc::new(Fixed("one", vec![TimeEntry::new("1", "a", at(1))])),
            Arc::new(Fixed("two", vec![
                TimeEntry::new("2", "b", at(2)),
                TimeEntry::new("3", "c", at(9)),
            ])),
        ];
        let entries = collect_entries(&sources, &DateRange::all().with_to(at(5)))
            .await
            .unwrap();
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }
}
