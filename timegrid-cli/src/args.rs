//! Command-line arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::ArgAction;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "timegrid-cli",
    version,
    about = "Show time entries as a sortable, paginated table"
)]
pub struct Args {
    /// JSON files with time entries.
    #[arg(value_name = "ENTRIES", required = true)]
    pub entries: Vec<PathBuf>,

    /// Table config file (default: <config dir>/config.json).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// First day to include.
    #[arg(long, value_name = "DATE")]
    pub from: Option<NaiveDate>,

    /// Last day to include.
    #[arg(long, value_name = "DATE")]
    pub to: Option<NaiveDate>,

    /// Sort by this column. Overrides the config's sort.
    #[arg(long, value_name = "COLUMN")]
    pub sort: Option<String>,

    /// Invert the sort direction.
    #[arg(long, conflicts_with = "no_invert")]
    pub invert: bool,

    /// Keep the baseline sort direction.
    #[arg(long)]
    pub no_invert: bool,

    /// Page to show, 1-based. Zero and negative pages count back from the end.
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub page: Option<i64>,

    /// Rows per page. Overrides the config's page size.
    #[arg(long, value_name = "N")]
    pub per_page: Option<usize>,

    /// Column to move; needs --after or --before.
    #[arg(long, value_name = "COLUMN")]
    pub move_column: Option<String>,

    /// Place the moved column after this one.
    #[arg(long, value_name = "COLUMN", requires = "move_column", conflicts_with = "before")]
    pub after: Option<String>,

    /// Place the moved column before this one.
    #[arg(long, value_name = "COLUMN", requires = "move_column")]
    pub before: Option<String>,

    /// Log more (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Explicit sort direction, if one was given.
    pub fn invert(&self) -> Option<bool> {
        match (self.invert, self.no_invert) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let args = Args::try_parse_from([
            "timegrid-cli",
            "a.json",
            "b.json",
            "--from",
            "2024-05-01",
            "--sort",
            "start",
            "--invert",
            "--page",
            "-1",
            "--move-column",
            "source",
            "--before",
            "id",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.entries.len(), 2);
        assert_eq!(args.from, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(args.invert(), Some(true));
        assert_eq!(args.page, Some(-1));
        assert_eq!(args.before.as_deref(), Some("id"));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_invert_flags_conflict() {
        assert!(Args::try_parse_from(["timegrid-cli", "a.json", "--invert", "--no-invert"]).is_err());
    }

    #[test]
    fn test_anchor_requires_move_column() {
        assert!(Args::try_parse_from(["timegrid-cli", "a.json", "--after", "id"]).is_err());
    }

    #[test]
    fn test_entries_required() {
        assert!(Args::try_parse_from(["timegrid-cli"]).is_err());
    }
}
