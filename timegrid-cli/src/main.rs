mod args;
mod error;
mod paths;
mod render;

use std::fs;
use std::fs::File;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveTime;
use chrono::Utc;
use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};
use timegrid_lib::Table;
use timegrid_lib::adapter::{
    DateRange, JsonFileSource, TimeEntrySource, collect_entries, time_entry_schema,
};
use timegrid_lib::config::TableConfig;

use crate::args::Args;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args).await {
        Ok(table) => {
            println!("{}", render::render_table(&table));
            println!("{}", render::status_line(&table));
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("[main] {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs to `latest.log` in the cache dir. Logging is skipped when the file
/// cannot be created.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let Some(path) = paths::log_file() else { return };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    paths::rotate_logs();

    match File::create(&path) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(level, Config::default(), file) {
                eprintln!("Warning: failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("Warning: failed to create log file {}: {}", path.display(), e),
    }
}

async fn run(args: &Args) -> Result<Table, CliError> {
    let mut config = match (&args.config, paths::config_file()) {
        (Some(path), _) => TableConfig::load(path)?,
        (None, Some(path)) => TableConfig::load_or_default(&path)?,
        (None, None) => TableConfig::default(),
    };
    if let Some(per_page) = args.per_page {
        config = config.with_per_page(per_page);
    }

    let sources: Vec<Arc<dyn TimeEntrySource>> = args
        .entries
        .iter()
        .map(|path| Arc::new(JsonFileSource::new(source_name(path), path)) as Arc<dyn TimeEntrySource>)
        .collect();
    let entries = collect_entries(&sources, &date_range(args.from, args.to)).await?;
    log::info!("[run] {} entries from {} sources", entries.len(), sources.len());

    let records = entries.iter().map(|entry| entry.to_record()).collect();
    let schema = config.schema.clone().unwrap_or_else(time_entry_schema);
    let mut table = Table::new(records, schema, config.options());

    if let Some(column) = &args.sort {
        table = table.sort_by(column, args.invert())?;
    } else if let Some(sort) = &config.sort {
        table = table.sort_by(&sort.column, Some(sort.invert))?;
    }

    if let Some(column) = &args.move_column {
        table = match (&args.after, &args.before) {
            (Some(after), _) => table.move_column_after(column, after)?,
            (None, Some(before)) => table.move_column_before(column, before)?,
            (None, None) => {
                return Err(CliError::MissingAnchor {
                    column: column.clone(),
                });
            }
        };
    }

    if let Some(page) = args.page {
        table = table.turn_page(page);
    }

    Ok(table)
}

/// Source name shown in the table: the file name without extension.
fn source_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "entries".to_string())
}

/// Range from the start of `from` up to the end of `to`.
fn date_range(from: Option<NaiveDate>, to: Option<NaiveDate>) -> DateRange {
    let midnight = |date: NaiveDate| -> DateTime<Utc> { date.and_time(NaiveTime::MIN).and_utc() };

    let mut range = DateRange::all();
    if let Some(from) = from {
        range = range.with_from(midnight(from));
    }
    if let Some(to) = to {
        range = range.with_to(midnight(to.succ_opt().unwrap_or(to)));
    }
    range
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_date_range_includes_last_day() {
        let range = date_range(NaiveDate::from_ymd_opt(2024, 5, 1), NaiveDate::from_ymd_opt(2024, 5, 2));
        assert!(!range.contains(Utc.with_ymd_and_hms(2024, 4, 30, 23, 59, 59).unwrap()));
        assert!(range.contains(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()));
        assert!(range.contains(Utc.with_ymd_and_hms(2024, 5, 2, 23, 0, 0).unwrap()));
        assert!(!range.contains(Utc.with_ymd_and_hms(2024, 5, 3, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_source_name() {
        assert_eq!(source_name(Path::new("/tmp/toggl-may.json")), "toggl-may");
    }

    #[tokio::test]
    async fn test_run_sorts_moves_and_pages() {
        let dir = std::env::temp_dir().join(format!("timegrid-cli-run-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let entries = dir.join("work.json");
        fs::write(
            &entries,
            r#"[
                {"id": "1", "description": "Standup", "start": "2024-05-01T09:00:00Z", "end": "2024-05-01T09:15:00Z"},
                {"id": "2", "description": "Review", "start": "2024-05-02T10:00:00Z", "end": "2024-05-02T12:00:00Z"},
                {"id": "3", "description": "Deploy", "start": "2024-05-03T14:00:00Z"}
            ]"#,
        )
        .unwrap();
        let config = dir.join("config.json");
        fs::write(&config, r#"{"per_page": 2}"#).unwrap();

        let args = Args::parse_from([
            "timegrid-cli",
            entries.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
            "--sort",
            "start",
            "--move-column",
            "source",
            "--before",
            "id",
            "--page",
            "2",
        ]);
        let table = run(&args).await.unwrap();

        assert_eq!(table.page_count(), Some(2));
        assert_eq!(table.headers()[0].column(), "source");
        assert_eq!(table.visible_row_count(), 1);
        let last = &table.visible_rows()[0];
        assert_eq!(last.cell("description").unwrap().value().formatted(), "Standup");
        assert_eq!(last.cell("source").unwrap().value().formatted(), "work");
        fs::remove_dir_all(&dir).unwrap();
    }
}
