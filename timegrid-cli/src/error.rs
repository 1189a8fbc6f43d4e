//! CLI error type

use timegrid_lib::error::AdapterError;
use timegrid_lib::error::ConfigError;
use timegrid_lib::error::TableError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Adapter(#[from] AdapterError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("--move-column {column} needs --after or --before")]
    MissingAnchor { column: String },
}
