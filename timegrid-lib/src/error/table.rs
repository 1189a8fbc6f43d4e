//! Table operation errors

/// Error type for table operations that resolve a column, row or index.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// No schema entry has this column key.
    #[error("Column '{column}' not found in schema")]
    UnknownColumn { column: String },

    /// The row reference belongs to a different snapshot.
    #[error("Row does not belong to this table snapshot")]
    UnknownRow,

    /// A positional index is past the end.
    #[error("Index {index} out of range for {len} {kind}")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },
}

impl TableError {
    /// Creates a new unknown column error.
    pub fn unknown_column(column: impl Into<String>) -> Self {
        Self::UnknownColumn {
            column: column.into(),
        }
    }

    /// Creates a new index out of range error.
    pub fn index_out_of_range(kind: &'static str, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { kind, index, len }
    }
}
