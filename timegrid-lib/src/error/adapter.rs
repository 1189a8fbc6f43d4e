//! Time-entry adapter errors

/// Error type for fetching time entries.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// Reading the source failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source returned malformed JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The service reported a failure.
    #[error("Source '{source_name}' failed: {message}")]
    Source {
        source_name: String,
        message: String,
    },
}

impl AdapterError {
    /// Creates a new source error.
    pub fn source_failed(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Source {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}
