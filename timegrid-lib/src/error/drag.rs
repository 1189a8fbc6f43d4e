//! Drag session errors

/// Error type for starting drag sessions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DragError {
    /// No recognizer is registered under this root.
    #[error("No draggable registered for root '{root}'")]
    UnknownRoot { root: String },

    /// The recognizer already tracks a drag.
    #[error("A drag session is already active")]
    SessionActive,

    /// A drag needs at least one sibling to measure against.
    #[error("Cannot start a drag without siblings")]
    NoSiblings,
}

impl DragError {
    /// Creates a new unknown root error.
    pub fn unknown_root(root: impl Into<String>) -> Self {
        Self::UnknownRoot { root: root.into() }
    }
}
