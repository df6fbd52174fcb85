//! Error types for menu commands and task storage.

/// Recoverable failures of a single menu command. None of these end the loop.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Title too short! ({len} chars, need at least {min})")]
    TitleTooShort { len: usize, min: usize },

    #[error("No tasks")]
    EmptySelection,

    #[error("Unknown option! (0-6, +/-)")]
    UnknownCommand(String),
}

/// Failures while loading or saving the task list.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialisation error: {0}")]
    Serialize(#[from] serde_json::Error),
}
