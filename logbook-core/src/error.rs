use std::path::PathBuf;
use strum_macros::Display;
use thiserror::Error;

/// The listing action that required a selected entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum EntryAction {
    View,
    Edit,
    Delete,
}

/// An action was invoked without a valid entry selected.
///
/// This is an expected user-input condition. Callers show it as a notice
/// and keep going.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Please select an entry to {action}.")]
pub struct SelectionError {
    pub action: EntryAction,
}

/// A failure coming from the persistence medium. Aborts the current action.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("creating database directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("opening {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
    #[error("entry {id} has an unreadable entry_date '{value}'")]
    InvalidEntryDate { id: i64, value: String },
}

/// Everything a controller operation can fail with.
#[derive(Debug, Error)]
pub enum LogbookError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl LogbookError {
    /// The selection problem behind this error, if that is what it is.
    pub fn as_selection(&self) -> Option<&SelectionError> {
        match self {
            LogbookError::Selection(err) => Some(err),
            LogbookError::Storage(_) => None,
        }
    }
}
