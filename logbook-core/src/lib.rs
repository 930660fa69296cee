pub mod config;
pub mod controller;
pub mod dates;
pub mod entry;
pub mod error;
pub mod form;
pub mod logbook;
pub mod render;
pub mod store;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use controller::{AddOutcome, EntryController};
pub use entry::{Entry, EntryFields};
pub use error::{EntryAction, LogbookError, SelectionError, StorageError};
pub use form::{EntryForm, FormConfig, FormError, FormState};
pub use logbook::Logbook;
pub use store::{EntryStore, SqliteStore};
