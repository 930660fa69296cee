//! The `EntryController` sits between user intent and the store.
//!
//! It validates input, turns listing positions into store ids and keeps the listing
//! snapshot the presentation layer renders. The snapshot is rebuilt only by
//! [`EntryController::refresh`], which every successful mutation calls.

use crate::dates::local_now;
use crate::entry::{Entry, EntryFields};
use crate::error::{EntryAction, LogbookError, SelectionError};
use crate::render::{DEFAULT_MAX_TITLE_LENGTH, format_listing_row};
use crate::store::{EntryStore, StoreResult};
use chrono::NaiveDateTime;
use tracing::debug;

pub type Clock = Box<dyn Fn() -> NaiveDateTime>;

/// What happened to an `add` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(Entry),
    /// Both fields were blank, so nothing was stored.
    Discarded,
}

pub struct EntryController<S: EntryStore> {
    store: S,
    listing: Vec<Entry>,
    clock: Clock,
    max_title_length: usize,
}

impl<S: EntryStore> EntryController<S> {
    /// Wraps `store`. The listing starts empty until the first [`refresh`](Self::refresh).
    pub fn new(store: S) -> Self {
        Self {
            store,
            listing: Vec::new(),
            clock: Box::new(local_now),
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
        }
    }

    /// Initializes the store and loads the first listing.
    pub fn open(store: S) -> StoreResult<Self> {
        store.initialize()?;
        let mut controller = Self::new(store);
        controller.refresh()?;
        Ok(controller)
    }

    /// Replaces the source of "now" used to stamp new entries.
    pub fn with_clock(mut self, clock: impl Fn() -> NaiveDateTime + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_max_title_length(mut self, max_title_length: usize) -> Self {
        self.max_title_length = max_title_length;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The entries as of the last refresh, in display order.
    pub fn listing(&self) -> &[Entry] {
        &self.listing
    }

    /// Reloads the listing from the store.
    pub fn refresh(&mut self) -> StoreResult<&[Entry]> {
        self.listing = self.store.list_all()?;
        debug!(count = self.listing.len(), "listing refreshed");
        Ok(&self.listing)
    }

    /// Stores a new entry stamped with the current time.
    ///
    /// Input with nothing but whitespace in both fields is dropped without touching
    /// the store. Content is trimmed; the title is kept as typed.
    pub fn add(&mut self, title: &str, content: &str) -> Result<AddOutcome, LogbookError> {
        let fields = EntryFields::new(title, content);
        if fields.is_blank() {
            debug!("blank entry discarded");
            return Ok(AddOutcome::Discarded);
        }

        let entry_date = (self.clock)();
        let entry = self
            .store
            .insert(&fields.title, fields.content.trim(), entry_date)?;
        self.refresh()?;
        Ok(AddOutcome::Added(entry))
    }

    /// Overwrites the title and content of the selected entry.
    ///
    /// Unlike [`add`](Self::add) a blank edit is accepted.
    pub fn edit(
        &mut self,
        selection: Option<usize>,
        title: &str,
        content: &str,
    ) -> Result<(), LogbookError> {
        let id = self.resolve(selection, EntryAction::Edit)?.id;
        self.store.update(id, title, content.trim())?;
        self.refresh()?;
        Ok(())
    }

    pub fn delete(&mut self, selection: Option<usize>) -> Result<(), LogbookError> {
        let id = self.resolve(selection, EntryAction::Delete)?.id;
        self.store.delete(id)?;
        self.refresh()?;
        Ok(())
    }

    /// The selected entry from the current listing. Never reads the store.
    pub fn view(&self, selection: Option<usize>) -> Result<&Entry, SelectionError> {
        self.resolve(selection, EntryAction::View)
    }

    pub fn format_listing_row(&self, entry: &Entry) -> String {
        format_listing_row(entry, self.max_title_length)
    }

    /// One formatted row per listed entry.
    pub fn listing_rows(&self) -> Vec<String> {
        self.listing
            .iter()
            .map(|e| self.format_listing_row(e))
            .collect()
    }

    fn resolve(
        &self,
        selection: Option<usize>,
        action: EntryAction,
    ) -> Result<&Entry, SelectionError> {
        selection
            .and_then(|index| self.listing.get(index))
            .ok_or(SelectionError { action })
    }
}
