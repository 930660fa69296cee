use crate::dates::format_entry_date;
use chrono::NaiveDateTime;

/// One journal record as it lives in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub entry_date: NaiveDateTime,
}

impl Entry {
    /// The creation timestamp as stored, `YYYY-MM-DD HH:MM:SS`.
    pub fn entry_date_string(&self) -> String {
        format_entry_date(&self.entry_date)
    }

    /// The user-editable part of the entry.
    pub fn fields(&self) -> EntryFields {
        EntryFields {
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }
}

/// Title and content as typed by the user, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFields {
    pub title: String,
    pub content: String,
}

impl EntryFields {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// True when neither field has anything but whitespace.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }
}
