//! Durable storage for entries.
//!
//! [`EntryStore`] is the contract the controller relies on; [`SqliteStore`] keeps the
//! entries in a single SQLite table:
//!
//! | column     | type    |                           |
//! |------------|---------|---------------------------|
//! | id         | INTEGER | primary key, never reused |
//! | title      | TEXT    | nullable                  |
//! | content    | TEXT    | nullable                  |
//! | entry_date | TEXT    | `YYYY-MM-DD HH:MM:SS`     |

use crate::dates::{format_entry_date, parse_entry_date};
use crate::entry::Entry;
use crate::error::StorageError;
use chrono::NaiveDateTime;
use rusqlite::{Connection, params};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub type StoreResult<T> = Result<T, StorageError>;

/// CRUD over the entry table. Implementations never see listing positions, only ids.
pub trait EntryStore {
    /// Makes sure the backing table exists. Safe to call on every start.
    fn initialize(&self) -> StoreResult<()>;

    /// Every entry, oldest `entry_date` first. Ties keep insertion (id) order.
    fn list_all(&self) -> StoreResult<Vec<Entry>>;

    fn insert(&self, title: &str, content: &str, entry_date: NaiveDateTime)
    -> StoreResult<Entry>;

    /// Overwrites title and content. An unknown id is not an error.
    fn update(&self, id: i64, title: &str, content: &str) -> StoreResult<()>;

    /// Removes the entry. An unknown id is not an error.
    fn delete(&self, id: i64) -> StoreResult<()>;
}

/// SQLite-backed store. Opens a fresh connection for every operation.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn connect(&self) -> StoreResult<Connection> {
        Connection::open(&self.db_path).map_err(|source| StorageError::Open {
            path: self.db_path.clone(),
            source,
        })
    }
}

impl EntryStore for SqliteStore {
    fn initialize(&self) -> StoreResult<()> {
        if let Some(parent) = self.db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = self.connect()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT,
                content TEXT,
                entry_date TEXT
            )",
            [],
        )?;
        debug!(path = %self.db_path.display(), "entries table ready");
        Ok(())
    }

    fn list_all(&self) -> StoreResult<Vec<Entry>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, content, entry_date
             FROM entries
             ORDER BY entry_date ASC, id ASC",
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, Option<String>>(1)?,
                    row.get::<_, Option<String>>(2)?,
                    row.get::<_, Option<String>>(3)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut entries = Vec::with_capacity(rows.len());
        for (id, title, content, entry_date) in rows {
            let raw_date = entry_date.unwrap_or_default();
            let entry_date = parse_entry_date(&raw_date).map_err(|_| {
                StorageError::InvalidEntryDate {
                    id,
                    value: raw_date.clone(),
                }
            })?;
            entries.push(Entry {
                id,
                title: title.unwrap_or_default(),
                content: content.unwrap_or_default(),
                entry_date,
            });
        }

        debug!(count = entries.len(), "loaded entries");
        Ok(entries)
    }

    fn insert(
        &self,
        title: &str,
        content: &str,
        entry_date: NaiveDateTime,
    ) -> StoreResult<Entry> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO entries (title, content, entry_date) VALUES (?1, ?2, ?3)",
            params![title, content, format_entry_date(&entry_date)],
        )?;
        let id = conn.last_insert_rowid();
        info!(id, "inserted entry");

        Ok(Entry {
            id,
            title: title.to_string(),
            content: content.to_string(),
            entry_date,
        })
    }

    fn update(&self, id: i64, title: &str, content: &str) -> StoreResult<()> {
        let conn = self.connect()?;
        let changed = conn.execute(
            "UPDATE entries SET title = ?1, content = ?2 WHERE id = ?3",
            params![title, content, id],
        )?;
        info!(id, changed, "updated entry");
        Ok(())
    }

    fn delete(&self, id: i64) -> StoreResult<()> {
        let conn = self.connect()?;
        let changed = conn.execute("DELETE FROM entries WHERE id = ?1", params![id])?;
        info!(id, changed, "deleted entry");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{at, mk_store};

    #[test]
    fn initialize_is_idempotent_and_keeps_data() {
        let (store, _tmp) = mk_store();
        store.insert("Kept", "", at(2023, 11, 1, 9, 0, 0)).unwrap();

        store.initialize().unwrap();
        store.initialize().unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Kept");
    }

    #[test]
    fn initialize_creates_missing_parent_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested/deeper/logbook.db");
        let store = SqliteStore::new(&path);
        store.initialize().unwrap();
        assert!(path.exists());
    }

    #[test]
    fn list_all_on_empty_store_is_empty() {
        let (store, _tmp) = mk_store();
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn insert_round_trips_fields_and_date() {
        let (store, _tmp) = mk_store();
        let date = at(2023, 11, 1, 18, 4, 9);
        let created = store.insert("  Spaced title ", "Body", date).unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(all, vec![created.clone()]);
        assert_eq!(all[0].title, "  Spaced title ");
        assert_eq!(all[0].content, "Body");
        assert_eq!(all[0].entry_date_string(), "2023-11-01 18:04:09");
    }

    #[test]
    fn list_all_orders_by_date_then_id() {
        let (store, _tmp) = mk_store();
        let late = store.insert("late", "", at(2023, 11, 2, 8, 0, 0)).unwrap();
        let tie_a = store.insert("tie a", "", at(2023, 11, 1, 8, 0, 0)).unwrap();
        let tie_b = store.insert("tie b", "", at(2023, 11, 1, 8, 0, 0)).unwrap();

        let ids: Vec<i64> = store.list_all().unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![tie_a.id, tie_b.id, late.id]);
    }

    #[test]
    fn update_keeps_id_and_date() {
        let (store, _tmp) = mk_store();
        let date = at(2023, 11, 1, 9, 30, 0);
        let e = store.insert("Old", "old body", date).unwrap();

        store.update(e.id, "New", "new body").unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(all[0].id, e.id);
        assert_eq!(all[0].entry_date, date);
        assert_eq!(all[0].title, "New");
        assert_eq!(all[0].content, "new body");
    }

    #[test]
    fn update_and_delete_unknown_ids_are_noops() {
        let (store, _tmp) = mk_store();
        store.insert("Only", "", at(2023, 11, 1, 9, 0, 0)).unwrap();

        store.update(999, "x", "y").unwrap();
        store.delete(999).unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Only");
    }

    #[test]
    fn delete_removes_only_that_entry() {
        let (store, _tmp) = mk_store();
        let a = store.insert("a", "", at(2023, 11, 1, 9, 0, 0)).unwrap();
        let b = store.insert("b", "", at(2023, 11, 1, 10, 0, 0)).unwrap();

        store.delete(a.id).unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(all, vec![b]);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let (store, _tmp) = mk_store();
        store.insert("a", "", at(2023, 11, 1, 9, 0, 0)).unwrap();
        let b = store.insert("b", "", at(2023, 11, 1, 9, 0, 1)).unwrap();
        store.delete(b.id).unwrap();

        let c = store.insert("c", "", at(2023, 11, 1, 9, 0, 2)).unwrap();
        assert!(c.id > b.id);
    }

    #[test]
    fn null_columns_read_back_as_empty_strings() {
        let (store, _tmp) = mk_store();
        let conn = Connection::open(store.db_path()).unwrap();
        conn.execute(
            "INSERT INTO entries (title, content, entry_date) VALUES (NULL, NULL, ?1)",
            params!["2023-11-01 09:00:00"],
        )
        .unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(all[0].title, "");
        assert_eq!(all[0].content, "");
    }

    #[test]
    fn unreadable_entry_date_is_a_storage_error() {
        let (store, _tmp) = mk_store();
        let conn = Connection::open(store.db_path()).unwrap();
        conn.execute(
            "INSERT INTO entries (title, content, entry_date) VALUES ('t', 'c', 'someday')",
            [],
        )
        .unwrap();

        let err = store.list_all().unwrap_err();
        assert!(matches!(
            err,
            StorageError::InvalidEntryDate { ref value, .. } if value == "someday"
        ));
    }

    #[test]
    fn unopenable_path_is_a_storage_error() {
        let tmp = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a database file.
        let store = SqliteStore::new(tmp.path());
        assert!(store.list_all().is_err());
    }
}
