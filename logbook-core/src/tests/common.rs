use crate::Config;
use crate::controller::EntryController;
use crate::render::DEFAULT_MAX_TITLE_LENGTH;
use crate::store::{EntryStore, SqliteStore};
use chrono::{NaiveDate, NaiveDateTime};
use std::path::PathBuf;
use tempfile::TempDir;

/// Default settings pointed at `db_path`.
pub fn mk_config(db_path: PathBuf) -> Config {
    Config {
        db_path,
        editor: None,
        max_title_length: DEFAULT_MAX_TITLE_LENGTH,
    }
}

/// An initialized store in a fresh temporary directory. Keep the `TempDir` alive.
pub fn mk_store() -> (SqliteStore, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let store = SqliteStore::new(tmp.path().join("logbook.db"));
    store.initialize().expect("initialize store");
    (store, tmp)
}

pub fn mk_controller() -> (EntryController<SqliteStore>, TempDir) {
    let (store, tmp) = mk_store();
    (EntryController::open(store).expect("open controller"), tmp)
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, s))
        .expect("valid timestamp")
}
