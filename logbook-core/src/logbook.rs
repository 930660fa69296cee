use crate::{
    Config,
    controller::EntryController,
    store::SqliteStore,
};
use anyhow::{Context, Result};

pub struct Logbook {
    pub config: Config,
    pub entries: EntryController<SqliteStore>,
}
impl Logbook {
    /// Opens the logbook described by the user's config file.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Opens the database at `config.db_path`, creating it on first use, and loads the listing.
    pub fn with_config(config: Config) -> Result<Self> {
        let store = SqliteStore::new(&config.db_path);
        let entries = EntryController::open(store)
            .with_context(|| format!("opening logbook at {}", config.db_path.display()))?
            .with_max_title_length(config.max_title_length);

        Ok(Self { config, entries })
    }
}

#[cfg(test)]
mod tests {
    use crate::{Logbook, tests::mk_config};
    use tempfile::tempdir;

    #[test]
    fn with_config_creates_database_and_empty_listing() {
        let tmp = tempdir().unwrap();
        let db_path = tmp.path().join("logbook/logbook.db");
        let logbook = Logbook::with_config(mk_config(db_path.clone())).expect("logbook");

        assert!(db_path.exists());
        assert!(logbook.entries.listing().is_empty());
    }

    #[test]
    fn reopening_sees_earlier_entries() {
        let tmp = tempdir().unwrap();
        let db_path = tmp.path().join("logbook.db");
        {
            let mut logbook = Logbook::with_config(mk_config(db_path.clone())).unwrap();
            logbook.entries.add("Trip", "Went hiking").unwrap();
        }

        let logbook = Logbook::with_config(mk_config(db_path)).unwrap();
        let listing = logbook.entries.listing();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].title, "Trip");
        assert_eq!(listing[0].content, "Went hiking");
    }

    #[test]
    fn configured_title_width_reaches_the_listing() {
        let tmp = tempdir().unwrap();
        let mut config = mk_config(tmp.path().join("logbook.db"));
        config.max_title_length = 6;
        let mut logbook = Logbook::with_config(config).unwrap();
        logbook.entries.add("A long title", "").unwrap();

        let row = &logbook.entries.listing_rows()[0];
        assert!(row.starts_with("A l...  "));
    }
}
