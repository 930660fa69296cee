use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::warn;

use crate::render::{DEFAULT_MAX_TITLE_LENGTH, ELLIPSIS};

#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite file holding every entry.
    pub db_path: PathBuf,
    /// Preferred editor name/binary (e.g. hx for Helix). Optional; the CLI will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
    /// Width of the title column in the listing. Longer titles are clipped with `...`.
    pub max_title_length: usize,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    db_path: Option<PathBuf>,
    editor: Option<String>,
    max_title_length: Option<usize>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    ///
    /// A config file that cannot be read or parsed is reported and ignored.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|err| {
            warn!("ignoring config file: {err:#}");
            FileConfig::default()
        });
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let db_path = file_config.db_path.unwrap_or_else(Self::default_db_path);
        let max_title_length = file_config
            .max_title_length
            .filter(|len| *len >= ELLIPSIS.len())
            .unwrap_or(DEFAULT_MAX_TITLE_LENGTH);

        Self {
            db_path,
            editor: file_config.editor,
            max_title_length,
        }
    }

    /// Default database: `{data_dir}/logbook/logbook.db`
    /// - macOS:   `~/Library/Application Support/logbook/logbook.db`
    /// - Linux:   `$XDG_DATA_HOME/logbook/logbook.db` or `~/.local/share/logbook/logbook.db`
    /// - Windows: `%APPDATA%\logbook\logbook.db`
    fn default_db_path() -> PathBuf {
        let mut p = if let Some(base) = BaseDirs::new() {
            let mut dir = base.data_dir().to_path_buf();
            dir.push("logbook");
            dir
        } else {
            PathBuf::from(".")
        };
        p.push("logbook.db");
        p
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("logbook")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("logbook").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
