use clap::{ArgGroup, Parser};

use crate::render::ColorMode;

/// logbook: a small local journal
///
/// Without arguments, prints every entry oldest first. Entries are addressed by their
/// position in that listing.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    group(ArgGroup::new("action").args(["path", "add", "view", "edit", "delete"])),
    group(ArgGroup::new("write").args(["add", "edit"])),
)]
pub struct Cli {
    /// Prints the database file path
    #[arg(long, short)]
    pub path: bool,
    /// Adds a new entry. Without --title/--content your $EDITOR opens an empty form.
    #[arg(long, short)]
    pub add: bool,
    /// Shows the full entry at position N of the listing (e.g. `logbook --view 3`)
    #[arg(long, value_name = "N")]
    pub view: Option<usize>,
    /// Edits the entry at position N. Without --title/--content your $EDITOR opens
    /// the current values.
    #[arg(long, short, value_name = "N")]
    pub edit: Option<usize>,
    /// Deletes the entry at position N
    #[arg(long, short, value_name = "N")]
    pub delete: Option<usize>,

    /// Entry title for --add or --edit
    #[arg(long, short, requires = "write")]
    pub title: Option<String>,
    /// Entry content for --add or --edit. Surrounding whitespace is dropped.
    #[arg(long, short, requires = "write")]
    pub content: Option<String>,

    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }

    /// True when title or content came from the command line, so no form is needed.
    pub fn has_inline_fields(&self) -> bool {
        self.title.is_some() || self.content.is_some()
    }
}

/// Listing positions shown to the user start at 1. Position 0 selects nothing.
pub fn selection(position: usize) -> Option<usize> {
    position.checked_sub(1)
}
