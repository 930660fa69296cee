//! Fixed-width listing rows.
//!
//! A row is the title clipped or padded to a fixed width, two spaces and the entry date:
//!
//! ```text
//! Trip                          2023-11-01 18:04:09
//! A title that is far too l...  2023-11-02 07:30:00
//! ```
//!
//! With a monospaced font every date starts in the same column.

use crate::entry::Entry;

/// Title width used when nothing else is configured.
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 28;

/// Marks a clipped title. No title column can be narrower than this.
pub const ELLIPSIS: &str = "...";

/// Clips `title` to `max_title_length` characters (ending in `...`) or pads it with
/// spaces up to that width.
///
/// # Examples
///
/// ```
/// # use logbook_core::render::fit_title;
/// assert_eq!(fit_title("Trip", 8), "Trip    ");
/// assert_eq!(fit_title("Weekend trip", 8), "Weeke...");
/// ```
pub fn fit_title(title: &str, max_title_length: usize) -> String {
    let len = title.chars().count();
    if len > max_title_length {
        let keep = max_title_length.saturating_sub(ELLIPSIS.len());
        let mut clipped: String = title.chars().take(keep).collect();
        clipped.push_str(ELLIPSIS);
        clipped
    } else {
        format!("{title:<max_title_length$}")
    }
}

/// `"<title fitted to max_title_length>  YYYY-MM-DD HH:MM:SS"`
pub fn format_listing_row(entry: &Entry, max_title_length: usize) -> String {
    format!(
        "{}  {}",
        fit_title(&entry.title, max_title_length),
        entry.entry_date_string()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::at;

    fn entry_titled(title: &str) -> Entry {
        Entry {
            id: 1,
            title: title.to_string(),
            content: String::new(),
            entry_date: at(2023, 11, 1, 18, 4, 9),
        }
    }

    #[test]
    fn exact_width_title_is_left_alone() {
        let title = "a".repeat(28);
        let row = format_listing_row(&entry_titled(&title), DEFAULT_MAX_TITLE_LENGTH);
        assert_eq!(row, format!("{title}  2023-11-01 18:04:09"));
        assert!(!row.contains("..."));
    }

    #[test]
    fn long_title_is_clipped_with_ellipsis() {
        let title = "b".repeat(40);
        let row = format_listing_row(&entry_titled(&title), DEFAULT_MAX_TITLE_LENGTH);
        assert_eq!(row, format!("{}...  2023-11-01 18:04:09", "b".repeat(25)));
    }

    #[test]
    fn short_title_is_padded() {
        let row = format_listing_row(&entry_titled("Hello"), DEFAULT_MAX_TITLE_LENGTH);
        assert_eq!(row, format!("Hello{}  2023-11-01 18:04:09", " ".repeat(23)));
    }

    #[test]
    fn date_always_starts_at_the_same_column() {
        let titles = [
            String::new(),
            "x".to_string(),
            "y".repeat(28),
            "z".repeat(29),
            "w".repeat(100),
        ];
        for title in &titles {
            let row = format_listing_row(&entry_titled(title), DEFAULT_MAX_TITLE_LENGTH);
            let prefix: String = row.chars().take(DEFAULT_MAX_TITLE_LENGTH + 2).collect();
            let rest: String = row.chars().skip(DEFAULT_MAX_TITLE_LENGTH + 2).collect();
            assert!(prefix.ends_with("  "), "row {row:?}");
            assert_eq!(rest, "2023-11-01 18:04:09");
        }
    }

    #[test]
    fn width_counts_characters_not_bytes() {
        let title = "é".repeat(30);
        let fitted = fit_title(&title, 28);
        assert_eq!(fitted.chars().count(), 28);
        assert!(fitted.ends_with("..."));

        let fitted = fit_title("día", 5);
        assert_eq!(fitted, "día  ");
    }

    #[test]
    fn narrowest_width_is_just_the_ellipsis() {
        assert_eq!(fit_title("abcdef", ELLIPSIS.len()), "...");
        assert_eq!(fit_title("abc", ELLIPSIS.len()), "abc");
        assert_eq!(fit_title("", 0), "");
    }
}
