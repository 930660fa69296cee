use super::theme::OneDark;
use logbook_core::Entry;
use termimad::{MadSkin, crossterm::style::Stylize};

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
    /// Width of the title column, so the date part of a row can be told apart.
    pub max_title_length: usize,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self {
            skin: OneDark::skin(),
            opts,
        }
    }

    pub fn print_md(&self, md: &str) {
        self.skin.print_text(md);
    }

    pub fn print_info(&self, message: &str) {
        let md = format!("|-|\n| {message} |\n|-|\n");
        if self.opts.use_color {
            self.print_md(&md);
        } else {
            println!("{}", message);
        }
    }

    /// A recoverable problem the user should see, e.g. nothing selected.
    pub fn print_notice(&self, message: &str) {
        if self.opts.use_color {
            println!("{}", message.with(OneDark::RED));
        } else {
            println!("{}", message);
        }
    }

    /// Numbered listing, one fixed-width row per entry.
    pub fn print_listing(&self, rows: &[String]) {
        let digits = rows.len().to_string().len();
        for (i, row) in rows.iter().enumerate() {
            let position = format!("{:>digits$}.", i + 1);
            if self.opts.use_color {
                let (title, date) = split_row(row, self.opts.max_title_length + 2);
                println!(
                    "{} {}{}",
                    position.with(OneDark::COMMENT),
                    title.with(OneDark::YELLOW),
                    date.with(OneDark::BLUE)
                );
            } else {
                println!("{} {}", position, row);
            }
        }
    }

    /// Title, creation date and full content of one entry.
    pub fn print_entry(&self, entry: &Entry) {
        let date = entry.entry_date_string();
        let title = entry.title.trim();
        let content = entry.content.trim_end();

        if self.opts.use_color {
            let heading = if title.is_empty() {
                format!("## `{date}`")
            } else {
                format!("## {title} `{date}`")
            };
            let md = if content.is_empty() {
                format!("{heading}\n")
            } else {
                format!("{heading}\n{content}\n")
            };
            self.print_md(&md);
            self.print_md("---");
        } else {
            println!("{} ({})", title, date);
            if !content.is_empty() {
                println!("{content}");
            }
            println!("---");
        }
    }
}

/// Splits a listing row after `at` characters.
fn split_row(row: &str, at: usize) -> (&str, &str) {
    match row.char_indices().nth(at) {
        Some((idx, _)) => row.split_at(idx),
        None => (row, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::split_row;

    #[test]
    fn split_row_cuts_on_characters() {
        assert_eq!(split_row("día  2023", 5), ("día  ", "2023"));
        assert_eq!(split_row("short", 10), ("short", ""));
    }
}
