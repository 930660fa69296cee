use crate::{
    Cli,
    cli::selection,
    common::{CliModeResult, create_editor_buffer, resolve_editor},
    render::{RenderOptions, Renderer},
};
use anyhow::Result;
use logbook_core::{
    AddOutcome, EntryFields, EntryForm, FormConfig, FormError, FormState, Logbook, LogbookError,
};
use tracing::debug;

pub struct LogbookCli {
    cli: Cli,
    renderer: Renderer,
    logbook: Logbook,
}
impl LogbookCli {
    pub fn new(cli: Cli, logbook: Logbook) -> Self {
        let renderer = Renderer::new(RenderOptions {
            use_color: cli.color.use_color(),
            max_title_length: logbook.config.max_title_length,
        });
        LogbookCli {
            cli,
            renderer,
            logbook,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        if self.cli.path {
            self.renderer
                .print_info(&format!("{}", self.logbook.config.db_path.display()));
            return Ok(());
        }

        if let CliModeResult::Finish = self.add_mode()? {
            return Ok(());
        };

        if let CliModeResult::Finish = self.view_mode()? {
            return Ok(());
        };

        if let CliModeResult::Finish = self.edit_mode()? {
            return Ok(());
        };

        if let CliModeResult::Finish = self.delete_mode()? {
            return Ok(());
        };

        self.list_mode()
    }

    pub fn list_mode(&self) -> Result<()> {
        let rows = self.logbook.entries.listing_rows();
        if rows.is_empty() {
            self.renderer
                .print_info("No entries yet. Add one with `logbook --add`.");
        } else {
            self.renderer.print_listing(&rows);
        }
        Ok(())
    }

    pub fn add_mode(&mut self) -> Result<CliModeResult> {
        if !self.cli.add {
            return Ok(CliModeResult::NothingToDo);
        }

        let outcome = if self.cli.has_inline_fields() {
            let title = self.cli.title.as_deref().unwrap_or_default();
            let content = self.cli.content.as_deref().unwrap_or_default();
            Some(self.logbook.entries.add(title, content)?)
        } else {
            let editor = resolve_editor(&self.logbook.config.editor);
            let entries = &mut self.logbook.entries;
            let mut outcome = None;
            let state = {
                let mut form = EntryForm::new(FormConfig::new(|fields: EntryFields| {
                    outcome = Some(entries.add(&fields.title, &fields.content)?);
                    Ok(())
                }));
                form.begin();
                let buffer = create_editor_buffer(&editor, &form.render_buffer())?;
                form.complete_with_buffer(&buffer)?;
                form.finish()
            };
            debug!(?state, "add form closed");
            outcome
        };

        match outcome {
            Some(AddOutcome::Added(entry)) => {
                self.renderer.print_info("Added new entry.");
                let row = self.logbook.entries.format_listing_row(&entry);
                println!("{row}");
            }
            Some(AddOutcome::Discarded) | None => {
                self.renderer
                    .print_info("No entry to save, because no text was received.");
            }
        }
        Ok(CliModeResult::Finish)
    }

    pub fn view_mode(&mut self) -> Result<CliModeResult> {
        let Some(position) = self.cli.view else {
            return Ok(CliModeResult::NothingToDo);
        };

        match self.logbook.entries.view(selection(position)) {
            Ok(entry) => self.renderer.print_entry(entry),
            Err(err) => self.renderer.print_notice(&err.to_string()),
        }
        Ok(CliModeResult::Finish)
    }

    pub fn edit_mode(&mut self) -> Result<CliModeResult> {
        let Some(position) = self.cli.edit else {
            return Ok(CliModeResult::NothingToDo);
        };
        let selected = selection(position);

        let current = match self.logbook.entries.view(selected) {
            Ok(entry) => entry.fields(),
            Err(err) => {
                self.renderer.print_notice(&err.to_string());
                return Ok(CliModeResult::Finish);
            }
        };

        let state = if self.cli.has_inline_fields() {
            let title = self.cli.title.as_deref().unwrap_or(&current.title);
            let content = self.cli.content.as_deref().unwrap_or(&current.content);
            match self.logbook.entries.edit(selected, title, content) {
                Ok(()) => FormState::Committed,
                Err(err) => return self.report(err),
            }
        } else {
            let editor = resolve_editor(&self.logbook.config.editor);
            let entries = &mut self.logbook.entries;
            let mut form = EntryForm::new(
                FormConfig::new(|fields: EntryFields| {
                    entries.edit(selected, &fields.title, &fields.content)
                })
                .with_initial_values(current),
            );
            form.begin();
            let buffer = create_editor_buffer(&editor, &form.render_buffer())?;
            match form.complete_with_buffer(&buffer) {
                Ok(_) => form.finish(),
                Err(FormError::Submit(err)) => {
                    drop(form);
                    return self.report(err);
                }
                Err(err) => return Err(err.into()),
            }
        };

        match state {
            FormState::Committed => self.renderer.print_info(&format!("Edited entry {position}.")),
            _ => self.renderer.print_info("Edit cancelled, nothing changed."),
        }
        Ok(CliModeResult::Finish)
    }

    pub fn delete_mode(&mut self) -> Result<CliModeResult> {
        let Some(position) = self.cli.delete else {
            return Ok(CliModeResult::NothingToDo);
        };

        match self.logbook.entries.delete(selection(position)) {
            Ok(()) => {
                self.renderer
                    .print_info(&format!("Deleted entry {position}."));
                Ok(CliModeResult::Finish)
            }
            Err(err) => self.report(err),
        }
    }

    /// Selection problems are shown and the run ends normally; storage failures abort.
    fn report(&self, err: LogbookError) -> Result<CliModeResult> {
        match err {
            LogbookError::Selection(sel) => {
                self.renderer.print_notice(&sel.to_string());
                Ok(CliModeResult::Finish)
            }
            LogbookError::Storage(storage) => Err(storage.into()),
        }
    }
}
