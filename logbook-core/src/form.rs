//! A data-entry form for one entry.
//!
//! The form is a plain value configured with labels, optional initial values and two
//! callbacks. Whatever front end shows it drives the state machine:
//!
//! ```text
//! Idle --begin--> AwaitingInput --submit--> Committed --finish--> Idle
//!                               --cancel--> Discarded --finish--> Idle
//! ```

use crate::entry::EntryFields;
use crate::error::LogbookError;
use thiserror::Error;

pub type SubmitFn<'a> = Box<dyn FnMut(EntryFields) -> Result<(), LogbookError> + 'a>;
pub type CancelFn<'a> = Box<dyn FnMut() + 'a>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    AwaitingInput,
    Committed,
    Discarded,
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("the form is {0:?}, not awaiting input")]
    NotAwaitingInput(FormState),
    #[error(transparent)]
    Submit(#[from] LogbookError),
}

pub struct FormConfig<'a> {
    pub title_label: String,
    pub content_label: String,
    /// Prefilled values, used when editing an existing entry.
    pub initial_values: Option<EntryFields>,
    pub on_submit: SubmitFn<'a>,
    pub on_cancel: CancelFn<'a>,
}

impl<'a> FormConfig<'a> {
    /// `Title:` / `Content:` labels, no initial values, no-op cancel.
    pub fn new(on_submit: impl FnMut(EntryFields) -> Result<(), LogbookError> + 'a) -> Self {
        Self {
            title_label: "Title:".to_string(),
            content_label: "Content:".to_string(),
            initial_values: None,
            on_submit: Box::new(on_submit),
            on_cancel: Box::new(|| {}),
        }
    }

    pub fn with_initial_values(mut self, fields: EntryFields) -> Self {
        self.initial_values = Some(fields);
        self
    }

    pub fn on_cancel(mut self, on_cancel: impl FnMut() + 'a) -> Self {
        self.on_cancel = Box::new(on_cancel);
        self
    }
}

pub struct EntryForm<'a> {
    config: FormConfig<'a>,
    state: FormState,
}

impl<'a> EntryForm<'a> {
    pub fn new(config: FormConfig<'a>) -> Self {
        Self {
            config,
            state: FormState::Idle,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn title_label(&self) -> &str {
        &self.config.title_label
    }

    pub fn content_label(&self) -> &str {
        &self.config.content_label
    }

    /// Values the form opens with; empty when adding.
    pub fn initial_values(&self) -> EntryFields {
        self.config.initial_values.clone().unwrap_or_default()
    }

    /// The user started composing.
    pub fn begin(&mut self) {
        self.state = FormState::AwaitingInput;
    }

    /// Hands the fields to `on_submit`. A failed submit leaves the form idle.
    pub fn submit(&mut self, fields: EntryFields) -> Result<(), FormError> {
        self.expect_awaiting()?;
        match (self.config.on_submit)(fields) {
            Ok(()) => {
                self.state = FormState::Committed;
                Ok(())
            }
            Err(err) => {
                self.state = FormState::Idle;
                Err(err.into())
            }
        }
    }

    pub fn cancel(&mut self) -> Result<(), FormError> {
        self.expect_awaiting()?;
        (self.config.on_cancel)();
        self.state = FormState::Discarded;
        Ok(())
    }

    /// Back to idle once the outcome has been handled.
    pub fn finish(&mut self) -> FormState {
        std::mem::replace(&mut self.state, FormState::Idle)
    }

    /// Submits the parsed buffer, or cancels when the buffer is empty.
    pub fn complete_with_buffer(&mut self, buffer: &str) -> Result<FormState, FormError> {
        match self.parse_buffer(buffer) {
            Some(fields) => self.submit(fields)?,
            None => self.cancel()?,
        }
        Ok(self.state)
    }

    /// Text version of the form, for editing in a plain text editor.
    ///
    /// ```text
    /// Title: <title>
    /// Content:
    /// <content>
    /// ```
    pub fn render_buffer(&self) -> String {
        let initial = self.initial_values();
        let mut buffer = format!(
            "{} {}\n{}\n",
            self.title_label(),
            initial.title,
            self.content_label()
        );
        if !initial.content.is_empty() {
            buffer.push_str(&initial.content);
            buffer.push('\n');
        }
        buffer
    }

    /// Reads the fields back from a buffer produced by [`render_buffer`](Self::render_buffer).
    ///
    /// Returns `None` when the buffer holds only whitespace, which counts as cancelling.
    /// A buffer without the title label is read as a title line followed by content,
    /// unless its first line is the content label, in which case the title is empty.
    pub fn parse_buffer(&self, buffer: &str) -> Option<EntryFields> {
        if buffer.trim().is_empty() {
            return None;
        }

        let (first, rest) = buffer.split_once('\n').unwrap_or((buffer, ""));
        let first = first.trim_end_matches('\r');
        if first.trim_end() == self.content_label() {
            return Some(EntryFields::new("", rest));
        }
        let title = match first.strip_prefix(self.title_label()) {
            Some(t) => t.strip_prefix(' ').unwrap_or(t),
            None => first,
        };

        let content = match rest.split_once('\n') {
            Some((line, body)) if line.trim_end() == self.content_label() => body,
            None if rest.trim_end() == self.content_label() => "",
            _ => rest,
        };

        Some(EntryFields::new(title, content))
    }

    fn expect_awaiting(&self) -> Result<(), FormError> {
        if self.state == FormState::AwaitingInput {
            Ok(())
        } else {
            Err(FormError::NotAwaitingInput(self.state))
        }
    }
}
