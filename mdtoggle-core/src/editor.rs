//! Editor session: routes notation commands to the mutation engine
//!
//! The editor owns the markdown buffer and a revision counter. Each command
//! reads the selection from the attached surface, computes the next buffer,
//! and schedules the resulting selection. The host then calls
//! [`MarkdownEditor::tick`] to push the buffer into the surface and restore
//! the selection once the surface shows the new text.

use crate::config::Config;
use crate::deferred::SelectionScheduler;
use crate::error::{EditError, EditResult};
use crate::lines::char_len;
use crate::mutate::{self, Edit};
use crate::notation::NotationKind;
use crate::render;
use crate::selection::Selection;
use crate::surface::TextSurface;

/// A single user command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Toggle or insert a notation
    Toggle(NotationKind),
    /// Append an image pointing at `url`
    Image { url: String },
    /// Replace the selection with raw text
    InsertText(String),
    /// Wrap the selection with arbitrary delimiters
    Wrap { open: String, close: String },
}

pub struct MarkdownEditor<S: TextSurface> {
    config: Config,
    buffer: String,
    rev: u64,
    surface: Option<S>,
    scheduler: SelectionScheduler,
}

impl<S: TextSurface> MarkdownEditor<S> {
    /// Create an editor with an empty buffer
    pub fn new(config: Config) -> Self {
        Self::with_buffer(config, String::new())
    }

    /// Create an editor over existing markdown
    pub fn with_buffer(config: Config, buffer: impl Into<String>) -> Self {
        Self {
            config,
            buffer: buffer.into(),
            rev: 1,
            surface: None,
            scheduler: SelectionScheduler::new(),
        }
    }

    /// Attach a text surface and show the current buffer on it
    pub fn attach(&mut self, mut surface: S) {
        surface.set_value(&self.buffer);
        self.surface = Some(surface);
    }

    /// Detach and return the surface
    pub fn detach(&mut self) -> Option<S> {
        self.surface.take()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Buffer revision, bumped on every replacement
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Take text typed into the surface as the new buffer
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.rev += 1;
    }

    /// HTML preview of the current buffer
    pub fn html(&self) -> String {
        render::render_html(&self.buffer)
    }

    /// Run a command. Returns whether the buffer changed.
    pub fn execute(&mut self, command: Command) -> EditResult<bool> {
        match command {
            Command::Toggle(kind) => self.toggle(kind),
            Command::Image { url } => self.insert_image(&url),
            Command::InsertText(text) => self.insert_at_cursor(&text),
            Command::Wrap { open, close } => self.wrap_selection(&open, &close),
        }
    }

    /// Toggle or insert a notation at the surface's cursor
    pub fn toggle(&mut self, kind: NotationKind) -> EditResult<bool> {
        let selection = self.snapshot()?;
        log::debug!(
            "Toggle {} at {}..{} (rev {})",
            kind,
            selection.start,
            selection.end,
            self.rev
        );

        match mutate::toggle(&self.buffer, selection, kind, &self.config)? {
            Some(edit) => {
                self.commit(edit);
                Ok(true)
            }
            None => {
                log::debug!("Toggle {} left the buffer unchanged", kind);
                Ok(false)
            }
        }
    }

    pub fn toggle_bold(&mut self) -> EditResult<bool> {
        self.toggle(NotationKind::Bold)
    }

    pub fn toggle_italic(&mut self) -> EditResult<bool> {
        self.toggle(NotationKind::Italic)
    }

    pub fn toggle_underline(&mut self) -> EditResult<bool> {
        self.toggle(NotationKind::Underline)
    }

    pub fn toggle_strikethrough(&mut self) -> EditResult<bool> {
        self.toggle(NotationKind::Strikethrough)
    }

    pub fn toggle_blockquote(&mut self) -> EditResult<bool> {
        self.toggle(NotationKind::Blockquote)
    }

    pub fn toggle_ordered_list(&mut self) -> EditResult<bool> {
        self.toggle(NotationKind::OrderedListItem)
    }

    pub fn toggle_unordered_list(&mut self) -> EditResult<bool> {
        self.toggle(NotationKind::UnorderedListItem)
    }

    pub fn toggle_header(&mut self) -> EditResult<bool> {
        self.toggle(NotationKind::Header)
    }

    pub fn insert_link(&mut self) -> EditResult<bool> {
        self.toggle(NotationKind::Link)
    }

    /// Append an image block with the configured alt-text placeholder
    pub fn insert_image(&mut self, url: &str) -> EditResult<bool> {
        let selection = self.snapshot()?;
        log::debug!("Insert image {} at {} (rev {})", url, selection.start, self.rev);
        let edit = mutate::insert_image(&self.buffer, url, &self.config.image_tip);
        self.commit(edit);
        Ok(true)
    }

    /// Replace the current selection with `text`
    pub fn insert_at_cursor(&mut self, text: &str) -> EditResult<bool> {
        let selection = self.snapshot()?;
        let edit = mutate::insert_text(&self.buffer, selection, text)?;
        let changed = edit.text != self.buffer;
        self.commit(edit);
        Ok(changed)
    }

    /// Wrap the current selection with `open` and `close`
    pub fn wrap_selection(&mut self, open: &str, close: &str) -> EditResult<bool> {
        let selection = self.snapshot()?;
        let edit = mutate::wrap_with(&self.buffer, selection, open, close)?;
        let changed = edit.text != self.buffer;
        self.commit(edit);
        Ok(changed)
    }

    /// Push the buffer into the surface if it shows something else.
    /// Returns whether the surface was updated.
    pub fn sync_surface(&mut self) -> bool {
        match self.surface.as_mut() {
            Some(surface) if surface.value() != self.buffer => {
                surface.set_value(&self.buffer);
                true
            }
            _ => false,
        }
    }

    /// Restore the latest scheduled selection if the surface is in sync
    pub fn apply_pending_selection(&mut self) -> Option<Selection> {
        let surface = self.surface.as_mut()?;
        self.scheduler.run_pending(surface, self.rev, &self.buffer)
    }

    /// One host turn: update the surface, then restore the selection
    pub fn tick(&mut self) -> Option<Selection> {
        self.sync_surface();
        self.apply_pending_selection()
    }

    /// Read and check the surface's selection
    fn snapshot(&self) -> EditResult<Selection> {
        let surface = self.surface.as_ref().ok_or(EditError::SurfaceDetached)?;
        let selection = surface.selection();
        selection.validate(char_len(&self.buffer))?;
        Ok(selection)
    }

    fn commit(&mut self, edit: Edit) {
        self.buffer = edit.text;
        self.rev += 1;
        self.scheduler.schedule(self.rev, edit.selection);
    }
}
