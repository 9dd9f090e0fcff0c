//! The editable text surface the editor drives

use crate::lines::char_len;
use crate::selection::Selection;

/// An editable text widget: it owns the visible text, the selection and focus.
///
/// The editor reads the selection at the start of each command and writes the
/// desired selection back once the surface shows the new text.
pub trait TextSurface {
    /// Text currently shown by the surface
    fn value(&self) -> &str;

    /// Current selection in char offsets
    fn selection(&self) -> Selection;

    /// Replace the shown text
    fn set_value(&mut self, value: &str);

    /// Move the selection
    fn set_selection_range(&mut self, selection: Selection);

    /// Give the surface input focus
    fn focus(&mut self);
}

/// In-memory surface, used by the command line host and tests
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySurface {
    value: String,
    selection: Selection,
    focused: bool,
}

impl MemorySurface {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    /// Builder-style selection, handy for setting up a cursor context
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Simulate the user typing over the selection
    pub fn type_text(&mut self, text: &str) {
        let prefix: String = self.value.chars().take(self.selection.start).collect();
        let suffix: String = self.value.chars().skip(self.selection.end).collect();
        self.value = format!("{prefix}{text}{suffix}");
        self.selection = Selection::cursor(self.selection.start + char_len(text));
    }
}

impl TextSurface for MemorySurface {
    fn value(&self) -> &str {
        &self.value
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        // Like a textarea, keep the old selection but never past the new end
        self.selection = self.selection.clamped(char_len(value));
    }

    fn set_selection_range(&mut self, selection: Selection) {
        self.selection = selection.clamped(char_len(&self.value));
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_value_clamps_selection() {
        let mut surface = MemorySurface::new("hello world").with_selection(Selection::new(6, 11));
        surface.set_value("hi");
        assert_eq!(surface.value(), "hi");
        assert_eq!(surface.selection(), Selection::new(2, 2));
    }

    #[test]
    fn test_focus() {
        let mut surface = MemorySurface::new("");
        assert!(!surface.is_focused());
        surface.focus();
        assert!(surface.is_focused());
    }

    #[test]
    fn test_type_text_replaces_selection() {
        let mut surface = MemorySurface::new("**(tip)**").with_selection(Selection::new(2, 7));
        surface.type_text("bold");
        assert_eq!(surface.value(), "**bold**");
        assert_eq!(surface.selection(), Selection::cursor(6));
    }
}
