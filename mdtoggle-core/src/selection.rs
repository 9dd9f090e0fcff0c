//! Selection model over char offsets

use crate::error::{EditError, EditResult};

/// A cursor or highlighted span, as char offsets into the buffer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Create a selection spanning `start..end`
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a bare cursor at a single offset
    pub fn cursor(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// True when no text is highlighted
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Number of selected chars
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check the selection against a buffer of `len` chars.
    ///
    /// An inverted or out-of-bounds selection is a contract violation on the
    /// surface side and is reported rather than clamped.
    pub fn validate(&self, len: usize) -> EditResult<()> {
        if self.start > self.end || self.end > len {
            return Err(EditError::SelectionOutOfRange {
                start: self.start,
                end: self.end,
                len,
            });
        }
        Ok(())
    }

    /// Clamp both ends into `0..=len`, keeping `start <= end`
    pub fn clamped(&self, len: usize) -> Self {
        let end = self.end.min(len);
        Self {
            start: self.start.min(end),
            end,
        }
    }
}
