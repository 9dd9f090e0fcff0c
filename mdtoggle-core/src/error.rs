//! Error types for editor commands

use thiserror::Error;

/// Errors raised by commands that need live cursor context
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// A command ran before a text surface was attached
    #[error("text surface is not attached")]
    SurfaceDetached,

    /// The surface reported a selection that does not fit the buffer
    #[error("selection {start}..{end} is out of range for a buffer of {len} chars")]
    SelectionOutOfRange { start: usize, end: usize, len: usize },
}

pub type EditResult<T> = std::result::Result<T, EditError>;
