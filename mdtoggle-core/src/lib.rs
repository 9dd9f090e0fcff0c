//! mdtoggle core - cursor-aware markdown notation toggling
//!
//! This crate holds everything that does not depend on a concrete widget:
//! - Line indexing and notation probing over a plain buffer
//! - The per-notation mutation engine
//! - The editor session and deferred selection restoration
//! - HTML preview rendering
//! - Configuration management

pub mod config;
pub mod deferred;
pub mod editor;
pub mod error;
pub mod lines;
pub mod mutate;
pub mod notation;
pub mod probe;
pub mod render;
pub mod selection;
pub mod surface;

// Re-export commonly used types
pub use config::Config;
pub use editor::{Command, MarkdownEditor};
pub use error::{EditError, EditResult};
pub use mutate::Edit;
pub use notation::NotationKind;
pub use selection::Selection;
pub use surface::{MemorySurface, TextSurface};
