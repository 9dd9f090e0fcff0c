//! Markdown notation kinds and their delimiters

use std::fmt;
use std::str::FromStr;

/// Sequence that forces a line break in the rendered output
pub const HARD_BREAK: &str = "  \n";

/// The notations the editor can toggle or insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotationKind {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Blockquote,
    OrderedListItem,
    UnorderedListItem,
    Header,
    Link,
    Image,
}

impl NotationKind {
    pub const ALL: [NotationKind; 10] = [
        NotationKind::Bold,
        NotationKind::Italic,
        NotationKind::Underline,
        NotationKind::Strikethrough,
        NotationKind::Blockquote,
        NotationKind::OrderedListItem,
        NotationKind::UnorderedListItem,
        NotationKind::Header,
        NotationKind::Link,
        NotationKind::Image,
    ];

    /// Opening delimiter of a freshly inserted block. An ordered list item
    /// opens with its computed number followed by this marker, and a header
    /// grows by one `#` per level from here.
    pub fn open(&self) -> &'static str {
        match self {
            NotationKind::Bold => "**",
            NotationKind::Italic => "*",
            NotationKind::Underline => "_",
            NotationKind::Strikethrough => "~~",
            NotationKind::Blockquote => ">",
            NotationKind::OrderedListItem => ". ",
            NotationKind::UnorderedListItem => "- ",
            NotationKind::Header => "# ",
            NotationKind::Link => "[",
            NotationKind::Image => "![",
        }
    }

    /// Closing delimiter for a freshly inserted block. The image URL is
    /// spliced in separately.
    pub fn close(&self) -> &'static str {
        match self {
            NotationKind::Bold => "**",
            NotationKind::Italic => "*",
            NotationKind::Underline => "_",
            NotationKind::Strikethrough => "~~",
            NotationKind::Link => "](https://)",
            NotationKind::Image => "]()",
            NotationKind::Blockquote
            | NotationKind::OrderedListItem
            | NotationKind::UnorderedListItem
            | NotationKind::Header => "",
        }
    }

    /// Inline emphasis kinds that wrap a non-empty selection
    pub fn wraps_selection(&self) -> bool {
        matches!(
            self,
            NotationKind::Bold
                | NotationKind::Italic
                | NotationKind::Underline
                | NotationKind::Strikethrough
        )
    }

    fn as_str(&self) -> &'static str {
        match self {
            NotationKind::Bold => "bold",
            NotationKind::Italic => "italic",
            NotationKind::Underline => "underline",
            NotationKind::Strikethrough => "strikethrough",
            NotationKind::Blockquote => "blockquote",
            NotationKind::OrderedListItem => "ordered-list",
            NotationKind::UnorderedListItem => "unordered-list",
            NotationKind::Header => "header",
            NotationKind::Link => "link",
            NotationKind::Image => "image",
        }
    }
}

impl fmt::Display for NotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotationKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NotationKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown notation: {}", s))
    }
}
