//! Per-notation buffer mutations
//!
//! Every function here is pure: it takes the buffer and a selection snapshot
//! and returns the next buffer together with the selection the surface should
//! show afterwards. Nothing is remembered between calls.
//!
//! Two strategies are shared by most notations:
//! - wrap mode surrounds a non-empty selection with delimiters;
//! - insert mode appends `open + tip + close` at the end of the buffer,
//!   preceded by a hard break when the cursor's line is not empty, and selects
//!   the tip so typing replaces it.
//!
//! Entry points that take a selection check it against the buffer first and
//! report an out-of-range or inverted selection instead of clamping it.

use ropey::Rope;

use crate::config::Config;
use crate::error::EditResult;
use crate::lines::{self, char_len, LinePosition};
use crate::notation::{NotationKind, HARD_BREAK};
use crate::probe::{self, MAX_HEADER_LEVEL};
use crate::selection::Selection;

/// Result of a mutation: the full new buffer and the selection to restore
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edit {
    pub text: String,
    pub selection: Selection,
}

impl Edit {
    /// The selected part of the new buffer
    pub fn selected_text(&self) -> String {
        self.text
            .chars()
            .skip(self.selection.start)
            .take(self.selection.len())
            .collect()
    }
}

/// Apply one notation toggle.
///
/// Returns `Ok(None)` when the command leaves the buffer untouched, which
/// only happens when an ordered list number cannot be derived from the line
/// above. Images inserted through here get an empty URL; use
/// [`insert_image`] to supply one.
pub fn toggle(
    buffer: &str,
    selection: Selection,
    kind: NotationKind,
    config: &Config,
) -> EditResult<Option<Edit>> {
    selection.validate(char_len(buffer))?;

    let edit = match kind {
        NotationKind::Bold
        | NotationKind::Italic
        | NotationKind::Underline
        | NotationKind::Strikethrough => Some(toggle_inline(buffer, selection, kind, &config.tip)),
        NotationKind::Blockquote | NotationKind::UnorderedListItem | NotationKind::Link => {
            let line = lines::locate(buffer, selection.start);
            Some(append_block(
                buffer,
                probe::is_line_empty(&line.text),
                kind.open(),
                &config.tip,
                kind.close(),
            ))
        }
        NotationKind::Header => Some(toggle_header(buffer, selection, &config.tip)),
        NotationKind::OrderedListItem => toggle_ordered_list(buffer, selection, &config.tip),
        NotationKind::Image => Some(append_block(
            buffer,
            buffer.is_empty(),
            kind.open(),
            &config.image_tip,
            kind.close(),
        )),
    };
    Ok(edit)
}

/// Surround the selection with `open` and `close`, keeping the original text
/// selected
pub fn wrap(buffer: &str, selection: Selection, open: &str, close: &str) -> EditResult<Edit> {
    selection.validate(char_len(buffer))?;
    Ok(splice_around(buffer, selection, open, close))
}

fn splice_around(buffer: &str, selection: Selection, open: &str, close: &str) -> Edit {
    let mut rope = Rope::from_str(buffer);
    rope.insert(selection.end, close);
    rope.insert(selection.start, open);

    let shift = char_len(open);
    Edit {
        text: rope.to_string(),
        selection: Selection::new(selection.start + shift, selection.end + shift),
    }
}

/// Append `open + tip + close` to the end of the buffer and select the tip.
///
/// The block lands at the buffer end regardless of where the cursor is. A hard
/// break is emitted first unless `line_empty` says the cursor's line is empty.
pub fn append_block(buffer: &str, line_empty: bool, open: &str, tip: &str, close: &str) -> Edit {
    let mut text = String::with_capacity(
        buffer.len() + HARD_BREAK.len() + open.len() + tip.len() + close.len(),
    );
    text.push_str(buffer);
    if !line_empty {
        text.push_str(HARD_BREAK);
    }
    text.push_str(open);
    text.push_str(tip);
    text.push_str(close);

    let tip_end = char_len(&text) - char_len(close);
    Edit {
        selection: Selection::new(tip_end - char_len(tip), tip_end),
        text,
    }
}

/// Replace the selection with `insert`, leaving the cursor after it
pub fn insert_text(buffer: &str, selection: Selection, insert: &str) -> EditResult<Edit> {
    selection.validate(char_len(buffer))?;

    let mut rope = Rope::from_str(buffer);
    rope.remove(selection.start..selection.end);
    rope.insert(selection.start, insert);

    Ok(Edit {
        text: rope.to_string(),
        selection: Selection::cursor(selection.start + char_len(insert)),
    })
}

/// Wrap the selection with arbitrary delimiters. With a bare cursor the pair
/// is inserted at the cursor and the cursor is placed between them.
pub fn wrap_with(buffer: &str, selection: Selection, open: &str, close: &str) -> EditResult<Edit> {
    if !selection.is_collapsed() {
        return wrap(buffer, selection, open, close);
    }

    let mut edit = insert_text(buffer, selection, &format!("{open}{close}"))?;
    edit.selection = Selection::cursor(selection.start + char_len(open));
    Ok(edit)
}

/// Append an image with the given URL. The hard break depends on whether the
/// buffer is empty, not on the cursor's line.
pub fn insert_image(buffer: &str, url: &str, tip: &str) -> Edit {
    append_block(
        buffer,
        buffer.is_empty(),
        NotationKind::Image.open(),
        tip,
        &format!("]({url})"),
    )
}

fn toggle_inline(buffer: &str, selection: Selection, kind: NotationKind, tip: &str) -> Edit {
    if !selection.is_collapsed() {
        return splice_around(buffer, selection, kind.open(), kind.close());
    }

    let line = lines::locate(buffer, selection.start);
    if let Some(span) = probe::enclosing_tag_span(&line.text, kind.open(), line.offset) {
        return unwrap_span(buffer, &line, &span, kind);
    }

    append_block(
        buffer,
        probe::is_line_empty(&line.text),
        kind.open(),
        tip,
        kind.close(),
    )
}

/// Remove the delimiter pair around the cursor, keeping the cursor on the
/// same char of the enclosed text
fn unwrap_span(
    buffer: &str,
    line: &LinePosition,
    span: &probe::TagSpan,
    kind: NotationKind,
) -> Edit {
    let open_len = char_len(kind.open());
    let close_len = char_len(kind.close());
    let close = line.start + span.close();
    let open = line.start + span.open;

    let mut rope = Rope::from_str(buffer);
    rope.remove(close..close + close_len);
    rope.remove(open..open + open_len);

    Edit {
        text: rope.to_string(),
        selection: Selection::cursor(line.start + line.offset - open_len),
    }
}

/// Cycle the cursor line's header level 0 -> 1 -> ... -> 6 -> 0
fn toggle_header(buffer: &str, selection: Selection, tip: &str) -> Edit {
    let line = lines::locate(buffer, selection.start);
    let level = probe::header_level(&line.text, MAX_HEADER_LEVEL);

    if level == 0 && probe::is_line_empty(&line.text) {
        return append_block(buffer, true, NotationKind::Header.open(), tip, "");
    }

    let (new_line, offset) = match level {
        0 if line.text.starts_with(' ') => (format!("#{}", line.text), line.offset + 1),
        0 => (format!("# {}", line.text), line.offset + 2),
        MAX_HEADER_LEVEL => {
            let rest = line.text.trim_start_matches('#');
            let removed = char_len(&line.text) - char_len(rest);
            (rest.to_string(), line.offset.saturating_sub(removed))
        }
        _ => (format!("#{}", line.text), line.offset + 1),
    };

    replace_line(buffer, &line, new_line, offset)
}

/// Prefix the cursor line with the next ordered list number, or append a new
/// numbered item when the line is empty
fn toggle_ordered_list(buffer: &str, selection: Selection, tip: &str) -> Option<Edit> {
    let line = lines::locate(buffer, selection.start);

    let counter = if line.number == 1 {
        1
    } else {
        let previous = lines::line_text(buffer, line.number - 1).unwrap_or_default();
        if probe::is_ordered_list_line(&previous) {
            probe::ordered_list_number(&previous)?.checked_add(1)?
        } else {
            1
        }
    };

    let prefix = format!("{counter}{}", NotationKind::OrderedListItem.open());
    if probe::is_line_empty(&line.text) {
        return Some(append_block(buffer, true, &prefix, tip, ""));
    }

    let offset = line.offset + char_len(&prefix);
    Some(replace_line(
        buffer,
        &line,
        format!("{prefix}{}", line.text),
        offset,
    ))
}

/// Swap one line for `new_line` and put the cursor `offset` chars into it.
/// All lines are rejoined with `\n`.
fn replace_line(buffer: &str, line: &LinePosition, new_line: String, offset: usize) -> Edit {
    let mut all = lines::split_lines(buffer);
    let idx = line.number - 1;
    let offset = offset.min(char_len(&new_line));
    all[idx] = new_line;

    let start: usize = all[..idx].iter().map(|l| char_len(l) + 1).sum();
    Edit {
        text: lines::combine_lines(&all),
        selection: Selection::cursor(start + offset),
    }
}
