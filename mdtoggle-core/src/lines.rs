//! Line indexing over a markdown buffer
//!
//! Every function here rebuilds its view of the buffer from scratch, so a
//! result can never go stale after the buffer is replaced. Offsets are char
//! offsets, and `\r\n`, `\r` and `\n` each count as a single line break.
//!
//! A cursor past the end of the buffer is treated as the end. Nothing here
//! reports it, so callers that take offsets from outside check them with
//! [`Selection::validate`](crate::selection::Selection::validate) first.

use ropey::Rope;

/// Where a cursor sits relative to the line that contains it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinePosition {
    /// 1-based line number
    pub number: usize,
    /// Line content without its terminator
    pub text: String,
    /// Char offset of the first char of the line
    pub start: usize,
    /// Distance in chars from `start` to the cursor
    pub offset: usize,
}

/// Number of lines in the buffer. An empty buffer has one (empty) line, and a
/// trailing line break opens a new empty line.
pub fn line_count(text: &str) -> usize {
    Rope::from_str(text).len_lines()
}

/// 1-based number of the line containing `cursor`, which is clamped to the
/// buffer end
pub fn current_line_number(text: &str, cursor: usize) -> usize {
    let rope = Rope::from_str(text);
    rope.char_to_line(cursor.min(rope.len_chars())) + 1
}

/// Text of a 1-based line, without its terminator
pub fn line_text(text: &str, line_number: usize) -> Option<String> {
    let rope = Rope::from_str(text);
    if line_number == 0 || line_number > rope.len_lines() {
        return None;
    }
    let line = rope.line(line_number - 1).to_string();
    Some(trim_line_break(&line).to_string())
}

/// Distance from the start of the containing line to `cursor`, clamped to
/// the buffer end
pub fn offset_within_line(text: &str, cursor: usize) -> usize {
    let rope = Rope::from_str(text);
    let cursor = cursor.min(rope.len_chars());
    cursor - rope.line_to_char(rope.char_to_line(cursor))
}

/// Char offset at which a 1-based line begins. Line numbers past the end map
/// to the end of the buffer.
pub fn line_start(text: &str, line_number: usize) -> usize {
    let rope = Rope::from_str(text);
    let idx = line_number.saturating_sub(1);
    if idx >= rope.len_lines() {
        return rope.len_chars();
    }
    rope.line_to_char(idx)
}

/// Resolve everything the toggles need to know about the cursor's line.
/// A cursor past the end resolves to the end of the last line.
pub fn locate(text: &str, cursor: usize) -> LinePosition {
    let rope = Rope::from_str(text);
    let cursor = cursor.min(rope.len_chars());
    let idx = rope.char_to_line(cursor);
    let start = rope.line_to_char(idx);
    let line = rope.line(idx).to_string();

    LinePosition {
        number: idx + 1,
        text: trim_line_break(&line).to_string(),
        start,
        offset: cursor - start,
    }
}

/// Split the buffer into lines, dropping the terminators
pub fn split_lines(text: &str) -> Vec<String> {
    Rope::from_str(text)
        .lines()
        .map(|line| trim_line_break(&line.to_string()).to_string())
        .collect()
}

/// Join lines back into a buffer.
///
/// Always emits `\n`, so buffers that used `\r\n` or `\r` come back normalized.
pub fn combine_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line.as_ref());
    }
    out
}

/// Number of chars in a string
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn trim_line_break(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .or_else(|| line.strip_suffix('\r'))
        .unwrap_or(line)
}
