//! Detection of notation already present on a line

use std::ops::Range;

use crate::notation::NotationKind;

/// Deepest ATX header level
pub const MAX_HEADER_LEVEL: usize = 6;

/// Header level of a line: the length of its leading `#` run.
///
/// At most `max_level + 1` chars are probed; a run longer than `max_level`
/// reports `max_level`.
pub fn header_level(line: &str, max_level: usize) -> usize {
    let probed = line
        .chars()
        .take(max_level + 1)
        .take_while(|&c| c == '#')
        .count();
    probed.min(max_level)
}

/// True if the line starts with `<digits>. `
pub fn is_ordered_list_line(line: &str) -> bool {
    ordered_list_digits(line).is_some()
}

/// Number of an ordered list line, or `None` if the line is not one or its
/// number does not fit
pub fn ordered_list_number(line: &str) -> Option<usize> {
    ordered_list_digits(line)?.parse().ok()
}

/// Literal emptiness test; whitespace-only lines are not empty
pub fn is_line_empty(line: &str) -> bool {
    line.is_empty()
}

fn ordered_list_digits(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || !line[digits..].starts_with(NotationKind::OrderedListItem.open()) {
        return None;
    }
    Some(&line[..digits])
}

/// An inline span enclosed by a delimiter pair, in char offsets within a line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagSpan {
    /// Index of the enclosed segment when the line is split on the delimiter
    pub segment: usize,
    /// Offset of the opening delimiter
    pub open: usize,
    /// Enclosed text, between the delimiters
    pub inner: Range<usize>,
}

impl TagSpan {
    /// Offset of the closing delimiter
    pub fn close(&self) -> usize {
        self.inner.end
    }
}

/// Index of the delimiter-split segment holding the cursor, when that segment
/// sits between an opening and a closing delimiter
pub fn inline_tag_boundary_index(line: &str, delimiter: &str, cursor: usize) -> Option<usize> {
    enclosing_tag_span(line, delimiter, cursor).map(|span| span.segment)
}

/// The delimiter pair around `cursor` on this line, if any.
///
/// Splitting on the delimiter alternates outside/inside segments, so only odd
/// segments that are not the last one are enclosed. A cursor in the first or
/// last segment, or in the middle of a delimiter, is not inside a pair.
///
/// Delimiters made of one repeated char only count as a whole run: with `*`,
/// the `**` of a bold pair is plain text rather than two italic delimiters.
pub fn enclosing_tag_span(line: &str, delimiter: &str, cursor: usize) -> Option<TagSpan> {
    let line: Vec<char> = line.chars().collect();
    let delimiter: Vec<char> = delimiter.chars().collect();
    if delimiter.is_empty() {
        return None;
    }

    let positions = delimiter_positions(&line, &delimiter);
    let last = positions.len();

    let mut seg_start = 0;
    for segment in 0..=last {
        let seg_end = positions.get(segment).copied().unwrap_or(line.len());
        if (seg_start..=seg_end).contains(&cursor) {
            if segment % 2 == 0 || segment == last {
                return None;
            }
            return Some(TagSpan {
                segment,
                open: positions[segment - 1],
                inner: seg_start..seg_end,
            });
        }
        seg_start = seg_end + delimiter.len();
    }

    None
}

/// Char offsets where a delimiter starts, scanning left to right without
/// overlap
fn delimiter_positions(line: &[char], delimiter: &[char]) -> Vec<usize> {
    let mut positions = Vec::new();
    let first = delimiter[0];

    if delimiter.iter().all(|&c| c == first) {
        let mut i = 0;
        while i < line.len() {
            if line[i] != first {
                i += 1;
                continue;
            }
            let run = line[i..].iter().take_while(|&&c| c == first).count();
            if run == delimiter.len() {
                positions.push(i);
            }
            i += run;
        }
        return positions;
    }

    let mut i = 0;
    while i + delimiter.len() <= line.len() {
        if line[i..i + delimiter.len()] == *delimiter {
            positions.push(i);
            i += delimiter.len();
        } else {
            i += 1;
        }
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_levels() {
        assert_eq!(header_level("plain", MAX_HEADER_LEVEL), 0);
        assert_eq!(header_level("", MAX_HEADER_LEVEL), 0);
        assert_eq!(header_level("# H1", MAX_HEADER_LEVEL), 1);
        assert_eq!(header_level("### H3", MAX_HEADER_LEVEL), 3);
        assert_eq!(header_level("###### H6", MAX_HEADER_LEVEL), 6);
    }

    #[test]
    fn test_header_level_overshoot_caps() {
        assert_eq!(header_level("####### seven", MAX_HEADER_LEVEL), 6);
        assert_eq!(header_level("##########", MAX_HEADER_LEVEL), 6);
        assert_eq!(header_level("####", 2), 2);
    }

    #[test]
    fn test_header_needs_leading_hash() {
        assert_eq!(header_level(" # indented", MAX_HEADER_LEVEL), 0);
        assert_eq!(header_level("Not a #heading", MAX_HEADER_LEVEL), 0);
    }

    #[test]
    fn test_ordered_list_lines() {
        assert!(is_ordered_list_line("1. pear"));
        assert!(is_ordered_list_line("42. answer"));
        assert!(is_ordered_list_line("3. "));
        assert!(!is_ordered_list_line("1.pear"));
        assert!(!is_ordered_list_line(". pear"));
        assert!(!is_ordered_list_line("apple"));
        assert!(!is_ordered_list_line(" 1. indented"));
    }

    #[test]
    fn test_ordered_list_number() {
        assert_eq!(ordered_list_number("1. pear"), Some(1));
        assert_eq!(ordered_list_number("17. x"), Some(17));
        assert_eq!(ordered_list_number("apple"), None);
    }

    #[test]
    fn test_ordered_list_number_overflow() {
        let line = "99999999999999999999999999999. huge";
        assert!(is_ordered_list_line(line));
        assert_eq!(ordered_list_number(line), None);
    }

    #[test]
    fn test_is_line_empty() {
        assert!(is_line_empty(""));
        assert!(!is_line_empty(" "));
        assert!(!is_line_empty("text"));
    }

    #[test]
    fn test_cursor_inside_bold() {
        let line = "a **bold** c";
        assert_eq!(inline_tag_boundary_index(line, "**", 5), Some(1));
        let span = enclosing_tag_span(line, "**", 5).unwrap();
        assert_eq!(span.open, 2);
        assert_eq!(span.inner, 4..8);
        assert_eq!(span.close(), 8);
    }

    #[test]
    fn test_cursor_at_inner_edges() {
        let line = "a **bold** c";
        assert_eq!(inline_tag_boundary_index(line, "**", 4), Some(1));
        assert_eq!(inline_tag_boundary_index(line, "**", 8), Some(1));
    }

    #[test]
    fn test_cursor_outside_pair() {
        let line = "a **bold** c";
        assert_eq!(inline_tag_boundary_index(line, "**", 0), None);
        assert_eq!(inline_tag_boundary_index(line, "**", 2), None);
        assert_eq!(inline_tag_boundary_index(line, "**", 11), None);
    }

    #[test]
    fn test_cursor_between_two_pairs() {
        let line = "**a** b **c**";
        assert_eq!(inline_tag_boundary_index(line, "**", 6), None);
        assert_eq!(inline_tag_boundary_index(line, "**", 10), Some(3));
    }

    #[test]
    fn test_unclosed_delimiter() {
        assert_eq!(inline_tag_boundary_index("a ~~open", "~~", 6), None);
    }

    #[test]
    fn test_span_with_multibyte_text() {
        let span = enclosing_tag_span("é _ünder_ x", "_", 4).unwrap();
        assert_eq!(span.open, 2);
        assert_eq!(span.inner, 3..8);
    }

    #[test]
    fn test_italic_ignores_bold_runs() {
        let line = "**a b**";
        assert_eq!(inline_tag_boundary_index(line, "*", 1), None);
        assert_eq!(inline_tag_boundary_index(line, "*", 3), None);
        assert_eq!(inline_tag_boundary_index(line, "*", 6), None);
        assert_eq!(inline_tag_boundary_index(line, "**", 3), Some(1));
    }

    #[test]
    fn test_stray_single_star_before_bold() {
        let line = "a*b **bold**";
        assert_eq!(inline_tag_boundary_index(line, "*", 7), None);
        assert_eq!(inline_tag_boundary_index(line, "**", 7), Some(1));
    }

    #[test]
    fn test_cursor_inside_bold_delimiter() {
        assert_eq!(inline_tag_boundary_index("**a**", "**", 1), None);
        assert_eq!(inline_tag_boundary_index("**a**", "**", 4), None);
    }

    #[test]
    fn test_longer_runs_are_not_delimiters() {
        assert_eq!(inline_tag_boundary_index("***a***", "**", 3), None);
        assert_eq!(inline_tag_boundary_index("a ~~~b~~~", "~~", 6), None);
    }

    #[test]
    fn test_mixed_char_delimiter() {
        let span = enclosing_tag_span("x <!a!> y", "<!", 4);
        assert_eq!(span, None);
        let span = enclosing_tag_span("<!a<!b", "<!", 2).unwrap();
        assert_eq!(span.open, 0);
        assert_eq!(span.inner, 2..3);
    }

    #[test]
    fn test_empty_delimiter() {
        assert_eq!(enclosing_tag_span("text", "", 1), None);
    }
}
