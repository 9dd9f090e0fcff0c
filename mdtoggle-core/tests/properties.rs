//! Property tests for the line indexer and wrap mode

use mdtoggle_core::lines::{char_len, combine_lines, split_lines};
use mdtoggle_core::mutate;
use mdtoggle_core::{Config, NotationKind, Selection};
use proptest::prelude::*;

const WRAPPING: [NotationKind; 4] = [
    NotationKind::Bold,
    NotationKind::Italic,
    NotationKind::Underline,
    NotationKind::Strikethrough,
];

proptest! {
    #[test]
    fn newline_buffers_survive_split_and_combine(text in "[a-z #*\n]{0,64}") {
        prop_assert_eq!(combine_lines(&split_lines(&text)), text);
    }

    #[test]
    fn wrap_inserts_exactly_the_delimiters(
        text in "[a-zé *_~\n]{1,48}",
        a in 0usize..64,
        b in 0usize..64,
        which in 0usize..4,
    ) {
        let len = char_len(&text);
        let (a, b) = (a % (len + 1), b % (len + 1));
        let (start, end) = (a.min(b), a.max(b));
        prop_assume!(start < end);

        let kind = WRAPPING[which];
        let edit = mutate::toggle(&text, Selection::new(start, end), kind, &Config::default())
            .expect("selection in range")
            .expect("wrap always edits");

        let before: String = text.chars().take(start).collect();
        let selected: String = text.chars().skip(start).take(end - start).collect();
        let after: String = text.chars().skip(end).collect();

        prop_assert_eq!(
            &edit.text,
            &format!("{before}{}{selected}{}{after}", kind.open(), kind.close())
        );
        prop_assert_eq!(
            char_len(&edit.text),
            len + char_len(kind.open()) + char_len(kind.close())
        );
        prop_assert_eq!(edit.selected_text(), selected);
    }
}
