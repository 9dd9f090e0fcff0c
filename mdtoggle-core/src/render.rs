//! HTML preview rendering

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Render markdown to HTML.
///
/// Emphasis written with a single underscore (`_text_`) renders as `<u>`
/// instead of `<em>`, matching the underline toggle. Asterisk emphasis and
/// strong emphasis are left alone.
pub fn render_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    // One entry per open emphasis: true when it was opened with '_'
    let mut underline_stack: Vec<bool> = Vec::new();

    let events = Parser::new_ext(markdown, options)
        .into_offset_iter()
        .map(|(event, range)| match event {
            Event::Start(Tag::Emphasis) => {
                let underline = markdown[range.start..].starts_with('_');
                underline_stack.push(underline);
                if underline {
                    Event::InlineHtml(CowStr::Borrowed("<u>"))
                } else {
                    Event::Start(Tag::Emphasis)
                }
            }
            Event::End(TagEnd::Emphasis) => {
                if underline_stack.pop().unwrap_or(false) {
                    Event::InlineHtml(CowStr::Borrowed("</u>"))
                } else {
                    Event::End(TagEnd::Emphasis)
                }
            }
            other => other,
        });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}
