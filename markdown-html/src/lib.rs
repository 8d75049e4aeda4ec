//! Markdown to HTML conversion for news bodies.
//!
//! Wraps pulldown-cmark with the syntax extensions news posts are written
//! with:
//!
//! - raw HTML passes through untouched
//! - bare URLs become links
//! - single newlines become `<br />`
//! - smart quotes, dashes, ellipses and `(c)` / `(r)` / `(tm)` / `+-`
//! - emoji shortcodes (`:tada:`) and emoticons (`:)`)
//! - footnotes, `~sub~`, `^sup^`, tables, strikethrough, definition lists
//! - abbreviations (`*[HTML]: Hyper Text Markup Language`)
//! - `==mark==` and `++ins++`
//! - `::: warning` containers
//!
//! The output is **not** sanitized. Callers insert it as raw markup and must
//! trust the source.
//!
//! ```rust
//! use markdown_html::render_markdown;
//!
//! let html = render_markdown("# Hello\n\nWorld :wave:");
//! assert!(html.contains("<h1>Hello</h1>"));
//! assert!(html.contains("👋"));
//! assert_eq!(render_markdown(""), "");
//! ```

mod blocks;
mod emoji;
mod inline;
mod spans;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html};

use crate::blocks::Preprocessed;
use crate::inline::InlineRules;
use crate::spans::Segment;

/// CSS classes placed on the `<div>` wrapping a warning container.
pub const WARNING_CONTAINER_CLASS: &str = "custom-container warning";

// `^` is left to the span pass. Subscript stays on so a single `~` never
// turns into strikethrough.
fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_SMART_PUNCTUATION
        | Options::ENABLE_SUBSCRIPT
        | Options::ENABLE_DEFINITION_LIST
}

/// Render a news body to HTML.
///
/// Empty or whitespace-only input renders to an empty string. The function
/// is pure: equal input always gives equal output.
pub fn render_markdown(markdown: &str) -> String {
    if markdown.trim().is_empty() {
        return String::new();
    }

    let Preprocessed {
        source,
        abbreviations,
    } = blocks::preprocess(markdown);
    let rules = InlineRules::new(abbreviations);

    let parsed = Parser::new_ext(&source, parser_options())
        .into_offset_iter()
        .collect();

    let mut link_depth = 0usize;
    let events = spans::resolve(&source, parsed)
        .into_iter()
        .map(|segment| match segment {
            Segment::Event(event) => match event {
                Event::Start(Tag::Link { .. }) => {
                    link_depth += 1;
                    event
                }
                Event::End(TagEnd::Link) => {
                    link_depth = link_depth.saturating_sub(1);
                    event
                }
                Event::SoftBreak => Event::HardBreak,
                other => other,
            },
            Segment::Text(text) => match rules.apply(&text, link_depth == 0) {
                Some(markup) => Event::InlineHtml(markup.into()),
                None => Event::Text(text.into()),
            },
            Segment::Script { tag, content } => Event::InlineHtml(
                format!("<{tag}>{}</{tag}>", rules.render(&content, false)).into(),
            ),
            Segment::Open(tag) => Event::InlineHtml(format!("<{tag}>").into()),
            Segment::Close(tag) => Event::InlineHtml(format!("</{tag}>").into()),
        });

    let mut html_output = String::new();
    html::push_html(&mut html_output, events);
    html_output
}
