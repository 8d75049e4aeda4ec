//! Inline delimiters pulldown-cmark has no rules for: `==mark==`,
//! `++ins++`, `~sub~` and `^sup^`.
//!
//! Consecutive text events are merged into runs of [`Glyph`]s that remember
//! which characters were backslash-escaped. `~sub~` and `^sup^` are matched
//! inside one run and may not contain unescaped whitespace. `==` and `++`
//! are paired across the events of a block, so they can wrap emphasis,
//! links and other inline markup, as long as opener and closer sit at the
//! same nesting depth.

use pulldown_cmark::{Event, Tag, TagEnd};
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Glyph {
    ch: char,
    escaped: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Literal,
    Open,
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Text(String),
    Script { tag: &'static str, content: String },
    Delim {
        marker: char,
        can_open: bool,
        can_close: bool,
        role: Role,
    },
}

enum Item<'a> {
    Run(Vec<Token>),
    Event(Event<'a>),
}

/// Output of [`resolve`], in document order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Segment<'a> {
    /// Passed through untouched.
    Event(Event<'a>),
    /// Unescaped text, still subject to the text rules.
    Text(String),
    /// `<sub>` or `<sup>` around text.
    Script { tag: &'static str, content: String },
    Open(&'static str),
    Close(&'static str),
}

#[derive(Debug, Clone, Copy)]
struct Opener {
    item: usize,
    token: usize,
    marker: char,
    depth: usize,
}

fn span_tag(marker: char) -> &'static str {
    if marker == '=' { "mark" } else { "ins" }
}

fn script_tag(marker: char) -> &'static str {
    if marker == '~' { "sub" } else { "sup" }
}

fn is_inline(tag: &Tag<'_>) -> bool {
    matches!(
        tag,
        Tag::Emphasis
            | Tag::Strong
            | Tag::Strikethrough
            | Tag::Superscript
            | Tag::Subscript
            | Tag::Link { .. }
            | Tag::Image { .. }
    )
}

fn is_inline_end(tag: &TagEnd) -> bool {
    matches!(
        tag,
        TagEnd::Emphasis
            | TagEnd::Strong
            | TagEnd::Strikethrough
            | TagEnd::Superscript
            | TagEnd::Subscript
            | TagEnd::Link
            | TagEnd::Image
    )
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '“' | '”' | '‘' | '’' | '…' | '–' | '—' | '«' | '»' | '¡' | '¿'
        )
}

/// The character a delimiter sees on the other side of a non-text event.
/// Block boundaries and line breaks count as whitespace, inline markup as
/// punctuation.
fn boundary_char(event: Option<&Event<'_>>) -> char {
    match event {
        None
        | Some(Event::SoftBreak | Event::HardBreak | Event::Rule)
        | Some(Event::Html(_)) => ' ',
        Some(Event::Start(tag)) if !is_inline(tag) => ' ',
        Some(Event::End(tag)) if !is_inline_end(tag) => ' ',
        Some(_) => '*',
    }
}

/// Left and right flanking for a delimiter run between `last` and `next`.
fn flanking(last: char, next: char) -> (bool, bool) {
    let last_space = last.is_whitespace();
    let next_space = next.is_whitespace();
    let last_punct = is_punctuation(last);
    let next_punct = is_punctuation(next);

    let can_open = !next_space && (!next_punct || last_space || last_punct);
    let can_close = !last_space && (!last_punct || next_space || next_punct);
    (can_open, can_close)
}

/// Index of the delimiter closing a `~sub~` / `^sup^` opened at `start`.
fn script_end(glyphs: &[Glyph], start: usize) -> Option<usize> {
    let marker = glyphs[start].ch;
    let end = start
        + 1
        + glyphs[start + 1..]
            .iter()
            .position(|g| g.ch == marker && !g.escaped)?;
    let content = &glyphs[start + 1..end];
    if content.is_empty()
        || content.iter().any(|g| g.ch.is_whitespace() && !g.escaped)
    {
        return None;
    }
    Some(end)
}

fn flush(buffer: &mut String, tokens: &mut Vec<Token>) {
    if !buffer.is_empty() {
        tokens.push(Token::Text(std::mem::take(buffer)));
    }
}

fn tokenize(glyphs: &[Glyph], before: char, after: char) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut buffer = String::new();
    let mut i = 0;

    while i < glyphs.len() {
        let glyph = glyphs[i];
        if glyph.escaped {
            buffer.push(glyph.ch);
            i += 1;
            continue;
        }

        if matches!(glyph.ch, '~' | '^')
            && let Some(end) = script_end(glyphs, i)
        {
            flush(&mut buffer, &mut tokens);
            tokens.push(Token::Script {
                tag: script_tag(glyph.ch),
                content: glyphs[i + 1..end].iter().map(|g| g.ch).collect(),
            });
            i = end + 1;
            continue;
        }

        if matches!(glyph.ch, '=' | '+') {
            let run_end = i + glyphs[i..]
                .iter()
                .take_while(|g| g.ch == glyph.ch && !g.escaped)
                .count();
            let len = run_end - i;
            let last = if i == 0 { before } else { glyphs[i - 1].ch };
            let next = glyphs.get(run_end).map_or(after, |g| g.ch);
            let (can_open, can_close) = flanking(last, next);

            if len >= 2 && (can_open || can_close) {
                if len % 2 == 1 {
                    buffer.push(glyph.ch);
                }
                flush(&mut buffer, &mut tokens);
                for _ in 0..len / 2 {
                    tokens.push(Token::Delim {
                        marker: glyph.ch,
                        can_open,
                        can_close,
                        role: Role::Literal,
                    });
                }
            } else {
                buffer.extend(std::iter::repeat_n(glyph.ch, len));
            }
            i = run_end;
            continue;
        }

        buffer.push(glyph.ch);
        i += 1;
    }

    flush(&mut buffer, &mut tokens);
    tokens
}

enum Raw<'a> {
    Run(Vec<Glyph>),
    Event(Event<'a>),
}

fn push_glyphs<'a>(raw: &mut Vec<Raw<'a>>, glyphs: impl Iterator<Item = Glyph>) {
    match raw.last_mut() {
        Some(Raw::Run(run)) => run.extend(glyphs),
        _ => raw.push(Raw::Run(glyphs.collect())),
    }
}

/// Group events into text runs and pass-through events. Text inside code
/// blocks and image alt text is left alone.
fn collect_runs<'a>(
    source: &str,
    events: Vec<(Event<'a>, Range<usize>)>,
) -> Vec<Raw<'a>> {
    let mut raw = Vec::new();
    let mut code_depth = 0usize;
    let mut image_depth = 0usize;

    for (event, range) in events {
        let plain = code_depth == 0 && image_depth == 0;
        match event {
            Event::Start(Tag::CodeBlock(_)) => code_depth += 1,
            Event::End(TagEnd::CodeBlock) => {
                code_depth = code_depth.saturating_sub(1)
            }
            Event::Start(Tag::Image { .. }) => image_depth += 1,
            Event::End(TagEnd::Image) => {
                image_depth = image_depth.saturating_sub(1)
            }
            // single tildes come out of the parser as subscript; they are
            // matched again here with the same rules as `^`
            Event::Start(Tag::Subscript) | Event::End(TagEnd::Subscript)
                if plain =>
            {
                let tilde = Glyph {
                    ch: '~',
                    escaped: false,
                };
                push_glyphs(&mut raw, std::iter::once(tilde));
                continue;
            }
            Event::Text(text) if plain => {
                let original = source.get(range.clone()).unwrap_or_default();
                // the parser drops the backslash and starts the text at
                // the escaped character
                let backslashes = source.as_bytes()[..range.start]
                    .iter()
                    .rev()
                    .take_while(|&&b| b == b'\\')
                    .count();
                let escaped_first = backslashes % 2 == 1
                    && text
                        .chars()
                        .next()
                        .is_some_and(|c| original.starts_with(c));
                let glyphs = text.chars().enumerate().map(|(n, ch)| Glyph {
                    ch,
                    escaped: n == 0 && escaped_first,
                });
                push_glyphs(&mut raw, glyphs);
                continue;
            }
            _ => {}
        }
        raw.push(Raw::Event(event));
    }

    raw
}

fn neighbour<'b, 'a>(
    raw: &'b [Raw<'a>],
    index: Option<usize>,
) -> Option<&'b Event<'a>> {
    match index.and_then(|i| raw.get(i)) {
        Some(Raw::Event(event)) => Some(event),
        _ => None,
    }
}

/// Resolve the extra inline delimiters over a parsed document.
pub(crate) fn resolve<'a>(
    source: &str,
    events: Vec<(Event<'a>, Range<usize>)>,
) -> Vec<Segment<'a>> {
    let raw = collect_runs(source, events);

    let mut items: Vec<Item<'a>> = Vec::with_capacity(raw.len());
    for (index, entry) in raw.iter().enumerate() {
        match entry {
            Raw::Run(glyphs) => {
                let before =
                    boundary_char(neighbour(&raw, index.checked_sub(1)));
                let after =
                    boundary_char(neighbour(&raw, Some(index + 1)));
                items.push(Item::Run(tokenize(glyphs, before, after)));
            }
            Raw::Event(event) => items.push(Item::Event(event.clone())),
        }
    }

    pair_delimiters(&mut items);
    flatten(items)
}

fn pair_delimiters(items: &mut [Item<'_>]) {
    let mut stack: Vec<Opener> = Vec::new();
    let mut pairs: Vec<(Opener, usize, usize)> = Vec::new();
    let mut depth = 0usize;

    for (index, item) in items.iter().enumerate() {
        match item {
            Item::Event(Event::Start(tag)) if is_inline(tag) => depth += 1,
            Item::Event(Event::End(tag)) if is_inline_end(tag) => {
                // openers inside the closed element can no longer match
                stack.retain(|opener| opener.depth < depth);
                depth = depth.saturating_sub(1);
            }
            Item::Event(Event::Start(_) | Event::End(_)) => {
                stack.clear();
                depth = 0;
            }
            Item::Event(_) => {}
            Item::Run(tokens) => {
                for (position, token) in tokens.iter().enumerate() {
                    let Token::Delim {
                        marker,
                        can_open,
                        can_close,
                        ..
                    } = *token
                    else {
                        continue;
                    };

                    if can_close
                        && let Some(k) = stack.iter().rposition(|opener| {
                            opener.marker == marker && opener.depth == depth
                        })
                    {
                        pairs.push((stack[k], index, position));
                        stack.truncate(k);
                        continue;
                    }
                    if can_open {
                        stack.push(Opener {
                            item: index,
                            token: position,
                            marker,
                            depth,
                        });
                    }
                }
            }
        }
    }

    for (opener, item, token) in pairs {
        set_role(items, opener.item, opener.token, Role::Open);
        set_role(items, item, token, Role::Close);
    }
}

fn set_role(items: &mut [Item<'_>], item: usize, token: usize, new: Role) {
    if let Some(Item::Run(tokens)) = items.get_mut(item)
        && let Some(Token::Delim { role, .. }) = tokens.get_mut(token)
    {
        *role = new;
    }
}

fn push_text(segments: &mut Vec<Segment<'_>>, text: &str) {
    match segments.last_mut() {
        Some(Segment::Text(existing)) => existing.push_str(text),
        _ => segments.push(Segment::Text(text.to_string())),
    }
}

fn flatten(items: Vec<Item<'_>>) -> Vec<Segment<'_>> {
    let mut segments = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Item::Event(event) => segments.push(Segment::Event(event)),
            Item::Run(tokens) => {
                for token in tokens {
                    match token {
                        Token::Text(text) => push_text(&mut segments, &text),
                        Token::Script { tag, content } => {
                            segments.push(Segment::Script { tag, content })
                        }
                        Token::Delim { marker, role, .. } => match role {
                            Role::Open => {
                                segments.push(Segment::Open(span_tag(marker)))
                            }
                            Role::Close => {
                                segments.push(Segment::Close(span_tag(marker)))
                            }
                            Role::Literal => {
                                push_text(&mut segments, &format!("{marker}{marker}"))
                            }
                        },
                    }
                }
            }
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyphs(text: &str) -> Vec<Glyph> {
        text.chars()
            .map(|ch| Glyph { ch, escaped: false })
            .collect()
    }

    #[test]
    fn scripts_may_not_contain_spaces() {
        let tokens = tokenize(&glyphs("H~2~O x^a b^"), ' ', ' ');
        assert_eq!(
            tokens,
            vec![
                Token::Text("H".into()),
                Token::Script {
                    tag: "sub",
                    content: "2".into()
                },
                Token::Text("O x^a b^".into()),
            ]
        );
    }

    #[test]
    fn escaped_markers_are_text() {
        let mut run = glyphs("=~a~");
        run[0].escaped = true;
        run[1].escaped = true;
        assert_eq!(tokenize(&run, ' ', ' '), vec![Token::Text("=~a~".into())]);
    }

    #[test]
    fn odd_runs_keep_one_marker() {
        let tokens = tokenize(&glyphs("===a"), ' ', ' ');
        assert_eq!(tokens[0], Token::Text("=".into()));
        assert!(matches!(
            tokens[1],
            Token::Delim {
                marker: '=',
                can_open: true,
                can_close: false,
                ..
            }
        ));
    }

    #[test]
    fn flanking_follows_surrounding_characters() {
        assert_eq!(flanking(' ', 'a'), (true, false));
        assert_eq!(flanking('a', ' '), (false, true));
        assert_eq!(flanking(' ', '*'), (true, false));
        assert_eq!(flanking('*', ' '), (false, true));
        assert_eq!(flanking(' ', ' '), (false, false));
    }
}
