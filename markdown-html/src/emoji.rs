//! Emoji shortcodes (`:smile:`) and emoticon shortcuts (`:)`).
//!
//! Shortcodes resolve against the full gemoji set shipped by the `emojis`
//! crate; only the emoticon shortcuts are listed here.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::HashMap;

static SHORTCODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r":([a-z0-9_+\-]+):").expect("valid shortcode pattern")
});

/// Emoticons and the shortcode they stand for.
static SHORTCUTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(">:(", "angry");
    m.insert(">:-(", "angry");
    m.insert(":\")", "blush");
    m.insert(":-\")", "blush");
    m.insert("</3", "broken_heart");
    m.insert(":/", "confused");
    m.insert(":-/", "confused");
    m.insert(":'(", "cry");
    m.insert(":'-(", "cry");
    m.insert(":(", "frowning");
    m.insert(":-(", "frowning");
    m.insert("<3", "heart");
    m.insert("]:(", "imp");
    m.insert("]:-(", "imp");
    m.insert("o:)", "innocent");
    m.insert("O:)", "innocent");
    m.insert("o:-)", "innocent");
    m.insert("O:-)", "innocent");
    m.insert(":')", "joy");
    m.insert(":'-)", "joy");
    m.insert(":*", "kissing");
    m.insert(":-*", "kissing");
    m.insert("B-)", "sunglasses");
    m.insert(":|", "neutral_face");
    m.insert(":-|", "neutral_face");
    m.insert(":o", "open_mouth");
    m.insert(":-o", "open_mouth");
    m.insert(":O", "open_mouth");
    m.insert(":-O", "open_mouth");
    m.insert(":D", "smile");
    m.insert(":-D", "smile");
    m.insert(":)", "smiley");
    m.insert(":-)", "smiley");
    m.insert(";)", "wink");
    m.insert(";-)", "wink");
    m.insert(":p", "stuck_out_tongue");
    m.insert(":-p", "stuck_out_tongue");
    m.insert(":P", "stuck_out_tongue");
    m.insert(":-P", "stuck_out_tongue");
    m
});

/// Shortcuts resolved to emoji, longest first so `:-)` wins over `:-`.
static SHORTCUTS_BY_LENGTH: Lazy<Vec<(&'static str, &'static str)>> =
    Lazy::new(|| {
        let mut shortcuts: Vec<_> = SHORTCUTS
            .iter()
            .filter_map(|(shortcut, name)| Some((*shortcut, lookup(name)?)))
            .collect();
        shortcuts.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(a.0.cmp(b.0)));
        shortcuts
    });

/// Look up the emoji for a shortcode name, without the colons.
pub(crate) fn lookup(name: &str) -> Option<&'static str> {
    emojis::get_by_shortcode(name).map(|emoji| emoji.as_str())
}

/// Characters an emoticon may touch: start or end of text, whitespace,
/// control characters and punctuation.
fn is_separator(c: char) -> bool {
    c.is_whitespace()
        || c.is_control()
        || c.is_ascii_punctuation()
        || matches!(c, '“' | '”' | '‘' | '’' | '…' | '–' | '—' | '«' | '»')
}

fn replace_shortcuts(text: &str) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    let mut changed = false;
    let mut prev: Option<char> = None;
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if prev.is_none_or(is_separator) {
            let found = SHORTCUTS_BY_LENGTH.iter().find(|(shortcut, _)| {
                rest.starts_with(shortcut)
                    && rest[shortcut.len()..]
                        .chars()
                        .next()
                        .is_none_or(is_separator)
            });
            if let Some((shortcut, emoji)) = found {
                changed = true;
                out.push_str(emoji);
                prev = shortcut.chars().next_back();
                rest = &rest[shortcut.len()..];
                continue;
            }
        }
        out.push(c);
        prev = Some(c);
        rest = &rest[c.len_utf8()..];
    }

    changed.then_some(out)
}

/// Replace known shortcodes and emoticons. Unknown shortcodes are kept.
pub(crate) fn replace(text: &str) -> Cow<'_, str> {
    let with_codes = SHORTCODE.replace_all(text, |caps: &Captures| {
        lookup(&caps[1])
            .map(str::to_string)
            .unwrap_or_else(|| caps[0].to_string())
    });

    if !with_codes.contains(&[':', ';', '<', 'B', 'o', 'O', ']', '>'][..]) {
        return with_codes;
    }

    match replace_shortcuts(&with_codes) {
        Some(replaced) => Cow::Owned(replaced),
        None => with_codes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcodes_expand() {
        assert_eq!(replace("ship it :rocket:"), "ship it 🚀");
        assert_eq!(replace(":+1: :100:"), "👍 💯");
    }

    #[test]
    fn shortcodes_cover_the_full_set() {
        assert_eq!(replace(":mag: :bell:"), "🔍 🔔");
        assert_eq!(replace("party :partying_face:"), "party 🥳");
    }

    #[test]
    fn unknown_shortcodes_are_kept() {
        assert_eq!(
            replace("time 10:30:45 :not_an_emoji:"),
            "time 10:30:45 :not_an_emoji:"
        );
    }

    #[test]
    fn emoticons_need_word_boundaries() {
        assert_eq!(replace("hi :) there"), "hi 😃 there");
        assert_eq!(replace("<3"), "❤️");
        assert_eq!(replace("abc:)"), "abc:)");
        assert_eq!(replace(":)abc"), ":)abc");
    }

    #[test]
    fn emoticons_may_touch_punctuation() {
        assert_eq!(replace("great :)."), "great 😃.");
        assert_eq!(replace("(;))"), "(😉)");
        assert_eq!(replace("http://example.com"), "http://example.com");
    }

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(replace("nothing here"), Cow::Borrowed(_)));
    }
}
