//! Text rules applied to plain text between inline markup: linkify,
//! abbreviations, emoji and typographic replacements.
//!
//! Every function here takes raw (unescaped) text and returns escaped HTML.

use html_escape::{encode_double_quoted_attribute, encode_text};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::emoji;

static BARE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"\b(?:https?://|www\.)[^\s<>"]+|(?P<email>\b[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,})\b"#,
    )
    .expect("valid url pattern")
});

static REPLACEMENTS: &[(&str, &str)] = &[
    ("(c)", "©"),
    ("(C)", "©"),
    ("(r)", "®"),
    ("(R)", "®"),
    ("(tm)", "™"),
    ("(TM)", "™"),
    ("+-", "±"),
];

struct Abbreviations {
    pattern: Regex,
    titles: HashMap<String, String>,
}

/// Inline rules for one document; abbreviations are per-document.
pub(crate) struct InlineRules {
    abbreviations: Option<Abbreviations>,
}

impl InlineRules {
    pub(crate) fn new(definitions: Vec<(String, String)>) -> Self {
        if definitions.is_empty() {
            return Self {
                abbreviations: None,
            };
        }

        let mut titles = HashMap::new();
        for (term, title) in definitions {
            // later definitions of the same term win
            titles.insert(term, title);
        }
        let mut terms: Vec<&String> = titles.keys().collect();
        terms.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        let alternation = terms
            .iter()
            .map(|term| regex::escape(term))
            .collect::<Vec<_>>()
            .join("|");

        let abbreviations = Regex::new(&alternation)
            .ok()
            .map(|pattern| Abbreviations { pattern, titles });
        Self { abbreviations }
    }

    /// Render a piece of text. Returns `None` when nothing changed, so it
    /// can be emitted as a plain text event.
    pub(crate) fn apply(&self, text: &str, linkify: bool) -> Option<String> {
        let html = self.render(text, linkify);
        if html == encode_text(text) {
            None
        } else {
            Some(html)
        }
    }

    pub(crate) fn render(&self, text: &str, linkify: bool) -> String {
        if linkify {
            self.linkify(text)
        } else {
            self.abbreviate(text)
        }
    }

    fn linkify(&self, text: &str) -> String {
        let mut out = String::new();
        let mut rest = 0;
        for caps in BARE_URL.captures_iter(text) {
            let Some(found) = caps.get(0) else { continue };
            let url = if caps.name("email").is_some() {
                found.as_str()
            } else {
                trim_url(found.as_str())
            };
            if url.is_empty() {
                continue;
            }
            let end = found.start() + url.len();
            out.push_str(&self.abbreviate(&text[rest..found.start()]));
            let href = if caps.name("email").is_some() {
                format!("mailto:{url}")
            } else if url.starts_with("www.") {
                format!("http://{url}")
            } else {
                url.to_string()
            };
            out.push_str(&format!(
                "<a href=\"{}\">{}</a>",
                encode_double_quoted_attribute(&href),
                encode_text(url)
            ));
            rest = end;
        }
        out.push_str(&self.abbreviate(&text[rest..]));
        out
    }

    fn abbreviate(&self, text: &str) -> String {
        let Some(abbreviations) = &self.abbreviations else {
            return words(text);
        };

        let mut out = String::new();
        let mut rest = 0;
        for found in abbreviations.pattern.find_iter(text) {
            if !is_boundary(text, found.start(), found.end()) {
                continue;
            }
            let title = abbreviations
                .titles
                .get(found.as_str())
                .map(String::as_str)
                .unwrap_or_default();
            out.push_str(&words(&text[rest..found.start()]));
            out.push_str(&format!(
                "<abbr title=\"{}\">{}</abbr>",
                encode_double_quoted_attribute(title),
                encode_text(found.as_str())
            ));
            rest = found.end();
        }
        out.push_str(&words(&text[rest..]));
        out
    }
}

/// Emoji and typographic replacements, then escaping.
fn words(text: &str) -> String {
    let mut replaced = emoji::replace(text).into_owned();
    for (from, to) in REPLACEMENTS {
        if replaced.contains(from) {
            replaced = replaced.replace(from, to);
        }
    }
    encode_text(&replaced).into_owned()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_boundary(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

/// Drop trailing punctuation that is more likely sentence than URL.
fn trim_url(url: &str) -> &str {
    let mut url = url.trim_end_matches(['.', ',', ':', ';', '!', '?', '\'']);
    while url.ends_with(')') && url.matches(')').count() > url.matches('(').count()
    {
        url = url[..url.len() - 1]
            .trim_end_matches(['.', ',', ':', ';', '!', '?', '\'']);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> InlineRules {
        InlineRules::new(Vec::new())
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(rules().apply("just words", true), None);
        assert_eq!(rules().apply("a < b", true), None);
    }

    #[test]
    fn bare_urls_become_links() {
        let html = rules()
            .apply("see https://example.com/a?b=1&c=2.", true)
            .unwrap();
        assert_eq!(
            html,
            "see <a href=\"https://example.com/a?b=1&amp;c=2\">https://example.com/a?b=1&amp;c=2</a>."
        );
    }

    #[test]
    fn www_links_get_a_scheme() {
        let html = rules().apply("(www.example.org)", true).unwrap();
        assert_eq!(
            html,
            "(<a href=\"http://www.example.org\">www.example.org</a>)"
        );
    }

    #[test]
    fn no_links_inside_links() {
        assert_eq!(rules().apply("https://example.com", false), None);
    }

    #[test]
    fn bare_emails_become_mailto_links() {
        let html = rules()
            .apply("write to news@example.com.", true)
            .unwrap();
        assert_eq!(
            html,
            "write to <a href=\"mailto:news@example.com\">news@example.com</a>."
        );
    }

    #[test]
    fn urls_with_credentials_stay_urls() {
        let html = rules().apply("https://user@example.com/x", true).unwrap();
        assert!(html.starts_with("<a href=\"https://user@example.com/x\">"));
    }

    #[test]
    fn typographic_replacements() {
        let html = rules().apply("(c) 2024 (tm) +-", true).unwrap();
        assert_eq!(html, "© 2024 ™ ±");
    }

    #[test]
    fn abbreviations_respect_word_boundaries() {
        let rules = InlineRules::new(vec![(
            "HTML".to_string(),
            "Hyper Text \"Markup\" Language".to_string(),
        )]);
        let html = rules.apply("HTML and XHTML", true).unwrap();
        assert_eq!(
            html,
            "<abbr title=\"Hyper Text &quot;Markup&quot; Language\">HTML</abbr> and XHTML"
        );
    }

    #[test]
    fn longest_abbreviation_wins() {
        let rules = InlineRules::new(vec![
            ("W3".to_string(), "short".to_string()),
            ("W3C".to_string(), "World Wide Web Consortium".to_string()),
        ]);
        let html = rules.apply("the W3C", true).unwrap();
        assert!(html.contains("title=\"World Wide Web Consortium\">W3C<"));
    }
}
