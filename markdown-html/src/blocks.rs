//! Line-level rewriting done before the document reaches pulldown-cmark.
//!
//! Abbreviation definitions are lifted out of the text, and `::: warning`
//! fences are turned into raw `<div>` blocks surrounded by blank lines so
//! their contents are still parsed as Markdown. Fenced code is copied
//! through verbatim.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::WARNING_CONTAINER_CLASS;

static ABBREVIATION_DEFINITION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ {0,3}\*\[([^\]]+)\]:[ \t]*(.*)$")
        .expect("valid abbreviation pattern")
});

const CONTAINER_NAME: &str = "warning";

pub(crate) struct Preprocessed {
    pub source: String,
    /// `(term, title)` pairs in definition order.
    pub abbreviations: Vec<(String, String)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fence {
    marker: char,
    len: usize,
}

#[derive(Debug, PartialEq, Eq)]
enum ContainerMarker {
    Open,
    Close,
}

fn indentation(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

fn opening_fence(line: &str) -> Option<Fence> {
    if indentation(line) > 3 {
        return None;
    }
    let trimmed = line.trim_start();
    let marker = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = trimmed.chars().take_while(|c| *c == marker).count();
    if len < 3 {
        return None;
    }
    // backtick fences may not carry backticks in their info string
    if marker == '`' && trimmed[len..].contains('`') {
        return None;
    }
    Some(Fence { marker, len })
}

fn closes_fence(line: &str, fence: Fence) -> bool {
    if indentation(line) > 3 {
        return false;
    }
    let trimmed = line.trim();
    let len = trimmed.chars().take_while(|c| *c == fence.marker).count();
    len >= fence.len && trimmed.chars().all(|c| c == fence.marker)
}

fn container_marker(line: &str) -> Option<ContainerMarker> {
    if indentation(line) > 3 {
        return None;
    }
    let trimmed = line.trim();
    let colons = trimmed.chars().take_while(|c| *c == ':').count();
    if colons < 3 {
        return None;
    }
    let params = trimmed[colons..].trim();
    if params.is_empty() {
        return Some(ContainerMarker::Close);
    }
    match params.split_whitespace().next() {
        Some(CONTAINER_NAME) => Some(ContainerMarker::Open),
        _ => None,
    }
}

pub(crate) fn preprocess(markdown: &str) -> Preprocessed {
    let mut source = String::with_capacity(markdown.len() + 64);
    let mut abbreviations = Vec::new();
    let mut fence: Option<Fence> = None;
    let mut open_containers = 0usize;

    for line in markdown.lines() {
        if let Some(current) = fence {
            if closes_fence(line, current) {
                fence = None;
            }
            source.push_str(line);
            source.push('\n');
            continue;
        }

        if let Some(opened) = opening_fence(line) {
            fence = Some(opened);
            source.push_str(line);
            source.push('\n');
            continue;
        }

        if let Some(caps) = ABBREVIATION_DEFINITION.captures(line) {
            let term = caps[1].trim().to_string();
            if !term.is_empty() {
                abbreviations.push((term, caps[2].trim().to_string()));
                continue;
            }
        }

        match container_marker(line) {
            Some(ContainerMarker::Open) => {
                open_containers += 1;
                source.push_str(&format!(
                    "\n<div class=\"{WARNING_CONTAINER_CLASS}\">\n\n"
                ));
                continue;
            }
            Some(ContainerMarker::Close) if open_containers > 0 => {
                open_containers -= 1;
                source.push_str("\n</div>\n\n");
                continue;
            }
            _ => {}
        }

        source.push_str(line);
        source.push('\n');
    }

    // unterminated containers run to the end of the document
    for _ in 0..open_containers {
        source.push_str("\n</div>\n\n");
    }

    Preprocessed {
        source,
        abbreviations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviation_definitions_are_removed() {
        let out = preprocess("*[HTML]: Hyper Text Markup Language\nHTML rocks");
        assert_eq!(
            out.abbreviations,
            vec![("HTML".to_string(), "Hyper Text Markup Language".to_string())]
        );
        assert_eq!(out.source, "HTML rocks\n");
    }

    #[test]
    fn fenced_code_is_left_alone() {
        let input = "```\n*[X]: not a definition\n::: warning\n```\n";
        let out = preprocess(input);
        assert!(out.abbreviations.is_empty());
        assert_eq!(out.source, input);
    }

    #[test]
    fn warning_container_becomes_div() {
        let out = preprocess("::: warning\n*careful*\n:::\nafter");
        assert!(out.source.contains("<div class=\"custom-container warning\">"));
        assert!(out.source.contains("*careful*"));
        assert!(out.source.contains("</div>"));
        assert!(out.source.ends_with("after\n"));
    }

    #[test]
    fn other_containers_and_stray_closers_stay_text() {
        let out = preprocess("::: info\ntext\n:::");
        assert_eq!(out.source, "::: info\ntext\n:::\n");
    }

    #[test]
    fn unclosed_container_is_closed_at_end() {
        let out = preprocess("::: warning\nstill open");
        assert!(out.source.trim_end().ends_with("</div>"));
    }
}
