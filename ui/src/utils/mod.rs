/// Longest title the news list shows before cutting it off.
pub const TITLE_DISPLAY_LIMIT: usize = 255;

/// Shorten a title to [`TITLE_DISPLAY_LIMIT`] characters followed by `...`.
/// Display only; the stored title is unchanged.
pub fn truncate_title(title: &str) -> String {
    match title.char_indices().nth(TITLE_DISPLAY_LIMIT) {
        Some((cut, _)) => format!("{}...", &title[..cut]),
        None => title.to_string(),
    }
}

/// Read one decoded query parameter from a `location.search` string such
/// as `?email=a%40b.co`.
pub fn query_param(search: &str, name: &str) -> Option<String> {
    let query = search.trim_start_matches('?');
    if query.is_empty() {
        return None;
    }
    let url = reqwest::Url::parse(&format!("http://localhost/?{query}")).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_titles_are_kept() {
        assert_eq!(truncate_title("Hello"), "Hello");
        let exact = "x".repeat(TITLE_DISPLAY_LIMIT);
        assert_eq!(truncate_title(&exact), exact);
    }

    #[test]
    fn long_titles_are_cut_at_the_limit() {
        let long = "y".repeat(TITLE_DISPLAY_LIMIT + 10);
        let shown = truncate_title(&long);
        assert_eq!(shown.len(), TITLE_DISPLAY_LIMIT + 3);
        assert!(shown.ends_with("y..."));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let long = "é".repeat(TITLE_DISPLAY_LIMIT + 1);
        let shown = truncate_title(&long);
        assert_eq!(shown.chars().count(), TITLE_DISPLAY_LIMIT + 3);
    }

    #[test]
    fn query_params_are_decoded() {
        assert_eq!(
            query_param("?email=reader%40example.com&x=1", "email").as_deref(),
            Some("reader@example.com")
        );
        assert_eq!(
            query_param("?email=a+b%2Bc", "email").as_deref(),
            Some("a b+c")
        );
        assert_eq!(query_param("?x=1", "email"), None);
        assert_eq!(query_param("", "email"), None);
    }
}
