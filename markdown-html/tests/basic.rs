use markdown_html::render_markdown;

#[test]
fn test_heading() {
    let html = render_markdown("## Hello");
    assert!(html.contains("<h2>"));
    assert!(html.contains("Hello"));
    assert!(html.contains("</h2>"));
}

#[test]
fn test_paragraph() {
    let html = render_markdown("This is a paragraph.");
    assert!(html.contains("<p>"));
    assert!(html.contains("This is a paragraph."));
}

#[test]
fn test_bold() {
    let html = render_markdown("This is **bold** text.");
    assert!(html.contains("<strong>bold</strong>"));
}

#[test]
fn test_italic() {
    let html = render_markdown("This is *italic* text.");
    assert!(html.contains("<em>italic</em>"));
}

#[test]
fn test_link() {
    let html = render_markdown("[Click here](https://example.com)");
    assert!(html.contains(r#"<a href="https://example.com">Click here</a>"#));
}

#[test]
fn test_list() {
    let html = render_markdown("- Item 1\n- Item 2");
    assert!(html.contains("<ul>"));
    assert!(html.contains("<li>Item 1</li>"));
    assert!(html.contains("<li>Item 2</li>"));
}

#[test]
fn test_multiline() {
    let html = render_markdown(
        r#"
# Title

First paragraph.

Second paragraph with **bold**.
"#,
    );
    assert!(html.contains("<h1>Title</h1>"));
    assert!(html.contains("<p>First paragraph.</p>"));
    assert!(html.contains("<strong>bold</strong>"));
}

#[test]
fn test_empty_input() {
    assert_eq!(render_markdown(""), "");
    assert_eq!(render_markdown("  \n\t\n"), "");
}

#[test]
fn test_raw_html_passes_through() {
    let html = render_markdown(r#"Some <span class="note">inline</span> html"#);
    assert!(html.contains(r#"<span class="note">inline</span>"#));

    let html = render_markdown("<section>\nblock\n</section>");
    assert!(html.contains("<section>"));
}

#[test]
fn test_bare_urls_are_linked() {
    let html = render_markdown("Read more at https://example.com/news.");
    assert!(html.contains(
        r#"<a href="https://example.com/news">https://example.com/news</a>."#
    ));
}

#[test]
fn test_link_text_is_not_relinked() {
    let html = render_markdown("[https://a.example](https://b.example)");
    assert_eq!(html.matches("<a ").count(), 1);
}

#[test]
fn test_single_newline_is_a_line_break() {
    let html = render_markdown("first line\nsecond line");
    assert!(html.contains("first line<br />"));
    assert!(html.contains("second line"));
}

#[test]
fn test_typographer() {
    let html = render_markdown(r#""Quoted" text -- with dashes... (c) (tm)"#);
    assert!(html.contains("“Quoted”"));
    assert!(html.contains("–"));
    assert!(html.contains("…"));
    assert!(html.contains("©"));
    assert!(html.contains("™"));
}

#[test]
fn test_emoji() {
    let html = render_markdown("Launch day :rocket: :)");
    assert!(html.contains("🚀"));
    assert!(html.contains("😃"));
}

#[test]
fn test_footnotes() {
    let html = render_markdown("Claim[^1].\n\n[^1]: Source.");
    assert!(html.contains("footnote-reference"));
    assert!(html.contains("footnote-definition"));
}

#[test]
fn test_sub_and_superscript() {
    let html = render_markdown("H~2~O and x^2^");
    assert!(html.contains("<sub>2</sub>"));
    assert!(html.contains("<sup>2</sup>"));
}

#[test]
fn test_scripts_follow_delimiter_rules() {
    let html = render_markdown("the 19^th^ century");
    assert!(html.contains("19<sup>th</sup> century"));

    let html = render_markdown("~~gone~~ and ~a b~ and 2^x y^");
    assert!(html.contains("<del>gone</del>"));
    assert!(html.contains("~a b~"));
    assert!(html.contains("2^x y^"));
    assert!(!html.contains("<sub>"));
    assert!(!html.contains("<sup>"));

    let html = render_markdown(r"H\~2~O");
    assert!(!html.contains("<sub>"));
}

#[test]
fn test_abbreviations() {
    let html = render_markdown(
        "The HTML spec.\n\n*[HTML]: Hyper Text Markup Language",
    );
    assert!(html.contains(
        r#"<abbr title="Hyper Text Markup Language">HTML</abbr>"#
    ));
    assert!(!html.contains("*[HTML]"));
}

#[test]
fn test_mark_and_ins() {
    let html = render_markdown("This is ==important== and ++new++.");
    assert!(html.contains("<mark>important</mark>"));
    assert!(html.contains("<ins>new</ins>"));
}

#[test]
fn test_mark_and_ins_wrap_inline_markup() {
    let html = render_markdown("==**bold**== and ++*ins*++");
    assert!(html.contains("<mark><strong>bold</strong></mark>"));
    assert!(html.contains("<ins><em>ins</em></ins>"));

    let html = render_markdown("==see [the post](/news/1)== now");
    assert!(html.contains(r#"<mark>see <a href="/news/1">the post</a></mark>"#));
}

#[test]
fn test_unmatched_or_escaped_spans_stay_literal() {
    let html = render_markdown(r"\==not mark==");
    assert!(!html.contains("<mark>"));
    assert!(html.contains("==not mark=="));

    let html = render_markdown("a ==== b and *one ==two* three==");
    assert!(!html.contains("<mark>"));
    assert!(html.contains("a ==== b"));
}

#[test]
fn test_bare_emails_are_linked() {
    let html = render_markdown("Questions? Mail editor@example.org.");
    assert!(html.contains(
        r#"<a href="mailto:editor@example.org">editor@example.org</a>."#
    ));
}

#[test]
fn test_emoticons_before_punctuation() {
    let html = render_markdown("great :).");
    assert!(html.contains("great 😃."));
    assert!(!render_markdown("abc:)").contains("😃"));
}

#[test]
fn test_definition_list() {
    let html = render_markdown("Term\n: Definition of the term");
    assert!(html.contains("<dl>"));
    assert!(html.contains("<dt>Term</dt>"));
    assert!(html.contains("<dd>Definition of the term</dd>"));
}

#[test]
fn test_warning_container() {
    let html = render_markdown("::: warning\nBe **careful** here\n:::");
    assert!(html.contains(r#"<div class="custom-container warning">"#));
    assert!(html.contains("<strong>careful</strong>"));
    assert!(html.contains("</div>"));
}

#[test]
fn test_no_extensions_inside_code() {
    let html = render_markdown(
        "`:rocket: https://example.com`\n\n```\n==x== (c) :smile:\n```",
    );
    assert!(!html.contains("🚀"));
    assert!(!html.contains("<a href"));
    assert!(!html.contains("<mark>"));
    assert!(!html.contains("©"));
    assert!(!html.contains("😄"));
}

#[test]
fn test_rendering_is_deterministic() {
    let source = "# News\n\nHello :wave: https://example.com\n\n*[HTML]: markup";
    assert_eq!(render_markdown(source), render_markdown(source));
}
