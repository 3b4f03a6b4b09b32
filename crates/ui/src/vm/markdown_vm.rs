use std::collections::{HashMap, HashSet};

use mentor_core::relevance::emphasize_terms;

/// Render a generated explanation: the user's interests get bolded first so
/// the markdown pass turns them into `<strong>` runs.
#[must_use]
pub fn render_explanation(markdown: &str, interests: &[String]) -> String {
    markdown_to_html(&emphasize_terms(markdown, interests))
}

#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);
    options.insert(pulldown_cmark::Options::ENABLE_TASKLISTS);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "div", "span", "br", "em", "strong", "b", "i", "code", "pre", "blockquote", "ul",
        "ol", "li", "a", "h1", "h2", "h3", "h4", "table", "thead", "tbody", "tr", "th", "td",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::{markdown_to_html, render_explanation};

    #[test]
    fn markdown_to_html_sanitizes_links() {
        let html = markdown_to_html("[Link](javascript:alert(1))");
        assert!(html.contains("Link"));
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn markdown_to_html_keeps_headings_and_lists() {
        let html = markdown_to_html("## Basics\n\n- one\n- two\n");
        assert!(html.contains("<h2>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn render_explanation_bolds_whole_word_interests() {
        let html = render_explanation("Math shows up in aftermath.", &["Math".into()]);
        assert!(html.contains("<strong>Math</strong>"));
        assert!(html.contains("aftermath."));
        assert!(!html.contains("after<strong>"));
    }

    #[test]
    fn render_explanation_strips_script_tags() {
        let html = render_explanation("hello <script>alert(1)</script>", &[]);
        assert!(!html.contains("<script>"));
    }
}
