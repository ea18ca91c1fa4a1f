//! Turn quoted URLs in highlighted markup into clickable links.
//!
//! Highlighted JSON renders string values as text like `"https://..."`
//! inside `<span>` elements. Only text between tags is rewritten; tags and
//! their attribute values are copied untouched. Quoted attribute values may
//! contain `>`. Comments, CDATA and raw `<script>`/`<style>` bodies are not
//! recognised and are treated as ordinary tags or text.

use regex::{Captures, Regex};
use std::sync::OnceLock;

fn tag_regex() -> &'static Regex {
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    // A tag runs to the first '>' outside a quoted attribute value
    TAG_REGEX.get_or_init(|| Regex::new(r#"<(?:[^>"']|"[^"]*"|'[^']*')*>"#).unwrap())
}

fn url_regex() -> &'static Regex {
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    // Match a double-quoted http(s) URL, capturing the URL itself
    URL_REGEX.get_or_init(|| Regex::new(r#""(https?://[^"]+)""#).unwrap())
}

/// Wrap every quoted URL found in text content in an anchor.
///
/// `"https://x"` becomes `"<a href="https://x" target="_blank"
/// class="click-link">https://x</a>"`; the quotes stay visible.
pub fn render_links(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut last = 0;

    for tag in tag_regex().find_iter(html) {
        result.push_str(&link_text(&html[last..tag.start()]));
        result.push_str(tag.as_str());
        last = tag.end();
    }
    result.push_str(&link_text(&html[last..]));

    result
}

fn link_text(text: &str) -> String {
    url_regex()
        .replace_all(text, |caps: &Captures| {
            let url = &caps[1];
            format!(
                r#""<a href="{url}" target="_blank" class="click-link">{url}</a>""#
            )
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_url() {
        assert_eq!(
            render_links(r#"{"home": "https://example.com/a?b=1"}"#),
            r#"{"home": "<a href="https://example.com/a?b=1" target="_blank" class="click-link">https://example.com/a?b=1</a>"}"#
        );
    }

    #[test]
    fn test_url_inside_span() {
        let html = r#"<span style="color:#98C379">"http://localhost:8080"</span>"#;
        assert_eq!(
            render_links(html),
            r#"<span style="color:#98C379">"<a href="http://localhost:8080" target="_blank" class="click-link">http://localhost:8080</a>"</span>"#
        );
    }

    #[test]
    fn test_attribute_values_untouched() {
        let html = r#"<img src="https://example.com/x.png"><a href="https://example.com">site</a>"#;
        assert_eq!(render_links(html), html);
    }

    #[test]
    fn test_multiple_urls_and_non_urls() {
        let html = r#"<span>"ftp://nope"</span> <span>"http://a"</span>, <span>"https://b"</span>"#;
        let out = render_links(html);
        assert!(out.contains(r#""ftp://nope""#));
        assert_eq!(out.matches("class=\"click-link\"").count(), 2);
    }

    #[test]
    fn test_no_urls() {
        assert_eq!(render_links(""), "");
        assert_eq!(render_links("<pre>plain</pre>"), "<pre>plain</pre>");
    }

    #[test]
    fn test_quoted_gt_in_attribute() {
        let html = r#"<span title="a>b" data-x='"https://inside"'>"https://outside"</span>"#;
        assert_eq!(
            render_links(html),
            r#"<span title="a>b" data-x='"https://inside"'>"<a href="https://outside" target="_blank" class="click-link">https://outside</a>"</span>"#
        );
    }
}
