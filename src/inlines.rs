//! Inline markup
//!
//!     Literal text and link captions go through the same two steps:
//!
//!     1. Escaping: `& < > " '` become html entities.
//!     2. Substitution: a fixed table of inline rules is applied in declaration order, each
//!        rule rewriting every match in the already escaped text.
//!
//!     Rules, in order:
//!
//!         ~~gone~~                         -> <del>gone</del>
//!         **bold**                         -> <strong>bold</strong>
//!         *italic*                         -> <em>italic</em>
//!         (link: https://host/ caption)    -> <a href="https://host/" target="_blank">caption</a>
//!         (image: https://host/a.png)      -> <img src="https://host/a.png" />
//!
//!     Bold runs before italic so that `**` is never read as two empty italics. Escaping happens
//!     first, so the rules never see raw `<` or `"` and the tags they insert are never escaped.

use once_cell::sync::Lazy;
use regex::Regex;

/// A single substitution: every match of `pattern` is replaced by `replacement`
pub struct InlineRule {
    pub name: &'static str,
    pub pattern: Regex,
    pub replacement: &'static str,
}

/// The substitution table, in application order
pub static INLINE_RULES: Lazy<Vec<InlineRule>> = Lazy::new(|| {
    vec![
        InlineRule {
            name: "strikethrough",
            pattern: Regex::new(r"~~([^~]+?)~~").unwrap(),
            replacement: "<del>${1}</del>",
        },
        InlineRule {
            name: "bold",
            pattern: Regex::new(r"\*\*([^*]+?)\*\*").unwrap(),
            replacement: "<strong>${1}</strong>",
        },
        InlineRule {
            name: "italic",
            pattern: Regex::new(r"\*([^*]+?)\*").unwrap(),
            replacement: "<em>${1}</em>",
        },
        InlineRule {
            name: "link",
            pattern: Regex::new(r"\(link:\s*(https?://\S+)\s+([^)]+)\)").unwrap(),
            replacement: r#"<a href="${1}" target="_blank">${2}</a>"#,
        },
        InlineRule {
            name: "image",
            pattern: Regex::new(r"\(image:\s*(https?://[^)]+)\)").unwrap(),
            replacement: r#"<img src="${1}" />"#,
        },
    ]
});

/// Escape the html-sensitive characters of `text`.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Apply the substitution table to already escaped text.
pub fn apply_markup(escaped: &str) -> String {
    INLINE_RULES
        .iter()
        .fold(escaped.to_string(), |text, rule| {
            rule.pattern
                .replace_all(&text, rule.replacement)
                .into_owned()
        })
}

/// Escape `text`, then apply the inline markup rules.
pub fn render_inline(text: &str) -> String {
    apply_markup(&escape_html(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"a & b < c > d "e" 'f'"#),
            "a &amp; b &lt; c &gt; d &quot;e&quot; &#39;f&#39;"
        );
    }

    #[rstest]
    #[case("~~gone~~", "<del>gone</del>")]
    #[case("**bold**", "<strong>bold</strong>")]
    #[case("*italic*", "<em>italic</em>")]
    #[case("***both***", "<em><strong>both</strong></em>")]
    #[case("2 * 3 = 6", "2 * 3 = 6")]
    #[case(
        "(link: https://example.com/ the site)",
        r#"<a href="https://example.com/" target="_blank">the site</a>"#
    )]
    #[case(
        "(image: http://example.com/a.png)",
        r#"<img src="http://example.com/a.png" />"#
    )]
    #[case("(link: ftp://example.com/ nope)", "(link: ftp://example.com/ nope)")]
    fn test_rules(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(render_inline(input), expected);
    }

    #[test]
    fn test_escaping_happens_before_markup() {
        assert_eq!(
            render_inline("**<b>** & *it's*"),
            "<strong>&lt;b&gt;</strong> &amp; <em>it&#39;s</em>"
        );
    }

    #[test]
    fn test_link_url_is_escaped() {
        assert_eq!(
            render_inline("(link: https://a.com/?x=1&y=2 query)"),
            r#"<a href="https://a.com/?x=1&amp;y=2" target="_blank">query</a>"#
        );
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = INLINE_RULES.iter().map(|rule| rule.name).collect();
        assert_eq!(
            names,
            vec!["strikethrough", "bold", "italic", "link", "image"]
        );
    }
}
