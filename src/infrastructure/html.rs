// src/infrastructure/html.rs
use std::collections::{HashMap, HashSet};
use std::panic::{AssertUnwindSafe, catch_unwind};

use ammonia::Builder;

use crate::application::ports::html::{HtmlSanitizer, SanitizeError};

const ALLOWED_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "br", "hr", "ul", "ol", "li", "blockquote", "pre",
    "code", "em", "i", "strong", "b", "u", "s", "del", "a", "img", "div", "span", "table",
    "thead", "tbody", "tfoot", "tr", "th", "td", "caption", "iframe",
];

const GENERIC_ATTRIBUTES: &[&str] = &[
    "href", "src", "alt", "title", "class", "target", "style", "width", "height", "id",
];

const IFRAME_ATTRIBUTES: &[&str] = &["frameborder", "allow", "allowfullscreen", "referrerpolicy"];

/// Allow-list sanitizer for editor HTML. `script` and `style` are dropped
/// together with their content; other disallowed tags are unwrapped.
pub struct AmmoniaSanitizer {
    builder: Builder<'static>,
}

impl AmmoniaSanitizer {
    pub fn new() -> Self {
        let mut builder = Builder::default();
        builder
            .tags(ALLOWED_TAGS.iter().copied().collect::<HashSet<_>>())
            .generic_attributes(GENERIC_ATTRIBUTES.iter().copied().collect::<HashSet<_>>())
            .tag_attributes(HashMap::from([(
                "iframe",
                IFRAME_ATTRIBUTES.iter().copied().collect::<HashSet<_>>(),
            )]))
            .link_rel(None);
        Self { builder }
    }
}

impl Default for AmmoniaSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlSanitizer for AmmoniaSanitizer {
    fn sanitize(&self, html: &str) -> Result<String, SanitizeError> {
        catch_unwind(AssertUnwindSafe(|| self.builder.clean(html).to_string()))
            .map_err(|_| SanitizeError("html sanitizer panicked".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(html: &str) -> String {
        AmmoniaSanitizer::new().sanitize(html).unwrap()
    }

    #[test]
    fn script_is_removed_with_its_content() {
        assert_eq!(clean("<script>alert(1)</script><p>hi</p>"), "<p>hi</p>");
    }

    #[test]
    fn style_is_removed_but_siblings_survive() {
        assert_eq!(
            clean("<style>p { color: red }</style><p>ok</p><strong>bold</strong>"),
            "<p>ok</p><strong>bold</strong>"
        );
    }

    #[test]
    fn iframe_keeps_embed_attributes() {
        let out = clean(
            r#"<iframe src="https://www.youtube.com/embed/abc" width="560" height="315" frameborder="0" allowfullscreen onload="x()"></iframe>"#,
        );
        assert!(out.starts_with("<iframe"), "{out}");
        assert!(out.contains(r#"src="https://www.youtube.com/embed/abc""#), "{out}");
        assert!(out.contains(r#"frameborder="0""#), "{out}");
        assert!(out.contains("allowfullscreen"), "{out}");
        assert!(!out.contains("onload"), "{out}");
    }

    #[test]
    fn disallowed_tags_are_unwrapped_and_handlers_dropped() {
        assert_eq!(
            clean(r#"<section><div onclick="steal()">text</div></section>"#),
            "<div>text</div>"
        );
    }

    #[test]
    fn links_keep_target_without_rel_rewrite() {
        assert_eq!(
            clean(r#"<a href="https://example.com" target="_blank">x</a>"#),
            r#"<a href="https://example.com" target="_blank">x</a>"#
        );
    }
}
