// src/domain/media.rs
//! Image reference bookkeeping.
//!
//! Any URL stored in an image field or embedded as `<img src>` inside HTML
//! content counts as a reference. When a save drops a reference it becomes
//! orphaned and may be released from object storage.
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static IMG_SRC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<img\b[^>]*?\bsrc\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("image source pattern is valid")
});

pub type ImageRefs = BTreeSet<String>;

/// Collect every `<img src>` URL found in `html`.
pub fn image_urls_in_html(html: &str) -> ImageRefs {
    IMG_SRC
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().trim().to_string())
        .filter(|url| !url.is_empty())
        .collect()
}

/// Insert an optional image field into a reference set.
pub fn push_optional(refs: &mut ImageRefs, url: Option<&str>) {
    if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
        refs.insert(url.to_string());
    }
}

/// References present in `before` but no longer in `after`.
pub fn orphaned(before: &ImageRefs, after: &ImageRefs) -> Vec<String> {
    before.difference(after).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_single_and_double_quoted_sources() {
        let html = r#"<p>a</p><img src="https://cdn.example.com/a.jpg" alt="x"><IMG class='w' SRC='https://cdn.example.com/b.png'/>"#;
        let urls = image_urls_in_html(html);
        assert_eq!(urls.len(), 2);
        assert!(urls.contains("https://cdn.example.com/a.jpg"));
        assert!(urls.contains("https://cdn.example.com/b.png"));
    }

    #[test]
    fn ignores_empty_sources_and_other_tags() {
        let html = r#"<img src=""><iframe src="https://youtube.com/embed/x"></iframe>"#;
        assert!(image_urls_in_html(html).is_empty());
    }

    #[test]
    fn orphaned_is_set_difference() {
        let before: ImageRefs = ["a", "b", "c"].into_iter().map(String::from).collect();
        let after: ImageRefs = ["b", "d"].into_iter().map(String::from).collect();
        assert_eq!(orphaned(&before, &after), vec!["a".to_string(), "c".to_string()]);
    }
}
