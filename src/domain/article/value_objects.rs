use crate::domain::macros::{entity_id, non_empty_text};

entity_id!(ArticleId, "article");

non_empty_text!(ArticleTitle, "title");
non_empty_text!(ArticleSlug, "slug");
non_empty_text!(ArticleContent, "content");
non_empty_text!(ArticleExcerpt, "excerpt");
non_empty_text!(ArticleCategory, "category");
