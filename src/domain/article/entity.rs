// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleCategory, ArticleContent, ArticleExcerpt, ArticleId, ArticleSlug, ArticleTitle,
};
use crate::domain::media::{self, ImageRefs};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub excerpt: ArticleExcerpt,
    pub category: ArticleCategory,
    pub featured_image_url: Option<String>,
    pub featured_image_alt: Option<String>,
    pub youtube_url: Option<String>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub meta_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Every image this article points at: inline content images plus the
    /// featured image.
    pub fn image_urls(&self) -> ImageRefs {
        let mut refs = media::image_urls_in_html(self.content.as_str());
        media::push_optional(&mut refs, self.featured_image_url.as_deref());
        refs
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub excerpt: ArticleExcerpt,
    pub category: ArticleCategory,
    pub featured_image_url: Option<String>,
    pub featured_image_alt: Option<String>,
    pub youtube_url: Option<String>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub meta_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishStateUpdate {
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

/// Partial update. `None` leaves a column untouched; for nullable columns
/// `Some(None)` clears the value.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub slug: Option<ArticleSlug>,
    pub content: Option<ArticleContent>,
    pub excerpt: Option<ArticleExcerpt>,
    pub category: Option<ArticleCategory>,
    pub featured_image_url: Option<Option<String>>,
    pub featured_image_alt: Option<Option<String>>,
    pub youtube_url: Option<Option<String>>,
    pub meta_description: Option<Option<String>>,
    pub publish_state: Option<PublishStateUpdate>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            content: None,
            excerpt: None,
            category: None,
            featured_image_url: None,
            featured_image_alt: None,
            youtube_url: None,
            meta_description: None,
            publish_state: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: ArticleSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_excerpt(mut self, excerpt: ArticleExcerpt) -> Self {
        self.excerpt = Some(excerpt);
        self
    }

    pub fn with_category(mut self, category: ArticleCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_publish_state(
        mut self,
        published: bool,
        published_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.publish_state = Some(PublishStateUpdate {
            published,
            published_at,
        });
        self
    }

    /// Project this update onto an existing article.
    pub fn apply_to(&self, mut article: Article) -> Article {
        if let Some(title) = &self.title {
            article.title = title.clone();
        }
        if let Some(slug) = &self.slug {
            article.slug = slug.clone();
        }
        if let Some(content) = &self.content {
            article.content = content.clone();
        }
        if let Some(excerpt) = &self.excerpt {
            article.excerpt = excerpt.clone();
        }
        if let Some(category) = &self.category {
            article.category = category.clone();
        }
        if let Some(url) = &self.featured_image_url {
            article.featured_image_url = url.clone();
        }
        if let Some(alt) = &self.featured_image_alt {
            article.featured_image_alt = alt.clone();
        }
        if let Some(url) = &self.youtube_url {
            article.youtube_url = url.clone();
        }
        if let Some(meta) = &self.meta_description {
            article.meta_description = meta.clone();
        }
        if let Some(state) = self.publish_state {
            article.published = state.published;
            article.published_at = state.published_at;
        }
        article.updated_at = self.updated_at;
        article
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            slug: ArticleSlug::new("title").unwrap(),
            content: ArticleContent::new(
                r#"<p>body</p><img src="https://cdn.example.com/inline.jpg">"#,
            )
            .unwrap(),
            excerpt: ArticleExcerpt::new("excerpt").unwrap(),
            category: ArticleCategory::new("News").unwrap(),
            featured_image_url: Some("https://cdn.example.com/cover.jpg".into()),
            featured_image_alt: None,
            youtube_url: None,
            published: false,
            published_at: None,
            meta_description: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn image_urls_include_inline_and_featured() {
        let refs = sample_article().image_urls();
        assert_eq!(refs.len(), 2);
        assert!(refs.contains("https://cdn.example.com/inline.jpg"));
        assert!(refs.contains("https://cdn.example.com/cover.jpg"));
    }

    #[test]
    fn apply_to_only_touches_set_fields() {
        let article = sample_article();
        let now = Utc::now();
        let mut update = ArticleUpdate::new(article.id, now)
            .with_title(ArticleTitle::new("new title").unwrap())
            .with_publish_state(true, Some(now));
        update.featured_image_url = Some(None);

        let updated = update.apply_to(article.clone());
        assert_eq!(updated.title.as_str(), "new title");
        assert_eq!(updated.slug, article.slug);
        assert_eq!(updated.content, article.content);
        assert!(updated.published);
        assert_eq!(updated.published_at, Some(now));
        assert!(updated.featured_image_url.is_none());
        assert_eq!(updated.updated_at, now);
    }
}
