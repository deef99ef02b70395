// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        validation::FieldViolations,
    },
    domain::{
        article::{
            ArticleCategory, ArticleContent, ArticleExcerpt, ArticleSlug, ArticleTitle,
            NewArticle, compute_published_at,
        },
        optional_text,
    },
};

#[derive(Debug, Clone, Default)]
pub struct CreateArticleCommand {
    pub title: Option<String>,
    /// Explicit slug; derived from the title when absent or blank.
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub featured_image_url: Option<String>,
    pub featured_image_alt: Option<String>,
    pub youtube_url: Option<String>,
    pub meta_description: Option<String>,
    pub published: bool,
}

impl ArticleCommandService {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let mut violations = FieldViolations::new();
        let title = violations.require("title", command.title, ArticleTitle::new);
        let raw_content = violations.require("content", command.content, Ok);
        let excerpt = violations.require("excerpt", command.excerpt, ArticleExcerpt::new);
        let category = violations.require("category", command.category, ArticleCategory::new);
        violations.finish()?;

        let (Some(title), Some(raw_content), Some(excerpt), Some(category)) =
            (title, raw_content, excerpt, category)
        else {
            return Err(ApplicationError::validation("missing required fields"));
        };

        let slug = self
            .slugs
            .assign_for_create(title.as_str(), command.slug.as_deref())
            .await?;
        let slug = ArticleSlug::new(slug)?;
        let content = ArticleContent::new(self.sanitizer.clean("content", raw_content)?)?;

        let now = self.clock.now();
        let new_article = NewArticle {
            title,
            slug,
            content,
            excerpt,
            category,
            featured_image_url: optional_text(command.featured_image_url),
            featured_image_alt: optional_text(command.featured_image_alt),
            youtube_url: optional_text(command.youtube_url),
            published: command.published,
            published_at: compute_published_at(false, None, command.published, now),
            meta_description: optional_text(command.meta_description),
            created_at: now,
            updated_at: now,
        };

        let created = self
            .write_repo
            .insert(new_article)
            .await?
            .ok_or_else(|| ApplicationError::infrastructure("failed to create article"))?;

        tracing::info!(article_id = created.id.0, slug = %created.slug, "article created");
        Ok(created.into())
    }
}
