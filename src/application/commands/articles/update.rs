// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        validation::{FieldViolations, clearable},
    },
    domain::article::{
        ArticleCategory, ArticleContent, ArticleExcerpt, ArticleId, ArticleSlug, ArticleTitle,
        ArticleUpdate, compute_published_at,
    },
};

/// Partial update. Absent fields are left untouched; an empty string clears
/// a nullable field.
#[derive(Debug, Clone, Default)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub featured_image_url: Option<String>,
    pub featured_image_alt: Option<String>,
    pub youtube_url: Option<String>,
    pub meta_description: Option<String>,
    pub published: Option<bool>,
}

impl ArticleCommandService {
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let mut violations = FieldViolations::new();
        let title = violations.optional(command.title, ArticleTitle::new);
        let raw_content = violations.optional(command.content, |raw| {
            ArticleContent::new(raw.clone()).map(|_| raw)
        });
        let excerpt = violations.optional(command.excerpt, ArticleExcerpt::new);
        let category = violations.optional(command.category, ArticleCategory::new);
        violations.finish()?;

        let now = self.clock.now();
        let mut update = ArticleUpdate::new(id, now);

        let changed_title = title.as_ref().filter(|t| **t != existing.title);
        let slug = self
            .slugs
            .assign_for_update(
                command.id,
                existing.slug.as_str(),
                changed_title.map(ArticleTitle::as_str),
                command.slug.as_deref(),
            )
            .await?;
        if slug != existing.slug.as_str() {
            update = update.with_slug(ArticleSlug::new(slug)?);
        }

        if let Some(title) = title {
            update = update.with_title(title);
        }
        if let Some(raw) = raw_content {
            update = update.with_content(ArticleContent::new(self.sanitizer.clean("content", raw)?)?);
        }
        if let Some(excerpt) = excerpt {
            update = update.with_excerpt(excerpt);
        }
        if let Some(category) = category {
            update = update.with_category(category);
        }
        update.featured_image_url = clearable(command.featured_image_url);
        update.featured_image_alt = clearable(command.featured_image_alt);
        update.youtube_url = clearable(command.youtube_url);
        update.meta_description = clearable(command.meta_description);

        if let Some(requested) = command.published {
            let published_at =
                compute_published_at(existing.published, existing.published_at, requested, now);
            update = update.with_publish_state(requested, published_at);
        }

        let updated = self
            .write_repo
            .update(update)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        tracing::info!(article_id = command.id, slug = %updated.slug, "article updated");
        self.janitor
            .release_orphans(&existing.image_urls(), &updated.image_urls())
            .await;
        Ok(updated.into())
    }
}
