// src/application/commands/about.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::AboutPageDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        services::{content::ContentSanitizer, media::ImageJanitor},
        validation::FieldViolations,
    },
    domain::{
        about::{AboutPage, AboutPageRepository},
        optional_text,
    },
};

#[derive(Debug, Clone, Default)]
pub struct SaveAboutPageCommand {
    pub title: Option<String>,
    pub content: Option<String>,
    pub hero_image_url: Option<String>,
    pub meta_description: Option<String>,
}

pub struct AboutPageCommandService {
    repo: Arc<dyn AboutPageRepository>,
    sanitizer: Arc<ContentSanitizer>,
    janitor: Arc<ImageJanitor>,
    clock: Arc<dyn Clock>,
}

impl AboutPageCommandService {
    pub fn new(
        repo: Arc<dyn AboutPageRepository>,
        sanitizer: Arc<ContentSanitizer>,
        janitor: Arc<ImageJanitor>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            sanitizer,
            janitor,
            clock,
        }
    }

    pub async fn save_about_page(
        &self,
        command: SaveAboutPageCommand,
    ) -> ApplicationResult<AboutPageDto> {
        let mut violations = FieldViolations::new();
        let title = violations.require("title", command.title, |t| Ok(t.trim().to_string()));
        let content = violations.require("content", command.content, Ok);
        violations.finish()?;

        let (Some(title), Some(content)) = (title, content) else {
            return Err(ApplicationError::validation("missing required fields"));
        };

        let page = AboutPage {
            title,
            content: self.sanitizer.clean("content", content)?,
            hero_image_url: optional_text(command.hero_image_url),
            meta_description: optional_text(command.meta_description),
            updated_at: Some(self.clock.now()),
        };

        let before = self
            .repo
            .load()
            .await?
            .map(|current| current.image_urls())
            .unwrap_or_default();
        let saved = self.repo.upsert(page).await?;

        tracing::info!("about page saved");
        self.janitor.release_orphans(&before, &saved.image_urls()).await;
        Ok(saved.into())
    }
}
