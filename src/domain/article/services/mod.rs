// src/domain/article/services/mod.rs
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::ArticleSlug;
use crate::domain::errors::DomainResult;
use crate::domain::slug::SlugOwnership;

/// Slug lookups against the article table.
pub struct ArticleSlugOwnership {
    read_repo: Arc<dyn ArticleReadRepository>,
}

impl ArticleSlugOwnership {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>) -> Self {
        Self { read_repo }
    }
}

#[async_trait]
impl SlugOwnership for ArticleSlugOwnership {
    async fn owner_of(&self, slug: &str) -> DomainResult<Option<i64>> {
        let Ok(slug) = ArticleSlug::new(slug) else {
            return Ok(None);
        };
        Ok(self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .map(|article| article.id.into()))
    }
}
