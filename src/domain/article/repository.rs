use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use async_trait::async_trait;

/// Conjunctive listing filter.
#[derive(Debug, Clone, Default)]
pub struct ArticleListFilter {
    pub published_only: bool,
    pub category: Option<String>,
    /// Case-insensitive substring of the title.
    pub search: Option<String>,
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// `None` when the insert affected no rows.
    async fn insert(&self, article: NewArticle) -> DomainResult<Option<Article>>;
    /// `None` when no article has the update's id.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Option<Article>>;
    /// `false` when nothing was deleted.
    async fn delete(&self, id: ArticleId) -> DomainResult<bool>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    /// One page ordered newest first, plus the total number of matches.
    async fn list_page(
        &self,
        filter: &ArticleListFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<Article>, u64)>;
}
