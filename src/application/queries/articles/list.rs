use super::ArticleQueryService;
use crate::{
    application::{
        dto::{AdminPrincipal, ArticleDto, Page},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleListFilter, optional_text, pagination::PageRequest},
};

#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    /// Include unpublished articles. Admin only.
    pub include_drafts: bool,
    pub category: Option<String>,
    /// Case-insensitive substring of the title.
    pub search: Option<String>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        actor: Option<&AdminPrincipal>,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Page<ArticleDto>> {
        if query.include_drafts && actor.is_none() {
            return Err(ApplicationError::forbidden(
                "authentication required for draft access",
            ));
        }

        let request = PageRequest::new(query.page, query.page_size);
        let filter = ArticleListFilter {
            published_only: !query.include_drafts,
            category: optional_text(query.category),
            search: optional_text(query.search),
        };

        let (records, total) = self.read_repo.list_page(&filter, request).await?;
        let items = records.into_iter().map(Into::into).collect();
        Ok(Page::new(items, request, total))
    }
}
