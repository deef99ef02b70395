use std::sync::Arc;

use crate::{
    application::{
        dto::AdminPrincipal,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleReadRepository},
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>) -> Self {
        Self { read_repo }
    }

    /// Drafts are invisible to anonymous callers; they get the same answer
    /// as for a missing article.
    pub(super) fn ensure_visible(
        actor: Option<&AdminPrincipal>,
        article: &Article,
    ) -> ApplicationResult<()> {
        if article.published || actor.is_some() {
            Ok(())
        } else {
            Err(ApplicationError::not_found("article not found"))
        }
    }
}
