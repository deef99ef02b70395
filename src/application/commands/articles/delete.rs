// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::ArticleId,
};

const NOT_DELETED: &str = "article not found or could not be deleted";

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(NOT_DELETED))?;

        if !self.write_repo.delete(id).await? {
            return Err(ApplicationError::not_found(NOT_DELETED));
        }

        tracing::info!(article_id = command.id, "article deleted");
        self.janitor.release(article.image_urls()).await;
        Ok(())
    }
}
