// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::article::ArticleId};

pub struct DeleteArticleCommand {
    pub id: String,
}

impl ArticleCommandService {
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::parse(&command.id)?;
        let article = self.load_article(id).await?;

        self.write_repo.soft_delete(article.id, self.clock.now()).await?;
        tracing::info!(article.id = %article.id, "article soft-deleted");
        Ok(())
    }
}
