use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{
        ArticleAuthor, ArticleContent, ArticleId, ArticleStatus, ArticleTitle, ArticleUpdate,
    },
};

/// Full replacement of an article's mutable fields.
pub struct UpdateArticleCommand {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub status: String,
}

impl ArticleCommandService {
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<ArticleDto> {
        let UpdateArticleCommand {
            id,
            title,
            content,
            author,
            status,
        } = command;

        let id = ArticleId::parse(&id)?;
        let title = ArticleTitle::new(title)?;
        let content = ArticleContent::new(content)?;
        let author = ArticleAuthor::new(author)?;
        let status = ArticleStatus::parse(&status)?;

        let mut article = self.load_article(id).await?;
        article.revise(title, content, author, status, self.clock.now());

        let updated = self.write_repo.update(ArticleUpdate::from(&article)).await?;
        tracing::info!(article.id = %updated.id, status = %updated.status, "article updated");
        Ok(updated.into())
    }
}
