use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{article::ArticleId, topic::TopicId},
};

pub struct AttachTopicCommand {
    pub article_id: String,
    pub topic_id: String,
}

pub struct DetachTopicCommand {
    pub article_id: String,
    pub topic_id: String,
}

impl ArticleCommandService {
    /// Attaches a topic and returns the article with its refreshed topic list.
    ///
    /// The in-memory guard and the association write are separate steps; a concurrent
    /// attach of the same pair is rejected by the association primary key instead.
    pub async fn attach_topic(&self, command: AttachTopicCommand) -> ApplicationResult<ArticleDto> {
        let article_id = ArticleId::parse(&command.article_id)?;
        let topic_id = TopicId::parse(&command.topic_id)?;

        let mut article = self.load_article(article_id).await?;
        self.ensure_topic_exists(topic_id).await?;
        article.add_topic_id(topic_id)?;

        self.write_repo.attach_topic(article_id, topic_id).await?;
        tracing::info!(article.id = %article_id, topic.id = %topic_id, "topic attached");

        let article = self.load_article(article_id).await?;
        Ok(article.into())
    }

    pub async fn detach_topic(&self, command: DetachTopicCommand) -> ApplicationResult<ArticleDto> {
        let article_id = ArticleId::parse(&command.article_id)?;
        let topic_id = TopicId::parse(&command.topic_id)?;

        let mut article = self.load_article(article_id).await?;
        article.remove_topic_id(topic_id)?;

        self.write_repo.detach_topic(article_id, topic_id).await?;
        tracing::info!(article.id = %article_id, topic.id = %topic_id, "topic detached");

        let article = self.load_article(article_id).await?;
        Ok(article.into())
    }
}
