use super::ArticleQueryService;
use crate::{
    application::{dto::TopicDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct ListArticleTopicsQuery {
    pub article_id: String,
}

impl ArticleQueryService {
    /// Topics attached to the article, in attachment order. An unknown article yields
    /// an empty list.
    pub async fn list_article_topics(
        &self,
        query: ListArticleTopicsQuery,
    ) -> ApplicationResult<Vec<TopicDto>> {
        let id = ArticleId::parse(&query.article_id)?;
        let topics = self.read_repo.topics_for_article(id).await?;
        Ok(topics.into_iter().map(Into::into).collect())
    }
}
