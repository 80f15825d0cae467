use super::TopicQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::topic::TopicId,
};

pub struct ListTopicArticlesQuery {
    pub topic_id: String,
}

impl TopicQueryService {
    pub async fn list_topic_articles(
        &self,
        query: ListTopicArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let id = TopicId::parse(&query.topic_id)?;
        let articles = self.read_repo.articles_for_topic(id).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
