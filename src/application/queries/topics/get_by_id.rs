use super::TopicQueryService;
use crate::{
    application::{
        dto::TopicDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::topic::TopicId,
};

pub struct GetTopicByIdQuery {
    pub id: String,
}

impl TopicQueryService {
    #[tracing::instrument(skip(self, query), fields(topic.id = %query.id))]
    pub async fn get_topic_by_id(&self, query: GetTopicByIdQuery) -> ApplicationResult<TopicDto> {
        let id = TopicId::parse(&query.id)?;
        let topic = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(ApplicationError::topic_not_found)?;
        Ok(topic.into())
    }
}
