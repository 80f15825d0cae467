use super::TopicQueryService;
use crate::{
    application::{dto::TopicDto, error::ApplicationResult},
    domain::topic::TopicFilter,
};

#[derive(Debug, Default)]
pub struct ListTopicsQuery {
    pub search: Option<String>,
}

impl TopicQueryService {
    pub async fn list_topics(&self, query: ListTopicsQuery) -> ApplicationResult<Vec<TopicDto>> {
        let filter = TopicFilter::new(query.search);
        let records = self.read_repo.list(&filter).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
