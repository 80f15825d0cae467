use crate::domain::article::entity::Article;
use crate::domain::errors::DomainResult;
use crate::domain::topic::entity::{NewTopic, Topic, TopicFilter, TopicUpdate};
use crate::domain::topic::value_objects::TopicId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait TopicWriteRepository: Send + Sync {
    async fn insert(&self, topic: NewTopic) -> DomainResult<Topic>;
    async fn update(&self, update: TopicUpdate) -> DomainResult<Topic>;
    async fn soft_delete(&self, id: TopicId, deleted_at: DateTime<Utc>) -> DomainResult<()>;
}

#[async_trait]
pub trait TopicReadRepository: Send + Sync {
    async fn find_by_id(&self, id: TopicId) -> DomainResult<Option<Topic>>;
    async fn list(&self, filter: &TopicFilter) -> DomainResult<Vec<Topic>>;
    /// Non-deleted articles attached to the topic. Returned articles carry no topics.
    async fn articles_for_topic(&self, id: TopicId) -> DomainResult<Vec<Article>>;
}
