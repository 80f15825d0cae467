use crate::domain::article::entity::{Article, ArticleFilter, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::topic::{Topic, TopicId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Persists the mutable fields and returns the record as re-read from storage.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn soft_delete(&self, id: ArticleId, deleted_at: DateTime<Utc>) -> DomainResult<()>;
    async fn attach_topic(&self, id: ArticleId, topic_id: TopicId) -> DomainResult<()>;
    /// Bulk variant of `attach_topic`; an empty slice is a no-op.
    async fn attach_topics(&self, id: ArticleId, topic_ids: &[TopicId]) -> DomainResult<()>;
    async fn detach_topic(&self, id: ArticleId, topic_id: TopicId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn list(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>>;
    async fn topics_for_article(&self, id: ArticleId) -> DomainResult<Vec<Topic>>;
}
