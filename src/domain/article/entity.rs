// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleAuthor, ArticleContent, ArticleId, ArticleStatus, ArticleTitle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::topic::{Topic, TopicId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub author: ArticleAuthor,
    pub status: ArticleStatus,
    /// Attached topic ids in attachment order, without duplicates.
    pub topic_ids: Vec<TopicId>,
    pub topics: Vec<Topic>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Article {
    pub fn with_topics(mut self, topics: Vec<Topic>) -> Self {
        self.topic_ids = Vec::with_capacity(topics.len());
        for topic in &topics {
            if !self.topic_ids.contains(&topic.id) {
                self.topic_ids.push(topic.id);
            }
        }
        self.topics = topics;
        self
    }

    pub fn has_topic_id(&self, topic: TopicId) -> bool {
        self.topic_ids.contains(&topic)
    }

    pub fn add_topic_id(&mut self, topic: TopicId) -> DomainResult<()> {
        if self.has_topic_id(topic) {
            return Err(DomainError::Conflict("topic already exists".into()));
        }
        self.topic_ids.push(topic);
        Ok(())
    }

    pub fn remove_topic_id(&mut self, topic: TopicId) -> DomainResult<()> {
        if self.topic_ids.is_empty() {
            return Err(DomainError::Conflict("no topics to remove".into()));
        }
        let position = self
            .topic_ids
            .iter()
            .position(|id| *id == topic)
            .ok_or_else(|| DomainError::Conflict("topic does not exist".into()))?;
        self.topic_ids.remove(position);
        Ok(())
    }

    pub fn revise(
        &mut self,
        title: ArticleTitle,
        content: ArticleContent,
        author: ArticleAuthor,
        status: ArticleStatus,
        now: DateTime<Utc>,
    ) {
        self.title = title;
        self.content = content;
        self.author = author;
        self.status = status;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub author: ArticleAuthor,
    pub status: ArticleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub author: ArticleAuthor,
    pub status: ArticleStatus,
    pub updated_at: DateTime<Utc>,
}

impl From<&Article> for ArticleUpdate {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            content: article.content.clone(),
            author: article.author.clone(),
            status: article.status,
            updated_at: article.updated_at,
        }
    }
}

/// Listing filter. Present fields are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    /// Case-insensitive substring of title or content.
    pub search: Option<String>,
    pub status: Option<ArticleStatus>,
    /// Exact topic name.
    pub topic: Option<String>,
}

impl ArticleFilter {
    pub fn new(
        search: Option<String>,
        status: Option<&str>,
        topic: Option<String>,
    ) -> DomainResult<Self> {
        let status = status
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ArticleStatus::parse)
            .transpose()?;

        Ok(Self {
            search: non_blank(search),
            status,
            topic: non_blank(topic),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}
