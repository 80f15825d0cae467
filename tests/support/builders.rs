// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::mocks::fixed_now;
use newsdesk_core::domain::article::*;
use newsdesk_core::domain::topic::{Topic, TopicId, TopicName};

pub struct TopicBuilder {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
}

impl TopicBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: fixed_now(),
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn build(self) -> Topic {
        Topic {
            id: TopicId::new(self.id),
            name: TopicName::new(self.name).unwrap(),
            created_at: self.created_at,
            updated_at: self.created_at,
            deleted_at: None,
        }
    }
}

pub struct ArticleBuilder {
    id: Uuid,
    title: String,
    content: String,
    author: String,
    status: ArticleStatus,
    topics: Vec<Topic>,
    created_at: DateTime<Utc>,
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: "Test Article".into(),
            content: "Test content".into(),
            author: "Test Author".into(),
            status: ArticleStatus::Draft,
            topics: Vec::new(),
            created_at: fixed_now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn published(self) -> Self {
        self.status(ArticleStatus::Published)
    }

    pub fn topic(mut self, topic: Topic) -> Self {
        self.topics.push(topic);
        self
    }

    /// Created `minutes` after the fixed test epoch.
    pub fn created_minutes_after_epoch(mut self, minutes: i64) -> Self {
        self.created_at = fixed_now() + Duration::minutes(minutes);
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id),
            title: ArticleTitle::new(self.title).unwrap(),
            content: ArticleContent::new(self.content).unwrap(),
            author: ArticleAuthor::new(self.author).unwrap(),
            status: self.status,
            topic_ids: Vec::new(),
            topics: Vec::new(),
            created_at: self.created_at,
            updated_at: self.created_at,
            deleted_at: None,
        }
        .with_topics(self.topics)
    }
}
