// src/domain/topic/entity.rs
use crate::domain::topic::value_objects::{TopicId, TopicName};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Topic {
    pub id: TopicId,
    pub name: TopicName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Topic {
    pub fn rename(&mut self, name: TopicName, now: DateTime<Utc>) {
        self.name = name;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewTopic {
    pub name: TopicName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TopicUpdate {
    pub id: TopicId,
    pub name: TopicName,
    pub updated_at: DateTime<Utc>,
}

impl From<&Topic> for TopicUpdate {
    fn from(topic: &Topic) -> Self {
        Self {
            id: topic.id,
            name: topic.name.clone(),
            updated_at: topic.updated_at,
        }
    }
}

/// Listing filter; `search` matches a case-insensitive substring of the name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicFilter {
    pub search: Option<String>,
}

impl TopicFilter {
    pub fn new(search: Option<String>) -> Self {
        Self {
            search: search
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}
