use crate::domain::topic::Topic;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicDto {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Topic> for TopicDto {
    fn from(topic: Topic) -> Self {
        Self {
            id: topic.id.into(),
            name: topic.name.into_inner(),
            created_at: topic.created_at,
            updated_at: topic.updated_at,
        }
    }
}
