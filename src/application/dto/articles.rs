use crate::application::dto::topics::TopicDto;
use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<TopicDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
            author: article.author.into_inner(),
            status: article.status.as_str().to_string(),
            topics: article.topics.into_iter().map(Into::into).collect(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
