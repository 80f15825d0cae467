// src/infrastructure/repositories/rows.rs
use crate::domain::article::{
    Article, ArticleAuthor, ArticleContent, ArticleId, ArticleStatus, ArticleTitle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::topic::{Topic, TopicId, TopicName};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::collections::HashMap;
use uuid::Uuid;

pub(super) const ARTICLE_COLUMNS: &str =
    "id, title, content, author, status, created_at, updated_at, deleted_at";

pub(super) const TOPIC_COLUMNS: &str = "id, name, created_at, updated_at, deleted_at";

/// Live articles left-joined to their live topics. Callers append `AND ...` conditions.
pub(super) const ARTICLE_WITH_TOPICS_SELECT: &str = "SELECT a.id, a.title, a.content, a.author, a.status, a.created_at, a.updated_at, a.deleted_at, \
     t.id AS topic_id, t.name AS topic_name, t.created_at AS topic_created_at, t.updated_at AS topic_updated_at \
     FROM articles a \
     LEFT JOIN article_topics atp ON atp.article_id = a.id \
     LEFT JOIN topics t ON t.id = atp.topic_id AND t.deleted_at IS NULL \
     WHERE a.deleted_at IS NULL";

#[derive(Debug, FromRow)]
pub(super) struct ArticleRow {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id),
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content)?,
            author: ArticleAuthor::new(row.author)?,
            status: ArticleStatus::parse(&row.status)?,
            topic_ids: Vec::new(),
            topics: Vec::new(),
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        })
    }
}

#[derive(Debug, FromRow)]
pub(super) struct TopicRow {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<TopicRow> for Topic {
    type Error = DomainError;

    fn try_from(row: TopicRow) -> Result<Self, Self::Error> {
        Ok(Topic {
            id: TopicId::new(row.id),
            name: TopicName::new(row.name)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        })
    }
}

/// One row of the article/topic join; topic columns are null for untagged articles.
#[derive(Debug, FromRow)]
pub(super) struct ArticleTopicRow {
    #[sqlx(flatten)]
    pub article: ArticleRow,
    pub topic_id: Option<Uuid>,
    pub topic_name: Option<String>,
    pub topic_created_at: Option<DateTime<Utc>>,
    pub topic_updated_at: Option<DateTime<Utc>>,
}

impl ArticleTopicRow {
    fn take_topic(&mut self) -> DomainResult<Option<Topic>> {
        match (
            self.topic_id.take(),
            self.topic_name.take(),
            self.topic_created_at.take(),
            self.topic_updated_at.take(),
        ) {
            (Some(id), Some(name), Some(created_at), Some(updated_at)) => {
                Topic::try_from(TopicRow {
                    id,
                    name,
                    created_at,
                    updated_at,
                    deleted_at: None,
                })
                .map(Some)
            }
            _ => Ok(None),
        }
    }
}

/// Groups join rows by article id. Articles keep the order in which they first appear and
/// topics keep row order within each article.
pub(super) fn collapse_rows(rows: Vec<ArticleTopicRow>) -> DomainResult<Vec<Article>> {
    let mut positions: HashMap<Uuid, usize> = HashMap::new();
    let mut articles: Vec<Article> = Vec::new();

    for mut row in rows {
        let topic = row.take_topic()?;
        let article_id = row.article.id;

        let index = match positions.get(&article_id) {
            Some(index) => *index,
            None => {
                articles.push(Article::try_from(row.article)?);
                positions.insert(article_id, articles.len() - 1);
                articles.len() - 1
            }
        };

        if let Some(topic) = topic {
            let article = &mut articles[index];
            if !article.has_topic_id(topic.id) {
                article.topic_ids.push(topic.id);
                article.topics.push(topic);
            }
        }
    }

    Ok(articles)
}
