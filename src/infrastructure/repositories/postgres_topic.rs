use super::map_sqlx;
use super::rows::{ArticleRow, TOPIC_COLUMNS, TopicRow};
use crate::domain::article::Article;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::topic::{
    NewTopic, Topic, TopicFilter, TopicId, TopicReadRepository, TopicUpdate, TopicWriteRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresTopicWriteRepository {
    pool: PgPool,
}

impl PostgresTopicWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresTopicReadRepository {
    pool: PgPool,
}

impl PostgresTopicReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TopicWriteRepository for PostgresTopicWriteRepository {
    async fn insert(&self, topic: NewTopic) -> DomainResult<Topic> {
        let NewTopic {
            name,
            created_at,
            updated_at,
        } = topic;

        let sql = format!(
            "INSERT INTO topics (name, created_at, updated_at) VALUES ($1, $2, $3)
             RETURNING {TOPIC_COLUMNS}"
        );
        let row = sqlx::query_as::<_, TopicRow>(&sql)
            .bind(name.as_str())
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Topic::try_from(row)
    }

    async fn update(&self, update: TopicUpdate) -> DomainResult<Topic> {
        let TopicUpdate {
            id,
            name,
            updated_at,
        } = update;

        let sql = format!(
            "UPDATE topics SET name = $1, updated_at = $2
             WHERE id = $3 AND deleted_at IS NULL
             RETURNING {TOPIC_COLUMNS}"
        );
        let row = sqlx::query_as::<_, TopicRow>(&sql)
            .bind(name.as_str())
            .bind(updated_at)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("Topic not found".into()))?;

        Topic::try_from(row)
    }

    async fn soft_delete(&self, id: TopicId, deleted_at: DateTime<Utc>) -> DomainResult<()> {
        let result =
            sqlx::query("UPDATE topics SET deleted_at = $1 WHERE id = $2 AND deleted_at IS NULL")
                .bind(deleted_at)
                .bind(id.as_uuid())
                .execute(&self.pool)
                .await
                .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("Topic not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl TopicReadRepository for PostgresTopicReadRepository {
    async fn find_by_id(&self, id: TopicId) -> DomainResult<Option<Topic>> {
        let sql = format!("SELECT {TOPIC_COLUMNS} FROM topics WHERE id = $1 AND deleted_at IS NULL");
        let row = sqlx::query_as::<_, TopicRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Topic::try_from).transpose()
    }

    async fn list(&self, filter: &TopicFilter) -> DomainResult<Vec<Topic>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {TOPIC_COLUMNS} FROM topics WHERE deleted_at IS NULL"
        ));

        if let Some(search) = &filter.search {
            builder.push(" AND name ILIKE ");
            builder.push_bind(format!("%{search}%"));
        }
        builder.push(" ORDER BY created_at DESC, id");

        let rows = builder
            .build_query_as::<TopicRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Topic::try_from).collect()
    }

    async fn articles_for_topic(&self, id: TopicId) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT a.id, a.title, a.content, a.author, a.status, a.created_at, a.updated_at, a.deleted_at
             FROM article_topics atp
             JOIN articles a ON a.id = atp.article_id
             WHERE atp.topic_id = $1 AND a.deleted_at IS NULL
             ORDER BY a.created_at DESC, a.id",
        )
        .bind(id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
