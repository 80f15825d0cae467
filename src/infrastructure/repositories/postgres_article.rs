// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use super::rows::{
    ARTICLE_COLUMNS, ARTICLE_WITH_TOPICS_SELECT, ArticleRow, ArticleTopicRow, TopicRow,
    collapse_rows,
};
use crate::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::topic::{Topic, TopicId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn fetch_article(pool: &PgPool, id: ArticleId) -> DomainResult<Option<Article>> {
    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(ARTICLE_WITH_TOPICS_SELECT);
    builder.push(" AND a.id = ");
    builder.push_bind(id.as_uuid());
    builder.push(" ORDER BY atp.seq");

    let rows = builder
        .build_query_as::<ArticleTopicRow>()
        .fetch_all(pool)
        .await
        .map_err(map_sqlx)?;

    Ok(collapse_rows(rows)?.into_iter().next())
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            content,
            author,
            status,
            created_at,
            updated_at,
        } = article;

        let sql = format!(
            "INSERT INTO articles (title, content, author, status, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(title.as_str())
            .bind(content.as_str())
            .bind(author.as_str())
            .bind(status.as_str())
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            content,
            author,
            status,
            updated_at,
        } = update;

        let result = sqlx::query(
            "UPDATE articles
             SET title = $1, content = $2, author = $3, status = $4, updated_at = $5
             WHERE id = $6 AND deleted_at IS NULL",
        )
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(author.as_str())
        .bind(status.as_str())
        .bind(updated_at)
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("Article not found".into()));
        }

        fetch_article(&self.pool, id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Article not found".into()))
    }

    async fn soft_delete(&self, id: ArticleId, deleted_at: DateTime<Utc>) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE articles SET deleted_at = $1 WHERE id = $2 AND deleted_at IS NULL",
        )
        .bind(deleted_at)
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("Article not found".into()));
        }
        Ok(())
    }

    async fn attach_topic(&self, id: ArticleId, topic_id: TopicId) -> DomainResult<()> {
        sqlx::query("INSERT INTO article_topics (article_id, topic_id) VALUES ($1, $2)")
            .bind(id.as_uuid())
            .bind(topic_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn attach_topics(&self, id: ArticleId, topic_ids: &[TopicId]) -> DomainResult<()> {
        if topic_ids.is_empty() {
            return Ok(());
        }

        let ids: Vec<Uuid> = topic_ids.iter().map(|topic| topic.as_uuid()).collect();
        sqlx::query(
            "INSERT INTO article_topics (article_id, topic_id)
             SELECT $1, input.topic_id
             FROM UNNEST($2::uuid[]) WITH ORDINALITY AS input(topic_id, ord)
             ORDER BY input.ord",
        )
        .bind(id.as_uuid())
        .bind(ids)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn detach_topic(&self, id: ArticleId, topic_id: TopicId) -> DomainResult<()> {
        let result =
            sqlx::query("DELETE FROM article_topics WHERE article_id = $1 AND topic_id = $2")
                .bind(id.as_uuid())
                .bind(topic_id.as_uuid())
                .execute(&self.pool)
                .await
                .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::Conflict("topic does not exist".into()));
        }
        Ok(())
    }
}

impl PostgresArticleReadRepository {
    fn apply_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ArticleFilter) {
        if let Some(search) = &filter.search {
            let pattern = format!("%{search}%");
            builder.push(" AND (a.title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR a.content ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }

        if let Some(status) = filter.status {
            builder.push(" AND a.status = ");
            builder.push_bind(status.as_str());
        }

        // EXISTS keeps every topic of a matching article in the joined rows.
        if let Some(topic) = &filter.topic {
            builder.push(
                " AND EXISTS (SELECT 1 FROM article_topics ft \
                 JOIN topics tt ON tt.id = ft.topic_id \
                 WHERE ft.article_id = a.id AND tt.deleted_at IS NULL AND tt.name = ",
            );
            builder.push_bind(topic.clone());
            builder.push(")");
        }
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        fetch_article(&self.pool, id).await
    }

    async fn list(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(ARTICLE_WITH_TOPICS_SELECT);
        Self::apply_filter(&mut builder, filter);
        builder.push(" ORDER BY a.created_at DESC, a.id, atp.seq");

        let rows = builder
            .build_query_as::<ArticleTopicRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        collapse_rows(rows)
    }

    async fn topics_for_article(&self, id: ArticleId) -> DomainResult<Vec<Topic>> {
        let rows = sqlx::query_as::<_, TopicRow>(
            "SELECT t.id, t.name, t.created_at, t.updated_at, t.deleted_at
             FROM article_topics atp
             JOIN topics t ON t.id = atp.topic_id
             WHERE atp.article_id = $1 AND t.deleted_at IS NULL
             ORDER BY atp.seq",
        )
        .bind(id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Topic::try_from).collect()
    }
}
