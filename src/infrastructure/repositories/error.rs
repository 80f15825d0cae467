// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_ARTICLE_STATUS_CHECK: &str = "articles_status_check";
const CNT_ARTICLE_TOPIC_PKEY: &str = "article_topics_pkey";
const CNT_ARTICLE_TOPIC_ARTICLE: &str = "article_topics_article_id_fkey";
const CNT_ARTICLE_TOPIC_TOPIC: &str = "article_topics_topic_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_TOPIC_PKEY => DomainError::Conflict("topic already exists".into()),
                    CNT_ARTICLE_TOPIC_ARTICLE => DomainError::NotFound("Article not found".into()),
                    CNT_ARTICLE_TOPIC_TOPIC => DomainError::NotFound("Topic not found".into()),
                    CNT_ARTICLE_STATUS_CHECK => {
                        DomainError::Validation("status must be one of draft, published, archived".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            DomainError::Persistence("database unavailable".into())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
