// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

const ARTICLE_NOT_FOUND: &str = "Article not found";
const TOPIC_NOT_FOUND: &str = "Topic not found";

/// Service-level failure. Display is the bare client-facing message.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A live record the operation needs is absent or soft-deleted.
    #[error("{0}")]
    NotFound(String),
}

impl ApplicationError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn article_not_found() -> Self {
        Self::not_found(ARTICLE_NOT_FOUND)
    }

    pub fn topic_not_found() -> Self {
        Self::not_found(TOPIC_NOT_FOUND)
    }
}
