// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{Article, ArticleId, ArticleReadRepository, ArticleWriteRepository},
        topic::{TopicId, TopicReadRepository},
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) topic_read_repo: Arc<dyn TopicReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        topic_read_repo: Arc<dyn TopicReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            topic_read_repo,
            clock,
        }
    }

    pub(super) async fn load_article(&self, id: ArticleId) -> ApplicationResult<Article> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(ApplicationError::article_not_found)
    }

    pub(super) async fn ensure_topic_exists(&self, id: TopicId) -> ApplicationResult<()> {
        self.topic_read_repo
            .find_by_id(id)
            .await?
            .map(|_| ())
            .ok_or_else(ApplicationError::topic_not_found)
    }
}
