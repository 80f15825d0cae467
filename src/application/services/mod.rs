// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, topics::TopicCommandService},
        ports::time::Clock,
        queries::{articles::ArticleQueryService, topics::TopicQueryService},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        topic::{TopicReadRepository, TopicWriteRepository},
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub topic_commands: Arc<TopicCommandService>,
    pub topic_queries: Arc<TopicQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        topic_write_repo: Arc<dyn TopicWriteRepository>,
        topic_read_repo: Arc<dyn TopicReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&topic_read_repo),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));

        let topic_commands = Arc::new(TopicCommandService::new(
            Arc::clone(&topic_write_repo),
            Arc::clone(&topic_read_repo),
            Arc::clone(&clock),
        ));
        let topic_queries = Arc::new(TopicQueryService::new(Arc::clone(&topic_read_repo)));

        Self {
            article_commands,
            article_queries,
            topic_commands,
            topic_queries,
        }
    }
}
