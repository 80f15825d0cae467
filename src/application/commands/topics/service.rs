use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::topic::{Topic, TopicId, TopicReadRepository, TopicWriteRepository},
};

pub struct TopicCommandService {
    pub(super) write_repo: Arc<dyn TopicWriteRepository>,
    pub(super) read_repo: Arc<dyn TopicReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl TopicCommandService {
    pub fn new(
        write_repo: Arc<dyn TopicWriteRepository>,
        read_repo: Arc<dyn TopicReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            clock,
        }
    }

    pub(super) async fn load_topic(&self, id: TopicId) -> ApplicationResult<Topic> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(ApplicationError::topic_not_found)
    }
}
