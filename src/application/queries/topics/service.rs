use std::sync::Arc;

use crate::domain::topic::TopicReadRepository;

pub struct TopicQueryService {
    pub(super) read_repo: Arc<dyn TopicReadRepository>,
}

impl TopicQueryService {
    pub fn new(read_repo: Arc<dyn TopicReadRepository>) -> Self {
        Self { read_repo }
    }
}
