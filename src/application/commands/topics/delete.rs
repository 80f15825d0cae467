use super::TopicCommandService;
use crate::{application::error::ApplicationResult, domain::topic::TopicId};

pub struct DeleteTopicCommand {
    pub id: String,
}

impl TopicCommandService {
    pub async fn delete_topic(&self, command: DeleteTopicCommand) -> ApplicationResult<()> {
        let id = TopicId::parse(&command.id)?;
        let topic = self.load_topic(id).await?;

        self.write_repo.soft_delete(topic.id, self.clock.now()).await?;
        tracing::info!(topic.id = %topic.id, "topic soft-deleted");
        Ok(())
    }
}
