use super::TopicCommandService;
use crate::{
    application::{dto::TopicDto, error::ApplicationResult},
    domain::topic::{NewTopic, TopicName},
};

pub struct CreateTopicCommand {
    pub name: String,
}

impl TopicCommandService {
    pub async fn create_topic(&self, command: CreateTopicCommand) -> ApplicationResult<TopicDto> {
        let name = TopicName::new(command.name)?;
        let now = self.clock.now();

        let created = self
            .write_repo
            .insert(NewTopic {
                name,
                created_at: now,
                updated_at: now,
            })
            .await?;
        tracing::info!(topic.id = %created.id, "topic created");
        Ok(created.into())
    }
}
