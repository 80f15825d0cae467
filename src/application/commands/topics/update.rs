use super::TopicCommandService;
use crate::{
    application::{dto::TopicDto, error::ApplicationResult},
    domain::topic::{TopicId, TopicName, TopicUpdate},
};

pub struct UpdateTopicCommand {
    pub id: String,
    pub name: String,
}

impl TopicCommandService {
    pub async fn update_topic(&self, command: UpdateTopicCommand) -> ApplicationResult<TopicDto> {
        let id = TopicId::parse(&command.id)?;
        let name = TopicName::new(command.name)?;

        let mut topic = self.load_topic(id).await?;
        topic.rename(name, self.clock.now());

        let updated = self.write_repo.update(TopicUpdate::from(&topic)).await?;
        tracing::info!(topic.id = %updated.id, "topic updated");
        Ok(updated.into())
    }
}
