mod create;
mod delete;
mod service;
mod update;

pub use create::CreateTopicCommand;
pub use delete::DeleteTopicCommand;
pub use service::TopicCommandService;
pub use update::UpdateTopicCommand;
