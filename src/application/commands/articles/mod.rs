// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod service;
mod topics;
mod update;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use service::ArticleCommandService;
pub use topics::{AttachTopicCommand, DetachTopicCommand};
pub use update::UpdateArticleCommand;
