// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::{ArticleAuthor, ArticleContent, ArticleStatus, ArticleTitle, NewArticle},
        topic::TopicId,
    },
};
use uuid::Uuid;

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub author: String,
    /// Defaults to `draft` when absent.
    pub status: Option<String>,
    pub topic_ids: Vec<Uuid>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    author: Option<String>,
    status: Option<String>,
    topic_ids: Vec<Uuid>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn topic(mut self, topic_id: Uuid) -> Self {
        self.topic_ids.push(topic_id);
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            author: self.author.ok_or("author is required")?,
            status: self.status,
            topic_ids: self.topic_ids,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let author = ArticleAuthor::new(command.author)?;
        let status = command
            .status
            .as_deref()
            .map(ArticleStatus::parse)
            .transpose()?
            .unwrap_or(ArticleStatus::Draft);

        let mut topic_ids: Vec<TopicId> = Vec::with_capacity(command.topic_ids.len());
        for id in command.topic_ids.into_iter().map(TopicId::new) {
            if !topic_ids.contains(&id) {
                self.ensure_topic_exists(id).await?;
                topic_ids.push(id);
            }
        }

        let now = self.clock.now();
        let new_article = NewArticle {
            title,
            content,
            author,
            status,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article.id = %created.id, "article created");

        if topic_ids.is_empty() {
            return Ok(created.into());
        }

        self.write_repo.attach_topics(created.id, &topic_ids).await?;
        let article = self.load_article(created.id).await?;
        Ok(article.into())
    }
}
