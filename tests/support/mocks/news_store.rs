// tests/support/mocks/news_store.rs
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use newsdesk_core::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use newsdesk_core::domain::errors::{DomainError, DomainResult};
use newsdesk_core::domain::topic::{
    NewTopic, Topic, TopicFilter, TopicId, TopicReadRepository, TopicUpdate, TopicWriteRepository,
};

#[derive(Default)]
struct State {
    articles: Vec<Article>,
    topics: Vec<Topic>,
    /// Association rows in attachment order.
    links: Vec<(ArticleId, TopicId)>,
}

impl State {
    fn live_article(&self, id: ArticleId) -> Option<&Article> {
        self.articles
            .iter()
            .find(|a| a.id == id && a.deleted_at.is_none())
    }

    fn live_topic(&self, id: TopicId) -> Option<&Topic> {
        self.topics
            .iter()
            .find(|t| t.id == id && t.deleted_at.is_none())
    }

    fn topics_of(&self, id: ArticleId) -> Vec<Topic> {
        self.links
            .iter()
            .filter(|(article, _)| *article == id)
            .filter_map(|(_, topic)| self.live_topic(*topic).cloned())
            .collect()
    }

    fn resolved(&self, article: &Article) -> Article {
        article.clone().with_topics(self.topics_of(article.id))
    }

    fn link(&mut self, id: ArticleId, topic_id: TopicId) -> DomainResult<()> {
        if self.links.contains(&(id, topic_id)) {
            return Err(DomainError::Conflict("topic already exists".into()));
        }
        if !self.articles.iter().any(|a| a.id == id) {
            return Err(DomainError::NotFound("Article not found".into()));
        }
        if !self.topics.iter().any(|t| t.id == topic_id) {
            return Err(DomainError::NotFound("Topic not found".into()));
        }
        self.links.push((id, topic_id));
        Ok(())
    }
}

/// In-memory stand-in for the PostgreSQL repositories. Implements all four repository traits
/// over one shared state so cross-aggregate reads behave like the joined queries.
#[derive(Default)]
pub struct InMemoryNewsStore {
    state: Mutex<State>,
}

impl InMemoryNewsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a fully formed article, bypassing the service layer.
    pub fn seed_article(&self, article: Article) {
        let mut state = self.state.lock().unwrap();
        for topic in &article.topics {
            if !state.topics.iter().any(|t| t.id == topic.id) {
                state.topics.push(topic.clone());
            }
            state.links.push((article.id, topic.id));
        }
        state.articles.push(article);
    }

    pub fn seed_topic(&self, topic: Topic) {
        self.state.lock().unwrap().topics.push(topic);
    }

    pub fn article_count(&self) -> usize {
        self.state.lock().unwrap().articles.len()
    }

    pub fn link_count(&self) -> usize {
        self.state.lock().unwrap().links.len()
    }

    /// Raw record, soft-deleted or not.
    pub fn raw_article(&self, id: ArticleId) -> Option<Article> {
        let state = self.state.lock().unwrap();
        state.articles.iter().find(|a| a.id == id).cloned()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryNewsStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let created = Article {
            id: ArticleId::new(Uuid::new_v4()),
            title: article.title,
            content: article.content,
            author: article.author,
            status: article.status,
            topic_ids: Vec::new(),
            topics: Vec::new(),
            created_at: article.created_at,
            updated_at: article.updated_at,
            deleted_at: None,
        };
        self.state.lock().unwrap().articles.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        let article = state
            .articles
            .iter_mut()
            .find(|a| a.id == update.id && a.deleted_at.is_none())
            .ok_or_else(|| DomainError::NotFound("Article not found".into()))?;

        article.title = update.title;
        article.content = update.content;
        article.author = update.author;
        article.status = update.status;
        article.updated_at = update.updated_at;

        let stored = article.clone();
        Ok(state.resolved(&stored))
    }

    async fn soft_delete(&self, id: ArticleId, deleted_at: DateTime<Utc>) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let article = state
            .articles
            .iter_mut()
            .find(|a| a.id == id && a.deleted_at.is_none())
            .ok_or_else(|| DomainError::NotFound("Article not found".into()))?;
        article.deleted_at = Some(deleted_at);
        Ok(())
    }

    async fn attach_topic(&self, id: ArticleId, topic_id: TopicId) -> DomainResult<()> {
        self.state.lock().unwrap().link(id, topic_id)
    }

    async fn attach_topics(&self, id: ArticleId, topic_ids: &[TopicId]) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        for topic_id in topic_ids {
            state.link(id, *topic_id)?;
        }
        Ok(())
    }

    async fn detach_topic(&self, id: ArticleId, topic_id: TopicId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let position = state
            .links
            .iter()
            .position(|link| *link == (id, topic_id))
            .ok_or_else(|| DomainError::Conflict("topic does not exist".into()))?;
        state.links.remove(position);
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryNewsStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state.live_article(id).map(|a| state.resolved(a)))
    }

    async fn list(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>> {
        let state = self.state.lock().unwrap();
        let needle = filter.search.as_ref().map(|s| s.to_lowercase());

        let mut articles: Vec<Article> = state
            .articles
            .iter()
            .filter(|a| a.deleted_at.is_none())
            .map(|a| state.resolved(a))
            .filter(|a| match &needle {
                Some(needle) => {
                    a.title.as_str().to_lowercase().contains(needle)
                        || a.content.as_str().to_lowercase().contains(needle)
                }
                None => true,
            })
            .filter(|a| filter.status.is_none_or(|status| a.status == status))
            .filter(|a| match &filter.topic {
                Some(name) => a.topics.iter().any(|t| t.name.as_str() == name),
                None => true,
            })
            .collect();

        articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(articles)
    }

    async fn topics_for_article(&self, id: ArticleId) -> DomainResult<Vec<Topic>> {
        Ok(self.state.lock().unwrap().topics_of(id))
    }
}

#[async_trait]
impl TopicWriteRepository for InMemoryNewsStore {
    async fn insert(&self, topic: NewTopic) -> DomainResult<Topic> {
        let created = Topic {
            id: TopicId::new(Uuid::new_v4()),
            name: topic.name,
            created_at: topic.created_at,
            updated_at: topic.updated_at,
            deleted_at: None,
        };
        self.state.lock().unwrap().topics.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: TopicUpdate) -> DomainResult<Topic> {
        let mut state = self.state.lock().unwrap();
        let topic = state
            .topics
            .iter_mut()
            .find(|t| t.id == update.id && t.deleted_at.is_none())
            .ok_or_else(|| DomainError::NotFound("Topic not found".into()))?;
        topic.name = update.name;
        topic.updated_at = update.updated_at;
        Ok(topic.clone())
    }

    async fn soft_delete(&self, id: TopicId, deleted_at: DateTime<Utc>) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let topic = state
            .topics
            .iter_mut()
            .find(|t| t.id == id && t.deleted_at.is_none())
            .ok_or_else(|| DomainError::NotFound("Topic not found".into()))?;
        topic.deleted_at = Some(deleted_at);
        Ok(())
    }
}

#[async_trait]
impl TopicReadRepository for InMemoryNewsStore {
    async fn find_by_id(&self, id: TopicId) -> DomainResult<Option<Topic>> {
        Ok(self.state.lock().unwrap().live_topic(id).cloned())
    }

    async fn list(&self, filter: &TopicFilter) -> DomainResult<Vec<Topic>> {
        let state = self.state.lock().unwrap();
        let needle = filter.search.as_ref().map(|s| s.to_lowercase());

        let mut topics: Vec<Topic> = state
            .topics
            .iter()
            .filter(|t| t.deleted_at.is_none())
            .filter(|t| match &needle {
                Some(needle) => t.name.as_str().to_lowercase().contains(needle),
                None => true,
            })
            .cloned()
            .collect();

        topics.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(topics)
    }

    async fn articles_for_topic(&self, id: TopicId) -> DomainResult<Vec<Article>> {
        let state = self.state.lock().unwrap();
        let mut articles: Vec<Article> = state
            .links
            .iter()
            .filter(|(_, topic)| *topic == id)
            .filter_map(|(article, _)| state.live_article(*article).cloned())
            .map(|mut a| {
                a.topics.clear();
                a.topic_ids.clear();
                a
            })
            .collect();

        articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(articles)
    }
}

/// Every call fails with a persistence error, as an unreachable database would.
pub struct UnavailableStore;

fn unavailable<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("connection refused".into()))
}

#[async_trait]
impl ArticleWriteRepository for UnavailableStore {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        unavailable()
    }

    async fn update(&self, _update: ArticleUpdate) -> DomainResult<Article> {
        unavailable()
    }

    async fn soft_delete(&self, _id: ArticleId, _at: DateTime<Utc>) -> DomainResult<()> {
        unavailable()
    }

    async fn attach_topic(&self, _id: ArticleId, _topic_id: TopicId) -> DomainResult<()> {
        unavailable()
    }

    async fn attach_topics(&self, _id: ArticleId, _topic_ids: &[TopicId]) -> DomainResult<()> {
        unavailable()
    }

    async fn detach_topic(&self, _id: ArticleId, _topic_id: TopicId) -> DomainResult<()> {
        unavailable()
    }
}

#[async_trait]
impl ArticleReadRepository for UnavailableStore {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        unavailable()
    }

    async fn list(&self, _filter: &ArticleFilter) -> DomainResult<Vec<Article>> {
        unavailable()
    }

    async fn topics_for_article(&self, _id: ArticleId) -> DomainResult<Vec<Topic>> {
        unavailable()
    }
}

#[async_trait]
impl TopicWriteRepository for UnavailableStore {
    async fn insert(&self, _topic: NewTopic) -> DomainResult<Topic> {
        unavailable()
    }

    async fn update(&self, _update: TopicUpdate) -> DomainResult<Topic> {
        unavailable()
    }

    async fn soft_delete(&self, _id: TopicId, _at: DateTime<Utc>) -> DomainResult<()> {
        unavailable()
    }
}

#[async_trait]
impl TopicReadRepository for UnavailableStore {
    async fn find_by_id(&self, _id: TopicId) -> DomainResult<Option<Topic>> {
        unavailable()
    }

    async fn list(&self, _filter: &TopicFilter) -> DomainResult<Vec<Topic>> {
        unavailable()
    }

    async fn articles_for_topic(&self, _id: TopicId) -> DomainResult<Vec<Article>> {
        unavailable()
    }
}
