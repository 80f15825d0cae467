use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::ArticleFilter,
};

#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub topic: Option<String>,
}

impl ArticleQueryService {
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<Vec<ArticleDto>> {
        let filter = ArticleFilter::new(query.search, query.status.as_deref(), query.topic)?;

        let records = self.read_repo.list(&filter).await?;
        tracing::debug!(count = records.len(), ?filter, "articles listed");
        Ok(records.into_iter().map(Into::into).collect())
    }
}
