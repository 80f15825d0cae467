// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        AttachTopicCommand, CreateArticleCommand, DeleteArticleCommand, DetachTopicCommand,
        UpdateArticleCommand,
    },
    dto::{ArticleDto, TopicDto},
    queries::articles::{GetArticleByIdQuery, ListArticleTopicsQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, QueryParams};
use crate::presentation::http::response::ApiResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, extract::Path, http::StatusCode};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Default, Deserialize)]
pub struct ArticleListParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub topic_ids: Vec<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    pub title: String,
    pub content: String,
    pub author: String,
    pub status: String,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<ArticleListParams>,
) -> HttpResult<ApiResponse<Vec<ArticleDto>>> {
    let query = ListArticlesQuery {
        search: params.search,
        status: params.status,
        topic: params.topic,
    };

    state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_http()
        .map(|articles| ApiResponse::ok(articles, "Successfully retrieved article list"))
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<ApiResponse<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(|article| ApiResponse::ok(article, "Successfully retrieved article"))
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CreateArticleRequest>,
) -> HttpResult<ApiResponse<ArticleDto>> {
    let command = CreateArticleCommand {
        title: payload.title,
        content: payload.content,
        author: payload.author,
        status: payload.status,
        topic_ids: payload.topic_ids,
    };

    state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()
        .map(|article| ApiResponse::created(article, "Article successfully created"))
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateArticleRequest>,
) -> HttpResult<ApiResponse<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        content: payload.content,
        author: payload.author,
        status: payload.status,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(|article| ApiResponse::ok(article, "Article successfully updated"))
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_article_topics(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<String>,
) -> HttpResult<ApiResponse<Vec<TopicDto>>> {
    state
        .services
        .article_queries
        .list_article_topics(ListArticleTopicsQuery { article_id })
        .await
        .into_http()
        .map(|topics| ApiResponse::ok(topics, "Successfully retrieved topics for article"))
}

pub async fn attach_topic(
    Extension(state): Extension<HttpState>,
    Path((article_id, topic_id)): Path<(String, String)>,
) -> HttpResult<ApiResponse<ArticleDto>> {
    state
        .services
        .article_commands
        .attach_topic(AttachTopicCommand {
            article_id,
            topic_id,
        })
        .await
        .into_http()
        .map(|article| ApiResponse::ok(article, "Topic successfully added to article"))
}

pub async fn detach_topic(
    Extension(state): Extension<HttpState>,
    Path((article_id, topic_id)): Path<(String, String)>,
) -> HttpResult<ApiResponse<ArticleDto>> {
    state
        .services
        .article_commands
        .detach_topic(DetachTopicCommand {
            article_id,
            topic_id,
        })
        .await
        .into_http()
        .map(|article| ApiResponse::ok(article, "Topic successfully removed from article"))
}
