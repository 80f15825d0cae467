use crate::application::{
    commands::topics::{CreateTopicCommand, DeleteTopicCommand, UpdateTopicCommand},
    dto::{ArticleDto, TopicDto},
    queries::topics::{GetTopicByIdQuery, ListTopicArticlesQuery, ListTopicsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, QueryParams};
use crate::presentation::http::response::ApiResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, extract::Path, http::StatusCode};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct TopicListParams {
    #[serde(default)]
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TopicRequest {
    pub name: String,
}

pub async fn list_topics(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<TopicListParams>,
) -> HttpResult<ApiResponse<Vec<TopicDto>>> {
    state
        .services
        .topic_queries
        .list_topics(ListTopicsQuery {
            search: params.search,
        })
        .await
        .into_http()
        .map(|topics| ApiResponse::ok(topics, "Successfully retrieved topic list"))
}

pub async fn get_topic(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<ApiResponse<TopicDto>> {
    state
        .services
        .topic_queries
        .get_topic_by_id(GetTopicByIdQuery { id })
        .await
        .into_http()
        .map(|topic| ApiResponse::ok(topic, "Successfully retrieved topic"))
}

pub async fn create_topic(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<TopicRequest>,
) -> HttpResult<ApiResponse<TopicDto>> {
    state
        .services
        .topic_commands
        .create_topic(CreateTopicCommand { name: payload.name })
        .await
        .into_http()
        .map(|topic| ApiResponse::created(topic, "Topic successfully created"))
}

pub async fn update_topic(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<TopicRequest>,
) -> HttpResult<ApiResponse<TopicDto>> {
    state
        .services
        .topic_commands
        .update_topic(UpdateTopicCommand {
            id,
            name: payload.name,
        })
        .await
        .into_http()
        .map(|topic| ApiResponse::ok(topic, "Topic successfully updated"))
}

pub async fn delete_topic(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .topic_commands
        .delete_topic(DeleteTopicCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_topic_articles(
    Extension(state): Extension<HttpState>,
    Path(topic_id): Path<String>,
) -> HttpResult<ApiResponse<Vec<ArticleDto>>> {
    state
        .services
        .topic_queries
        .list_topic_articles(ListTopicArticlesQuery { topic_id })
        .await
        .into_http()
        .map(|articles| ApiResponse::ok(articles, "Successfully retrieved topic articles"))
}
