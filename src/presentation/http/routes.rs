// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, topics};
use crate::presentation::http::response::ApiResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, StatusCode},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(origins))
}

fn api_routes() -> Router {
    Router::new()
        .route(
            "/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/articles/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route("/articles/{id}/topics", get(articles::list_article_topics))
        .route(
            "/articles/{id}/topics/{topic_id}",
            post(articles::attach_topic).delete(articles::detach_topic),
        )
        .route("/topics", get(topics::list_topics).post(topics::create_topic))
        .route(
            "/topics/{id}",
            get(topics::get_topic)
                .put(topics::update_topic)
                .delete(topics::delete_topic),
        )
        .route("/topics/{id}/articles", get(topics::list_topic_articles))
}

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api_routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(CompressionLayer::new())
        .layer(Extension(state))
}

pub async fn health() -> ApiResponse<()> {
    ApiResponse::message(StatusCode::OK, "All is well!")
}

async fn not_found() -> ApiResponse<()> {
    ApiResponse::error(StatusCode::NOT_FOUND, "Resource not found")
}
