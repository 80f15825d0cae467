// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use tower::util::ServiceExt as _;

use newsdesk_core::application::ports::time::Clock;
use newsdesk_core::application::services::ApplicationServices;
use newsdesk_core::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use newsdesk_core::domain::topic::{TopicReadRepository, TopicWriteRepository};
use newsdesk_core::presentation::http::{routes::build_router, state::HttpState};

/// Wires every repository port to the same backing object.
pub fn services_over<R>(store: Arc<R>, clock: Arc<dyn Clock>) -> ApplicationServices
where
    R: ArticleWriteRepository
        + ArticleReadRepository
        + TopicWriteRepository
        + TopicReadRepository
        + 'static,
{
    let article_write: Arc<dyn ArticleWriteRepository> = store.clone();
    let article_read: Arc<dyn ArticleReadRepository> = store.clone();
    let topic_write: Arc<dyn TopicWriteRepository> = store.clone();
    let topic_read: Arc<dyn TopicReadRepository> = store;

    ApplicationServices::new(article_write, article_read, topic_write, topic_read, clock)
}

pub fn build_test_state(store: Arc<mocks::InMemoryNewsStore>) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(mocks::StepClock::default());
    HttpState {
        services: Arc::new(services_over(store, clock)),
    }
}

pub fn make_test_router() -> axum::Router {
    make_test_router_with(Arc::new(mocks::InMemoryNewsStore::new()))
}

pub fn make_test_router_with(store: Arc<mocks::InMemoryNewsStore>) -> axum::Router {
    build_router(build_test_state(store), &[])
}

/// Router whose storage always fails.
pub fn make_unavailable_router() -> axum::Router {
    let clock: Arc<dyn Clock> = Arc::new(mocks::FixedClock);
    let services = services_over(Arc::new(mocks::UnavailableStore), clock);
    build_router(
        HttpState {
            services: Arc::new(services),
        },
        &[],
    )
}

/// Sends one request and returns the status with the decoded JSON body (`Null` when empty).
pub async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let resp = app
        .clone()
        .oneshot(builder.body(body).expect("build request"))
        .await
        .expect("router is infallible");

    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    if bytes.is_empty() {
        return (status, Value::Null);
    }
    let json = serde_json::from_slice(&bytes).expect("expected JSON body");
    (status, json)
}

/// Assert that a response carries the error envelope with the expected status and message.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_message: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    assert_eq!(json["code"], expected_status.as_u16());
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], expected_message);
    assert!(json.get("data").is_none(), "error envelope must not carry data");
}
