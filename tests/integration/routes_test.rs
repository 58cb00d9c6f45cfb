//! Route integration tests
//!
//! Drives the assembled axum application with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use futures_util::StreamExt;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tower::ServiceExt;
use xfmarkup::backend::{create_app, fetch_resource, Provider};
use xfmarkup::shared::{EventType, ServerConfig};

fn post(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("x-platform", "test")
        .header("x-self-id", "bot-1")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_message_create_round_trip() {
    let config = ServerConfig::default();
    let (app, provider) = create_app(&config);
    let mut events = provider.publisher();

    let nodes = serde_json::to_string(&crate::common::sample_message()).unwrap();
    let response = app.oneshot(post("/v1/message.create", nodes)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json(response).await["content"], crate::common::SAMPLE_MESSAGE_MARKUP);

    let event = events.next().await.unwrap();
    assert_eq!(event.event_type, EventType::MessageCreated);
    assert_eq!(event.platform, "test");
    assert_eq!(
        event.message.unwrap().content,
        crate::common::SAMPLE_MESSAGE_MARKUP
    );
}

#[tokio::test]
async fn test_malformed_content_is_bad_request() {
    let (app, _) = create_app(&ServerConfig::default());
    let body = r#"[{"tag": "a", "attributes": {}}]"#.to_string();
    let response = app.oneshot(post("/v1/message.create", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json(response).await;
    crate::assert_contains!(body["error"].as_str().unwrap(), "href");
}

#[tokio::test]
async fn test_missing_identity_headers_is_unauthorized() {
    let (app, _) = create_app(&ServerConfig::default());
    let request = Request::builder()
        .method("POST")
        .uri("/v1/login.list")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_fetch_resource_refuses_unproxied_urls() {
    let (_, provider) = create_app(&ServerConfig::default());
    let error = fetch_resource(provider.as_ref(), "https://example.test/a.png")
        .await
        .unwrap_err();
    assert_eq!(error.status_code(), StatusCode::FORBIDDEN);

    let data = fetch_resource(provider.as_ref(), "data:text/plain;base64,aGk=")
        .await
        .unwrap();
    assert_eq!(&data[..], b"hi");
}
