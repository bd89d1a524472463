use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use guestbook_api::{AppState, AppStateInner, router};
use guestbook_db::ConnectionManager;

fn app_with_path(path: &str) -> Router {
    let state: AppState = Arc::new(AppStateInner {
        connections: ConnectionManager::new(path),
        list_limit: 100,
    });
    router(state)
}

fn test_app() -> Router {
    app_with_path(":memory:")
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    // Framework-level rejections are plain text, not JSON
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn post_message(app: &Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/messages")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn list_messages(app: &Router) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri("/messages")
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

#[tokio::test]
async fn test_create_returns_persisted_message() {
    let app = test_app();

    let (status, body) = post_message(&app, json!({"name": "Ada", "message": "Hello!"})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["message"], "Hello!");
    assert!(body.get("email").is_none());
    body["id"].as_str().unwrap().parse::<uuid::Uuid>().unwrap();
    body["created_at"]
        .as_str()
        .unwrap()
        .parse::<chrono::DateTime<chrono::Utc>>()
        .unwrap();

    let (status, body) = list_messages(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_missing_fields_are_rejected() {
    let app = test_app();

    for payload in [
        json!({"name": "", "message": "Hello!"}),
        json!({"name": "Ada", "message": ""}),
        json!({"message": "Hello!"}),
        json!({"name": "Ada"}),
        json!({}),
    ] {
        let (status, body) = post_message(&app, payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Name and message are required");
    }

    // nothing reached the store
    let (status, body) = list_messages(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_unknown_fields_are_rejected() {
    let app = test_app();

    let (status, _) =
        post_message(&app, json!({"name": "Ada", "message": "hi", "admin": true})).await;
    assert!(status.is_client_error());

    let (_, body) = list_messages(&app).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let app = test_app();

    for message in ["A", "B", "C"] {
        let (status, _) = post_message(&app, json!({"name": "Ada", "message": message})).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = list_messages(&app).await;
    assert_eq!(status, StatusCode::OK);
    let messages: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["message"].as_str().unwrap())
        .collect();
    assert_eq!(messages, ["C", "B", "A"]);
}

#[tokio::test]
async fn test_empty_board_lists_empty_array() {
    let app = test_app();

    let (status, body) = list_messages(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_email_is_echoed_when_present() {
    let app = test_app();

    let (status, body) = post_message(
        &app,
        json!({"name": "Ada", "email": "ada@example.com", "message": "hi"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], "ada@example.com");
}

#[tokio::test]
async fn test_unreachable_store_reports_generic_error() {
    // parent directory does not exist, so the lazy open fails per request
    let app = app_with_path("/nonexistent-guestbook-dir/guestbook.db");

    let (status, body) = list_messages(&app).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to fetch messages"}));

    let (status, body) = post_message(&app, json!({"name": "Ada", "message": "hi"})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to create message"}));
}

#[tokio::test]
async fn test_list_respects_configured_limit() {
    let state: AppState = Arc::new(AppStateInner {
        connections: ConnectionManager::new(":memory:"),
        list_limit: 2,
    });
    let app = router(state);

    for message in ["A", "B", "C"] {
        post_message(&app, json!({"name": "Ada", "message": message})).await;
    }

    let (_, body) = list_messages(&app).await;
    let messages: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["message"].as_str().unwrap())
        .collect();
    assert_eq!(messages, ["C", "B"]);
}
