// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Rafael Mendes

//! Route-level tests for both demo servers, driven through the routers
//! directly without binding a socket.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use apiduel_servers::{graphql_router, rest_router, Fixture};

async fn get_json(router: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_graphql(router: axum::Router, query: &str) -> (StatusCode, Value) {
    let payload = serde_json::json!({ "query": query });
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/graphql")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn fixture() -> Arc<Fixture> {
    Arc::new(Fixture::seed())
}

#[tokio::test]
async fn rest_user_returns_full_record() {
    let (status, json) = get_json(rest_router(fixture()), "/api/users/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Alice Johnson");
    assert_eq!(json["email"], "alice@example.com");
    assert_eq!(json["city"], "New York");
}

#[tokio::test]
async fn rest_unknown_user_is_404() {
    let (status, json) = get_json(rest_router(fixture()), "/api/users/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "User not found");
}

#[tokio::test]
async fn rest_list_users() {
    let (status, json) = get_json(rest_router(fixture()), "/api/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn rest_full_attaches_capped_posts_and_comments() {
    let (status, json) = get_json(rest_router(fixture()), "/api/users/1/full").await;
    assert_eq!(status, StatusCode::OK);
    let posts = json["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 5);
    for post in posts {
        assert!(post["comments"].as_array().unwrap().len() <= 3);
        assert!(post["title"].is_string());
    }
}

#[tokio::test]
async fn rest_post_comments() {
    let (status, json) = get_json(rest_router(fixture()), "/api/posts/1/comments").await;
    assert_eq!(status, StatusCode::OK);
    let comments = json.as_array().unwrap();
    assert!(!comments.is_empty());
    assert_eq!(comments[0]["post_id"], 1);
}

#[tokio::test]
async fn rest_health() {
    let (status, json) = get_json(rest_router(fixture()), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn graphql_simple_selection() {
    let (status, json) =
        post_graphql(graphql_router(fixture()), "{ user(id: 1) { name email } }").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["user"]["name"], "Alice Johnson");
    assert_eq!(json["data"]["user"]["email"], "alice@example.com");
    // Unselected fields are absent from the payload.
    assert!(json["data"]["user"].get("city").is_none());
}

#[tokio::test]
async fn graphql_nested_selection() {
    let query = "{ user(id: 1) { name posts(limit: 5) { title likes comments(limit: 3) { author text } } } }";
    let (status, json) = post_graphql(graphql_router(fixture()), query).await;
    assert_eq!(status, StatusCode::OK);
    let posts = json["data"]["user"]["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 5);
    for post in posts {
        assert!(post["comments"].as_array().unwrap().len() <= 3);
    }
}

#[tokio::test]
async fn graphql_unknown_user_is_null() {
    let (status, json) =
        post_graphql(graphql_router(fixture()), "{ user(id: 99) { name } }").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["data"]["user"].is_null());
}

#[tokio::test]
async fn graphql_malformed_query_reports_errors() {
    let (status, json) = post_graphql(graphql_router(fixture()), "{ user(id: 1) { nope } }").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!json["errors"].as_array().unwrap().is_empty());
}
