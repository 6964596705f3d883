// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Rafael Mendes

//! Demo REST API.
//!
//! Conventional route handlers over the shared fixture. `/api/users/{id}/full`
//! is the over-fetching endpoint: it always returns the user with posts and
//! comments attached, regardless of what the caller needs.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::fixture::{Comment, Fixture, Post, User};

/// Posts attached to the `/full` response, capped at this many.
const FULL_POSTS_LIMIT: usize = 5;
/// Comments attached to each post in the `/full` response.
const FULL_COMMENTS_LIMIT: usize = 3;

#[derive(Serialize)]
struct FullPost {
    #[serde(flatten)]
    post: Post,
    comments: Vec<Comment>,
}

#[derive(Serialize)]
struct FullUser {
    #[serde(flatten)]
    user: User,
    posts: Vec<FullPost>,
}

/// Build the REST router over a shared fixture.
pub fn rest_router(fixture: Arc<Fixture>) -> Router {
    Router::new()
        .route("/api/users", get(list_users))
        .route("/api/users/{id}", get(get_user))
        .route("/api/users/{id}/posts", get(get_user_posts))
        .route("/api/users/{id}/full", get(get_user_full))
        .route("/api/posts/{id}/comments", get(get_post_comments))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(fixture)
}

async fn list_users(State(fixture): State<Arc<Fixture>>) -> impl IntoResponse {
    Json(fixture.all_users())
}

async fn get_user(
    State(fixture): State<Arc<Fixture>>,
    Path(id): Path<u32>,
) -> impl IntoResponse {
    match fixture.user_by_id(id) {
        Some(user) => (StatusCode::OK, Json(json!(user))),
        None => (StatusCode::NOT_FOUND, Json(json!({"error": "User not found"}))),
    }
}

async fn get_user_posts(
    State(fixture): State<Arc<Fixture>>,
    Path(id): Path<u32>,
) -> impl IntoResponse {
    Json(fixture.posts_by_user(id, None))
}

async fn get_post_comments(
    State(fixture): State<Arc<Fixture>>,
    Path(id): Path<u32>,
) -> impl IntoResponse {
    Json(fixture.comments_by_post(id, None))
}

async fn get_user_full(
    State(fixture): State<Arc<Fixture>>,
    Path(id): Path<u32>,
) -> impl IntoResponse {
    let Some(user) = fixture.user_by_id(id) else {
        return (StatusCode::NOT_FOUND, Json(json!({"error": "User not found"})));
    };

    let posts = fixture
        .posts_by_user(id, Some(FULL_POSTS_LIMIT))
        .into_iter()
        .map(|post| {
            let comments = fixture.comments_by_post(post.id, Some(FULL_COMMENTS_LIMIT));
            FullPost { post, comments }
        })
        .collect();

    (StatusCode::OK, Json(json!(FullUser { user, posts })))
}

async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok", "service": "REST API"}))
}
