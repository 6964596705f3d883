// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Rafael Mendes

//! Demo GraphQL API over the same fixture.
//!
//! The schema mirrors the REST data model but lets the caller select
//! exactly the fields each scenario needs.

use std::sync::Arc;

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{extract::State, response::IntoResponse, routing::get, routing::post, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::fixture::{Comment, Fixture, Post, User};

pub type DemoSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn user(&self, ctx: &Context<'_>, id: u32) -> Option<GqlUser> {
        let fixture = ctx.data_unchecked::<Arc<Fixture>>();
        fixture.user_by_id(id).map(GqlUser)
    }

    async fn users(&self, ctx: &Context<'_>) -> Vec<GqlUser> {
        let fixture = ctx.data_unchecked::<Arc<Fixture>>();
        fixture.all_users().into_iter().map(GqlUser).collect()
    }
}

pub struct GqlUser(User);

#[Object(name = "User")]
impl GqlUser {
    async fn id(&self) -> u32 {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn email(&self) -> &str {
        &self.0.email
    }

    async fn age(&self) -> u32 {
        self.0.age
    }

    async fn city(&self) -> &str {
        &self.0.city
    }

    async fn country(&self) -> &str {
        &self.0.country
    }

    async fn posts(&self, ctx: &Context<'_>, limit: Option<usize>) -> Vec<GqlPost> {
        let fixture = ctx.data_unchecked::<Arc<Fixture>>();
        fixture
            .posts_by_user(self.0.id, limit)
            .into_iter()
            .map(GqlPost)
            .collect()
    }
}

pub struct GqlPost(Post);

#[Object(name = "Post")]
impl GqlPost {
    async fn id(&self) -> u32 {
        self.0.id
    }

    async fn user_id(&self) -> u32 {
        self.0.user_id
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn content(&self) -> &str {
        &self.0.content
    }

    async fn likes(&self) -> u32 {
        self.0.likes
    }

    async fn comments(&self, ctx: &Context<'_>, limit: Option<usize>) -> Vec<GqlComment> {
        let fixture = ctx.data_unchecked::<Arc<Fixture>>();
        fixture
            .comments_by_post(self.0.id, limit)
            .into_iter()
            .map(GqlComment)
            .collect()
    }
}

pub struct GqlComment(Comment);

#[Object(name = "Comment")]
impl GqlComment {
    async fn id(&self) -> u32 {
        self.0.id
    }

    async fn post_id(&self) -> u32 {
        self.0.post_id
    }

    async fn author(&self) -> &str {
        &self.0.author
    }

    async fn text(&self) -> &str {
        &self.0.text
    }
}

/// Build the schema with the fixture installed as context data.
pub fn build_schema(fixture: Arc<Fixture>) -> DemoSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(fixture)
        .finish()
}

async fn graphql_handler(
    State(schema): State<DemoSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok", "service": "GraphQL API"}))
}

/// Build the GraphQL router over a shared fixture.
pub fn graphql_router(fixture: Arc<Fixture>) -> Router {
    Router::new()
        .route("/graphql", post(graphql_handler))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(build_schema(fixture))
}
