// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Rafael Mendes

//! Demo servers for the apiduel benchmark.
//!
//! Two independent axum applications over one immutable fixture: a REST
//! API that answers with fixed payloads, and a GraphQL API that answers
//! with exactly the selected fields. Simple I/O scaffolding - the
//! interesting work happens in `apiduel-core`.

pub mod fixture;
pub mod graphql;
pub mod rest;

use std::sync::Arc;

use tokio::net::ToSocketAddrs;

pub use fixture::Fixture;
pub use graphql::{build_schema, graphql_router, DemoSchema};
pub use rest::rest_router;

/// Serve the REST API until the task is aborted.
pub async fn serve_rest(addr: impl ToSocketAddrs, fixture: Arc<Fixture>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("REST API listening on http://{}", listener.local_addr()?);
    axum::serve(listener, rest_router(fixture)).await
}

/// Serve the GraphQL API until the task is aborted.
pub async fn serve_graphql(
    addr: impl ToSocketAddrs,
    fixture: Arc<Fixture>,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("GraphQL API listening on http://{}", listener.local_addr()?);
    axum::serve(listener, graphql_router(fixture)).await
}
