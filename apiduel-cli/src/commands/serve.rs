// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Rafael Mendes

//! `apiduel serve` command - Run the demo servers until interrupted.

use std::path::Path;
use std::sync::Arc;

use apiduel_core::Config;
use apiduel_servers::{serve_graphql, serve_rest, Fixture};

use super::wait_ready;

pub async fn execute(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default(config_path)?;
    let (rest, graphql) = spawn_servers(&config).await?;

    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║                  APIDUEL DEMO SERVERS                    ║");
    println!("╠══════════════════════════════════════════════════════════╣");
    println!("║ ● REST API     → {:<39} ║", config.rest_base_url());
    println!("║ ● GraphQL API  → {:<39} ║", config.graphql_url());
    println!("╚══════════════════════════════════════════════════════════╝");
    println!();
    println!("Press Ctrl+C to stop...");

    tokio::signal::ctrl_c().await?;

    println!();
    println!("Shutting down servers...");
    rest.abort();
    graphql.abort();
    println!("✓ Servers stopped");

    Ok(())
}

/// Spawn both demo servers in-process and wait for their health endpoints.
pub(crate) async fn spawn_servers(
    config: &Config,
) -> Result<
    (
        tokio::task::JoinHandle<std::io::Result<()>>,
        tokio::task::JoinHandle<std::io::Result<()>>,
    ),
    Box<dyn std::error::Error>,
> {
    let fixture = Arc::new(Fixture::seed());

    let rest_addr = format!("{}:{}", config.host, config.rest_port);
    let graphql_addr = format!("{}:{}", config.host, config.graphql_port);

    let rest = tokio::spawn(serve_rest(rest_addr, fixture.clone()));
    let graphql = tokio::spawn(serve_graphql(graphql_addr, fixture));

    let client = reqwest::Client::new();
    wait_ready(&client, &format!("{}/health", config.rest_base_url())).await?;
    wait_ready(&client, &format!("{}/health", config.graphql_base_url())).await?;

    Ok((rest, graphql))
}
