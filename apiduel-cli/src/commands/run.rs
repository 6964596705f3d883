// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Rafael Mendes

//! `apiduel run` command - The full experiment in one invocation.
//!
//! Starts the demo servers in-process, measures, analyzes, and shuts the
//! servers down again.

use std::path::Path;

use apiduel_core::{Config, ResultsStore};

use super::{analyze, measure, serve};

pub async fn execute(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default(config_path)?;

    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║            EXPERIMENT: GraphQL vs REST                   ║");
    println!("╚══════════════════════════════════════════════════════════╝");
    println!();

    println!("Starting servers...");
    let (rest, graphql) = serve::spawn_servers(&config).await?;
    println!("  ✓ REST API     → {}", config.rest_base_url());
    println!("  ✓ GraphQL API  → {}", config.graphql_url());
    println!();

    let store = ResultsStore::new(&config.output_dir)?;

    // Ensure the servers are torn down even when a phase fails.
    let outcome = run_phases(&config, &store).await;

    println!();
    println!("Stopping servers...");
    rest.abort();
    graphql.abort();
    println!("  ✓ Servers stopped");

    outcome?;

    println!();
    println!("✓ Experiment complete");
    Ok(())
}

async fn run_phases(
    config: &Config,
    store: &ResultsStore,
) -> Result<(), Box<dyn std::error::Error>> {
    let results_path = measure::run_measurement(config, store).await?;
    println!();
    analyze::run_analysis(&results_path, &config.output_dir)
}
