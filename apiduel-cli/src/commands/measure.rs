// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Rafael Mendes

//! `apiduel measure` command - Run the paired measurement phase.
//!
//! Expects both demo servers to be reachable already; `apiduel run` starts
//! them for you.

use std::path::{Path, PathBuf};

use apiduel_core::{builtin_scenarios, Config, ResultsStore, Sampler};

pub async fn execute(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default(config_path)?;
    let store = ResultsStore::new(&config.output_dir)?;
    run_measurement(&config, &store).await?;
    Ok(())
}

/// Warm up, execute every scenario sequentially, and persist the samples.
///
/// Returns the path of the saved results artifact.
pub(crate) async fn run_measurement(
    config: &Config,
    store: &ResultsStore,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    println!("apiduel Measurement");
    println!("===================");
    println!("REST server:    {}", config.rest_base_url());
    println!("GraphQL server: {}", config.graphql_url());
    println!("Repetitions:    {}", config.repetitions);
    println!();

    let sampler = Sampler::new(config.rest_base_url(), config.graphql_url())?;

    sampler.warmup(config.warmup).await;

    let scenarios = builtin_scenarios();
    let mut results = Vec::with_capacity(scenarios.len());
    for scenario in &scenarios {
        let samples = sampler.run_scenario(scenario, config.repetitions).await;
        results.push(samples);
    }

    let path = store.save(&results)?;
    println!();
    println!("✓ Results saved to: {}", path.display());

    Ok(path)
}
