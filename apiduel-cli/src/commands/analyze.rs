// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Rafael Mendes

//! `apiduel analyze` command - Statistical comparison and report rendering.

use std::path::Path;

use apiduel_core::{compare_scenario, Config, ResultsStore};

use crate::report;

pub async fn execute(
    config_path: Option<&Path>,
    file: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default(config_path)?;
    let store = ResultsStore::new(&config.output_dir)?;

    let path = match file {
        Some(path) => path.to_path_buf(),
        None => store.latest()?,
    };

    run_analysis(&path, &config.output_dir)
}

/// Load an artifact, compare every scenario, and render the report.
///
/// A scenario whose comparison fails (insufficient or unpaired samples) is
/// reported and skipped; the analysis only fails when no scenario survives.
pub(crate) fn run_analysis(
    path: &Path,
    output_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║        STATISTICAL ANALYSIS: GraphQL vs REST             ║");
    println!("╚══════════════════════════════════════════════════════════╝");
    println!("Input: {}", path.display());

    let results = ResultsStore::load(path)?;

    let mut comparisons = Vec::with_capacity(results.len());
    for samples in &results {
        match compare_scenario(samples) {
            Ok(comparison) => {
                report::print_scenario_analysis(&comparison);
                comparisons.push(comparison);
            }
            Err(e) => {
                tracing::error!(scenario = %samples.scenario, error = %e, "skipping scenario");
                println!();
                println!("✗ {}: {}", samples.scenario, e);
            }
        }
    }

    if comparisons.is_empty() {
        return Err("no scenario could be analyzed".into());
    }

    println!();
    println!("SUMMARY");
    println!("{}", report::summary_table(&comparisons));

    let csv_path = output_dir.join("summary_results.csv");
    report::write_summary_csv(&csv_path, &comparisons)?;
    println!("✓ Summary table saved to: {}", csv_path.display());

    for chart in report::render_charts(output_dir, &comparisons)? {
        println!("✓ Chart saved to: {}", chart.display());
    }

    Ok(())
}
