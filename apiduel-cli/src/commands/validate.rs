// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Rafael Mendes

//! `apiduel validate` command - Validate a configuration file.

use apiduel_core::Config;

pub async fn execute(file: &str) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(file = %file, "Validating configuration");

    match Config::load_file(file) {
        Ok(config) => {
            println!("✓ Configuration is valid");
            println!();
            println!("Servers:");
            println!("  REST API:     {}", config.rest_base_url());
            println!("  GraphQL API:  {}", config.graphql_url());
            println!();
            println!("Measurement:");
            println!("  Repetitions:  {}", config.repetitions);
            println!("  Warm-up:      {}", config.warmup);
            println!("  Output dir:   {}", config.output_dir.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("✗ Configuration validation failed:");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}
