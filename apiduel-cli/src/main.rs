// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Rafael Mendes

//! apiduel CLI
//!
//! Command-line interface for the REST vs GraphQL benchmark experiment.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod report;

/// apiduel - Paired REST vs GraphQL benchmark
#[derive(Parser)]
#[command(name = "apiduel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (apiduel.yaml is used when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full experiment: servers, measurement, analysis
    Run,

    /// Run measurements against already-running servers
    Measure,

    /// Analyze a results file and render the report
    Analyze {
        /// Results file (defaults to the newest in the output directory)
        file: Option<PathBuf>,
    },

    /// Start the demo REST and GraphQL servers
    Serve,

    /// Validate a configuration file
    Validate {
        /// Path to the configuration file
        file: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let config = cli.config.as_deref();

    // Dispatch to command handlers
    match cli.command {
        Commands::Run => commands::run::execute(config).await,
        Commands::Measure => commands::measure::execute(config).await,
        Commands::Analyze { file } => commands::analyze::execute(config, file.as_deref()).await,
        Commands::Serve => commands::serve::execute(config).await,
        Commands::Validate { file } => commands::validate::execute(&file).await,
    }
}
