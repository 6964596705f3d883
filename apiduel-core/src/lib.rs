// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Rafael Mendes

//! apiduel measurement and comparison pipeline.
//!
//! Compares REST and GraphQL API styles by running paired request trials
//! across query-complexity scenarios, then applying a one-sided paired
//! t-test per scenario and per metric (response time, payload size).
//!
//! Data flows one way: sampler → results artifact → statistical
//! comparison → report. The demo servers that produce the raw input live
//! in `apiduel-servers`; report rendering lives in the CLI.

pub mod config;
pub mod error;
pub mod results;
pub mod sampler;
pub mod scenario;
pub mod stats;
pub mod types;

pub use config::Config;
pub use error::{BenchError, BenchResult, StatsError, ValidationError};
pub use results::{ResultsStore, SampleSet, ScenarioSamples};
pub use sampler::Sampler;
pub use scenario::{builtin_scenarios, Scenario};
pub use stats::{
    compare_scenario, describe, paired_one_sided, DescriptiveStats, MetricComparison,
    PairedTTest, ScenarioComparison,
};
pub use types::{ApiStyle, ScenarioName, Trial};
