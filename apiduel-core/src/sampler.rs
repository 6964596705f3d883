// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Rafael Mendes

//! Paired measurement sampler.
//!
//! Issues repeated paired requests (one REST, one GraphQL) per scenario,
//! recording elapsed time and raw body length for each trial. A warm-up
//! phase precedes measurement; its results are discarded.

use std::time::Instant;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::error::{BenchError, BenchResult};
use crate::results::ScenarioSamples;
use crate::scenario::Scenario;
use crate::types::{ApiStyle, Trial};

/// Progress line frequency during a scenario run.
const PROGRESS_EVERY: u32 = 20;

#[derive(Serialize)]
struct GraphqlPayload<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<&'a Value>,
}

/// Measurement client for one pair of REST/GraphQL endpoints.
///
/// Requests are issued strictly sequentially; the one `reqwest::Client` is
/// reused across the whole run so connection reuse is warmed up once.
pub struct Sampler {
    client: Client,
    rest_base: String,
    graphql_url: String,
}

impl Sampler {
    pub fn new(rest_base: impl Into<String>, graphql_url: impl Into<String>) -> BenchResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| BenchError::ClientBuild {
                reason: e.to_string(),
            })?;
        Ok(Self {
            client,
            rest_base: rest_base.into(),
            graphql_url: graphql_url.into(),
        })
    }

    /// Throwaway paired requests to avoid skew from cold caches and
    /// connection setup. Failures here are ignored.
    pub async fn warmup(&self, repetitions: u32) {
        println!("Warming up ({} repetitions)...", repetitions);
        for _ in 0..repetitions {
            let _ = self.measure_rest("/api/users/1").await;
            let _ = self
                .measure_graphql("{ user(id: 1) { name } }", None)
                .await;
        }
    }

    /// Time and size one REST request. Non-2xx status is a failure.
    pub async fn measure_rest(&self, path: &str) -> BenchResult<Trial> {
        let url = format!("{}{}", self.rest_base, path);

        let start = Instant::now();
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BenchError::Request {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BenchError::HttpStatus {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| BenchError::Request {
            url,
            reason: e.to_string(),
        })?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        Ok(Trial {
            elapsed_ms,
            size_bytes: body.len() as u64,
        })
    }

    /// Time and size one GraphQL request.
    pub async fn measure_graphql(
        &self,
        query: &str,
        variables: Option<&Value>,
    ) -> BenchResult<Trial> {
        let payload = GraphqlPayload { query, variables };

        let start = Instant::now();
        let response = self
            .client
            .post(&self.graphql_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| BenchError::Request {
                url: self.graphql_url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BenchError::HttpStatus {
                url: self.graphql_url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| BenchError::Request {
            url: self.graphql_url.clone(),
            reason: e.to_string(),
        })?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        Ok(Trial {
            elapsed_ms,
            size_bytes: body.len() as u64,
        })
    }

    /// Execute N paired repetitions of one scenario.
    ///
    /// A failed request is logged and that repetition's sample for the
    /// failing side is omitted; the other side still records its trial, so
    /// asymmetric failures can leave the two sample lists with unequal
    /// lengths.
    pub async fn run_scenario(&self, scenario: &Scenario, repetitions: u32) -> ScenarioSamples {
        println!(
            "=== Scenario: {} ({} repetitions) ===",
            scenario.name, repetitions
        );

        let mut samples = ScenarioSamples::new(scenario.name.clone());

        for i in 0..repetitions {
            match self.measure_rest(&scenario.rest_path).await {
                Ok(trial) => samples.rest.push(trial),
                Err(e) => tracing::warn!(
                    scenario = %scenario.name,
                    style = %ApiStyle::Rest,
                    repetition = i,
                    error = %e,
                    "dropping failed trial"
                ),
            }

            match self
                .measure_graphql(&scenario.graphql_query, scenario.variables.as_ref())
                .await
            {
                Ok(trial) => samples.graphql.push(trial),
                Err(e) => tracing::warn!(
                    scenario = %scenario.name,
                    style = %ApiStyle::Graphql,
                    repetition = i,
                    error = %e,
                    "dropping failed trial"
                ),
            }

            if (i + 1) % PROGRESS_EVERY == 0 {
                println!("  progress: {}/{}", i + 1, repetitions);
            }
        }

        println!(
            "  ✓ {} ({} rest / {} graphql samples)",
            scenario.name,
            samples.rest.len(),
            samples.graphql.len()
        );

        samples
    }
}
