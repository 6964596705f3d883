// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Rafael Mendes

//! CLI command modules.

pub mod analyze;
pub mod measure;
pub mod run;
pub mod serve;
pub mod validate;

use std::time::{Duration, Instant};

/// Timeout waiting for a server's /health endpoint to answer.
const READY_TIMEOUT: Duration = Duration::from_secs(10);

/// Poll a health URL until it answers 2xx or the timeout elapses.
pub(crate) async fn wait_ready(
    client: &reqwest::Client,
    url: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();

    while start.elapsed() < READY_TIMEOUT {
        match client.get(url).send().await {
            Ok(response) if response.status().is_success() => {
                tracing::debug!(
                    url = %url,
                    elapsed_ms = start.elapsed().as_millis(),
                    "server ready"
                );
                return Ok(());
            }
            _ => tokio::time::sleep(Duration::from_millis(50)).await,
        }
    }

    Err(format!(
        "Server at {} did not become ready within {}s",
        url,
        READY_TIMEOUT.as_secs()
    )
    .into())
}
