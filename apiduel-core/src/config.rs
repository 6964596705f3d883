// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Rafael Mendes

//! YAML configuration parser with strict validation.
//!
//! An explicitly passed config path must exist and parse; when the default
//! path is absent the built-in defaults apply so the tool runs out of the
//! box. Any invalid field prevents the run from starting.

use std::path::Path;

use serde::Deserialize;

use crate::error::{BenchError, BenchResult, ValidationError};

/// Default configuration file path, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "apiduel.yaml";

/// Raw configuration as parsed from YAML (before validation).
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_rest_port")]
    rest_port: u16,
    #[serde(default = "default_graphql_port")]
    graphql_port: u16,
    #[serde(default = "default_repetitions")]
    repetitions: u32,
    #[serde(default = "default_warmup")]
    warmup: u32,
    #[serde(default = "default_output_dir")]
    output_dir: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_rest_port() -> u16 {
    5000
}

fn default_graphql_port() -> u16 {
    5001
}

fn default_repetitions() -> u32 {
    100
}

fn default_warmup() -> u32 {
    5
}

fn default_output_dir() -> String {
    "results".to_string()
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            rest_port: default_rest_port(),
            graphql_port: default_graphql_port(),
            repetitions: default_repetitions(),
            warmup: default_warmup(),
            output_dir: default_output_dir(),
        }
    }
}

/// Validated benchmark configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub rest_port: u16,
    pub graphql_port: u16,
    pub repetitions: u32,
    pub warmup: u32,
    pub output_dir: std::path::PathBuf,
}

impl Config {
    /// Base URL of the REST server, e.g. `http://127.0.0.1:5000`.
    pub fn rest_base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.rest_port)
    }

    /// Base URL of the GraphQL server.
    pub fn graphql_base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.graphql_port)
    }

    /// Full URL of the GraphQL endpoint.
    pub fn graphql_url(&self) -> String {
        format!("{}/graphql", self.graphql_base_url())
    }

    /// Load and validate configuration from a YAML file.
    /// The file must exist - missing explicit paths fail fast.
    pub fn load_file(path: impl AsRef<Path>) -> BenchResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(BenchError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| BenchError::Io {
            context: "reading config file",
            source: e,
        })?;

        Self::load_string(&content)
    }

    /// Load and validate configuration from a YAML string.
    pub fn load_string(content: &str) -> BenchResult<Self> {
        let raw: RawConfig = serde_yaml::from_str(content).map_err(|e| BenchError::ConfigParse {
            message: format!("YAML parse error: {}", e),
        })?;

        Self::validate(raw)
    }

    /// Resolve configuration for a CLI invocation: an explicit path must
    /// exist; otherwise the default path is used if present, and the
    /// built-in defaults apply when it is not.
    pub fn load_or_default(explicit: Option<&Path>) -> BenchResult<Self> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if default.exists() {
                    Self::load_file(default)
                } else {
                    tracing::debug!("no {} found, using built-in defaults", DEFAULT_CONFIG_PATH);
                    Self::validate(RawConfig::default())
                }
            }
        }
    }

    /// Validate raw configuration and convert to the typed form.
    fn validate(raw: RawConfig) -> BenchResult<Self> {
        if raw.host.is_empty() {
            return Err(ValidationError::InvalidFieldValue {
                field: "host",
                value: raw.host,
                reason: "Host cannot be empty".to_string(),
            }
            .into());
        }

        if raw.rest_port == 0 {
            return Err(ValidationError::InvalidPort {
                port: raw.rest_port,
                reason: "REST port must be non-zero".to_string(),
            }
            .into());
        }

        if raw.graphql_port == 0 {
            return Err(ValidationError::InvalidPort {
                port: raw.graphql_port,
                reason: "GraphQL port must be non-zero".to_string(),
            }
            .into());
        }

        if raw.rest_port == raw.graphql_port {
            return Err(ValidationError::InvalidPort {
                port: raw.graphql_port,
                reason: "REST and GraphQL servers cannot share a port".to_string(),
            }
            .into());
        }

        // The paired t-test needs at least two pairs.
        if raw.repetitions < 2 {
            return Err(ValidationError::InvalidFieldValue {
                field: "repetitions",
                value: raw.repetitions.to_string(),
                reason: "At least 2 repetitions are required for the paired test".to_string(),
            }
            .into());
        }

        if raw.output_dir.is_empty() {
            return Err(ValidationError::InvalidFieldValue {
                field: "output_dir",
                value: raw.output_dir,
                reason: "Output directory cannot be empty".to_string(),
            }
            .into());
        }

        Ok(Config {
            host: raw.host,
            rest_port: raw.rest_port,
            graphql_port: raw.graphql_port,
            repetitions: raw.repetitions,
            warmup: raw.warmup,
            output_dir: std::path::PathBuf::from(raw.output_dir),
        })
    }
}
