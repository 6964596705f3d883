//! Custom error types for apiduel.
//!
//! All errors are explicit enum variants - no `Box<dyn Error>`, no
//! `anyhow::Result` in library code.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the benchmark pipeline.
#[derive(Debug, Error)]
pub enum BenchError {
    // =========================================================================
    // Configuration Errors - Fail-Fast on Invalid Config
    // =========================================================================
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    // =========================================================================
    // Measurement Errors
    // =========================================================================
    #[error("Request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    #[error("Request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to build HTTP client: {reason}")]
    ClientBuild { reason: String },

    // =========================================================================
    // Statistics Errors
    // =========================================================================
    #[error("Statistics error: {0}")]
    Stats(#[from] StatsError),

    // =========================================================================
    // Results Artifact Errors
    // =========================================================================
    #[error("Results file not found: {path}")]
    ResultsNotFound { path: PathBuf },

    #[error("No results file found in {dir} - run a measurement first")]
    NoResults { dir: PathBuf },

    #[error("Malformed results file {path}: {message}")]
    ResultsParse { path: PathBuf, message: String },

    #[error("IO error: {context} - {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Validation errors for configuration and identifiers.
/// Any of these prevents a run from starting.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid field value: {field} = {value} - {reason}")]
    InvalidFieldValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid port: {port} - {reason}")]
    InvalidPort { port: u16, reason: String },

    #[error("Invalid scenario name: {name} - {reason}")]
    InvalidScenarioName { name: String, reason: String },
}

/// Preconditions of the statistical procedures.
/// These are fatal to the comparison for the scenario/metric at hand and
/// must be surfaced, never defaulted to zero.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Cannot compute statistics over an empty sample")]
    EmptySample,

    #[error("Paired test requires equal sample counts: graphql has {graphql}, rest has {rest}")]
    UnpairedSamples { graphql: usize, rest: usize },

    #[error("Paired test requires at least {required} pairs, got {actual}")]
    InsufficientPairs { required: usize, actual: usize },

    #[error("REST mean is zero - improvement percentage is undefined")]
    ZeroBaseline,

    #[error("Parallel sample lists differ in length: {times} times vs {sizes} sizes")]
    ParallelLengthMismatch { times: usize, sizes: usize },
}

/// Result type alias using BenchError.
pub type BenchResult<T> = Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_error_display() {
        let err = StatsError::InsufficientPairs {
            required: 2,
            actual: 1,
        };
        assert!(err.to_string().contains("at least 2"));
        assert!(err.to_string().contains("got 1"));
    }

    #[test]
    fn test_error_chain() {
        let stats_err = StatsError::EmptySample;
        let bench_err: BenchError = stats_err.into();
        assert!(matches!(bench_err, BenchError::Stats(_)));
    }

    #[test]
    fn test_config_not_found_display() {
        let err = BenchError::ConfigNotFound {
            path: PathBuf::from("missing.yaml"),
        };
        assert!(err.to_string().contains("missing.yaml"));
    }
}
