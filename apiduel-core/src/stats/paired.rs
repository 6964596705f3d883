// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Rafael Mendes

//! One-sided paired t-test on the mean of per-pair differences.
//!
//! Tests the directional hypothesis "GraphQL is faster/smaller than REST":
//! the two-tailed p-value is halved when the observed GraphQL mean is below
//! the REST mean, and mirrored to `1 - p/2` otherwise. This assumes the
//! t-distribution is symmetric around zero, which holds only approximately
//! for small samples - a known simplification, kept for parity with the
//! original procedure.

use serde::Serialize;
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::StatsError;

/// Outcome of the significance test for one scenario and one metric.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PairedTTest {
    pub t_statistic: f64,
    /// One-sided p-value for "GraphQL mean < REST mean", in [0, 1].
    pub p_value: f64,
    /// p < 0.05, strictly.
    pub significant_05: bool,
    /// p < 0.01, strictly.
    pub significant_01: bool,
}

/// Run the paired test on positionally-paired samples.
///
/// Both sequences must have the same length, at least 2. Zero-variance
/// differences are defined rather than NaN: identical sequences yield
/// t = 0 and p = 0.5, a constant non-zero shift yields t = ±inf and a
/// p-value of 0 or 1 depending on direction.
pub fn paired_one_sided(graphql: &[f64], rest: &[f64]) -> Result<PairedTTest, StatsError> {
    if graphql.len() != rest.len() {
        return Err(StatsError::UnpairedSamples {
            graphql: graphql.len(),
            rest: rest.len(),
        });
    }

    let n = graphql.len();
    if n < 2 {
        return Err(StatsError::InsufficientPairs {
            required: 2,
            actual: n,
        });
    }

    let diffs: Vec<f64> = graphql.iter().zip(rest).map(|(g, r)| g - r).collect();
    let mean_d = diffs.iter().sum::<f64>() / n as f64;
    let var_d = diffs
        .iter()
        .map(|d| {
            let diff = d - mean_d;
            diff * diff
        })
        .sum::<f64>()
        / (n - 1) as f64;
    let sd_d = var_d.sqrt();

    let (t_statistic, p_two_tailed) = if sd_d == 0.0 {
        if mean_d == 0.0 {
            (0.0, 1.0)
        } else {
            (mean_d.signum() * f64::INFINITY, 0.0)
        }
    } else {
        let t = mean_d / (sd_d / (n as f64).sqrt());
        let dist = StudentsT::new(0.0, 1.0, (n - 1) as f64)
            .expect("degrees of freedom is at least 1");
        (t, 2.0 * (1.0 - dist.cdf(t.abs())))
    };

    // mean_d < 0 is exactly "observed GraphQL mean below observed REST mean".
    let p_value = if mean_d < 0.0 {
        p_two_tailed / 2.0
    } else {
        1.0 - p_two_tailed / 2.0
    };

    Ok(PairedTTest {
        t_statistic,
        p_value,
        significant_05: p_value < 0.05,
        significant_01: p_value < 0.01,
    })
}
