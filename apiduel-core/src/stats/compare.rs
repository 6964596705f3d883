// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Rafael Mendes

//! Per-scenario comparator: descriptive statistics plus the paired test
//! for both metrics of one scenario's samples.

use serde::Serialize;

use crate::error::StatsError;
use crate::results::ScenarioSamples;
use crate::stats::{describe, paired_one_sided, DescriptiveStats, PairedTTest};
use crate::types::ScenarioName;

/// Comparison of both API styles for one metric (time or size).
/// Immutable once computed.
#[derive(Debug, Clone, Serialize)]
pub struct MetricComparison {
    pub rest: DescriptiveStats,
    pub graphql: DescriptiveStats,
    /// Signed percentage: positive means GraphQL is faster/smaller.
    pub improvement_percent: f64,
    pub test: PairedTTest,
}

impl MetricComparison {
    /// Compare positionally-paired samples of one metric.
    pub fn compute(rest: &[f64], graphql: &[f64]) -> Result<Self, StatsError> {
        let rest_stats = describe(rest)?;
        let graphql_stats = describe(graphql)?;

        if rest_stats.mean == 0.0 {
            return Err(StatsError::ZeroBaseline);
        }
        let improvement_percent =
            (rest_stats.mean - graphql_stats.mean) / rest_stats.mean * 100.0;

        let test = paired_one_sided(graphql, rest)?;

        Ok(Self {
            rest: rest_stats,
            graphql: graphql_stats,
            improvement_percent,
            test,
        })
    }
}

/// Full comparison result for one scenario.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioComparison {
    pub scenario: ScenarioName,
    pub time: MetricComparison,
    pub size: MetricComparison,
}

/// Compare a scenario's REST and GraphQL samples on both metrics.
pub fn compare_scenario(samples: &ScenarioSamples) -> Result<ScenarioComparison, StatsError> {
    let time = MetricComparison::compute(&samples.rest.times, &samples.graphql.times)?;
    let size = MetricComparison::compute(&samples.rest.sizes_f64(), &samples.graphql.sizes_f64())?;

    Ok(ScenarioComparison {
        scenario: samples.scenario.clone(),
        time,
        size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::SampleSet;
    use crate::types::Trial;

    fn sample_set(times: &[f64], size: u64) -> SampleSet {
        let mut set = SampleSet::default();
        for &t in times {
            set.push(Trial {
                elapsed_ms: t,
                size_bytes: size,
            });
        }
        set
    }

    #[test]
    fn test_improvement_zero_at_equal_means() {
        let rest = [10.0, 20.0, 30.0];
        let graphql = [20.0, 10.0, 30.0];
        let cmp = MetricComparison::compute(&rest, &graphql).unwrap();
        assert_eq!(cmp.improvement_percent, 0.0);
    }

    #[test]
    fn test_improvement_sign_tracks_direction() {
        let rest = [100.0, 102.0, 98.0, 101.0, 99.0];
        let graphql = [40.0, 42.0, 38.0, 41.0, 39.0];
        let faster = MetricComparison::compute(&rest, &graphql).unwrap();
        assert!((faster.improvement_percent - 60.0).abs() < 1e-9);
        assert!(faster.test.significant_01);

        let slower = MetricComparison::compute(&graphql, &rest).unwrap();
        assert!(slower.improvement_percent < 0.0);
    }

    #[test]
    fn test_zero_rest_mean_is_error() {
        let result = MetricComparison::compute(&[0.0, 0.0], &[1.0, 2.0]);
        assert!(matches!(result, Err(StatsError::ZeroBaseline)));
    }

    #[test]
    fn test_compare_scenario_covers_both_metrics() {
        let samples = ScenarioSamples {
            scenario: ScenarioName::new("simple_user").unwrap(),
            rest: sample_set(&[100.0, 102.0, 98.0, 101.0, 99.0], 500),
            graphql: sample_set(&[40.0, 45.0, 35.0, 42.0, 38.0], 120),
        };
        let cmp = compare_scenario(&samples).unwrap();
        assert!(cmp.time.improvement_percent > 0.0);
        assert!((cmp.size.improvement_percent - 76.0).abs() < 1e-9);
        assert!(cmp.size.test.significant_01);
    }

    #[test]
    fn test_unequal_sample_counts_surface() {
        let samples = ScenarioSamples {
            scenario: ScenarioName::new("lossy").unwrap(),
            rest: sample_set(&[1.0, 2.0, 3.0], 10),
            graphql: sample_set(&[1.0, 2.0], 10),
        };
        let result = compare_scenario(&samples);
        assert!(matches!(
            result,
            Err(StatsError::UnpairedSamples { graphql: 2, rest: 3 })
        ));
    }
}
