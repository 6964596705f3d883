// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Rafael Mendes

//! Descriptive statistics over a sample sequence.

use serde::Serialize;

use crate::error::StatsError;

/// Read-only summary of one sample sequence.
///
/// Standard deviation is the sample standard deviation (n-1 denominator);
/// median and quartiles interpolate linearly between order statistics.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DescriptiveStats {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub q25: f64,
    pub q75: f64,
}

/// Compute descriptive statistics for a non-empty sample sequence.
pub fn describe(values: &[f64]) -> Result<DescriptiveStats, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptySample);
    }

    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;

    let std_dev = if n < 2 {
        0.0
    } else {
        let sum_sq = values
            .iter()
            .map(|v| {
                let diff = v - mean;
                diff * diff
            })
            .sum::<f64>();
        (sum_sq / (n - 1) as f64).sqrt()
    };

    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    Ok(DescriptiveStats {
        mean,
        median: percentile(&sorted, 50.0),
        std_dev,
        min: sorted[0],
        max: sorted[n - 1],
        q25: percentile(&sorted, 25.0),
        q75: percentile(&sorted, 75.0),
    })
}

/// Linearly interpolated percentile over an already-sorted sequence.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (rank - lo as f64) * (sorted[hi] - sorted[lo])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_known_sequence() {
        let stats = describe(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((stats.mean - 5.0).abs() < 1e-12);
        assert!((stats.median - 4.5).abs() < 1e-12);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
        // Sample variance of this sequence is 32/7.
        assert!((stats.std_dev - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_describe_single_sample() {
        let stats = describe(&[42.0]).unwrap();
        assert_eq!(stats.mean, 42.0);
        assert_eq!(stats.median, 42.0);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.q25, 42.0);
        assert_eq!(stats.q75, 42.0);
    }

    #[test]
    fn test_describe_empty_fails() {
        assert!(matches!(describe(&[]), Err(StatsError::EmptySample)));
    }

    #[test]
    fn test_quartiles_interpolate() {
        // numpy semantics: q25 of [1,2,3,4] is 1.75, q75 is 3.25.
        let stats = describe(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((stats.q25 - 1.75).abs() < 1e-12);
        assert!((stats.q75 - 3.25).abs() < 1e-12);
        assert!((stats.median - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_ordering_properties() {
        let samples: Vec<f64> = vec![13.7, 2.2, 99.5, 42.0, 7.7, 7.7, 58.3];
        let stats = describe(&samples).unwrap();
        assert!(stats.min <= stats.median && stats.median <= stats.max);
        assert!(stats.min <= stats.mean && stats.mean <= stats.max);
        assert!(stats.q25 <= stats.median && stats.median <= stats.q75);
    }
}
